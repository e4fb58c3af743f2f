//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                match config.style()? {
                    Some(style) => println!("  Style: {style}"),
                    None => println!("  Style: (prompt)"),
                }
                println!(
                    "  Mode: {}",
                    if config.generation.full { "full" } else { "default" }
                );
                if let Some(format) = config.output.format {
                    println!("  Format: {format:?}");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_valid_config() {
        let content = r#"
[generation]
style = "western"
full = true
max_length = 20

[output]
format = "markdown"
"#;
        assert!(validate(content).is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let content = r#"
[generation]
style = "western"
min_length = 12
max_length = 8
"#;
        assert!(validate(content).is_err());
    }

    #[test]
    fn test_validate_unknown_format() {
        assert!(validate("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/aliasforge.toml"),
        };
        assert!(args.execute().is_err());
    }
}
