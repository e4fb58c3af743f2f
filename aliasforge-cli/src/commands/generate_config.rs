//! Generate config command implementation

use crate::commands::generate::StyleArg;
use aliasforge_core::Style;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Style to preset; left unset, generate prompts on every run
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   aliasforge validate -c {}", self.output.display());
        println!("3. Use it for generation:");
        println!(
            "   aliasforge generate --first NAME --last NAME -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let style_line = match self.style.map(Style::from) {
            Some(style) => format!("style = \"{}\"", style.code()),
            None => "# style = \"chinese\"".to_string(),
        };

        format!(
            r#"# AliasForge configuration
# Command-line flags take precedence over every value below.

[generation]
# Naming style: "chinese" (surname first) or "western" (given name first).
# When unset, the style is asked for interactively.
{style_line}

# Emit every pattern variant (dotted forms, all date suffixes)
full = false

# Accepted username length; style defaults are 6-16 (chinese) and 6-18 (western)
# min_length = 6
# max_length = 16

[output]
# Output format: "text", "json" or "markdown"
format = "text"

# Do not print the word list to stdout (combine with --output)
no_print = false
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("aliasforge.toml"),
            style: None,
        };

        let config = CliConfig::parse(&args.generate_template()).unwrap();
        assert!(config.generation.style.is_none());
        assert!(!config.generation.full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_template_with_style() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("aliasforge.toml"),
            style: Some(StyleArg::Western),
        };

        let config = CliConfig::parse(&args.generate_template()).unwrap();
        assert_eq!(config.style().unwrap(), Some(Style::Western));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("aliasforge.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            style: Some(StyleArg::Chinese),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("style = \"chinese\""));
    }
}
