//! Configuration module

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use aliasforge_core::{Config, Style};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Generation-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Naming style code; prompt when unset
    pub style: Option<String>,

    /// Emit every sub-pattern
    pub full: bool,

    /// Shortest accepted username (style default when unset)
    pub min_length: Option<usize>,

    /// Longest accepted username (style default when unset)
    pub max_length: Option<usize>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: Option<OutputFormat>,

    /// Do not print the word list to stdout
    pub no_print: bool,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Style named in the file, if any
    pub fn style(&self) -> CliResult<Option<Style>> {
        match &self.generation.style {
            Some(code) => code
                .parse()
                .map(Some)
                .map_err(|e: aliasforge_core::Error| CliError::ConfigError(e.to_string()).into()),
            None => Ok(None),
        }
    }

    /// Check the style and the length window against every style it may be used with
    pub fn validate(&self) -> CliResult<()> {
        let styles = match self.style()? {
            Some(style) => vec![style],
            None => Style::all().to_vec(),
        };

        for style in styles {
            let mut builder = Config::builder()
                .style(style.code())?
                .full(self.generation.full);
            if let Some(min) = self.generation.min_length {
                builder = builder.min_length(min);
            }
            if let Some(max) = self.generation.max_length {
                builder = builder.max_length(max);
            }
            builder
                .build()
                .map_err(|e| CliError::ConfigError(format!("{e} (style {style})")))?;
        }

        Ok(())
    }
}
