//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single username; `rank` starts at 1
    fn format_username(&mut self, username: &str, rank: usize) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One username per line
    #[default]
    Text,
    /// JSON array of usernames with rank and length
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Every format with a short description
    pub fn descriptions() -> &'static [(&'static str, &'static str)] {
        &[
            ("text", "One username per line"),
            ("json", "JSON array of {username, rank, length}"),
            ("markdown", "Numbered Markdown list with a total"),
        ]
    }

    /// Create the formatter for this format
    pub fn formatter<'a, W>(self, writer: W) -> Box<dyn OutputFormatter + 'a>
    where
        W: Write + Send + Sync + 'a,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Feed every username, in order, through `formatter`
pub fn write_usernames<'a, I>(formatter: &mut dyn OutputFormatter, usernames: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    for (index, username) in usernames.into_iter().enumerate() {
        formatter.format_username(username, index + 1)?;
    }
    formatter.finish()
}
