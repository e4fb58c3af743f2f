//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs usernames as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    usernames: Vec<UsernameData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct UsernameData {
    /// The username
    pub username: String,
    /// Position in the confidence-ordered list, starting at 1
    pub rank: usize,
    /// Length in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            usernames: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_username(&mut self, username: &str, rank: usize) -> Result<()> {
        self.usernames.push(UsernameData {
            username: username.to_string(),
            rank,
            length: username.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.usernames)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
