//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs usernames as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_username(&mut self, username: &str, rank: usize) -> Result<()> {
        self.count += 1;
        writeln!(self.writer, "{rank}. {username}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total usernames: {}*", self.count)?;
        self.writer.flush()?;
        Ok(())
    }
}
