//! Interactive style selection

use crate::error::{CliError, CliResult};
use aliasforge_core::Style;
use std::io::{BufRead, Write};

/// Ask for a naming style until a valid answer arrives
///
/// Accepts the menu number or any style code (`chinese`, `en`, ...). The
/// menu goes to `output` so that stdout stays reserved for the word list.
pub fn prompt_style<R, W>(input: &mut R, output: &mut W) -> CliResult<Style>
where
    R: BufRead,
    W: Write,
{
    let styles = Style::all();

    writeln!(output, "Select naming style:")?;
    for (index, style) in styles.iter().enumerate() {
        writeln!(output, "  {}. {} ({})", index + 1, style, style.description())?;
    }

    loop {
        write!(output, "Choice [1-{}]: ", styles.len())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::PromptAborted.into());
        }

        match parse_choice(line.trim(), styles) {
            Some(style) => return Ok(style),
            None => writeln!(output, "Invalid choice '{}'", line.trim())?,
        }
    }
}

fn parse_choice(answer: &str, styles: &[Style]) -> Option<Style> {
    match answer.parse::<usize>() {
        Ok(number) => styles.get(number.checked_sub(1)?).copied(),
        Err(_) => answer.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (CliResult<Style>, String) {
        let mut output = Vec::new();
        let result = prompt_style(&mut Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_numeric_choice() {
        assert_eq!(run("1\n").0.unwrap(), Style::Chinese);
        assert_eq!(run("2\n").0.unwrap(), Style::Western);
    }

    #[test]
    fn test_named_choice() {
        assert_eq!(run("western\n").0.unwrap(), Style::Western);
    }

    #[test]
    fn test_retries_until_valid() {
        let (result, output) = run("3\n0\nfoo\n1\n");
        assert_eq!(result.unwrap(), Style::Chinese);
        assert_eq!(output.matches("Invalid choice").count(), 3);
    }

    #[test]
    fn test_eof_aborts() {
        let (result, output) = run("");
        assert!(output.contains("1. Chinese"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::PromptAborted)
        ));
    }
}
