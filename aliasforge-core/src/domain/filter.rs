//! Candidate filter: separator policy, digit placement, month-only suffixes
//! and the length window

use crate::domain::candidate::Candidate;
use crate::domain::date::DateKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The only separator a candidate may contain
pub const SEPARATOR: char = '.';

/// Inclusive bounds on a candidate's character count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthWindow {
    /// Shortest accepted length
    pub min: usize,
    /// Longest accepted length
    pub max: usize,
}

impl LengthWindow {
    /// Create a window; callers validate `min <= max`
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `len` lies inside the window
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl fmt::Display for LengthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Why a candidate was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Contains something other than `a-z`, `0-9` or `.`
    ForbiddenChar(char),
    /// Leading, trailing or doubled separator
    MalformedSeparator,
    /// Starts with a digit
    LeadingDigit,
    /// Ends in a bare two-digit month
    MonthOnlySuffix,
    /// Fewer characters than the window allows
    TooShort(usize),
    /// More characters than the window allows
    TooLong(usize),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ForbiddenChar(ch) => write!(f, "forbidden character '{ch}'"),
            Rejection::MalformedSeparator => write!(f, "malformed separator"),
            Rejection::LeadingDigit => write!(f, "starts with a digit"),
            Rejection::MonthOnlySuffix => write!(f, "month-only date suffix"),
            Rejection::TooShort(len) => write!(f, "too short ({len})"),
            Rejection::TooLong(len) => write!(f, "too long ({len})"),
        }
    }
}

/// Applies the acceptance policy to generated candidates
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter {
    window: LengthWindow,
}

impl CandidateFilter {
    /// Filter enforcing `window`
    pub fn new(window: LengthWindow) -> Self {
        Self { window }
    }

    /// Length window in force
    pub fn window(&self) -> LengthWindow {
        self.window
    }

    /// Accept `candidate` or report the first rule it breaks
    pub fn check(&self, candidate: &Candidate) -> Result<(), Rejection> {
        let text = candidate.text.as_str();

        if let Some(ch) = text
            .chars()
            .find(|&ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == SEPARATOR))
        {
            return Err(Rejection::ForbiddenChar(ch));
        }

        if text.starts_with(SEPARATOR)
            || text.ends_with(SEPARATOR)
            || text.contains("..")
        {
            return Err(Rejection::MalformedSeparator);
        }

        if text.starts_with(|ch: char| ch.is_ascii_digit()) {
            return Err(Rejection::LeadingDigit);
        }

        if candidate.suffix == Some(DateKind::Month) {
            return Err(Rejection::MonthOnlySuffix);
        }

        let len = text.chars().count();
        if len < self.window.min {
            return Err(Rejection::TooShort(len));
        }
        if len > self.window.max {
            return Err(Rejection::TooLong(len));
        }

        Ok(())
    }

    /// Convenience wrapper around [`check`](Self::check)
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        self.check(candidate).is_ok()
    }
}
