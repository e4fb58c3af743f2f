//! Output types for the generation API

use crate::api::{Mode, Style};
use crate::domain::LengthWindow;
use serde::Serialize;
use std::fmt;

/// Ordered, duplicate-free username candidates with run metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wordlist {
    usernames: Vec<String>,
    style: Style,
    mode: Mode,
    window: LengthWindow,
    stats: GenerationStats,
}

/// Counts gathered while building a [`Wordlist`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Candidates produced by the rule set
    pub generated: usize,
    /// Candidates dropped by the filter
    pub rejected: usize,
    /// Accepted candidates that repeated an earlier one
    pub duplicates: usize,
    /// Usernames in the final list
    pub emitted: usize,
}

/// Every candidate was filtered out
///
/// Not an error: the run succeeded, it just has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResultWarning {
    /// Style of the run
    pub style: Style,
    /// Window every candidate missed or violated
    pub window: LengthWindow,
    /// Candidates considered before filtering
    pub generated: usize,
}

impl fmt::Display for EmptyResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no {} username survived filtering ({} candidates, length window {})",
            self.style, self.generated, self.window
        )
    }
}

impl Wordlist {
    pub(crate) fn new(
        usernames: Vec<String>,
        style: Style,
        mode: Mode,
        window: LengthWindow,
        stats: GenerationStats,
    ) -> Self {
        Self {
            usernames,
            style,
            mode,
            window,
            stats,
        }
    }

    /// Usernames in confidence order
    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    /// Number of usernames
    pub fn len(&self) -> usize {
        self.usernames.len()
    }

    /// No username survived filtering
    pub fn is_empty(&self) -> bool {
        self.usernames.is_empty()
    }

    /// Whether `username` is in the list
    pub fn contains(&self, username: &str) -> bool {
        self.usernames.iter().any(|u| u == username)
    }

    /// Style the list was generated for
    pub fn style(&self) -> Style {
        self.style
    }

    /// Mode the list was generated in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Length window applied
    pub fn window(&self) -> LengthWindow {
        self.window
    }

    /// Generation counters
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Warning to surface when the list is empty
    pub fn empty_warning(&self) -> Option<EmptyResultWarning> {
        self.is_empty().then_some(EmptyResultWarning {
            style: self.style,
            window: self.window,
            generated: self.stats.generated,
        })
    }

    /// Consume the list, keeping only the usernames
    pub fn into_usernames(self) -> Vec<String> {
        self.usernames
    }
}

impl IntoIterator for Wordlist {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.usernames.into_iter()
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.usernames.iter()
    }
}
