//! Naming style selection

use crate::api::Error;
use crate::domain::LengthWindow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Surname first, e.g. Chan Tai Man
    Chinese,
    /// Given name first, e.g. Charlie Monroe Brown
    Western,
}

impl Style {
    /// Every supported style, in prompt order
    pub fn all() -> &'static [Style] {
        &[Style::Chinese, Style::Western]
    }

    /// Short code used on the command line and in config files
    pub fn code(&self) -> &'static str {
        match self {
            Style::Chinese => "chinese",
            Style::Western => "western",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Style::Chinese => "Chinese",
            Style::Western => "Western",
        }
    }

    /// One-line description of the name order
    pub fn description(&self) -> &'static str {
        match self {
            Style::Chinese => "surname first, given name(s) plus English alias",
            Style::Western => "given name first, optional middle name and nickname",
        }
    }

    /// Default accepted username length
    pub fn length_window(&self) -> LengthWindow {
        use crate::api::config::defaults;

        match self {
            Style::Chinese => LengthWindow::new(defaults::MIN_LENGTH, defaults::MAX_LENGTH_CHINESE),
            Style::Western => LengthWindow::new(defaults::MIN_LENGTH, defaults::MAX_LENGTH_WESTERN),
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chinese" | "cn" | "zh" | "surname-first" => Ok(Style::Chinese),
            "western" | "en" | "given-first" => Ok(Style::Western),
            _ => Err(Error::InvalidStyle(s.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
