//! Generation depth

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many sub-patterns each tier emits
///
/// Modes are ordered: every pattern emitted in `Default` is also emitted in
/// `Full`, so a full run is always a superset of a default run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Curated, high-likelihood patterns
    #[default]
    Default,
    /// Every sub-pattern: dotted forms and all date suffix variants
    Full,
}

impl Mode {
    /// Map the `--full` flag
    pub fn from_full_flag(full: bool) -> Self {
        if full {
            Mode::Full
        } else {
            Mode::Default
        }
    }

    /// Whether a pattern requiring `required` is emitted in this mode
    pub fn includes(self, required: Mode) -> bool {
        required <= self
    }

    /// Lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Full => "full",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
