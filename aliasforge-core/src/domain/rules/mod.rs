//! Style rule sets
//!
//! Each naming style maps its token bundle to an ordered, unfiltered list of
//! candidates. Tier order and the order of patterns within a tier are fixed;
//! the generator relies on it for confidence ordering.

mod chinese;
mod western;

pub use chinese::ChineseRules;
pub use western::WesternRules;

use crate::api::{Mode, Style};
use crate::domain::candidate::Candidate;
use crate::domain::date::DateInfo;

/// Combination rules for one naming style
///
/// Implementations are pure: the same tokens, dates and mode always yield
/// the same candidate sequence. Patterns only ever reorder whole tokens.
pub trait StyleRules {
    /// Token bundle consumed by these rules
    type Tokens;

    /// Style implemented by these rules
    fn style(&self) -> Style;

    /// Tier names indexed by rank - 1
    fn tier_names(&self) -> &'static [&'static str];

    /// Generate the raw candidate sequence
    fn generate(&self, tokens: &Self::Tokens, dates: &DateInfo, mode: Mode) -> Vec<Candidate>;
}

/// Plain concatenation
pub(crate) fn cat(parts: &[&str]) -> String {
    parts.concat()
}

/// Dot-separated concatenation
pub(crate) fn dot(parts: &[&str]) -> String {
    parts.join(".")
}
