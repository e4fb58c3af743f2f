//! Domain layer: token derivation, rule sets and the candidate policy
//!
//! Everything in here is a pure computation over the profile fields. No I/O,
//! clock or randomness is involved, so identical inputs always give
//! identical candidate sequences.

pub mod candidate;
pub mod date;
pub mod dedup;
pub mod filter;
pub mod rules;
pub mod tokens;

pub use candidate::{Candidate, Tier};
pub use date::{DateInfo, DateKind, DateToken};
pub use dedup::dedup_preserving_order;
pub use filter::{CandidateFilter, LengthWindow, Rejection, SEPARATOR};
pub use rules::{ChineseRules, StyleRules, WesternRules};
pub use tokens::{tokenize, ChineseTokens, Token, Tokens, WesternTokens};
