//! Public API for aliasforge-core
//!
//! This module provides the interface used by the CLI: build a
//! [`NameProfile`], pick a [`Style`] and [`Mode`], and collect a
//! [`Wordlist`].

mod config;
mod error;
mod generator;
mod mode;
mod output;
mod profile;
mod style;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use generator::{generate, Generator};
pub use mode::Mode;
pub use output::{EmptyResultWarning, GenerationStats, Wordlist};
pub use profile::{NameProfile, NameProfileBuilder};
pub use style::Style;
