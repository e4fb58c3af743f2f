//! Username candidate generation from a person's name, aliases and birth date
//!
//! Given a name profile, this crate derives the handles the person is most
//! likely to have registered, following the conventions of one of two naming
//! styles:
//! - **Chinese** (surname first): `Chan Tai Man` with English alias `Tommy`
//! - **Western** (given name first): `Charlie Monroe Brown`, nickname `Tommy`
//!
//! # Architecture
//!
//! - **Domain layer**: tokenizer, per-style rule sets, candidate filter and
//!   deduplication, all pure and deterministic
//! - **API layer**: profile, configuration and the [`Generator`] pipeline
//!
//! # Example
//!
//! ```rust
//! use aliasforge_core::{Generator, NameProfile, Style};
//!
//! let profile = NameProfile::builder()
//!     .first("Tai Man")
//!     .last("Chan")
//!     .alias("Tommy")
//!     .dob("2001/10/15")
//!     .build();
//!
//! let wordlist = Generator::new(Style::Chinese).generate(&profile).unwrap();
//!
//! assert_eq!(wordlist.usernames()[0], "tommy2001");
//! assert!(wordlist.contains("chantaiman"));
//! ```

pub mod api;
pub mod domain;
pub mod error;

pub use api::{
    defaults, generate, Config, ConfigBuilder, EmptyResultWarning, Error, GenerationStats,
    Generator, Mode, NameProfile, NameProfileBuilder, Result, Style, Wordlist,
};
pub use domain::{LengthWindow, Tier};
pub use error::ValidationError;
