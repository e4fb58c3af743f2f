//! AliasForge CLI library
//!
//! This library provides the command-line interface for the AliasForge
//! username candidate generator.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod prompt;

pub use error::{CliError, CliResult};
