//! Sprig CLI.
//!
//! Thin command-line front end over the sprig build helpers. Every command
//! loads the project configuration, runs one helper and prints its result as
//! pretty JSON on stdout.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`error`] - `CliError` and its miette rendering
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;

pub use error::{CliError, Result};
