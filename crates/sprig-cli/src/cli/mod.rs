//! Command-line interface definition.
//!
//! - `sprig targets` - filtered targets and browserslist queries
//! - `sprig css` - the CSS/Less rules and extraction plugin
//! - `sprig routes` - the conventional route table

mod commands;
mod tests;

use clap::{Args, Parser};
use std::path::PathBuf;

pub use commands::{BundleKind, Command, CssArgs, RoutesArgs, TargetsArgs};

/// Sprig - frontend build helpers
#[derive(Parser, Debug)]
#[command(
    name = "sprig",
    version,
    about = "Inspect derived browser targets, CSS rules and route tables",
    long_about = "Sprig derives the pieces a frontend bundler configuration is built from:\n\
                  browser targets and browserslist queries, CSS/Less module rules, and a\n\
                  route table generated from the pages directory. Results are printed as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Explicit config file (`sprig.toml`, `*.json` or `package.json`)
    ///
    /// Relative paths resolve against the project root. Without this flag
    /// `sprig.toml` and then the `sprig` field of `package.json` are tried.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
