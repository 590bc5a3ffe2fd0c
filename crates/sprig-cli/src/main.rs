//! Sprig CLI entry point.
//!
//! Parses arguments, initializes logging and dispatches to a command.

use clap::Parser;
use miette::Result;
use sprig_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let no_color = args.no_color || !logger::should_use_colors();
    logger::init_logger(args.verbose, args.quiet, no_color);

    let result = match &args.command {
        cli::Command::Targets(targets_args) => commands::targets_execute(&args.global, targets_args),
        cli::Command::Css(css_args) => commands::css_execute(&args.global, css_args),
        cli::Command::Routes(routes_args) => commands::routes_execute(&args.global, routes_args),
    };

    // Render failures as miette diagnostics
    result.map_err(error::cli_error_to_miette)
}
