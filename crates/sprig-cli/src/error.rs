//! Error handling for the sprig CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`, so command
//! implementations can use `?` throughout. `main` renders the final error with
//! [`cli_error_to_miette`].

use std::path::PathBuf;

use miette::Report;
use sprig_config::ConfigError;
use sprig_routes::RouteError;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config discovery, parsing or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Route table construction failed
    #[error("Route error: {0}")]
    Routes(#[from] RouteError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::FileNotFound(path)) => miette::miette!(
            "Config file not found: {}\n\nHint: Check the --config path or omit it to use sprig.toml",
            path.display()
        ),
        CliError::Routes(RouteError::MultipleDynamicRoutes { dir, routes }) => miette::miette!(
            "Multiple dynamic routes in {}: {}\n\nHint: Keep at most one [param] entry per directory",
            dir.display(),
            routes.join(", ")
        ),
        CliError::FileNotFound(path) => miette::miette!(
            "Pages directory not found: {}\n\nHint: Set routes.root in sprig.toml or pass --root",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
