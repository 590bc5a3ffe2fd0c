//! Shared utilities for command implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sprig_config::{ConfigDiscovery, SprigConfig, load_from};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::error::{CliError, Result};

/// Resolve a path relative to a working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Project root: `--cwd` resolved against the process directory
pub fn project_root(global: &GlobalArgs) -> Result<PathBuf> {
    let current = std::env::current_dir()?;
    let root = match &global.cwd {
        Some(cwd) => resolve_path(cwd, &current),
        None => current,
    };

    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "project root is not a directory: {}",
            root.display()
        )));
    }

    Ok(root)
}

/// Load the explicit `--config` file, or discover one under `root`.
///
/// Projects without any config run with defaults.
pub fn load_config(global: &GlobalArgs, root: &Path) -> Result<SprigConfig> {
    let config = match &global.config {
        Some(path) => load_from(&resolve_path(path, root))?,
        None => ConfigDiscovery::new(root).load_or_default()?,
    };
    debug!(targets = config.targets.len(), "configuration loaded");
    Ok(config)
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
