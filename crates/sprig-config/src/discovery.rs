//! File-based config discovery for CLI use
//!
//! Handles finding and loading sprig configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::SprigConfig;
use crate::error::{ConfigError, Result};

/// Name of the dedicated config file
pub const CONFIG_FILE: &str = "sprig.toml";

/// Field holding the config inside `package.json`
pub const PACKAGE_JSON_FIELD: &str = "sprig";

/// File-based configuration discovery
///
/// Library users should use `SprigConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use sprig_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: sprig.toml
    /// 2. package.json (sprig field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if let Ok(content) = fs::read_to_string(&pkg_path)
            && let Ok(parsed) = serde_json::from_str::<Value>(&content)
            && parsed.get(PACKAGE_JSON_FIELD).is_some_and(|v| !v.is_null())
        {
            return Some(pkg_path);
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<SprigConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_from(&path)
    }

    /// Load the discovered config, falling back to defaults when there is none
    pub fn load_or_default(&self) -> Result<SprigConfig> {
        match self.find() {
            Some(path) => load_from(&path),
            None => {
                debug!(root = %self.root.display(), "no config file found, using defaults");
                Ok(SprigConfig::default())
            }
        }
    }
}

/// Load config from a specific file path (`*.toml` or `package.json`)
pub fn load_from(path: &Path) -> Result<SprigConfig> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "loading config");

    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_from_package_json(path);
    }

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => load_from_toml(path),
        Some("json") => {
            let content = fs::read_to_string(path)?;
            let value: Value = serde_json::from_str(&content)
                .map_err(|e| ConfigError::invalid("json", format!("Invalid JSON: {e}")))?;
            SprigConfig::from_value(value)
        }
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn load_from_toml(path: &Path) -> Result<SprigConfig> {
    let content = fs::read_to_string(path)?;

    let toml_val: toml::Value = toml::from_str(&content)
        .map_err(|e| ConfigError::invalid("toml", format!("Invalid TOML syntax: {e}")))?;

    let value = serde_json::to_value(toml_val).map_err(|e| {
        ConfigError::invalid("toml", format!("TOML to JSON conversion failed: {e}"))
    })?;

    SprigConfig::from_value(value)
}

fn load_from_package_json(path: &Path) -> Result<SprigConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content)
        .map_err(|e| ConfigError::invalid("package.json", format!("Invalid JSON: {e}")))?;

    let sprig_value = parsed.get(PACKAGE_JSON_FIELD).ok_or_else(|| {
        ConfigError::invalid(
            PACKAGE_JSON_FIELD,
            "Add a 'sprig' field to your package.json",
        )
    })?;

    if sprig_value.is_null() {
        return Err(ConfigError::invalid(
            PACKAGE_JSON_FIELD,
            "The 'sprig' field cannot be null",
        ));
    }

    SprigConfig::from_value(sprig_value.clone())
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use sprig_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<SprigConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
