//! Top-level configuration structure for sprig.
//!
//! For file discovery, see the `discovery` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::routes::RoutesOptions;
use crate::style::StyleOptions;
use crate::targets::Targets;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprigConfig {
    /// Minimum platform versions to support
    #[serde(default)]
    pub targets: Targets,

    /// `styleLoader`, `theme` and `hash` sit at the top level
    #[serde(flatten)]
    pub style: StyleOptions,

    #[serde(default)]
    pub routes: RoutesOptions,
}

impl SprigConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use sprig_config::{SprigConfig, TargetVersion};
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "targets": { "chrome": 49, "firefox": true },
    ///     "hash": true
    /// });
    ///
    /// let config = SprigConfig::from_value(value).unwrap();
    /// assert_eq!(config.targets.get("chrome"), Some(&TargetVersion::Min(49.0)));
    /// assert!(config.style.hash);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid("config", e))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("config", e))
    }
}

/// Recursively merge `update` into `target`.
///
/// Objects merge key by key; any other value in `update` replaces the
/// corresponding slot in `target`.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, Value::Object(update_map)) => {
            let mut new_obj = serde_json::Map::with_capacity(update_map.len());
            for (key, value) in update_map {
                new_obj.insert(key.clone(), value.clone());
            }
            *target_slot = Value::Object(new_obj);
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
