//! Browser and runtime version constraints.
//!
//! `targets` maps a platform name to the oldest version that must be
//! supported:
//!
//! ```toml
//! [targets]
//! ie = 11
//! chrome = 49
//! firefox = true   # any version
//! node = 12
//! ```
//!
//! Declaration order is kept, since it decides the order of derived
//! browserslist queries.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ConfigError;

/// Version constraint for a single platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetVersion {
    /// `true`: every version of the platform is supported
    Any,
    /// `false`: the platform is declared but switched off
    Disabled,
    /// Minimum supported version
    Min(f64),
}

impl TargetVersion {
    /// Lowest version a query should accept, or `None` for disabled platforms.
    ///
    /// Whole versions print without a fractional part (`10`, not `10.0`).
    pub fn floor(&self) -> Option<String> {
        match self {
            Self::Any => Some("0".to_string()),
            Self::Disabled => None,
            Self::Min(version) => Some(version.to_string()),
        }
    }
}

impl From<bool> for TargetVersion {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Any } else { Self::Disabled }
    }
}

impl From<u32> for TargetVersion {
    fn from(version: u32) -> Self {
        Self::Min(f64::from(version))
    }
}

/// Signed versions are accepted only when non-negative
impl TryFrom<i64> for TargetVersion {
    type Error = ConfigError;

    fn try_from(version: i64) -> Result<Self, Self::Error> {
        if version < 0 {
            return Err(ConfigError::invalid(
                "targets",
                format!("version must not be negative, got {version}"),
            ));
        }
        Ok(Self::Min(version as f64))
    }
}

impl From<f64> for TargetVersion {
    fn from(version: f64) -> Self {
        Self::Min(version)
    }
}

impl Serialize for TargetVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Any => serializer.serialize_bool(true),
            Self::Disabled => serializer.serialize_bool(false),
            Self::Min(v) if v.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&v) => {
                serializer.serialize_u64(v as u64)
            }
            Self::Min(v) => serializer.serialize_f64(v),
        }
    }
}

impl<'de> Deserialize<'de> for TargetVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = TargetVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a minimum version number or a boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(TargetVersion::Min(v as f64))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                TargetVersion::try_from(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if !v.is_finite() || v < 0.0 {
                    return Err(E::invalid_value(de::Unexpected::Float(v), &self));
                }
                Ok(TargetVersion::Min(v))
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

/// Ordered platform → version constraint mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Targets(IndexMap<String, TargetVersion>);

impl Targets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a platform constraint, keeping its original position
    pub fn with(mut self, platform: impl Into<String>, version: impl Into<TargetVersion>) -> Self {
        self.insert(platform, version);
        self
    }

    pub fn insert(&mut self, platform: impl Into<String>, version: impl Into<TargetVersion>) {
        self.0.insert(platform.into(), version.into());
    }

    pub fn get(&self, platform: &str) -> Option<&TargetVersion> {
        self.0.get(platform)
    }

    pub fn contains(&self, platform: &str) -> bool {
        self.0.contains_key(platform)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetVersion)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TargetVersion)> for Targets {
    fn from_iter<I: IntoIterator<Item = (K, TargetVersion)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_numbers_and_booleans() {
        let targets: Targets =
            serde_json::from_value(json!({ "ie": 10, "safari": 10.1, "firefox": true, "edge": false }))
                .unwrap();

        assert_eq!(targets.get("ie"), Some(&TargetVersion::Min(10.0)));
        assert_eq!(targets.get("safari"), Some(&TargetVersion::Min(10.1)));
        assert_eq!(targets.get("firefox"), Some(&TargetVersion::Any));
        assert_eq!(targets.get("edge"), Some(&TargetVersion::Disabled));
    }

    #[test]
    fn keeps_declaration_order() {
        let targets: Targets =
            serde_json::from_str(r#"{"ie": 10, "node": 6, "chrome": 0, "firefox": true}"#).unwrap();
        let keys: Vec<_> = targets.keys().collect();
        assert_eq!(keys, vec!["ie", "node", "chrome", "firefox"]);
    }

    #[test]
    fn rejects_strings() {
        let err = serde_json::from_value::<Targets>(json!({ "chrome": "latest" })).unwrap_err();
        assert!(err.to_string().contains("a minimum version number or a boolean"));
    }

    #[test]
    fn rejects_negative_versions() {
        assert!(serde_json::from_value::<Targets>(json!({ "chrome": -1 })).is_err());
    }

    #[test]
    fn signed_versions_reject_negatives() {
        assert_eq!(TargetVersion::try_from(49i64).unwrap(), TargetVersion::Min(49.0));
        assert!(matches!(
            TargetVersion::try_from(-1i64),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn serializes_whole_versions_as_integers() {
        let targets = Targets::new().with("ie", 10u32).with("safari", 10.1).with("firefox", true);
        assert_eq!(
            serde_json::to_string(&targets).unwrap(),
            r#"{"ie":10,"safari":10.1,"firefox":true}"#
        );
    }

    #[test]
    fn floor_formats_versions() {
        assert_eq!(TargetVersion::Any.floor().as_deref(), Some("0"));
        assert_eq!(TargetVersion::Min(10.0).floor().as_deref(), Some("10"));
        assert_eq!(TargetVersion::Min(10.1).floor().as_deref(), Some("10.1"));
        assert_eq!(TargetVersion::Disabled.floor(), None);
    }
}
