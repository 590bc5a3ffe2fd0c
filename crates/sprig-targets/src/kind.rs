//! Bundler configuration kinds.

use serde::{Deserialize, Serialize};

/// Which bundle a configuration is produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundlerConfigType {
    /// Client-side rendered bundle (browsers)
    #[default]
    Csr,
    /// Server-side rendered bundle (Node.js)
    Ssr,
}

impl BundlerConfigType {
    /// Platform key reserved for the server runtime
    pub const NODE: &'static str = "node";

    /// Whether a platform from `targets` belongs to this bundle
    #[inline]
    pub fn accepts(&self, platform: &str) -> bool {
        match self {
            Self::Csr => platform != Self::NODE,
            Self::Ssr => platform == Self::NODE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csr => "csr",
            Self::Ssr => "ssr",
        }
    }
}

impl std::fmt::Display for BundlerConfigType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
