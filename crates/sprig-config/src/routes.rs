use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::helpers::{default_component_prefix, default_routes_root};

/// Conventional routing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesOptions {
    /// Pages directory scanned for routes (relative to the project root)
    #[serde(default = "default_routes_root")]
    pub root: PathBuf,

    /// Alias prepended to every generated component path
    #[serde(default = "default_component_prefix")]
    pub component_prefix: String,
}

impl Default for RoutesOptions {
    fn default() -> Self {
        Self {
            root: default_routes_root(),
            component_prefix: default_component_prefix(),
        }
    }
}
