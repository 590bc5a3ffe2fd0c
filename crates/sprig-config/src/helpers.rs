use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_routes_root() -> PathBuf {
    PathBuf::from("src/pages")
}

pub(crate) fn default_component_prefix() -> String {
    "@/".to_string()
}
