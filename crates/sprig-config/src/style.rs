use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stylesheet processing configuration
///
/// These keys live at the top level of the config file:
///
/// ```toml
/// hash = true
///
/// [theme]
/// "primary-color" = "#1DA57A"
///
/// [styleLoader]
/// injectType = "singletonStyleTag"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
    /// Inject styles through `<style>` tags instead of extracting CSS files.
    ///
    /// The object is passed to the injection loader as its options; an empty
    /// table still switches injection on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_loader: Option<Map<String, Value>>,

    /// Less variables overridden at compile time
    #[serde(default)]
    pub theme: IndexMap<String, String>,

    /// Append content hashes to extracted CSS filenames in production
    #[serde(default)]
    pub hash: bool,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to inline style injection with the given loader options
    pub fn with_style_loader(mut self, options: Map<String, Value>) -> Self {
        self.style_loader = Some(options);
        self
    }

    pub fn with_theme_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.theme.insert(name.into(), value.into());
        self
    }

    pub fn with_hash(mut self, enabled: bool) -> Self {
        self.hash = enabled;
        self
    }

    /// Whether CSS is extracted into files (no inline injection configured)
    pub fn extracts_css(&self) -> bool {
        self.style_loader.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_extracts_css() {
        let opts = StyleOptions::default();
        assert!(opts.extracts_css());
        assert!(opts.theme.is_empty());
        assert!(!opts.hash);
    }

    #[test]
    fn empty_style_loader_enables_injection() {
        let opts: StyleOptions = serde_json::from_value(json!({ "styleLoader": {} })).unwrap();
        assert!(!opts.extracts_css());
    }

    #[test]
    fn builder_pattern() {
        let opts = StyleOptions::new()
            .with_theme_var("primary-color", "#1DA57A")
            .with_hash(true);

        assert_eq!(opts.theme["primary-color"], "#1DA57A");
        assert!(opts.hash);
    }
}
