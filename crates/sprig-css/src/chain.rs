//! Chainable bundler configuration.
//!
//! `ChainConfig` is the mutable handle that configuration passes write into.
//! Rules, loader uses and plugins are addressed by name: asking for a name
//! that already exists returns the existing entry, so several passes can
//! refine the same rule.
//!
//! ```text
//! ChainConfig
//! ├── module.rules["css"]            test: \.(css)(\?.*)?$
//! │   ├── oneOf["css-modules"]       resourceQuery: modules
//! │   │   └── use["css-loader"]      loader + options
//! │   └── oneOf["css"]
//! └── plugins["extract-css"]         plugin + args
//! ```

use indexmap::IndexMap;
use regex::Regex;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Root of a bundler configuration
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChainConfig {
    pub module: ModuleConfig,

    #[serde(serialize_with = "ordered_values")]
    pub plugins: IndexMap<String, PluginEntry>,
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the plugin registered under `name`
    pub fn plugin(&mut self, name: &str) -> &mut PluginEntry {
        self.plugins
            .entry(name.to_string())
            .or_insert_with(|| PluginEntry::new(name))
    }

    /// Serialize into the plain object handed to the bundler
    ///
    /// Regexes are emitted as their source text.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Module rules, in registration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleConfig {
    #[serde(serialize_with = "ordered_values")]
    pub rules: IndexMap<String, Rule>,
}

impl ModuleConfig {
    /// Get or create the rule registered under `name`
    pub fn rule(&mut self, name: &str) -> &mut Rule {
        self.rules
            .entry(name.to_string())
            .or_insert_with(|| Rule::new(name))
    }

    /// Loader chain applied to `resource` (a path with an optional `?query`).
    ///
    /// The first rule whose `test` matches the whole resource wins. Inside it,
    /// the first `oneOf` branch whose resource query matches is used. Returns
    /// `None` when no rule matches.
    pub fn loaders_for(&self, resource: &str) -> Option<Vec<&UseEntry>> {
        let query = resource.find('?').map_or("", |idx| &resource[idx..]);

        self.rules
            .values()
            .find(|rule| rule.test.as_ref().is_some_and(|re| re.is_match(resource)))
            .map(|rule| rule.loaders_for_query(query))
    }
}

/// A module rule, or a `oneOf` branch of one
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub name: String,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "regex_source"
    )]
    pub test: Option<Regex>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "regex_source"
    )]
    pub resource_query: Option<Regex>,

    #[serde(
        skip_serializing_if = "IndexMap::is_empty",
        serialize_with = "ordered_values"
    )]
    pub one_of: IndexMap<String, Rule>,

    #[serde(
        rename = "use",
        skip_serializing_if = "IndexMap::is_empty",
        serialize_with = "ordered_values"
    )]
    pub uses: IndexMap<String, UseEntry>,
}

impl Rule {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            test: None,
            resource_query: None,
            one_of: IndexMap::new(),
            uses: IndexMap::new(),
        }
    }

    /// Match resources (path and query) against `pattern`
    pub fn test(&mut self, pattern: Regex) -> &mut Self {
        self.test = Some(pattern);
        self
    }

    /// Only apply when the resource query matches `pattern`
    pub fn resource_query(&mut self, pattern: Regex) -> &mut Self {
        self.resource_query = Some(pattern);
        self
    }

    /// Get or create the exclusive branch named `name`
    pub fn one_of(&mut self, name: &str) -> &mut Rule {
        self.one_of
            .entry(name.to_string())
            .or_insert_with(|| Rule::new(name))
    }

    /// Get or create the loader use named `name`
    pub fn use_entry(&mut self, name: &str) -> &mut UseEntry {
        self.uses
            .entry(name.to_string())
            .or_insert_with(|| UseEntry::new(name))
    }

    fn loaders_for_query(&self, query: &str) -> Vec<&UseEntry> {
        let mut loaders: Vec<&UseEntry> = self.uses.values().collect();

        let branch = self.one_of.values().find(|branch| {
            branch
                .resource_query
                .as_ref()
                .is_none_or(|re| re.is_match(query))
        });
        if let Some(branch) = branch {
            loaders.extend(branch.loaders_for_query(query));
        }

        loaders
    }
}

/// One loader step of a rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseEntry {
    pub name: String,
    pub loader: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl UseEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            loader: name.to_string(),
            options: Value::Null,
        }
    }

    /// Module specifier of the loader
    pub fn loader(&mut self, loader: impl Into<String>) -> &mut Self {
        self.loader = loader.into();
        self
    }

    pub fn options(&mut self, options: Value) -> &mut Self {
        self.options = options;
        self
    }
}

/// A bundler plugin and its constructor arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginEntry {
    pub name: String,
    pub plugin: String,
    pub args: Vec<Value>,
}

impl PluginEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            plugin: name.to_string(),
            args: Vec::new(),
        }
    }

    pub fn use_plugin(&mut self, plugin: impl Into<String>, args: Vec<Value>) -> &mut Self {
        self.plugin = plugin.into();
        self.args = args;
        self
    }
}

fn ordered_values<S, T>(map: &IndexMap<String, T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    serializer.collect_seq(map.values())
}

fn regex_source<S: Serializer>(pattern: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error> {
    match pattern {
        Some(re) => serializer.serialize_str(re.as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn rule_is_reused_by_name() {
        let mut chain = ChainConfig::new();
        chain.module.rule("js").test(re(r"\.js$"));
        chain.module.rule("js").use_entry("babel").loader("babel-loader");

        assert_eq!(chain.module.rules.len(), 1);
        let rule = &chain.module.rules["js"];
        assert_eq!(rule.test.as_ref().unwrap().as_str(), r"\.js$");
        assert_eq!(rule.uses["babel"].loader, "babel-loader");
    }

    #[test]
    fn use_entry_defaults_loader_to_name() {
        let mut chain = ChainConfig::new();
        let entry = chain.module.rule("css").use_entry("css-loader");
        assert_eq!(entry.loader, "css-loader");
        assert!(entry.options.is_null());
    }

    #[test]
    fn loaders_for_picks_first_matching_branch() {
        let mut chain = ChainConfig::new();
        let rule = chain.module.rule("css");
        rule.test(re(r"\.(css)(\?.*)?$"));
        rule.one_of("modules")
            .resource_query(re("modules"))
            .use_entry("scoped");
        rule.one_of("plain").use_entry("global");

        let names = |resource: &str| -> Vec<String> {
            chain
                .module
                .loaders_for(resource)
                .unwrap()
                .into_iter()
                .map(|u| u.name.clone())
                .collect()
        };

        assert_eq!(names("a.css?modules"), vec!["scoped"]);
        assert_eq!(names("a.css"), vec!["global"]);
        assert!(chain.module.loaders_for("a.js").is_none());
    }

    #[test]
    fn parent_uses_run_before_branch_uses() {
        let mut chain = ChainConfig::new();
        let rule = chain.module.rule("ts");
        rule.test(re(r"\.ts$"));
        rule.use_entry("outer");
        rule.one_of("only").use_entry("inner");

        let names: Vec<_> = chain
            .module
            .loaders_for("main.ts")
            .unwrap()
            .into_iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["outer", "inner"]);
    }

    #[test]
    fn plugin_is_reused_by_name() {
        let mut chain = ChainConfig::new();
        chain.plugin("define").use_plugin("DefinePlugin", vec![json!({ "a": 1 })]);
        chain.plugin("define").use_plugin("DefinePlugin", vec![json!({ "a": 2 })]);

        assert_eq!(chain.plugins.len(), 1);
        assert_eq!(chain.plugins["define"].args, vec![json!({ "a": 2 })]);
    }

    #[test]
    fn to_value_shape() {
        let mut chain = ChainConfig::new();
        let rule = chain.module.rule("css");
        rule.test(re(r"\.css$"));
        rule.one_of("css")
            .use_entry("css-loader")
            .options(json!({ "importLoaders": 1 }));
        chain.plugin("extract").use_plugin("extract-plugin", vec![]);

        let value = chain.to_value().unwrap();
        assert_eq!(
            value,
            json!({
                "module": {
                    "rules": [{
                        "name": "css",
                        "test": r"\.css$",
                        "oneOf": [{
                            "name": "css",
                            "use": [{
                                "name": "css-loader",
                                "loader": "css-loader",
                                "options": { "importLoaders": 1 }
                            }]
                        }]
                    }]
                },
                "plugins": [{ "name": "extract", "plugin": "extract-plugin", "args": [] }]
            })
        );
    }
}
