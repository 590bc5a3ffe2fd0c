//! CSS and Less module rules.
//!
//! Every stylesheet rule has the same two-branch shape:
//!
//! ```text
//! rule[lang]  test: \.(<lang>)(\?.*)?$
//! ├── oneOf["css-modules"]  resourceQuery: modules
//! │   inject → css-loader (scoped class names) → [preprocessor]
//! └── oneOf["css"]
//!     inject → css-loader → [preprocessor]
//! ```
//!
//! `inject` is `style-loader` when `styleLoader` is configured, otherwise the
//! extraction loader paired with the `extract-css` plugin.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value, json};
use sprig_config::{StyleOptions, merge_values};
use tracing::debug;

use crate::chain::{ChainConfig, Rule};

pub const STYLE_LOADER: &str = "style-loader";
pub const EXTRACT_CSS_LOADER: &str = "mini-css-extract-plugin/dist/loader";
pub const EXTRACT_CSS_PLUGIN: &str = "mini-css-extract-plugin";
pub const CSS_LOADER: &str = "css-loader";
pub const LESS_LOADER: &str = "less-loader";

/// Class name pattern for CSS modules
pub const LOCAL_IDENT_NAME: &str = "[local]___[hash:base64:5]";

/// Filename segment added to extracted CSS in hashed production builds
pub const CONTENT_HASH: &str = ".[contenthash:8]";

static CSS_TEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(css)(\?.*)?$").expect("valid css rule pattern"));

static LESS_TEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(less)(\?.*)?$").expect("valid less rule pattern"));

static MODULES_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("modules").expect("valid resource query pattern"));

/// An extra loader appended after `css-loader`
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessor {
    pub loader: String,
    pub options: Value,
}

/// Declarative description of one stylesheet rule
#[derive(Debug, Clone)]
pub struct CssRuleSpec {
    /// Rule name (`css`, `less`)
    pub lang: String,
    pub test: Regex,
    pub preprocessor: Option<Preprocessor>,
}

impl CssRuleSpec {
    /// Plain `.css` files
    pub fn css() -> Self {
        Self {
            lang: "css".to_string(),
            test: CSS_TEST.clone(),
            preprocessor: None,
        }
    }

    /// `.less` files compiled with the theme variables
    pub fn less(theme: &indexmap::IndexMap<String, String>) -> Self {
        let modify_vars: Map<String, Value> = theme
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        Self {
            lang: "less".to_string(),
            test: LESS_TEST.clone(),
            preprocessor: Some(Preprocessor {
                loader: LESS_LOADER.to_string(),
                options: json!({
                    "modifyVars": modify_vars,
                    "javascriptEnabled": true,
                }),
            }),
        }
    }
}

/// Register the CSS and Less rules, plus CSS extraction when styles are not
/// injected inline.
///
/// # Example
///
/// ```
/// use sprig_config::StyleOptions;
/// use sprig_css::{ChainConfig, apply_css};
///
/// let mut chain = ChainConfig::new();
/// apply_css(&mut chain, &StyleOptions::new().with_hash(true), false);
///
/// let filename = &chain.plugins["extract-css"].args[0]["filename"];
/// assert_eq!(filename, "[name].[contenthash:8].css");
/// ```
pub fn apply_css(chain: &mut ChainConfig, style: &StyleOptions, is_dev: bool) {
    create_css_rule(chain, style, is_dev, &CssRuleSpec::css());
    create_css_rule(chain, style, is_dev, &CssRuleSpec::less(&style.theme));

    if style.extracts_css() {
        let hash = extract_hash(style, is_dev);
        debug!(hash = !hash.is_empty(), "registering css extraction");
        chain.plugin("extract-css").use_plugin(
            EXTRACT_CSS_PLUGIN,
            vec![json!({
                "filename": format!("[name]{hash}.css"),
                "chunkFilename": format!("[name]{hash}.chunk.css"),
            })],
        );
    }
}

/// Add one stylesheet rule with its `css-modules` and `css` branches.
pub fn create_css_rule(
    chain: &mut ChainConfig,
    style: &StyleOptions,
    is_dev: bool,
    spec: &CssRuleSpec,
) {
    debug!(lang = %spec.lang, "registering stylesheet rule");
    let rule = chain.module.rule(&spec.lang);
    rule.test(spec.test.clone());

    let modules = rule.one_of("css-modules");
    modules.resource_query(MODULES_QUERY.clone());
    apply_loaders(modules, style, is_dev, spec, true);

    apply_loaders(rule.one_of("css"), style, is_dev, spec, false);
}

fn apply_loaders(
    rule: &mut Rule,
    style: &StyleOptions,
    is_dev: bool,
    spec: &CssRuleSpec,
    css_modules: bool,
) {
    match &style.style_loader {
        Some(user_options) => {
            let mut options = json!({ "base": 0 });
            merge_values(&mut options, &Value::Object(user_options.clone()));
            rule.use_entry("style-loader")
                .loader(STYLE_LOADER)
                .options(options);
        }
        None => {
            rule.use_entry("extract-css-loader")
                .loader(EXTRACT_CSS_LOADER)
                .options(json!({
                    "publicPath": "./",
                    "hmr": is_dev,
                }));
        }
    }

    let mut css_options = json!({
        "importLoaders": 1,
        "sourceMap": false,
    });
    if css_modules {
        css_options["modules"] = json!({ "localIdentName": LOCAL_IDENT_NAME });
    }
    rule.use_entry("css-loader")
        .loader(CSS_LOADER)
        .options(css_options);

    if let Some(pre) = &spec.preprocessor {
        rule.use_entry(&pre.loader)
            .loader(pre.loader.as_str())
            .options(pre.options.clone());
    }
}

/// Content hashes only go into production builds that ask for them
fn extract_hash(style: &StyleOptions, is_dev: bool) -> &'static str {
    if !is_dev && style.hash { CONTENT_HASH } else { "" }
}
