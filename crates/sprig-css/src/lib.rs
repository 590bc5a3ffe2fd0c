//! # sprig-css
//!
//! Stylesheet rules for the bundler's module pipeline.
//!
//! [`apply_css`] writes `css` and `less` rules (CSS-modules and plain
//! branches) into a [`ChainConfig`], and registers CSS extraction unless
//! styles are injected inline.

pub mod chain;
pub mod rules;

pub use chain::{ChainConfig, ModuleConfig, PluginEntry, Rule, UseEntry};
pub use rules::{CssRuleSpec, Preprocessor, apply_css, create_css_rule};
