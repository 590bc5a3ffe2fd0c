//! `sprig css`

use sprig_css::{ChainConfig, apply_css};
use tracing::debug;

use crate::cli::{CssArgs, GlobalArgs};
use crate::commands::utils::{load_config, print_json, project_root};
use crate::error::Result;

pub fn execute(global: &GlobalArgs, args: &CssArgs) -> Result<()> {
    let root = project_root(global)?;
    let config = load_config(global, &root)?;

    let mut chain = ChainConfig::new();
    apply_css(&mut chain, &config.style, args.dev);
    debug!(
        rules = chain.module.rules.len(),
        plugins = chain.plugins.len(),
        "css rules applied"
    );

    print_json(&chain.to_value()?)
}
