//! `sprig targets`

use sprig_targets::{DeriveOptions, derive};
use tracing::debug;

use crate::cli::{GlobalArgs, TargetsArgs};
use crate::commands::utils::{load_config, print_json, project_root};
use crate::error::Result;

pub fn execute(global: &GlobalArgs, args: &TargetsArgs) -> Result<()> {
    let root = project_root(global)?;
    let config = load_config(global, &root)?;

    let derived = derive(&DeriveOptions {
        config: &config,
        kind: args.kind.into(),
    });
    debug!(queries = derived.browserslist.len(), "targets derived");

    print_json(&derived)
}
