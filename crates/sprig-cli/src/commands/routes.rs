//! `sprig routes`

use sprig_routes::RouteBuilder;
use tracing::{debug, info};

use crate::cli::{GlobalArgs, RoutesArgs};
use crate::commands::utils::{load_config, print_json, project_root, resolve_path};
use crate::error::{CliError, Result};

pub fn execute(global: &GlobalArgs, args: &RoutesArgs) -> Result<()> {
    let root = project_root(global)?;
    let config = load_config(global, &root)?;

    let mut options = config.routes;
    if let Some(pages) = &args.root {
        options.root = pages.clone();
    }
    if let Some(prefix) = &args.component_prefix {
        options.component_prefix = prefix.clone();
    }

    let pages = resolve_path(&options.root, &root);
    if !pages.is_dir() {
        return Err(CliError::FileNotFound(pages));
    }
    debug!(pages = %pages.display(), prefix = %options.component_prefix, "building routes");

    let routes = RouteBuilder::from_options(&root, &options).build()?;
    info!(count = routes.len(), "generated routes");

    print_json(&routes)
}
