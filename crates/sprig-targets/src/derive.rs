//! Target filtering and browserslist query derivation.

use serde::Serialize;
use sprig_config::{SprigConfig, Targets};
use tracing::debug;

use crate::kind::BundlerConfigType;

/// Input for [`derive`]
#[derive(Debug, Clone, Copy)]
pub struct DeriveOptions<'a> {
    pub config: &'a SprigConfig,
    pub kind: BundlerConfigType,
}

/// Targets retained for one bundle, plus the matching browserslist queries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TargetsAndBrowserslist {
    pub targets: Targets,
    pub browserslist: Vec<String>,
}

/// Derive the targets and browserslist for a bundler configuration.
///
/// # Example
///
/// ```
/// use sprig_config::{SprigConfig, Targets};
/// use sprig_targets::{BundlerConfigType, DeriveOptions, derive};
///
/// let config = SprigConfig {
///     targets: Targets::new().with("ie", 10u32).with("node", 6u32).with("firefox", true),
///     ..Default::default()
/// };
///
/// let result = derive(&DeriveOptions { config: &config, kind: BundlerConfigType::Csr });
/// assert_eq!(result.browserslist, vec!["ie >= 10", "firefox >= 0"]);
/// ```
pub fn derive(opts: &DeriveOptions<'_>) -> TargetsAndBrowserslist {
    let targets = filter_targets(&opts.config.targets, opts.kind);
    let browserslist = browserslist(&targets);
    debug!(kind = %opts.kind, queries = browserslist.len(), "derived browserslist");

    TargetsAndBrowserslist {
        targets,
        browserslist,
    }
}

/// Keep the platforms that belong to `kind`, in declaration order.
///
/// Client bundles drop `node`; server bundles keep nothing but `node`.
pub fn filter_targets(targets: &Targets, kind: BundlerConfigType) -> Targets {
    targets
        .iter()
        .filter(|(platform, _)| kind.accepts(platform))
        .map(|(platform, version)| (platform, *version))
        .collect()
}

/// One `"<platform> >= <version>"` query per enabled platform.
///
/// `true` means any version (`>= 0`); disabled platforms produce no query.
pub fn browserslist(targets: &Targets) -> Vec<String> {
    targets
        .iter()
        .filter_map(|(platform, version)| {
            version.floor().map(|floor| format!("{platform} >= {floor}"))
        })
        .collect()
}
