use clap::{Args, Subcommand};
use sprig_targets::BundlerConfigType;
use std::path::PathBuf;

/// Available sprig subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the targets and browserslist queries for one bundle
    ///
    /// `csr` drops the `node` entry, `ssr` keeps only `node`.
    Targets(TargetsArgs),

    /// Print the CSS and Less rules applied to the bundler config
    ///
    /// Styles are extracted into separate files unless `styleLoader` is
    /// configured, in which case they are injected with style-loader.
    Css(CssArgs),

    /// Print the route table generated from the pages directory
    Routes(RoutesArgs),
}

/// Arguments for the targets command
#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Bundle to derive targets for
    #[arg(short = 't', long = "type", value_enum, default_value = "csr")]
    pub kind: BundleKind,
}

/// Arguments for the css command
#[derive(Args, Debug)]
pub struct CssArgs {
    /// Development build: no content hash, hot reloading on extracted CSS
    #[arg(long)]
    pub dev: bool,
}

/// Arguments for the routes command
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Pages directory, overriding `routes.root` from the config
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Component path prefix, overriding `routes.componentPrefix`
    #[arg(long, value_name = "PREFIX")]
    pub component_prefix: Option<String>,
}

/// Bundle selector accepted by `--type`
#[derive(Copy, Clone, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum BundleKind {
    /// Client-side bundle (browsers)
    #[value(name = "csr")]
    Csr,

    /// Server-side bundle (Node.js)
    #[value(name = "ssr")]
    Ssr,
}

impl From<BundleKind> for BundlerConfigType {
    fn from(kind: BundleKind) -> Self {
        match kind {
            BundleKind::Csr => BundlerConfigType::Csr,
            BundleKind::Ssr => BundlerConfigType::Ssr,
        }
    }
}
