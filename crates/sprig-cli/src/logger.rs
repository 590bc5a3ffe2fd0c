//! Logging setup for the sprig CLI.
//!
//! Logs go to stderr so that stdout carries only the JSON result.
//!
//! - `--verbose`: debug level for the sprig crates
//! - `--quiet`: errors only
//! - otherwise `RUST_LOG`, falling back to info

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "sprig_cli=debug,sprig_config=debug,sprig_targets=debug,sprig_css=debug,sprig_routes=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str =
    "sprig_cli=info,sprig_config=info,sprig_targets=info,sprig_css=info,sprig_routes=info";

/// Filter for the given verbosity flags
///
/// The CLI rejects `--verbose` together with `--quiet`.
pub fn env_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, before any logging occurs.
///
/// ```rust,no_run
/// use sprig_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("ready");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
