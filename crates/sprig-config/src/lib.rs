//! # sprig-config
//!
//! Configuration types shared across sprig crates: browser targets, style
//! options and conventional routing options, plus file discovery for CLI use.

pub mod config;
pub mod discovery;
pub mod error;
mod helpers;
pub mod routes;
pub mod style;
pub mod targets;

// Re-export main types
pub use config::*;
pub use error::*;
pub use routes::RoutesOptions;
pub use style::StyleOptions;
pub use targets::{TargetVersion, Targets};

pub use discovery::{ConfigDiscovery, discover, load_from};
