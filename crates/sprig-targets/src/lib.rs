//! # sprig-targets
//!
//! Derives the platform targets and browserslist queries for one bundler
//! configuration (client-side or server-side) from the user's `targets`.

pub mod derive;
pub mod kind;

pub use derive::{DeriveOptions, TargetsAndBrowserslist, browserslist, derive, filter_targets};
pub use kind::BundlerConfigType;
