//! Command implementations.
//!
//! - [`targets`] - derived targets and browserslist queries
//! - [`css`] - stylesheet rules
//! - [`routes`] - conventional route table
//!
//! Each command provides an `execute` function taking the global options and
//! its own arguments.

pub mod css;
pub mod routes;
pub mod targets;
pub(crate) mod utils;

pub use css::execute as css_execute;
pub use routes::execute as routes_execute;
pub use targets::execute as targets_execute;
