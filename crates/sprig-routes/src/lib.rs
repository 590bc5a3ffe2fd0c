//! # sprig-routes
//!
//! Builds a nested route table from a pages directory by convention.
//!
//! ```text
//! src/pages/
//! ├── index.tsx            → /            (exact)
//! ├── about.tsx            → /about       (exact)
//! ├── users/
//! │   ├── _layout.tsx      → /users       (layout, nested routes)
//! │   ├── index.tsx        →   /users
//! │   └── [id].tsx         →   /users/:id
//! └── docs/                (no _layout: children lifted into the parent)
//!     └── intro.tsx        → /docs/intro
//! ```
//!
//! Siblings are ordered exact → layout → dynamic, and a directory may hold at
//! most one dynamic (`[param]`) subdirectory. Bracket-named files get a
//! `:param` path but rank as exact routes. When `../layouts/index.*` exists
//! next to the pages directory, the whole table is wrapped in a root layout
//! route.

pub mod builder;
pub mod error;
mod files;
pub mod path;
pub mod route;

pub use builder::{DEFAULT_COMPONENT_PREFIX, RouteBuilder, get_routes};
pub use error::{Result, RouteError};
pub use files::SCRIPT_EXTENSIONS;
pub use path::{is_dynamic_segment, normalize_path};
pub use route::Route;
