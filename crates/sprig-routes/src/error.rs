//! Error types for route generation.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Two or more `[param]` subdirectories share a parent
    #[error(
        "multiple dynamic routes under a directory: {} ({})",
        .dir.display(),
        .routes.join(", ")
    )]
    MultipleDynamicRoutes { dir: PathBuf, routes: Vec<String> },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RouteError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
