//! Conventional route table construction.

use std::fs;
use std::path::{Path, PathBuf};

use sprig_config::RoutesOptions;
use tracing::debug;

use crate::error::{Result, RouteError};
use crate::files::{find_script, is_script, visible_entries};
use crate::path::{is_dynamic_segment, normalize_path, to_slash};
use crate::route::Route;

/// Alias prepended to component paths unless configured otherwise
pub const DEFAULT_COMPONENT_PREFIX: &str = "@/";

/// Builds the route table for a pages directory.
///
/// # Example
///
/// ```no_run
/// use sprig_routes::RouteBuilder;
///
/// let routes = RouteBuilder::new("src/pages")
///     .component_prefix("@/")
///     .build()
///     .unwrap();
///
/// println!("{}", serde_json::to_string_pretty(&routes).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    root: PathBuf,
    component_prefix: String,
}

impl RouteBuilder {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            component_prefix: DEFAULT_COMPONENT_PREFIX.to_string(),
        }
    }

    /// Builder for the pages directory configured under `project_root`
    pub fn from_options(project_root: &Path, options: &RoutesOptions) -> Self {
        Self::new(project_root.join(&options.root)).component_prefix(&options.component_prefix)
    }

    pub fn component_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.component_prefix = prefix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the pages directory and produce the route table.
    ///
    /// # Errors
    ///
    /// - [`RouteError::MultipleDynamicRoutes`] when a directory holds more
    ///   than one `[param]` subdirectory
    /// - [`RouteError::Io`] when a directory or entry cannot be read
    pub fn build(&self) -> Result<Vec<Route>> {
        let root = std::path::absolute(&self.root)
            .map(path_clean::clean)
            .map_err(RouteError::io(&self.root))?;
        let base = root.parent().unwrap_or(&root).to_path_buf();

        let walk = Walk {
            root: &root,
            base: &base,
            prefix: &self.component_prefix,
        };
        let routes = walk.routes_in(Path::new(""))?;

        match find_script(&base.join("layouts"), "index") {
            Some(layout) => {
                debug!(layout = %layout.display(), "wrapping routes in global layout");
                Ok(vec![Route::layout("/", walk.component(&layout), routes)])
            }
            None => Ok(routes),
        }
    }
}

/// Build the route table for `root` with the default component prefix
pub fn get_routes(root: impl AsRef<Path>) -> Result<Vec<Route>> {
    RouteBuilder::new(root).build()
}

/// How a directory entry contributes to its parent's route list
#[derive(Debug)]
enum Shape {
    /// A page file
    Page(Route),
    /// A directory with its own `_layout`
    Layout(Route),
    /// A directory without `_layout`: its children replace it
    Transparent { path: String, children: Vec<Route> },
}

/// Ordering group of a sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Exact,
    Layout,
    Dynamic,
}

#[derive(Debug)]
struct Candidate {
    dynamic: bool,
    shape: Shape,
}

impl Candidate {
    fn bucket(&self) -> Bucket {
        match self.shape {
            _ if self.dynamic => Bucket::Dynamic,
            Shape::Page(_) | Shape::Transparent { .. } => Bucket::Exact,
            Shape::Layout(_) => Bucket::Layout,
        }
    }

    fn path(&self) -> &str {
        match &self.shape {
            Shape::Page(route) | Shape::Layout(route) => &route.path,
            Shape::Transparent { path, .. } => path,
        }
    }

    fn into_routes(self) -> Vec<Route> {
        match self.shape {
            Shape::Page(route) | Shape::Layout(route) => vec![route],
            Shape::Transparent { children, .. } => children,
        }
    }
}

struct Walk<'a> {
    /// Absolute pages directory
    root: &'a Path,
    /// Directory component paths are made relative to
    base: &'a Path,
    prefix: &'a str,
}

impl Walk<'_> {
    fn routes_in(&self, rel_dir: &Path) -> Result<Vec<Route>> {
        let dir = self.root.join(rel_dir);
        debug!(dir = %dir.display(), "collecting routes");

        let mut candidates = Vec::new();
        for name in visible_entries(&dir)? {
            if let Some(candidate) = self.candidate(rel_dir, &name)? {
                candidates.push(candidate);
            }
        }

        order_siblings(&dir, candidates)
    }

    fn candidate(&self, rel_dir: &Path, name: &str) -> Result<Option<Candidate>> {
        let abs = self.root.join(rel_dir).join(name);
        let metadata = fs::metadata(&abs).map_err(RouteError::io(&abs))?;

        if metadata.is_dir() {
            let rel = rel_dir.join(name);
            let path = normalize_path(&to_slash(&rel));
            let children = self.routes_in(&rel)?;

            let shape = match find_script(&abs, "_layout") {
                Some(layout) => Shape::Layout(Route::layout(path, self.component(&layout), children)),
                None => Shape::Transparent { path, children },
            };

            return Ok(Some(Candidate {
                dynamic: is_dynamic_segment(name),
                shape,
            }));
        }

        if !is_script(name) {
            return Ok(None);
        }

        let stem = Path::new(name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(name);
        let path = normalize_path(&to_slash(&rel_dir.join(stem)));

        // Files are never dynamic: `[id].tsx` maps to `:id` but stays exact
        Ok(Some(Candidate {
            dynamic: is_dynamic_segment(name),
            shape: Shape::Page(Route::page(path, self.component(&abs))),
        }))
    }

    /// `<prefix><path relative to the pages parent>`
    fn component(&self, file: &Path) -> String {
        let relative = file.strip_prefix(self.base).unwrap_or(file);
        format!("{}{}", self.prefix, to_slash(relative))
    }
}

/// Order siblings exact → layout → dynamic, then lift transparent children.
fn order_siblings(dir: &Path, candidates: Vec<Candidate>) -> Result<Vec<Route>> {
    let dynamic: Vec<&str> = candidates
        .iter()
        .filter(|c| c.bucket() == Bucket::Dynamic)
        .map(Candidate::path)
        .collect();
    if dynamic.len() > 1 {
        return Err(RouteError::MultipleDynamicRoutes {
            dir: dir.to_path_buf(),
            routes: dynamic.into_iter().map(str::to_string).collect(),
        });
    }

    let mut ordered = candidates;
    // Stable: entries keep their name order within a bucket
    ordered.sort_by_key(|c| c.bucket() as u8);

    Ok(ordered.into_iter().flat_map(Candidate::into_routes).collect())
}
