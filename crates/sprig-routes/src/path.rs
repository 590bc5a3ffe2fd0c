//! Route path normalization.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static DYNAMIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.+?)\]$").expect("valid dynamic segment pattern"));

/// Whether a file stem or directory name is a `[param]` segment
pub fn is_dynamic_segment(name: &str) -> bool {
    DYNAMIC_SEGMENT.is_match(name)
}

/// Turn a pages-relative path into a route path.
///
/// - separators become `/`
/// - `[param]` segments become `:param`
/// - the result starts with exactly one `/`
/// - trailing `/index` segments collapse into their parent (`/index/index` → `/`)
/// - no trailing slash except for the root
///
/// Normalizing an already normalized path returns it unchanged.
///
/// ```
/// use sprig_routes::normalize_path;
///
/// assert_eq!(normalize_path("users/[id]"), "/users/:id");
/// assert_eq!(normalize_path("blog/index"), "/blog");
/// assert_eq!(normalize_path("index/index"), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    let joined = path
        .replace('\\', "/")
        .split('/')
        .map(|segment| DYNAMIC_SEGMENT.replace(segment, ":$1"))
        .collect::<Vec<_>>()
        .join("/");

    let mut path = format!("/{}", joined.trim_start_matches('/'));

    loop {
        if path.len() > 1 && path.ends_with('/') {
            path.pop();
            continue;
        }
        if let Some(parent) = path.strip_suffix("/index") {
            path = if parent.is_empty() {
                "/".to_string()
            } else {
                parent.to_string()
            };
            continue;
        }
        break;
    }

    path
}

/// Join path components with `/` regardless of platform
pub(crate) fn to_slash(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
