//! Directory entry conventions.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{trace, warn};

use crate::error::{Result, RouteError};

/// Extensions tried, in order, when looking up `_layout` and `layouts/index`
pub const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

static SCRIPT_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(j|t)sx?$").expect("valid script pattern"));

static TEST_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(test|spec)\.(j|t)sx?$").expect("valid test file pattern"));

static DECLARATION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.d\.ts$").expect("valid declaration pattern"));

/// Whether an entry takes part in routing at all
pub(crate) fn is_visible(name: &str) -> bool {
    !(name.starts_with('.')
        || name.starts_with('_')
        || TEST_FILE.is_match(name)
        || DECLARATION_FILE.is_match(name))
}

/// Whether a file becomes a page route
pub(crate) fn is_script(name: &str) -> bool {
    SCRIPT_FILE.is_match(name)
}

/// First `<dir>/<stem>.<ext>` that exists, trying [`SCRIPT_EXTENSIONS`] in order
pub(crate) fn find_script(dir: &Path, stem: &str) -> Option<PathBuf> {
    SCRIPT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|candidate| candidate.is_file())
}

/// Visible entry names of `dir`, sorted byte-wise for stable output
pub(crate) fn visible_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir).map_err(RouteError::io(dir))? {
        let entry = entry.map_err(RouteError::io(dir))?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(dir = %dir.display(), name = ?raw, "skipping entry with non UTF-8 name");
                continue;
            }
        };

        if is_visible(&name) {
            names.push(name);
        } else {
            trace!(dir = %dir.display(), %name, "ignored by convention");
        }
    }

    names.sort();
    Ok(names)
}
