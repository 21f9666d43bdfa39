//! Path resolution helpers
//!
//! Client supplied paths are always relative to the scan root. These helpers
//! turn them into filesystem paths that are guaranteed to stay inside it, and
//! turn filesystem paths back into slash separated relative paths.

use crate::error::{Error, Result};
use log::warn;
use std::path::{Component, Path, PathBuf};

/// Joins a client supplied relative path onto `root`, component by component
///
/// Rejects parent directory (`..`) references and absolute or prefixed
/// components outright, even when they would land back inside the root.
/// Leading slashes are stripped first so `/a/b.png` and `a/b.png` agree.
/// The filesystem is not touched.
pub fn join_relative(root: &Path, relative: &str) -> Result<PathBuf> {
    let relative = relative.trim_start_matches(['/', '\\']);
    let mut result = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(name) => {
                if name.to_string_lossy().contains('\0') {
                    warn!("Path component contains null byte: {name:?}");
                    return Err(outside(relative));
                }
                result.push(name);
            }
            Component::CurDir => continue,
            Component::ParentDir => {
                warn!("Path traversal attempt rejected: {relative}");
                return Err(outside(relative));
            }
            Component::RootDir | Component::Prefix(_) => {
                warn!("Absolute path component rejected: {relative}");
                return Err(outside(relative));
            }
        }
    }

    Ok(result)
}

/// Resolves a client supplied path to an existing entry inside `root`
///
/// After the lexical check of [`join_relative`] the candidate is
/// canonicalized and compared against the canonical root, so a symlink
/// living under the root cannot point the request somewhere else.
pub fn resolve_existing(root: &Path, relative: &str) -> Result<PathBuf> {
    let candidate = join_relative(root, relative)?;

    let canonical_path = candidate
        .canonicalize()
        .map_err(|err| Error::MediaFileNotFound {
            path: relative.to_string(),
            context: err.to_string(),
        })?;
    let canonical_root = root.canonicalize().map_err(|err| Error::MediaFileNotFound {
        path: root.display().to_string(),
        context: format!("scan root is not accessible: {err}"),
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        warn!(
            "Symlink escape attempt: {} resolved to {} outside {}",
            candidate.display(),
            canonical_path.display(),
            canonical_root.display()
        );
        return Err(outside(relative));
    }

    Ok(canonical_path)
}

/// Path of `full_path` relative to `root`, always `/` separated
///
/// Returns an empty string when `full_path` is not below `root`.
pub fn relative_slash_path(root: &Path, full_path: &Path) -> String {
    let Ok(relative) = full_path.strip_prefix(root) else {
        return String::new();
    };

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn outside(relative: &str) -> Error {
    Error::PathOutsideRoot {
        path: relative.to_string(),
    }
}
