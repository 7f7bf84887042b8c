// src/config/path_resolve.rs

use crate::errors::{io_error_with_path, Result};
use std::path::{Component, Path, PathBuf};

/// Removes `.` and resolves `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component.as_os_str()),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolves the base directory to an absolute path.
///
/// `None` means the process working directory; a relative path is taken
/// relative to it. The directory does not have to exist.
pub fn resolve_base_dir(base_dir: Option<&Path>) -> Result<PathBuf> {
    match base_dir {
        Some(dir) if dir.is_absolute() => Ok(normalize_lexically(dir)),
        _ => {
            let cwd = std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?;
            Ok(match base_dir {
                Some(dir) => normalize_lexically(&cwd.join(dir)),
                None => cwd,
            })
        }
    }
}

/// Joins a relative path onto `base_dir`; absolute paths pass through unchanged.
pub fn absolutize(path: &str, base_dir: &Path) -> String {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        return path.to_string();
    }
    normalize_lexically(&base_dir.join(candidate))
        .to_string_lossy()
        .into_owned()
}
