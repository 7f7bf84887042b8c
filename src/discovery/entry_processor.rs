// src/discovery/entry_processor.rs

use crate::filtering::is_ignored;
use ignore::DirEntry;
use log::{debug, trace};
use std::path::Path;

/// Joins the components of a relative path with `/`, whatever the platform.
pub(crate) fn to_slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Processes a single directory entry from the walk.
///
/// Returns the entry's path relative to `base_dir` (with `/` separators) if it
/// is a regular file outside the ignore policy, and `None` for anything else.
/// Walker errors (unreadable directories, broken entries) are logged and
/// skipped.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    base_dir: &Path,
) -> Option<String> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            debug!("Skipping unreadable entry: {}", ignore_error);
            return None;
        }
    };

    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
        trace!("Skipping non-file entry: {}", entry.path().display());
        return None;
    }

    let relative = match entry.path().strip_prefix(base_dir) {
        Ok(relative) => to_slash_path(relative),
        Err(err) => {
            debug!(
                "Failed to strip prefix '{}' from '{}': {}",
                base_dir.display(),
                entry.path().display(),
                err
            );
            return None;
        }
    };

    if relative.is_empty() || is_ignored(&relative) {
        trace!("Skipping ignored or empty path: {:?}", relative);
        return None;
    }
    Some(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_to_slash_path() {
        let rel: PathBuf = ["src", "components", "Button.tsx"].iter().collect();
        assert_eq!(to_slash_path(&rel), "src/components/Button.tsx");
        assert_eq!(to_slash_path(Path::new("")), "");
    }
}
