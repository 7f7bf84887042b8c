// src/verify.rs

//! Filters a path list down to the entries that exist on disk.

use log::debug;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

fn resolve_against(path: &str, base_dir: &Path) -> PathBuf {
    let candidate = Path::new(path);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base_dir.join(candidate)
    }
}

/// Probes one path. Anything but a successful `stat` counts as missing.
fn exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            debug!("Existence probe failed for '{}': {}", path.display(), e);
            false
        }
    }
}

/// Returns the subset of `paths` that exists, in input order.
///
/// Relative paths are resolved against `base_dir`; absolute ones are probed
/// as-is. Probes run concurrently on the rayon pool and never abort the batch.
///
/// # Examples
///
/// ```
/// use pathscan::verify;
/// use std::path::Path;
///
/// let kept = verify(&["Cargo.toml".to_string(), "no/such/file.rs".to_string()], Path::new("."));
/// assert_eq!(kept, vec!["Cargo.toml"]);
/// ```
#[tracing::instrument(level = "debug", skip(paths), fields(count = paths.len()))]
pub fn verify_paths(paths: &[String], base_dir: &Path) -> Vec<String> {
    let kept: Vec<String> = paths
        .par_iter()
        .filter(|path| exists(&resolve_against(path, base_dir)))
        .cloned()
        .collect();
    debug!("{} of {} paths exist", kept.len(), paths.len());
    kept
}
