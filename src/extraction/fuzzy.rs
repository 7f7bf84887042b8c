// src/extraction/fuzzy.rs

//! The fuzzy extractor: reports real files whose basename the text mentions.

use crate::discovery::discover_files;
use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::Arc;

/// Whether `name` occurs in `text` with no word character on either side.
pub fn mentions_basename(text: &str, name: &str) -> bool {
    // Cheap substring test first; most files are never mentioned.
    if name.is_empty() || !text.contains(name) {
        return false;
    }
    let pattern = format!(r"(?:^|[^\w]){}(?:$|[^\w])", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            debug!("Cannot build matcher for basename {:?}: {}", name, e);
            false
        }
    }
}

/// Lists files under `base_dir` whose basename appears in `text` as a whole word.
///
/// Results are relative to `base_dir`, use `/` separators, and are sorted.
/// Ignored directories are not entered. Filesystem errors are skipped, so a
/// missing `base_dir` simply yields nothing.
#[tracing::instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn extract_fuzzy_paths(text: &str, base_dir: &Path) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let text: Arc<str> = Arc::from(text);
    discover_files(base_dir, move |relative| {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        mentions_basename(&text, name)
    })
}
