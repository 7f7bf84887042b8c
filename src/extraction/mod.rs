//! Runs the selected extractors and post-processes their combined output.

pub mod fuzzy;
pub mod pattern;

use crate::config::path_resolve::{absolutize, resolve_base_dir};
use crate::core_types::ExtractOptions;
use crate::errors::Result;
use log::debug;
use std::collections::HashSet;

/// Keeps the first occurrence of every string, in order.
fn dedupe_preserving_order(paths: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(paths.len());
    paths
        .into_iter()
        .filter(|path| seen.insert(path.clone()))
        .collect()
}

/// Extracts path references from `text` according to `options`.
///
/// Pattern results come first, then fuzzy results. Deduplication (exact
/// string equality, first occurrence wins) runs before absolutization, so two
/// spellings of one file can both survive as identical absolute strings.
///
/// # Errors
///
/// Fails only when the base directory has to be resolved against the working
/// directory and the working directory cannot be determined.
#[tracing::instrument(level = "debug", skip(text, options), fields(strategy = %options.strategy))]
pub fn extract_paths(text: &str, options: &ExtractOptions) -> Result<Vec<String>> {
    let needs_base_dir = options.strategy.uses_fuzzy() || options.make_absolute;
    let base_dir = if needs_base_dir {
        Some(resolve_base_dir(options.base_dir.as_deref())?)
    } else {
        None
    };

    let mut paths = Vec::new();
    if options.strategy.uses_pattern() {
        paths.extend(pattern::extract_pattern_paths(text));
    }
    if let (true, Some(base_dir)) = (options.strategy.uses_fuzzy(), base_dir.as_deref()) {
        paths.extend(fuzzy::extract_fuzzy_paths(text, base_dir));
    }
    debug!("Extractors returned {} paths", paths.len());

    if options.dedupe {
        paths = dedupe_preserving_order(paths);
    }
    if let (true, Some(base_dir)) = (options.make_absolute, base_dir.as_deref()) {
        paths = paths
            .iter()
            .map(|path| absolutize(path, base_dir))
            .collect();
    }
    Ok(paths)
}
