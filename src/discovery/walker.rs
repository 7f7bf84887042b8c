// src/discovery/walker.rs

use crate::filtering::is_ignored_dir_name;
use ignore::{WalkBuilder, WalkParallel};
use log::debug;
use std::path::Path;

/// Configures and builds the parallel walker over `base_dir`.
///
/// `.gitignore` and hidden-file rules are not consulted: only the fixed
/// ignore policy decides what is skipped. Ignored directories are pruned
/// whole, so their contents are never listed.
pub(super) fn build_walker(base_dir: &Path) -> WalkParallel {
    let mut walker_builder = WalkBuilder::new(base_dir);
    walker_builder.standard_filters(false);
    walker_builder.follow_links(false);
    debug!(
        "Configuring WalkBuilder for '{}': standard_filters disabled.",
        base_dir.display()
    );

    walker_builder.filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let pruned = entry
            .file_name()
            .to_str()
            .is_some_and(is_ignored_dir_name);
        if pruned {
            debug!("Pruning ignored directory: {}", entry.path().display());
        }
        !pruned
    });

    walker_builder.build_parallel()
}
