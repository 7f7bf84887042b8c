//! Walks a directory tree in parallel and lists the files a predicate accepts.
use crossbeam_channel::unbounded;
use ignore::WalkState;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Walks `base_dir` and returns every file whose relative path `accept` keeps.
///
/// Paths are relative to `base_dir`, use `/` as separator, and come back
/// sorted. Ignored directories are never entered and ignored files are never
/// offered to `accept`. Unreadable entries are skipped; an unreadable or
/// missing `base_dir` yields an empty list.
pub fn discover_files<F>(base_dir: &Path, accept: F) -> Vec<String>
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let walker = build_walker(base_dir);
    let (tx, rx) = unbounded();

    // Shared by every worker thread's visitor.
    let accept = Arc::new(accept);
    let base = base_dir.to_path_buf();

    walker.run(move || {
        let tx = tx.clone();
        let accept = Arc::clone(&accept);
        let base = base.clone();

        Box::new(move |entry_result| {
            if let Some(relative) = process_direntry(entry_result, &base) {
                if (*accept)(&relative) && tx.send(relative).is_err() {
                    log::error!("Receiver dropped, quitting discovery walk.");
                    return WalkState::Quit;
                }
            }
            WalkState::Continue
        })
    });

    // Worker threads finish in any order; sort for stable output.
    let found: BTreeSet<String> = rx.into_iter().collect();
    debug!("Discovery complete. Accepted files: {}", found.len());
    found.into_iter().collect()
}
