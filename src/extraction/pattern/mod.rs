// src/extraction/pattern/mod.rs

//! The pattern extractor: finds path-shaped substrings in free text.
//!
//! Candidates flow through four stages: the composed matcher, the cleanup
//! chain, the noise rules, and split-name reassembly.

mod cleanup;
mod matcher;
mod noise;
mod reassembly;

pub use cleanup::{clean_candidate, CleanupStage, CLEANUP_CHAIN};
pub use matcher::{find_candidates, Candidate, MatchRule};
pub use noise::{matching_rule, NoiseRule, NOISE_RULES};
pub use reassembly::reassemble_split_paths;

use crate::constants::MAX_EXTENSION_LEN;
use crate::filtering::is_ignored;
use log::trace;

/// Whether the string contains a `/` or `\`.
pub(crate) fn has_separator(s: &str) -> bool {
    s.contains(['/', '\\'])
}

/// The extension of the final segment, if it has one of 1 to
/// `MAX_EXTENSION_LEN` ASCII alphanumerics. A leading dot (`.gitignore`)
/// does not start an extension.
pub(crate) fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let dot = name.rfind('.').filter(|&idx| idx > 0)?;
    let ext = &name[dot + 1..];
    let plausible = (1..=MAX_EXTENSION_LEN).contains(&ext.len())
        && ext.bytes().all(|b| b.is_ascii_alphanumeric());
    plausible.then_some(ext)
}

/// Extracts path-like substrings from `text`, in order of appearance.
///
/// Never fails; text without paths yields an empty list. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use pathscan::extract_pattern_paths;
///
/// let paths = extract_pattern_paths("error in src/main.rs:4:5 (see README.md)");
/// assert_eq!(paths, vec!["src/main.rs", "README.md"]);
/// ```
#[tracing::instrument(level = "debug", skip(text), fields(text_len = text.len()))]
pub fn extract_pattern_paths(text: &str) -> Vec<String> {
    let raw = find_candidates(text);
    trace!("Matcher produced {} raw candidates", raw.len());

    let cleaned: Vec<String> = raw
        .iter()
        .filter_map(|candidate| {
            let cleaned = clean_candidate(candidate.text);
            if cleaned.is_empty() {
                return None;
            }
            if let Some(rule) = matching_rule(&cleaned) {
                trace!(
                    "Dropping {:?} ({:?} match at byte {}): {}",
                    cleaned,
                    candidate.rule,
                    candidate.start,
                    rule.name()
                );
                return None;
            }
            Some(cleaned)
        })
        .collect();

    reassemble_split_paths(cleaned)
        .iter()
        .map(|candidate| reassembly::settle(candidate))
        .filter(|path| !path.is_empty() && !is_ignored(path))
        .collect()
}
