// src/extraction/pattern/reassembly.rs

//! Rejoins names like `Button (new).tsx` that the matcher split at the space.

use super::extension_of;

fn paren_balance(s: &str) -> isize {
    s.chars().fold(0, |acc, c| match c {
        '(' => acc + 1,
        ')' => acc - 1,
        _ => acc,
    })
}

/// The first half of a split: opens a paren it never closes.
fn opens_split(candidate: &str) -> bool {
    (candidate.starts_with('(') || candidate.trim_end().ends_with('('))
        && paren_balance(candidate) > 0
}

/// The second half of a split: closes a paren and ends in an extension.
fn closes_split(candidate: &str) -> bool {
    candidate.contains(')') && extension_of(candidate).is_some()
}

fn merge_split(head: &str, tail: &str) -> String {
    let head = head.trim_end().trim_end_matches('(').trim_end();
    let head = head.strip_prefix('(').unwrap_or(head);
    let variant = tail.trim_start_matches('(');
    format!("{head} ({variant}")
}

/// Merges adjacent candidates that are two halves of one parenthesized name.
///
/// A candidate that opens a paren without closing it is joined with the next
/// candidate when that one closes a paren and ends in an extension. The
/// result has the `dir/name (variant).ext` shape. Everything else passes
/// through unchanged and in order.
///
/// # Examples
///
/// ```
/// use pathscan::reassemble_split_paths;
///
/// let merged = reassemble_split_paths(vec![
///     "(src/components/Button".to_string(),
///     "new).tsx".to_string(),
/// ]);
/// assert_eq!(merged, vec!["src/components/Button (new).tsx"]);
/// ```
pub fn reassemble_split_paths(candidates: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(candidates.len());
    let mut iter = candidates.into_iter().peekable();

    while let Some(current) = iter.next() {
        if opens_split(&current) {
            if let Some(tail) = iter.next_if(|next| closes_split(next)) {
                let joined = merge_split(&current, &tail);
                log::trace!("Reassembled {:?} + {:?} -> {:?}", current, tail, joined);
                merged.push(joined);
                continue;
            }
        }
        merged.push(current);
    }

    merged
}

/// Drops leftovers of a split that found no partner: a trailing ` (` and an
/// unbalanced leading `(`.
pub(crate) fn settle(candidate: &str) -> String {
    let trimmed = candidate.trim_end().trim_end_matches('(').trim_end();
    match trimmed.strip_prefix('(') {
        Some(rest) if paren_balance(trimmed) > 0 => rest.to_string(),
        _ => trimmed.to_string(),
    }
}
