// src/extraction/pattern/cleanup.rs

//! Normalizes raw matches into canonical path strings.
//!
//! The stages run in the order of [`CLEANUP_CHAIN`]; each takes the output of
//! the previous one. Running the whole chain on its own output changes
//! nothing.

use super::extension_of;
use crate::constants::DOMAIN_TLDS;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// A single normalization step applied to every candidate.
pub trait CleanupStage: Send + Sync {
    /// Transforms the candidate.
    fn apply(&self, candidate: &str) -> String;
    /// A short name for logs.
    fn name(&self) -> &'static str;
}

const QUOTES: [char; 3] = ['"', '\'', '`'];
const LEADING_STRIP: &[char] = &['[', '{', '<', '"', '\'', '`'];
const TRAILING_STRIP: &[char] = &[']', '}', '>', '"', '\'', '`', ',', ';', ':', '.', '!', '?'];

// `:line:col` plus whatever non-path junk trails it ("file.rs:3:)" or "file.rs:3,").
static LOCATOR_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?::\d+)+[^\w\\/]*$").unwrap());
static BACKSLASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\{2,}").unwrap());
static URL_SCHEME_HOST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^/\\]*").unwrap());
static DOMAIN_PREFIX: Lazy<Regex> = Lazy::new(|| {
    let tlds = DOMAIN_TLDS.join("|");
    Regex::new(&format!(r"^/*(?:[A-Za-z0-9-]+\.)+(?:{tlds})(/.*)$")).unwrap()
});

/// Removes a trailing `:line[:col]` locator.
struct TrimLocator;

impl CleanupStage for TrimLocator {
    fn apply(&self, candidate: &str) -> String {
        LOCATOR_SUFFIX.replace(candidate, "").into_owned()
    }
    fn name(&self) -> &'static str {
        "TrimLocator"
    }
}

/// Truncates at the first `?` or `#`.
struct TrimQueryFragment;

impl CleanupStage for TrimQueryFragment {
    fn apply(&self, candidate: &str) -> String {
        match candidate.find(['?', '#']) {
            Some(idx) => candidate[..idx].to_string(),
            None => candidate.to_string(),
        }
    }
    fn name(&self) -> &'static str {
        "TrimQueryFragment"
    }
}

/// Unwraps a quoted or fully parenthesized span, otherwise strips stray
/// wrapper and punctuation characters from both ends.
struct UnwrapOrStrip;

impl CleanupStage for UnwrapOrStrip {
    fn apply(&self, candidate: &str) -> String {
        // Wrappers nest (`"[src/a.ts]"`), so peel until nothing changes.
        let mut current = candidate;
        loop {
            let trimmed = current.trim();
            let next = match unwrap_quotes(trimmed).or_else(|| unwrap_parens(trimmed)) {
                Some(inner) => inner,
                None => strip_edges(trimmed),
            };
            if next == current {
                return next.to_string();
            }
            current = next;
        }
    }
    fn name(&self) -> &'static str {
        "UnwrapOrStrip"
    }
}

fn unwrap_quotes(s: &str) -> Option<&str> {
    let first = s.chars().next()?;
    if s.len() >= 2 && QUOTES.contains(&first) && s.ends_with(first) {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Returns the inside of `s` when its first `(` closes exactly at its last byte.
fn unwrap_parens(s: &str) -> Option<&str> {
    if !(s.starts_with('(') && s.ends_with(')')) || s.len() < 2 {
        return None;
    }
    let mut depth = 0usize;
    for (idx, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (idx == s.len() - 1).then(|| &s[1..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_edges(s: &str) -> &str {
    let mut out = s.trim().trim_start_matches(LEADING_STRIP);
    loop {
        if let Some(rest) = out.strip_suffix(TRAILING_STRIP) {
            out = rest;
        } else if out.ends_with(')') && out.matches(')').count() > out.matches('(').count() {
            out = &out[..out.len() - 1];
        } else {
            return out;
        }
    }
}

/// Collapses runs of backslashes, keeping a leading `\\` share marker.
struct NormalizeSlashes;

impl CleanupStage for NormalizeSlashes {
    fn apply(&self, candidate: &str) -> String {
        let leading = candidate.len() - candidate.trim_start_matches('\\').len();
        if leading >= 2 {
            let rest = BACKSLASH_RUN.replace_all(&candidate[leading..], NoExpand(r"\"));
            format!(r"\\{rest}")
        } else {
            BACKSLASH_RUN
                .replace_all(candidate, NoExpand(r"\"))
                .into_owned()
        }
    }
    fn name(&self) -> &'static str {
        "NormalizeSlashes"
    }
}

/// Turns `//a/b/c.ext` into `/a/b/c.ext`; a short `//host/share` stays a share.
struct NormalizeDoubleSlash;

impl CleanupStage for NormalizeDoubleSlash {
    fn apply(&self, candidate: &str) -> String {
        if !candidate.starts_with("//") {
            return candidate.to_string();
        }
        let rest = candidate.trim_start_matches('/');
        let segments = rest.split('/').filter(|s| !s.is_empty()).count();
        if extension_of(rest).is_some() || segments > 2 {
            format!("/{rest}")
        } else {
            format!("//{rest}")
        }
    }
    fn name(&self) -> &'static str {
        "NormalizeDoubleSlash"
    }
}

/// Removes `scheme://host` from URLs.
struct StripUrlScheme;

impl CleanupStage for StripUrlScheme {
    fn apply(&self, candidate: &str) -> String {
        URL_SCHEME_HOST.replace(candidate, "").into_owned()
    }
    fn name(&self) -> &'static str {
        "StripUrlScheme"
    }
}

/// Removes leading `domain.tld` segments, keeping the `/path` after them.
struct StripDomainPrefix;

impl CleanupStage for StripDomainPrefix {
    fn apply(&self, candidate: &str) -> String {
        let mut current = candidate.to_string();
        while let Some(rest) = DOMAIN_PREFIX
            .captures(&current)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
        {
            if rest == current {
                break;
            }
            current = rest;
        }
        current
    }
    fn name(&self) -> &'static str {
        "StripDomainPrefix"
    }
}

/// The ordered cleanup chain.
pub static CLEANUP_CHAIN: &[&dyn CleanupStage] = &[
    &TrimLocator,
    &TrimQueryFragment,
    &UnwrapOrStrip,
    &NormalizeSlashes,
    &NormalizeDoubleSlash,
    &StripUrlScheme,
    &StripDomainPrefix,
];

/// Runs every cleanup stage over a raw candidate.
pub fn clean_candidate(raw: &str) -> String {
    CLEANUP_CHAIN.iter().fold(raw.to_string(), |acc, stage| {
        let next = stage.apply(&acc);
        if next != acc {
            log::trace!("{}: {:?} -> {:?}", stage.name(), acc, next);
        }
        next
    })
}
