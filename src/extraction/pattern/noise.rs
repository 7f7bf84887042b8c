// src/extraction/pattern/noise.rs

//! Predicates that reject cleaned candidates which only look like paths.

use super::{extension_of, has_separator};
use crate::constants::{MAX_CANDIDATE_LEN, NON_EXTENSION_SUFFIXES};
use crate::filtering::is_ignored;
use once_cell::sync::Lazy;
use regex::Regex;

/// A rule deciding whether a cleaned candidate is noise.
pub trait NoiseRule: Send + Sync {
    /// Returns true if the candidate should be dropped.
    fn is_noise(&self, candidate: &str) -> bool;
    /// A short name for logs.
    fn name(&self) -> &'static str;
}

static VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[vV]?\d+(?:\.\d+)+(?:[-+][0-9A-Za-z.\-]+)?$").unwrap());
static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .unwrap()
});
static HEX_HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{7,40}$").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@/\\]+@[^\s@/\\]+\.[A-Za-z]{2,}$").unwrap());

struct Oversized;

impl NoiseRule for Oversized {
    fn is_noise(&self, candidate: &str) -> bool {
        candidate.len() > MAX_CANDIDATE_LEN || candidate.contains(['\n', '\r'])
    }
    fn name(&self) -> &'static str {
        "Oversized"
    }
}

/// Nothing but separators and dots, e.g. a quoted `"/"`.
struct BareSeparator;

impl NoiseRule for BareSeparator {
    fn is_noise(&self, candidate: &str) -> bool {
        candidate.chars().all(|c| matches!(c, '/' | '\\' | '.'))
    }
    fn name(&self) -> &'static str {
        "BareSeparator"
    }
}

struct VersionString;

impl NoiseRule for VersionString {
    fn is_noise(&self, candidate: &str) -> bool {
        VERSION.is_match(candidate)
    }
    fn name(&self) -> &'static str {
        "VersionString"
    }
}

struct UuidShape;

impl NoiseRule for UuidShape {
    fn is_noise(&self, candidate: &str) -> bool {
        UUID.is_match(candidate)
    }
    fn name(&self) -> &'static str {
        "UuidShape"
    }
}

struct HexHash;

impl NoiseRule for HexHash {
    fn is_noise(&self, candidate: &str) -> bool {
        HEX_HASH.is_match(candidate)
    }
    fn name(&self) -> &'static str {
        "HexHash"
    }
}

struct EmailAddress;

impl NoiseRule for EmailAddress {
    fn is_noise(&self, candidate: &str) -> bool {
        EMAIL.is_match(candidate)
    }
    fn name(&self) -> &'static str {
        "EmailAddress"
    }
}

/// Separator-less dotted tokens whose last segment is not a plausible
/// extension, e.g. `promise.then` or `example.com`.
struct MemberAccessChain;

impl NoiseRule for MemberAccessChain {
    fn is_noise(&self, candidate: &str) -> bool {
        if !candidate.contains('.') || has_separator(candidate) {
            return false;
        }
        let last = candidate.rsplit('.').next().unwrap_or_default();
        extension_of(candidate).is_none() || NON_EXTENSION_SUFFIXES.contains(&last)
    }
    fn name(&self) -> &'static str {
        "MemberAccessChain"
    }
}

struct ResidualQuotes;

impl NoiseRule for ResidualQuotes {
    fn is_noise(&self, candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match (chars.next(), chars.next_back()) {
            (Some(first), Some(last)) => first == last && matches!(first, '"' | '\'' | '`'),
            _ => false,
        }
    }
    fn name(&self) -> &'static str {
        "ResidualQuotes"
    }
}

/// Extension-less `./x` or `../x/y` specifiers, as written in JS imports.
struct ImportSpecifier;

impl NoiseRule for ImportSpecifier {
    fn is_noise(&self, candidate: &str) -> bool {
        let relative = ["./", "../", ".\\", "..\\"]
            .iter()
            .any(|prefix| candidate.starts_with(prefix));
        if !relative || candidate.contains(' ') || extension_of(candidate).is_some() {
            return false;
        }
        candidate
            .split(['/', '\\'])
            .filter(|s| !s.is_empty())
            .count()
            <= 3
    }
    fn name(&self) -> &'static str {
        "ImportSpecifier"
    }
}

struct IgnoredLocation;

impl NoiseRule for IgnoredLocation {
    fn is_noise(&self, candidate: &str) -> bool {
        is_ignored(candidate)
    }
    fn name(&self) -> &'static str {
        "IgnoredLocation"
    }
}

/// All noise rules, cheapest first.
pub static NOISE_RULES: &[&dyn NoiseRule] = &[
    &Oversized,
    &ResidualQuotes,
    &BareSeparator,
    &VersionString,
    &UuidShape,
    &HexHash,
    &EmailAddress,
    &MemberAccessChain,
    &ImportSpecifier,
    &IgnoredLocation,
];

/// Returns the first rule that classifies the candidate as noise.
pub fn matching_rule(candidate: &str) -> Option<&'static dyn NoiseRule> {
    NOISE_RULES
        .iter()
        .copied()
        .find(|rule| rule.is_noise(candidate))
}
