// src/extraction/pattern/matcher.rs

//! The composed path alternation.
//!
//! Each [`MatchRule`] contributes one named group to a single regex. The
//! `regex` crate uses leftmost-first semantics, so at any text position the
//! earliest rule in [`MatchRule::ALL`] that matches wins. Context conditions
//! the engine cannot express (it has no look-around) are checked afterwards
//! by [`MatchRule::verdict`].

use crate::constants::MANIFEST_FILENAMES;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// One path segment character.
const SEG: &str = r"[\w.@+~%-]";
/// A path separator; an escaped (doubled) backslash counts as one.
const SEP: &str = r"(?:\\\\|[\\/])";
/// Optional `:line:col` suffix.
const LOCATOR: &str = r"(?::\d+)*";

/// One alternative of the path alternation, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// `"..."`, `'...'` or `` `...` `` containing a separator.
    Quoted,
    /// `(dir/name (variant).ext)`.
    Parenthesized,
    /// `\\server\share` or `//host/path`, optionally behind a URL scheme.
    NetworkShare,
    /// `C:\dir\file`.
    DriveLetter,
    /// `/dir/file`.
    AbsolutePath,
    /// `dir/file`, `./file`, `../dir/file`.
    RelativePath,
    /// A relative path introduced by whitespace (indented diagnostic lines).
    IndentedRelativePath,
    /// `name.ext` with no separator.
    DottedToken,
    /// `Makefile`, `Dockerfile`, ...
    ManifestName,
}

/// What to do with a raw match after its context has been inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// Keep the candidate and resume scanning after the match.
    Accept,
    /// Drop the match and resume scanning one character after its start.
    RetryNext,
    /// Drop the match and resume scanning after it.
    Skip,
}

/// A raw substring suspected of denoting a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    /// The matched text, borrowed from the scanned input.
    pub text: &'t str,
    /// Byte offset of `text` in the scanned input.
    pub start: usize,
    /// The alternative that produced the match.
    pub rule: MatchRule,
}

fn relative_path_pattern() -> String {
    format!(
        r"(?:(?:\.{{1,2}}{SEP})+{SEG}+(?:{SEP}{SEG}+)*|{SEG}+(?:{SEP}{SEG}+)+){LOCATOR}(?: \()?"
    )
}

impl MatchRule {
    /// Every rule, highest priority first.
    pub const ALL: [MatchRule; 9] = [
        MatchRule::Quoted,
        MatchRule::Parenthesized,
        MatchRule::NetworkShare,
        MatchRule::DriveLetter,
        MatchRule::AbsolutePath,
        MatchRule::RelativePath,
        MatchRule::IndentedRelativePath,
        MatchRule::DottedToken,
        MatchRule::ManifestName,
    ];

    /// The capture group holding this rule's candidate text.
    pub fn group_name(self) -> &'static str {
        match self {
            MatchRule::Quoted => "quoted",
            MatchRule::Parenthesized => "paren",
            MatchRule::NetworkShare => "share",
            MatchRule::DriveLetter => "drive",
            MatchRule::AbsolutePath => "absolute",
            MatchRule::RelativePath => "relative",
            MatchRule::IndentedRelativePath => "indented",
            MatchRule::DottedToken => "dotted",
            MatchRule::ManifestName => "manifest",
        }
    }

    /// The regex fragment for this rule, including its named group.
    fn fragment(self) -> String {
        let name = self.group_name();
        let body = match self {
            MatchRule::Quoted => {
                r#""[^"\n]*[\\/][^"\n]*"|'[^'\n]*[\\/][^'\n]*'|`[^`\n]*[\\/][^`\n]*`"#.to_string()
            }
            MatchRule::Parenthesized => {
                r"\([^()\n]*[\\/][^()\n]*\([^()\n]*\)[^()\n]*\.[A-Za-z0-9]+\)".to_string()
            }
            MatchRule::NetworkShare => format!(
                r"(?:[A-Za-z][A-Za-z0-9+.\-]*:)?(?:\\\\|//+){SEG}+(?:{SEP}{SEG}+)*{LOCATOR}"
            ),
            MatchRule::DriveLetter => format!(r"[A-Za-z]:{SEP}{SEG}+(?:{SEP}{SEG}+)*{LOCATOR}"),
            MatchRule::AbsolutePath => format!(r"[\\/]{SEG}+(?:{SEP}{SEG}+)*{LOCATOR}"),
            MatchRule::RelativePath | MatchRule::IndentedRelativePath => relative_path_pattern(),
            MatchRule::DottedToken => {
                format!(r"\.?[\w-]+\)?(?:\.[\w-]+)*\.[A-Za-z0-9]+{LOCATOR}")
            }
            MatchRule::ManifestName => {
                let names: Vec<String> = MANIFEST_FILENAMES.iter().map(|n| regex::escape(n)).collect();
                format!(r"\b(?:{})\b", names.join("|"))
            }
        };
        match self {
            // The leading whitespace is part of the match but not of the candidate.
            MatchRule::IndentedRelativePath => format!(r"\s+(?P<{name}>{body})"),
            _ => format!(r"(?P<{name}>{body})"),
        }
    }

    /// Inspects the text around a match of this rule.
    pub(crate) fn verdict(self, text: &str, start: usize, end: usize) -> Verdict {
        let before = text[..start].chars().next_back();
        match self {
            // An apostrophe inside a word ("it's") is not an opening quote; a
            // drive letter glued to a word ("abc:/x") is not a drive.
            MatchRule::Quoted | MatchRule::DriveLetter
                if before.is_some_and(char::is_alphanumeric) =>
            {
                Verdict::RetryNext
            }
            MatchRule::DottedToken => {
                let after = text[end..].chars().next();
                if before == Some('@') || after == Some('@') || ends_with_scheme(&text[..start]) {
                    Verdict::Skip
                } else {
                    Verdict::Accept
                }
            }
            _ => Verdict::Accept,
        }
    }
}

static COMPOSED: Lazy<Regex> = Lazy::new(|| {
    let alternation: Vec<String> = MatchRule::ALL.iter().map(|r| r.fragment()).collect();
    Regex::new(&alternation.join("|")).expect("path alternation must compile")
});

static SCHEME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*:(?://)?$").unwrap());

/// Whether `prefix` ends in `scheme:` or `scheme://`.
fn ends_with_scheme(prefix: &str) -> bool {
    // Only the tail can matter; avoid rescanning the whole prefix per match.
    let tail_start = prefix
        .char_indices()
        .rev()
        .take(32)
        .last()
        .map_or(0, |(i, _)| i);
    SCHEME_SUFFIX.is_match(&prefix[tail_start..])
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    pos + text[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Scans `text` left to right and returns every accepted raw match.
pub fn find_candidates(text: &str) -> Vec<Candidate<'_>> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = COMPOSED.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        let Some((rule, m)) = MatchRule::ALL
            .iter()
            .find_map(|rule| caps.name(rule.group_name()).map(|m| (*rule, m)))
        else {
            break;
        };

        match rule.verdict(text, m.start(), m.end()) {
            Verdict::Accept => {
                trace!("{:?} matched {:?} at {}", rule, m.as_str(), m.start());
                candidates.push(Candidate {
                    text: m.as_str(),
                    start: m.start(),
                    rule,
                });
                pos = whole.end();
            }
            Verdict::RetryNext => pos = next_char_boundary(text, whole.start()),
            Verdict::Skip => pos = whole.end(),
        }
        // All fragments are non-empty, but never spin on a zero-width match.
        if whole.end() == whole.start() {
            pos = next_char_boundary(text, whole.start());
        }
    }

    candidates
}
