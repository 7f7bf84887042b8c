//! Defines the option types consumed by the extraction pipeline.
//!
//! `ExtractOptions` is supplied per call and never mutated by the pipeline.

use crate::errors::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which extraction mechanism(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Scan the text with the composed path alternation.
    #[default]
    Pattern,
    /// Walk the base directory and report files whose basename appears in the text.
    Fuzzy,
    /// Run both, pattern results first.
    Both,
}

impl Strategy {
    /// Whether the pattern extractor should run.
    pub fn uses_pattern(self) -> bool {
        matches!(self, Strategy::Pattern | Strategy::Both)
    }

    /// Whether the fuzzy extractor should run.
    pub fn uses_fuzzy(self) -> bool {
        matches!(self, Strategy::Fuzzy | Strategy::Both)
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" => Ok(Strategy::Pattern),
            "fuzzy" => Ok(Strategy::Fuzzy),
            "both" => Ok(Strategy::Both),
            _ => Err(Error::InvalidStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Pattern => "pattern",
            Strategy::Fuzzy => "fuzzy",
            Strategy::Both => "both",
        };
        f.write_str(name)
    }
}

/// Per-call options for [`crate::extract`].
///
/// # Examples
///
/// ```
/// use pathscan::{ExtractOptions, Strategy};
///
/// let options = ExtractOptions::new()
///     .strategy(Strategy::Both)
///     .base_dir("/tmp/project")
///     .make_absolute(true);
///
/// assert_eq!(options.strategy, Strategy::Both);
/// assert!(options.dedupe); // on by default
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Which extractor(s) to run.
    pub strategy: Strategy,
    /// Reference directory for the fuzzy walk and for absolutization.
    /// `None` means the process working directory.
    pub base_dir: Option<PathBuf>,
    /// Join relative results onto the base directory (after dedupe).
    pub make_absolute: bool,
    /// Drop exact-duplicate strings, keeping the first occurrence.
    pub dedupe: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            base_dir: None,
            make_absolute: false,
            dedupe: true,
        }
    }
}

impl ExtractOptions {
    /// Creates options with the defaults: pattern strategy, working directory, dedupe on.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn make_absolute(mut self, make_absolute: bool) -> Self {
        self.make_absolute = make_absolute;
        self
    }

    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }
}
