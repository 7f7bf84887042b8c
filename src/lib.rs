//! `pathscan` is a library and command-line tool that finds file path
//! references in free-form text: compiler diagnostics, stack traces, logs,
//! diffs, chat transcripts.
//!
//! Two strategies are available and can be combined:
//! 1.  **Pattern**: a composed regular expression recognizes path-shaped
//!     substrings (absolute, relative, drive-letter, network-share, quoted,
//!     bare `name.ext` tokens and well-known manifest names), which are then
//!     cleaned, filtered for noise and reassembled when a name with spaces was
//!     split apart.
//! 2.  **Fuzzy**: the base directory is walked and every file whose basename
//!     appears in the text as a whole word is reported.
//!
//! Generated and vendored locations (`node_modules`, `target`, lockfiles, ...)
//! are never reported by either strategy.
//!
//! # Example: Library Usage
//!
//! ```
//! use pathscan::{extract, verify, ExtractOptions, Strategy};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. A project with two source files.
//! let temp_dir = tempdir().unwrap();
//! fs::create_dir(temp_dir.path().join("src")).unwrap();
//! fs::write(temp_dir.path().join("src/engine.ts"), "").unwrap();
//! fs::write(temp_dir.path().join("src/core.ts"), "").unwrap();
//!
//! // 2. Find what a log line mentions.
//! let text = "TypeError in src/core.ts:12:7 (called from engine.ts)";
//! let options = ExtractOptions::new()
//!     .strategy(Strategy::Both)
//!     .base_dir(temp_dir.path());
//! let paths = extract(text, &options).unwrap();
//! assert_eq!(paths, vec!["src/core.ts", "engine.ts", "src/engine.ts"]);
//!
//! // 3. Keep only what exists on disk.
//! let existing = verify(&paths, temp_dir.path());
//! assert_eq!(existing, vec!["src/core.ts", "src/engine.ts"]);
//! ```

// Make modules public if they contain public types used in the API
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod extraction;
pub mod filtering;
pub mod input;
pub mod output;
pub mod verify;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, InputSource, OutputDestination, OutputFormat};
pub use core_types::{ExtractOptions, Strategy};
pub use errors::{Error, Result};
pub use extraction::fuzzy::extract_fuzzy_paths;
pub use extraction::pattern::{clean_candidate, extract_pattern_paths, reassemble_split_paths};
pub use filtering::is_ignored;

use crate::config::path_resolve::resolve_base_dir;
use log::debug;
use std::path::Path;

/// Extracts path references from `text`.
///
/// Runs the strategy selected in `options`, then deduplicates (unless
/// disabled) and absolutizes (if requested), in that order. An empty or
/// path-free text yields an empty list.
///
/// # Errors
/// Fails only if a base directory is needed and the working directory cannot
/// be determined.
pub fn extract(text: &str, options: &ExtractOptions) -> Result<Vec<String>> {
    extraction::extract_paths(text, options)
}

/// Keeps the paths that exist, preserving their order.
///
/// Relative paths are resolved against `base_dir`. A failed probe counts as
/// "does not exist"; this never fails as a whole.
pub fn verify(paths: &[String], base_dir: &Path) -> Vec<String> {
    verify::verify_paths(paths, base_dir)
}

/// Executes the full pipeline for the CLI: read input, extract, optionally
/// verify, and write the result.
///
/// # Errors
/// Returns an error if the input cannot be read, the base directory cannot be
/// resolved, or the output cannot be written.
pub fn run(config: &Config) -> Result<()> {
    let text = input::read_input(&config.input)?;
    debug!("Scanning {} bytes of input", text.len());

    let mut paths = extract(&text, &config.extract)?;
    if config.verify {
        let base_dir = resolve_base_dir(config.extract.base_dir.as_deref())?;
        paths = verify(&paths, &base_dir);
    }

    let setup = output::writer::setup_output_writer(&config.output)?;
    let mut writer = setup.writer;
    output::format_paths(&paths, config.output.format, &mut writer)?;
    output::writer::finalize_output(writer, setup.clipboard_buffer, &config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_lines_to_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let out = temp.path().join("out.txt");
        let config = ConfigBuilder::new()
            .text("see src/core.ts and again src/core.ts, plus README.md")
            .output_file(out.to_string_lossy())
            .build()?;

        run(&config)?;
        assert_eq!(fs::read_to_string(&out)?, "src/core.ts\nREADME.md\n");
        Ok(())
    }

    #[test]
    fn test_run_with_verify_and_json() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("present.rs"), "")?;
        let out = temp.path().join("out.json");
        let config = ConfigBuilder::new()
            .text("present.rs and absent.rs")
            .base_dir(temp.path().to_string_lossy())
            .exists(true)
            .format("json")
            .output_file(out.to_string_lossy())
            .build()?;

        run(&config)?;
        let written: Vec<String> = serde_json::from_str(&fs::read_to_string(&out)?)?;
        assert_eq!(written, vec!["present.rs"]);
        Ok(())
    }

    #[test]
    fn test_run_empty_result_is_success() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let out = temp.path().join("out.txt");
        let config = ConfigBuilder::new()
            .text("nothing to see here")
            .output_file(out.to_string_lossy())
            .build()?;

        run(&config)?;
        assert_eq!(fs::read_to_string(&out)?, "");
        Ok(())
    }
}
