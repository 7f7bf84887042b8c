// src/cli.rs

use clap::Parser;

/// Finds file path references in free-form text.
///
/// pathscan reads compiler diagnostics, stack traces, logs, diffs or chat
/// transcripts and prints the file paths they mention. The pattern strategy
/// recognizes path-shaped substrings; the fuzzy strategy walks the base
/// directory and reports files whose name appears in the text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Text to scan. If omitted, text is read from --file, --paste, or stdin.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    // --- Input Options ---
    /// Read the text to scan from a file.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<String>,

    #[cfg(feature = "clipboard")]
    /// Read the text to scan from the system clipboard.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue, conflicts_with_all = ["text", "file"])]
    pub paste: bool,

    // --- Extraction Options ---
    /// Extraction strategy: pattern, fuzzy, or both.
    #[arg(short = 's', long, value_name = "STRATEGY", default_value = "pattern")]
    pub strategy: String,

    /// Base directory for the fuzzy walk, absolute paths and --exists.
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub base_dir: String,

    /// Print absolute paths, joined onto the base directory.
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub absolute: bool,

    /// Keep duplicate results.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_dedupe: bool,

    /// Only print paths that exist relative to the base directory.
    #[arg(short = 'e', long, action = clap::ArgAction::SetTrue)]
    pub exists: bool,

    // --- Output Options ---
    /// Output format: lines, json or yaml.
    #[arg(short = 'F', long, value_name = "FORMAT", default_value = "lines")]
    pub format: String,

    /// Write the results to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    #[cfg(feature = "clipboard")]
    /// Copy the results to the system clipboard instead of printing them.
    #[arg(short = 'c', long, action = clap::ArgAction::SetTrue, conflicts_with = "output_file")]
    pub copy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["pathscan", "see src/main.rs"]);
        assert_eq!(cli.text.as_deref(), Some("see src/main.rs"));
        assert_eq!(cli.strategy, "pattern");
        assert_eq!(cli.base_dir, ".");
        assert_eq!(cli.format, "lines");
        assert!(!cli.absolute && !cli.no_dedupe && !cli.exists);
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = Cli::try_parse_from(["pathscan", "text", "--file", "in.txt"]);
        assert!(result.is_err());
    }

    #[cfg(feature = "clipboard")]
    #[test]
    fn test_copy_conflicts_with_output() {
        let result = Cli::try_parse_from(["pathscan", "text", "-c", "-o", "out.txt"]);
        assert!(result.is_err());
    }
}
