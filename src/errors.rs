//! Defines application-specific error types.
//!
//! The extraction core itself almost never fails: unreadable directories and
//! failed existence probes degrade to "contributes nothing". The variants here
//! cover the outer layers (input, configuration, output, clipboard) plus the
//! fail-fast parsing of strategy and format names.

use thiserror::Error;

/// Errors used throughout `pathscan`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring while reading an input file or writing an output file.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error reading from standard input or writing to standard output.
    #[error("I/O error on standard stream: {0}")]
    Stream(#[from] std::io::Error),

    // --- Parsing Errors ---
    /// An extraction strategy name that is not one of `pattern`, `fuzzy` or `both`.
    #[error("Invalid strategy '{value}': expected one of 'pattern', 'fuzzy', 'both'")]
    InvalidStrategy {
        /// The rejected value.
        value: String,
    },

    /// An output format name that is not one of `lines`, `json` or `yaml`.
    #[error("Invalid output format '{value}': expected one of 'lines', 'json', 'yaml'")]
    InvalidFormat {
        /// The rejected value.
        value: String,
    },

    // --- Configuration Errors ---
    /// Invalid combination of options.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // --- Clipboard Errors ---
    /// Error related to clipboard operations (reading or copying).
    #[error("Clipboard error: {0}")]
    Clipboard(String), // arboard::Error is flattened to a message

    /// No input text was supplied and stdin is an interactive terminal.
    #[error("No input text provided. Pass TEXT, --file, --paste, or pipe text on stdin.")]
    NoInput,

    /// Serializing the result list failed.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Serializing the result list as YAML failed.
    #[error("Failed to serialize YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/input.log");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = io_error_with_path(source_error, &path);

        match err {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/input.log"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_invalid_strategy_message_lists_choices() {
        let err = Error::InvalidStrategy {
            value: "regex".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'regex'"));
        assert!(msg.contains("pattern"));
        assert!(msg.contains("fuzzy"));
        assert!(msg.contains("both"));
    }
}
