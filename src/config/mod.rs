//! Defines the `Config` struct and related types for one invocation.
//!
//! Everything parsed and validated from the CLI ends up here, in a structured
//! and type-safe form, before any text is read.

use crate::core_types::ExtractOptions;
use crate::errors::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;
pub mod path_resolve;

/// Where the text to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line.
    Text(String),
    /// Contents of a file.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// The system clipboard's text.
    #[cfg(feature = "clipboard")]
    Clipboard,
}

/// How the resulting path list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Lines,
    /// A pretty-printed JSON array of strings.
    Json,
    /// A YAML sequence of strings.
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(Error::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        })
    }
}

/// Represents the destination for the generated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write output to standard output.
    Stdout,
    /// Write output to the specified file.
    File(PathBuf),
    /// Copy output to the system clipboard.
    #[cfg(feature = "clipboard")]
    Clipboard,
}

/// Output settings: rendering and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub destination: OutputDestination,
}

/// Represents the validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the text comes from.
    pub input: InputSource,
    /// Options handed to the extraction pipeline.
    pub extract: ExtractOptions,
    /// Drop results that do not exist on disk.
    pub verify: bool,
    /// How and where results are written.
    pub output: OutputConfig,
}

impl Config {
    #[doc(hidden)]
    pub fn new_for_test(text: &str) -> Self {
        Self {
            input: InputSource::Text(text.to_string()),
            extract: ExtractOptions::default(),
            verify: false,
            output: OutputConfig {
                format: OutputFormat::Lines,
                destination: OutputDestination::Stdout,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("lines".parse::<OutputFormat>().unwrap(), OutputFormat::Lines);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
        let err = "toml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("Invalid output format 'toml'"));
    }
}
