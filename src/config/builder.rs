// src/config/builder.rs

use super::builder_logic::{
    determine_input_source, determine_output_destination, validate_builder_options,
};
use super::{Config, OutputConfig, OutputFormat};
use crate::cli::Cli;
use crate::core_types::{ExtractOptions, Strategy};
use anyhow::Result;
use std::path::PathBuf;

/// A builder for creating a `Config` instance programmatically.
///
/// Unset options fall back to the CLI defaults: pattern strategy, base
/// directory `.`, dedupe on, lines to stdout, input from stdin.
///
/// # Examples
///
/// ```
/// use pathscan::config::{ConfigBuilder, InputSource, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .text("see src/main.rs")
///     .strategy("both")
///     .format("json")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.input, InputSource::Text("see src/main.rs".to_string()));
/// assert_eq!(config.output.format, OutputFormat::Json);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) text: Option<String>,
    pub(super) input_file: Option<String>,
    #[cfg(feature = "clipboard")]
    pub(super) paste: Option<bool>,
    pub(super) strategy: Option<String>,
    pub(super) base_dir: Option<String>,
    pub(super) absolute: Option<bool>,
    pub(super) dedupe: Option<bool>,
    pub(super) exists: Option<bool>,
    pub(super) format: Option<String>,
    pub(super) output_file: Option<String>,
    #[cfg(feature = "clipboard")]
    pub(super) copy: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            text: cli.text,
            input_file: cli.file,
            #[cfg(feature = "clipboard")]
            paste: Some(cli.paste),
            strategy: Some(cli.strategy),
            base_dir: Some(cli.base_dir),
            absolute: Some(cli.absolute),
            dedupe: Some(!cli.no_dedupe),
            exists: Some(cli.exists),
            format: Some(cli.format),
            output_file: cli.output_file,
            #[cfg(feature = "clipboard")]
            copy: Some(cli.copy),
        }
    }

    /// Scans the given text instead of reading input.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Reads the text to scan from a file.
    pub fn input_file(mut self, path: impl Into<String>) -> Self {
        self.input_file = Some(path.into());
        self
    }

    /// Reads the text to scan from the clipboard.
    #[cfg(feature = "clipboard")]
    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = Some(paste);
        self
    }

    /// Sets the strategy by name (`pattern`, `fuzzy`, `both`).
    pub fn strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = Some(absolute);
        self
    }

    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = Some(dedupe);
        self
    }

    /// Keeps only results that exist under the base directory.
    pub fn exists(mut self, exists: bool) -> Self {
        self.exists = Some(exists);
        self
    }

    /// Sets the output format by name (`lines`, `json`).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Copies the results to the clipboard instead of printing them.
    #[cfg(feature = "clipboard")]
    pub fn copy(mut self, copy: bool) -> Self {
        self.copy = Some(copy);
        self
    }

    /// Builds the final `Config` from the builder's settings.
    ///
    /// # Errors
    /// Returns an error on conflicting options or on an unknown strategy or
    /// format name.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let strategy: Strategy = self.strategy.as_deref().unwrap_or("pattern").parse()?;
        let format: OutputFormat = self.format.as_deref().unwrap_or("lines").parse()?;

        let extract = ExtractOptions {
            strategy,
            base_dir: Some(PathBuf::from(self.base_dir.as_deref().unwrap_or("."))),
            make_absolute: self.absolute.unwrap_or(false),
            dedupe: self.dedupe.unwrap_or(true),
        };

        let input = determine_input_source(
            self.text,
            self.input_file,
            #[cfg(feature = "clipboard")]
            self.paste,
        );
        let destination = determine_output_destination(
            self.output_file,
            #[cfg(feature = "clipboard")]
            self.copy,
        );

        Ok(Config {
            input,
            extract,
            verify: self.exists.unwrap_or(false),
            output: OutputConfig {
                format,
                destination,
            },
        })
    }
}
