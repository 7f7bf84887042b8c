// src/config/builder_logic.rs

use super::{ConfigBuilder, InputSource, OutputDestination};
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if builder.text.is_some() && builder.input_file.is_some() {
        return Err(Error::Config(
            "Cannot use TEXT and --file simultaneously.".to_string(),
        ));
    }
    #[cfg(feature = "clipboard")]
    {
        if builder.paste.unwrap_or(false) {
            if builder.text.is_some() {
                return Err(Error::Config(
                    "Cannot use TEXT and --paste simultaneously.".to_string(),
                ));
            }
            if builder.input_file.is_some() {
                return Err(Error::Config(
                    "Cannot use --file and --paste simultaneously.".to_string(),
                ));
            }
        }
        if builder.output_file.is_some() && builder.copy.unwrap_or(false) {
            return Err(Error::Config(
                "Cannot use --output and --copy simultaneously.".to_string(),
            ));
        }
    }
    Ok(())
}

/// Determines where the input text comes from. Stdin is the fallback.
pub(super) fn determine_input_source(
    text: Option<String>,
    input_file: Option<String>,
    #[cfg(feature = "clipboard")] paste: Option<bool>,
) -> InputSource {
    if let Some(text) = text {
        return InputSource::Text(text);
    }
    if let Some(path) = input_file {
        return InputSource::File(PathBuf::from(path));
    }
    #[cfg(feature = "clipboard")]
    if paste.unwrap_or(false) {
        return InputSource::Clipboard;
    }
    InputSource::Stdin
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(
    output_file: Option<String>,
    #[cfg(feature = "clipboard")] copy: Option<bool>,
) -> OutputDestination {
    if let Some(file_path_str) = output_file {
        OutputDestination::File(PathBuf::from(file_path_str))
    } else {
        #[cfg(feature = "clipboard")]
        if copy.unwrap_or(false) {
            OutputDestination::Clipboard
        } else {
            OutputDestination::Stdout
        }
        #[cfg(not(feature = "clipboard"))]
        {
            OutputDestination::Stdout
        }
    }
}
