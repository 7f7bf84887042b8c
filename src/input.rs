// src/input.rs

//! Resolves the text to scan from its configured source.

use crate::config::InputSource;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::fs;
use std::io::{self, Read};

/// Reads the input text.
///
/// Non-UTF-8 bytes are replaced rather than rejected, since logs and
/// terminal captures are frequently not clean UTF-8.
///
/// # Errors
/// Returns `Error::NoInput` when the source is stdin but stdin is an
/// interactive terminal, and I/O or clipboard errors otherwise.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => {
            let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
            debug!("Read {} bytes from '{}'", bytes.len(), path.display());
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        InputSource::Stdin => {
            if atty::is(atty::Stream::Stdin) {
                return Err(Error::NoInput);
            }
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            debug!("Read {} bytes from stdin", bytes.len());
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        #[cfg(feature = "clipboard")]
        InputSource::Clipboard => read_clipboard(),
    }
}

#[cfg(feature = "clipboard")]
fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| Error::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_text_source() -> Result<()> {
        let text = read_input(&InputSource::Text("see a/b.rs".to_string()))?;
        assert_eq!(text, "see a/b.rs");
        Ok(())
    }

    #[test]
    fn test_read_file_source_lossy() -> anyhow::Result<()> {
        let file = NamedTempFile::new()?;
        fs::write(file.path(), b"src/main.rs \xFF end")?;
        let text = read_input(&InputSource::File(file.path().to_path_buf()))?;
        assert!(text.starts_with("src/main.rs "));
        assert!(text.ends_with(" end"));
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let path = PathBuf::from("definitely_missing_input_for_pathscan.txt");
        let err = read_input(&InputSource::File(path)).unwrap_err();
        assert!(matches!(err, Error::Io { ref path, .. } if path.contains("definitely_missing")));
    }
}
