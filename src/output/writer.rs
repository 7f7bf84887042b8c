// src/output/writer.rs

//! Manages the output destination (stdout, file, or clipboard).
//!
//! Clipboard output is collected in memory and copied once everything has
//! been written.

use crate::config::{OutputConfig, OutputDestination};
use crate::errors::{io_error_with_path, Result};
#[cfg(feature = "clipboard")]
use crate::errors::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::{Arc, Mutex};

/// Holds the configured output writer and an optional buffer for clipboard operations.
pub struct OutputWriterSetup {
    /// A boxed `Write` trait object that can be written to.
    pub writer: Box<dyn Write + Send>,
    /// Holds the buffer only if the destination is Clipboard, so its content
    /// can be retrieved after all writes are complete.
    pub clipboard_buffer: Option<Arc<Mutex<Vec<u8>>>>,
}

/// Creates the writer for the configured destination.
///
/// # Errors
/// Returns an error if the output file cannot be created.
pub fn setup_output_writer(output: &OutputConfig) -> Result<OutputWriterSetup> {
    #[cfg_attr(not(feature = "clipboard"), allow(unused_mut))]
    let mut clipboard_buffer = None;
    let writer: Box<dyn Write + Send> = match &output.destination {
        OutputDestination::Stdout => Box::new(io::stdout()),
        OutputDestination::File(path) => {
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file))
        }
        #[cfg(feature = "clipboard")]
        OutputDestination::Clipboard => {
            let buffer = Arc::new(Mutex::new(Vec::<u8>::new()));
            clipboard_buffer = Some(buffer.clone());
            Box::new(ArcMutexVecWriter(buffer))
        }
    };
    Ok(OutputWriterSetup {
        writer,
        clipboard_buffer,
    })
}

/// Flushes the writer and, for the clipboard destination, copies the buffer.
///
/// # Errors
/// Returns an error if flushing or the clipboard operation fails.
#[cfg_attr(not(feature = "clipboard"), allow(unused_variables))]
pub fn finalize_output(
    mut writer: Box<dyn Write + Send>, // Take ownership to ensure drop/flush
    clipboard_buffer: Option<Arc<Mutex<Vec<u8>>>>,
    output: &OutputConfig,
) -> Result<()> {
    writer.flush()?;

    #[cfg(feature = "clipboard")]
    {
        if output.destination == OutputDestination::Clipboard {
            let Some(buffer_arc) = clipboard_buffer else {
                return Err(Error::Clipboard(
                    "Clipboard destination specified, but no buffer found during finalization."
                        .to_string(),
                ));
            };
            let content = {
                let buffer = buffer_arc.lock().map_err(|e| {
                    Error::Clipboard(format!("Failed to lock clipboard buffer mutex: {}", e))
                })?;
                String::from_utf8_lossy(&buffer).into_owned()
            };
            copy_to_clipboard(&content)?;
        }
    }
    Ok(())
}

#[cfg(feature = "clipboard")]
fn copy_to_clipboard(content: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(content)
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    Ok(())
}

// Write cannot be implemented directly on the foreign Arc<Mutex<Vec<u8>>>.
#[cfg(feature = "clipboard")]
#[derive(Debug, Clone)]
struct ArcMutexVecWriter(Arc<Mutex<Vec<u8>>>);

#[cfg(feature = "clipboard")]
impl Write for ArcMutexVecWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self
            .0
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {}", e)))?;
        buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
