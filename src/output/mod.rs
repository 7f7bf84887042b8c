// src/output/mod.rs

use crate::config::OutputFormat;
use crate::errors::Result;
use log::debug;
use std::io::Write;

pub mod writer; // Manages the output destination

/// Renders the path list in the requested format.
///
/// `Lines` writes one path per line (nothing at all for an empty list);
/// `Json` writes a pretty-printed array followed by a newline; `Yaml` writes
/// a block sequence (`[]` when empty).
pub fn format_paths(paths: &[String], format: OutputFormat, writer: &mut dyn Write) -> Result<()> {
    debug!("Writing {} paths as {}", paths.len(), format);
    match format {
        OutputFormat::Lines => {
            for path in paths {
                writeln!(writer, "{}", path)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, paths)?;
            writeln!(writer)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *writer, paths)?,
    }
    writer.flush()?;
    Ok(())
}
