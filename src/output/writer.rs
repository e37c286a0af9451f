// src/output/writer.rs

//! Delivers a rendered report to stdout, a file, or the clipboard.

use crate::config::OutputDestination;
use crate::errors::Result;
#[cfg(feature = "clipboard")]
use crate::errors::Error;
use std::fs;
use std::io::{self, Write};

/// Writes the rendered report to its destination.
///
/// # Errors
/// Returns an error if stdout or the file cannot be written, or if the
/// clipboard is unavailable.
pub fn deliver(content: &[u8], destination: &OutputDestination) -> Result<()> {
    match destination {
        OutputDestination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content)?;
            handle.flush()?;
        }
        OutputDestination::File(path) => {
            fs::write(path, content).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
            })?;
            log::info!("Report written to {}", path.display());
        }
        #[cfg(feature = "clipboard")]
        OutputDestination::Clipboard => {
            copy_to_clipboard(&String::from_utf8_lossy(content))?;
            log::info!("Report copied to clipboard");
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
