//! Clipboard functionality for copying the calculator display.
//!
//! On Linux the copied text is served by this process, so it disappears when
//! the owning [`Clipboard`] is dropped unless a clipboard manager took it
//! over. Keep one [`ClipboardWriter`] alive for as long as the session runs,
//! and use [`copy_and_wait`] right before exiting.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}

/// A clipboard handle kept open across copies.
pub struct ClipboardWriter {
    clipboard: Clipboard,
}

impl ClipboardWriter {
    /// Open the system clipboard.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Access)?;
        Ok(Self { clipboard })
    }

    /// Copy text to the clipboard. The text stays available while `self` lives.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Copy)?;

        tracing::debug!(text, "copied display to clipboard");
        Ok(())
    }
}

/// Copy text and keep serving it until another program replaces it.
///
/// Blocks on Linux, where the process owns the selection. Elsewhere the
/// system keeps the text and this returns right away.
pub fn copy_and_wait(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        tracing::debug!(text, "serving clipboard until replaced");
        clipboard
            .set()
            .wait()
            .text(text.to_string())
            .map_err(ClipboardError::Copy)
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Copy)?;
        tracing::debug!(text, "copied display to clipboard");
        Ok(())
    }
}
