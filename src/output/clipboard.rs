// src/output/clipboard.rs
//! Clipboard delivery via arboard.

use crate::error::AppError;

/// Copies content to the system clipboard.
pub fn copy_to_clipboard(content: &str) -> Result<(), AppError> {
    use arboard::Clipboard;

    log::debug!("copying {} characters to clipboard", content.len());

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(content)?;
    Ok(())
}
