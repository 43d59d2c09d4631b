//! Clipboard integration.

use crate::error::Result;
use arboard::Clipboard;

/// Put a figure description (or any text) on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()?.set_text(text.to_owned())?;
    Ok(())
}
