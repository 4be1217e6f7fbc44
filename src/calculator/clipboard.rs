//! Clipboard support for copying the display.
//!
//! On Linux the clipboard contents are owned by the process that set them, so
//! a short-lived process has to keep serving them until another client takes
//! over the selection or `hold` elapses.

use crate::error::Result;
use arboard::Clipboard;
use std::time::Duration;
use tracing::debug;

/// Copy text to the system clipboard.
#[cfg(target_os = "linux")]
pub fn copy_to_clipboard(text: &str, hold: Duration) -> Result<()> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    let mut clipboard = Clipboard::new()?;
    debug!(text, ?hold, "serving display on clipboard");
    clipboard
        .set()
        .wait_until(Instant::now() + hold)
        .text(text.to_string())?;
    Ok(())
}

/// Copy text to the system clipboard.
#[cfg(not(target_os = "linux"))]
pub fn copy_to_clipboard(text: &str, _hold: Duration) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    debug!(text, "copied display to clipboard");
    Ok(())
}
