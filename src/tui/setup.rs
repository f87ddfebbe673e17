//! Terminal setup and configuration utilities.
//!
//! Enables bracketed paste so multi-line text pasted into the report
//! description arrives as a single event instead of a burst of key presses.

use std::io::stdout;

use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

/// Guard that disables bracketed paste mode on drop.
///
/// Cleanup also runs if the application panics.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let bracketed_paste_enabled = match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => {
                tracing::debug!("bracketed paste mode enabled");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not enable bracketed paste mode");
                false
            }
        };

        Self {
            bracketed_paste_enabled,
        }
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
