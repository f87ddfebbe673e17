//! Shared test utilities for the app module.
//!
//! This module provides helper functions and utilities for testing:
//! - `create_test_app` / `create_test_app_in` - Build `App` instances
//! - `render_app_to_terminal` - Renders the app to a `TestBackend`
//! - `buffer_text` - Flattens a rendered buffer for substring assertions
//! - Key event helpers (`char_key`, `key`, `ctrl_key`, `type_text`)

use std::path::Path;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::app::{App, AppOptions, FormField};
use crate::core::ViewMode;

/// A description long enough to wrap over many rows of the draft preview.
pub const LONG_DESCRIPTION: &str = "Two vehicles collided at the Faizabad interchange during the \
    evening rush. Both drivers were unhurt but traffic backed up for several kilometres. \
    Witnesses reported that one car ran a red signal. Statements were recorded and both \
    vehicles were moved to the service lane.";

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for any key code with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for Ctrl + a character.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Types every character of `text` as individual key presses.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Creates an app on the Dashboard whose downloads go to `dir`.
pub fn create_test_app_in(dir: &Path) -> App {
    App::new(AppOptions {
        download_dir: dir.to_path_buf(),
        ..AppOptions::default()
    })
}

/// Creates an app on the Dashboard.
///
/// Downloads go to the system temp dir; tests that download should use
/// [`create_test_app_in`] with their own temp dir instead.
pub fn create_test_app() -> App {
    create_test_app_in(&std::env::temp_dir())
}

/// Creates an app on the Report Assistant with `description` typed into a
/// cleared description field.
pub fn create_filled_report_app(dir: &Path, description: &str) -> App {
    let mut app = create_test_app_in(dir);
    app.select_mode(ViewMode::ReportAssistant);
    app.report_form.set_description("");
    app.report_form.focus = FormField::Description;
    type_text(&mut app, description);
    app
}

/// Renders the app to a `TestBackend` terminal.
///
/// # Errors
///
/// Returns an error if the terminal cannot be created or drawn.
pub fn render_app_to_terminal(app: &App, width: u16, height: u16) -> Result<Terminal<TestBackend>> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| app.render(f))?;
    Ok(terminal)
}

/// Returns the rendered screen as text, one line per row.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Renders at a standard size and returns the screen text.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn render_text(app: &App) -> Result<String> {
    let terminal = render_app_to_terminal(app, 120, 40)?;
    Ok(buffer_text(&terminal))
}
