//! Layout calculation helpers for the TUI.
//!
//! [`calculate_shell_layout`] splits the screen into the app shell regions.
//! Panel renderers lay out their own content inside [`ShellLayout::content`].

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the module sidebar, borders included.
pub const SIDEBAR_WIDTH: u16 = 26;

/// Regions of the application shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellLayout {
    /// Title and subtitle (2 lines).
    pub title: Rect,
    /// Module selection sidebar.
    pub sidebar: Rect,
    /// Area handed to the selected panel renderer.
    pub content: Rect,
    /// Caption and key hints (2 lines).
    pub footer: Rect,
}

/// Vertical split: title, body, footer.
const SHELL_ROWS: [Constraint; 3] = [
    Constraint::Length(2), // Title + subtitle
    Constraint::Min(5),    // Sidebar + content
    Constraint::Length(2), // Caption + key hints
];

/// Calculates the shell layout for the whole frame.
#[must_use]
pub fn calculate_shell_layout(area: Rect) -> ShellLayout {
    let [title, body, footer] = Layout::vertical(SHELL_ROWS).areas(area);
    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)]).areas(body);

    ShellLayout {
        title,
        sidebar,
        content,
        footer,
    }
}

/// Splits an area into two equal columns with a one-cell gap.
#[must_use]
pub fn two_columns(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
        .spacing(1)
        .areas(area)
}
