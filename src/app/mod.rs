//! Main application state and logic.
//!
//! This module contains the `App` struct and its implementation, organized
//! into submodules:
//! - `events` - Key and paste handling
//! - `layout` - Shell layout calculation
//! - `render` - The view registry and panel renderers
//! - `state` - Widget state structures
//!
//! ## Render passes
//!
//! Key events mutate widget state (sidebar selection, form inputs, expanders).
//! Each frame then builds an immutable [`RenderContext`] from that state,
//! resolves the selected [`ViewMode`] through the [`ViewRegistry`] and calls
//! the panel renderer once. Renderers keep nothing between frames.

pub mod events;
pub mod layout;
pub mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{ShellLayout, calculate_shell_layout};
pub use render::{RenderContext, RenderFn, ViewRegistry};
pub use state::{FormField, PanelState, ReportFormState, StatusMessage, SubmissionState};

use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::core::ViewMode;
use crate::core::report::DEFAULT_OFFICER_ID;
use crate::tui::Theme;

/// Startup options resolved from configuration and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// Module shown first.
    pub initial_mode: ViewMode,
    /// Officer ID pre-filled in the report form.
    pub officer_id: String,
    /// Directory that downloaded reports are written to.
    pub download_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            initial_mode: ViewMode::default(),
            officer_id: DEFAULT_OFFICER_ID.to_string(),
            download_dir: PathBuf::from("."),
        }
    }
}

/// Main application state.
pub struct App {
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Module selected in the sidebar.
    pub(crate) mode: ViewMode,
    /// Mode-to-renderer table.
    pub(crate) registry: ViewRegistry,
    /// Report form widgets.
    pub(crate) report_form: ReportFormState,
    /// Expanders and tabs of the static panels.
    pub(crate) panels: PanelState,
    /// Outcome of the last submission; cleared on edit or navigation.
    pub(crate) submission: Option<SubmissionState>,
    /// Feedback from the last download attempt.
    pub(crate) status: Option<StatusMessage>,
    /// Where downloaded reports are written.
    pub(crate) download_dir: PathBuf,
    /// Shell regions of the last drawn frame; empty until the first draw.
    pub(crate) layout: ShellLayout,
    /// Should quit flag.
    should_quit: bool,
}

impl App {
    /// Creates the application with the given startup options.
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        Self::with_registry(options, ViewRegistry::new())
    }

    /// Creates the application with a custom view registry.
    #[must_use]
    pub fn with_registry(options: AppOptions, registry: ViewRegistry) -> Self {
        tracing::info!(
            module = %options.initial_mode,
            download_dir = %options.download_dir.display(),
            "dashboard started"
        );
        Self {
            theme: Theme::default(),
            mode: options.initial_mode,
            registry,
            report_form: ReportFormState::new(&options.officer_id),
            panels: PanelState::default(),
            submission: None,
            status: None,
            download_dir: options.download_dir,
            layout: ShellLayout::default(),
            should_quit: false,
        }
    }

    /// Returns the selected module.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Returns the outcome of the last submission, if still current.
    #[must_use]
    pub fn submission(&self) -> Option<&SubmissionState> {
        self.submission.as_ref()
    }

    /// Returns the last download feedback, if any.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Returns true when the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests the event loop to stop.
    pub fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.should_quit = true;
    }

    /// Records the shell regions for the terminal size.
    ///
    /// Called before each draw so key handlers can bound scrolling by what
    /// is actually on screen.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout = calculate_shell_layout(terminal_area);
    }

    /// Builds the immutable inputs for one render pass.
    #[must_use]
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            theme: &self.theme,
            form: &self.report_form,
            submission: self.submission.as_ref(),
            panels: &self.panels,
            status: self.status.as_ref(),
        }
    }
}
