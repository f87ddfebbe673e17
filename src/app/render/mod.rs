//! Rendering for the App.
//!
//! The shell (title, sidebar, footer) is drawn by [`App::render`]. The content
//! area is handed to the renderer that the [`ViewRegistry`] maps the selected
//! module to:
//! - **Dashboard**: metrics, patrol map, patrol details, activity log
//! - **Real-Time Analysis**: simulated detections and verification results
//! - **Report Assistant**: incident form and generated draft
//! - **Ethics & Safeguards**: tabbed policy statement

mod analysis;
mod dashboard;
mod ethics;
mod registry;
mod report;

pub use registry::{RenderFn, ViewRegistry};
pub(crate) use report::{draft_viewport, max_draft_scroll};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::App;
use super::layout::calculate_shell_layout;
use super::state::{PanelState, ReportFormState, StatusMessage, SubmissionState};
use crate::core::ViewMode;
use crate::core::fixtures::{Callout, CalloutKind};
use crate::tui::Theme;
use crate::tui::widgets::CalloutWidget;

/// Immutable inputs to one render pass.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub form: &'a ReportFormState,
    pub submission: Option<&'a SubmissionState>,
    pub panels: &'a PanelState,
    pub status: Option<&'a StatusMessage>,
}

pub(crate) const TITLE: &str = "A.I.O. - Augmented Intelligence Operator";
pub(crate) const SUBTITLE: &str = "AI-Powered Policing Assistant Demo - Pakistan";
pub(crate) const CAPTION: &str =
    "A.I.O. - Augmented Intelligence Operator | Pakistan Police Department Simulation";

impl App {
    /// Renders one full pass: shell, then the selected panel.
    ///
    /// A module without a renderer is a programming error; its message is
    /// shown in place of the panel.
    pub fn render(&self, frame: &mut Frame) {
        let layout = calculate_shell_layout(frame.area());

        self.render_title(frame, layout.title);
        self.render_sidebar(frame, layout.sidebar);

        let ctx = self.render_context();
        match self.registry.resolve(self.mode) {
            Ok(render) => render(frame, layout.content, &ctx),
            Err(e) => {
                tracing::error!(error = %e, "no renderer for module");
                let message = e.to_string();
                frame.render_widget(
                    CalloutWidget::message(CalloutKind::Error, &message, &self.theme),
                    layout.content,
                );
            }
        }

        self.render_footer(frame, layout.footer);
    }

    /// Renders the title and subtitle.
    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(format!(" {TITLE}"), self.theme.header_style())),
            Line::from(Span::styled(
                format!(" {SUBTITLE}"),
                self.theme.strong_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Renders the module selection sidebar.
    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::with_capacity(ViewMode::all().len() * 2);
        for mode in ViewMode::all() {
            let key = format!("F{} ", mode.index() + 1);
            let line = if *mode == self.mode {
                Line::from(vec![
                    Span::styled("› ", self.theme.highlight_style()),
                    Span::styled(key, self.theme.highlight_style()),
                    Span::styled(mode.label(), self.theme.selected_style()),
                ])
            } else {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(key, self.theme.muted_style()),
                    Span::styled(mode.label(), self.theme.normal_style()),
                ])
            };
            lines.push(line);
            lines.push(Line::from(""));
        }

        let block = Block::bordered()
            .title(" Choose Module ")
            .title_style(self.theme.header_style())
            .border_style(self.theme.border_style());

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Renders the caption and the key hints for the current module.
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = |key: &'static str, action: &'static str| {
            [
                Span::styled(key, self.theme.highlight_style()),
                Span::styled(action, self.theme.muted_style()),
            ]
        };

        let mut spans = vec![Span::raw(" ")];
        spans.extend(hint("[F1-F4] ", "Module  "));
        match self.mode {
            ViewMode::ReportAssistant => {
                spans.extend(hint("[Tab] ", "Next field  "));
                spans.extend(hint("[←/→] ", "Change  "));
                spans.extend(hint("[Ctrl+G] ", "Generate  "));
                spans.extend(hint("[Ctrl+D] ", "Download  "));
                spans.extend(hint("[Ctrl+C] ", "Quit"));
            }
            ViewMode::EthicsSafeguards => {
                spans.extend(hint("[↑/↓] ", "Navigate  "));
                spans.extend(hint("[←/→] ", "Tab  "));
                spans.extend(hint("[q] ", "Quit"));
            }
            ViewMode::Dashboard | ViewMode::RealTimeAnalysis => {
                spans.extend(hint("[↑/↓] ", "Navigate  "));
                spans.extend(hint("[e] ", "Expand  "));
                spans.extend(hint("[q] ", "Quit"));
            }
        }

        let lines = vec![
            Line::from(Span::styled(format!(" {CAPTION}"), self.theme.muted_style())),
            Line::from(spans),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Renders a panel header line and returns the area below it.
pub(crate) fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
    let [header, rest] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, theme.header_style()))),
        header,
    );
    rest
}

/// Renders a bold subheader line and returns the area below it.
pub(crate) fn render_subheader(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    theme: &Theme,
) -> Rect {
    let [header, rest] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(title, theme.strong_style()))),
        header,
    );
    rest
}

/// Stacks callouts top to bottom, each at its wrapped height.
///
/// Callouts that no longer fit are skipped.
pub(crate) fn render_callouts(frame: &mut Frame, area: Rect, callouts: &[Callout], theme: &Theme) {
    let mut y = area.y;
    let bottom = area.y.saturating_add(area.height);
    for callout in callouts {
        let widget = CalloutWidget::new(callout, theme);
        let height = widget.height(area.width);
        if y.saturating_add(height) > bottom {
            break;
        }
        frame.render_widget(widget, Rect::new(area.x, y, area.width, height));
        y += height;
    }
}

/// Height of a stack of callouts at the given width.
pub(crate) fn callouts_height(callouts: &[Callout], width: u16, theme: &Theme) -> u16 {
    callouts
        .iter()
        .map(|c| CalloutWidget::new(c, theme).height(width))
        .sum()
}
