//! Report assistant panel: incident form and generated draft.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use tui_textarea::TextArea;

use super::{RenderContext, render_header};
use crate::app::layout::two_columns;
use crate::app::state::{FormField, StatusMessage, SubmissionState};
use crate::core::fixtures::CalloutKind;
use crate::core::{GeneratedReport, ReportField, Severity};
use crate::tui::Theme;
use crate::tui::widgets::CalloutWidget;

pub(super) const HEADER: &str = "AI Report Assistant";
pub(super) const SUBHEADER: &str = "Automated report generation for Pakistani police procedures";
pub(super) const BUTTON: &str = "Generate AI Report";
pub(super) const SUCCESS: &str = "Report Generated Successfully!";
pub(super) const DRAFT_TITLE: &str = "AI-Generated Report Draft";
const IDLE_HINT: &str = "Fill in the incident details and press Ctrl+G to generate a report.";

/// Renders the form on the left and the submission outcome on the right.
pub(super) fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let [header, subheader, body] = panel_rows(area);
    render_header(frame, header, HEADER, theme);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(SUBHEADER, theme.muted_style()))),
        subheader,
    );

    let [form, output] = two_columns(body);
    render_form(frame, form, ctx);
    render_output(frame, output, ctx);
}

/// Header, subheader and the two-column body.
fn panel_rows(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area)
}

/// Success callout, draft, download action and optional status.
fn draft_rows(area: Rect, has_status: bool) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(2),
        Constraint::Length(if has_status { 3 } else { 0 }),
    ])
    .areas(area)
}

/// Text area of the draft preview when the panel fills `content`.
pub(crate) fn draft_viewport(content: Rect, has_status: bool) -> Rect {
    let [_, _, body] = panel_rows(content);
    let [_, output] = two_columns(body);
    let [_, draft, _, _] = draft_rows(output, has_status);
    Block::bordered().inner(draft)
}

/// Furthest scroll offset that still fills `viewport` with draft rows.
///
/// The preview wraps, so this counts wrapped rows rather than text lines.
pub(crate) fn max_draft_scroll(report: &GeneratedReport, viewport: Rect) -> u16 {
    let rows = draft_text(report).line_count(viewport.width);
    u16::try_from(rows.saturating_sub(usize::from(viewport.height))).unwrap_or(u16::MAX)
}

fn draft_text(report: &GeneratedReport) -> Paragraph<'_> {
    Paragraph::new(report.text.as_str()).wrap(Wrap { trim: false })
}

/// Form fields in tab order, then the submit button.
fn render_form(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let form = ctx.form;
    let focus = form.focus;

    let [officer, incident, location, severity, description, button] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
    ])
    .areas(area);

    render_text_field(
        frame,
        officer,
        &form.officer_id,
        ReportField::OfficerId,
        focus == FormField::OfficerId,
        theme,
    );
    render_select(
        frame,
        incident,
        ReportField::IncidentType,
        form.incident_type.label(),
        focus == FormField::IncidentType,
        theme,
    );
    render_select(
        frame,
        location,
        ReportField::Location,
        form.location.label(),
        focus == FormField::Location,
        theme,
    );
    render_slider(
        frame,
        severity,
        form.severity,
        focus == FormField::Severity,
        theme,
    );
    render_text_field(
        frame,
        description,
        &form.description,
        ReportField::Description,
        focus == FormField::Description,
        theme,
    );

    let focused = focus == FormField::Submit;
    let style = if focused {
        theme.selected_style()
    } else {
        theme.strong_style()
    };
    let button_widget = Paragraph::new(Line::from(Span::styled(format!("[ {BUTTON} ]"), style)))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(theme.field_border_style(focused)));
    frame.render_widget(button_widget, button);
}

/// Field frame titled with the field label.
fn field_block(field: ReportField, focused: bool, theme: &Theme) -> Block<'static> {
    Block::bordered()
        .title(format!(" {} ", field.label()))
        .title_style(if focused {
            theme.highlight_style()
        } else {
            theme.muted_style()
        })
        .border_style(theme.field_border_style(focused))
}

/// Text input; the cursor is only drawn when focused.
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    textarea: &TextArea<'static>,
    field: ReportField,
    focused: bool,
    theme: &Theme,
) {
    let mut textarea = textarea.clone();
    textarea.set_block(field_block(field, focused, theme));
    textarea.set_style(theme.normal_style());
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_style(theme.placeholder_style());
    if !focused {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(&textarea, area);
}

/// Select box showing the current option between arrows.
fn render_select(
    frame: &mut Frame,
    area: Rect,
    field: ReportField,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let arrow_style = if focused {
        theme.highlight_style()
    } else {
        theme.muted_style()
    };
    let line = Line::from(vec![
        Span::styled("‹ ", arrow_style),
        Span::styled(value.to_string(), theme.normal_style()),
        Span::styled(" ›", arrow_style),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(field_block(field, focused, theme)),
        area,
    );
}

/// Severity slider with every level shown and the current one marked.
fn render_slider(
    frame: &mut Frame,
    area: Rect,
    severity: Severity,
    focused: bool,
    theme: &Theme,
) {
    let mut spans = Vec::new();
    for (i, level) in Severity::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", theme.muted_style()));
        }
        if *level == severity {
            spans.push(Span::styled(format!(" {level} "), theme.selected_style()));
        } else {
            spans.push(Span::styled(level.label(), theme.muted_style()));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(ReportField::Severity, focused, theme)),
        area,
    );
}

/// Submission outcome: validation error, generated draft, or a hint.
fn render_output(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    match ctx.submission {
        Some(SubmissionState::Generated { report, scroll }) => {
            render_draft(frame, area, report, *scroll, ctx.status, theme);
        }
        Some(SubmissionState::Rejected(e)) => {
            let message = e.to_string();
            let widget = CalloutWidget::message(CalloutKind::Error, &message, theme);
            let height = widget.height(area.width);
            let [callout, _] =
                Layout::vertical([Constraint::Length(height), Constraint::Fill(1)]).areas(area);
            frame.render_widget(widget, callout);
        }
        None => {
            let [hint, status, _] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Fill(1),
            ])
            .areas(area);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(IDLE_HINT, theme.muted_style())))
                    .wrap(Wrap { trim: true }),
                hint,
            );
            render_status(frame, status, ctx.status, theme);
        }
    }
}

/// Success callout, scrollable draft and the download action.
fn render_draft(
    frame: &mut Frame,
    area: Rect,
    report: &GeneratedReport,
    scroll: u16,
    status: Option<&StatusMessage>,
    theme: &Theme,
) {
    let [success, draft, download, status_area] = draft_rows(area, status.is_some());

    frame.render_widget(
        CalloutWidget::message(CalloutKind::Success, SUCCESS, theme),
        success,
    );

    let block = Block::bordered()
        .title(format!(" {DRAFT_TITLE} "))
        .title_style(theme.header_style())
        .title_bottom(Line::from(vec![
            Span::styled(" [PgUp/PgDn] ", theme.highlight_style()),
            Span::styled("Scroll ", theme.muted_style()),
        ]))
        .border_style(theme.border_style());
    // The key handler may run ahead of the last known size.
    let scroll = scroll.min(max_draft_scroll(report, block.inner(draft)));
    let preview = draft_text(report)
        .style(theme.normal_style())
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(preview, draft);

    let action = vec![
        Line::from(vec![
            Span::styled("[Ctrl+D] ", theme.highlight_style()),
            Span::styled("Download Report", theme.strong_style()),
        ]),
        Line::from(Span::styled(
            format!("  → {}", report.filename),
            theme.muted_style(),
        )),
    ];
    frame.render_widget(Paragraph::new(action), download);

    render_status(frame, status_area, status, theme);
}

/// Download feedback, if any.
fn render_status(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>, theme: &Theme) {
    if let Some(status) = status {
        frame.render_widget(
            CalloutWidget::message(status.kind, &status.text, theme),
            area,
        );
    }
}
