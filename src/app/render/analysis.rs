//! Real-time analysis panel: simulated bodycam detections.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Row, Table},
};

use super::dashboard::render_expander;
use super::{RenderContext, callouts_height, render_callouts, render_header, render_subheader};
use crate::app::layout::two_columns;
use crate::core::fixtures::{
    CAMERA_CAPTION, DATABASE_CHECKS, DETECTIONS, TRANSLATIONS, VERIFICATION_ALERTS,
};
use crate::tui::Theme;

pub(super) const HEADER: &str = "Real-Time AI Analysis - Pakistan Context";
pub(super) const BODYCAM_TITLE: &str = "Live Bodycam Analysis";
pub(super) const DETECTIONS_TITLE: &str = "Detected Objects";
pub(super) const FEATURES_TITLE: &str = "Pakistan-Specific Features";

/// Renders the bodycam feed, detections, verification and local features.
pub(super) fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let area = render_header(frame, area, HEADER, theme);
    let [left, right] = two_columns(area);

    render_bodycam(frame, left, ctx.panels.detections_expanded, theme);
    render_verification(frame, right, theme);
}

/// Camera placeholder and the detections expander.
fn render_bodycam(frame: &mut Frame, area: Rect, expanded: bool, theme: &Theme) {
    let area = render_subheader(frame, area, BODYCAM_TITLE, theme);

    let table_height = if expanded {
        u16::try_from(DETECTIONS.len()).unwrap_or(u16::MAX) + 3
    } else {
        0
    };
    let [camera, expander, table] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(table_height),
    ])
    .areas(area);

    let feed = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("● REC", theme.error_style())),
        Line::from(Span::styled("[ bodycam feed ]", theme.muted_style())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::bordered()
            .title_bottom(Line::from(Span::styled(
                format!(" {CAMERA_CAPTION} "),
                theme.muted_style(),
            )))
            .border_style(theme.border_style()),
    );
    frame.render_widget(feed, camera);

    render_expander(frame, expander, DETECTIONS_TITLE, expanded, theme);
    if expanded {
        render_detections(frame, table, theme);
    }
}

/// Object / confidence / status table.
fn render_detections(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rows = DETECTIONS.iter().map(|d| {
        Row::new(vec![
            d.object.to_string(),
            format!("{}%", d.confidence),
            d.status.to_string(),
        ])
        .style(theme.normal_style())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .header(Row::new(["Object", "Confidence", "Status"]).style(theme.table_header_style()))
    .column_spacing(1)
    .block(Block::bordered().border_style(theme.border_style()));

    frame.render_widget(table, area);
}

/// Verification callouts followed by the local features.
fn render_verification(frame: &mut Frame, area: Rect, theme: &Theme) {
    let width = area.width;
    let [alerts, features_header, translation, database] = Layout::vertical([
        Constraint::Length(callouts_height(&VERIFICATION_ALERTS, width, theme)),
        Constraint::Length(2),
        Constraint::Length(callouts_height(&TRANSLATIONS, width, theme) + 1),
        Constraint::Min(0),
    ])
    .areas(area);

    render_callouts(frame, alerts, &VERIFICATION_ALERTS, theme);

    let [_, features_header] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(features_header);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            FEATURES_TITLE,
            theme.header_style(),
        ))),
        features_header,
    );

    let translation = render_subheader(frame, translation, "Language Translation", theme);
    render_callouts(frame, translation, &TRANSLATIONS, theme);

    let database = render_subheader(frame, database, "Local Database Check", theme);
    render_callouts(frame, database, &DATABASE_CHECKS, theme);
}
