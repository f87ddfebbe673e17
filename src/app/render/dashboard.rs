//! Patrol command dashboard panel.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Row, Table},
};

use super::{RenderContext, render_header, render_subheader};
use crate::core::fixtures::{ACTIVITY_LOG, METRICS, PATROL_UNITS, patrol_points};
use crate::tui::Theme;
use crate::tui::widgets::{MetricWidget, PatrolMapWidget};

pub(super) const HEADER: &str = "Patrol Command Dashboard - Pakistan";
pub(super) const MAP_TITLE: &str = "Live Patrol Map - Pakistan";
pub(super) const DETAILS_TITLE: &str = "View Patrol Details";
pub(super) const ACTIVITY_TITLE: &str = "Recent AI-Assisted Activities in Pakistan";

/// Renders the dashboard: metrics, patrol map, patrol details, activity log.
pub(super) fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let area = render_header(frame, area, HEADER, theme);

    // Header + borders + one row per unit.
    let details_height = if ctx.panels.patrol_details_expanded {
        u16::try_from(PATROL_UNITS.len()).unwrap_or(u16::MAX) + 3
    } else {
        0
    };
    let activity_height = u16::try_from(ACTIVITY_LOG.len()).unwrap_or(u16::MAX) + 4;

    let [metrics, map, expander, details, activity] = Layout::vertical([
        Constraint::Length(MetricWidget::HEIGHT),
        Constraint::Min(6),
        Constraint::Length(1),
        Constraint::Length(details_height),
        Constraint::Length(activity_height),
    ])
    .areas(area);

    render_metrics(frame, metrics, theme);

    let points = patrol_points();
    frame.render_widget(PatrolMapWidget::new(&points, MAP_TITLE, theme), map);

    render_expander(
        frame,
        expander,
        DETAILS_TITLE,
        ctx.panels.patrol_details_expanded,
        theme,
    );
    if ctx.panels.patrol_details_expanded {
        render_patrol_details(frame, details, theme);
    }

    render_activity(frame, activity, theme);
}

/// Four metric cards side by side.
fn render_metrics(frame: &mut Frame, area: Rect, theme: &Theme) {
    let columns = Layout::horizontal([Constraint::Fill(1); 4])
        .spacing(1)
        .split(area);
    for (metric, column) in METRICS.iter().zip(columns.iter()) {
        frame.render_widget(MetricWidget::new(metric, theme), *column);
    }
}

/// Collapsible section toggle line.
pub(super) fn render_expander(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    expanded: bool,
    theme: &Theme,
) {
    let arrow = if expanded { "▾ " } else { "▸ " };
    let line = Line::from(vec![
        Span::styled(arrow, theme.highlight_style()),
        Span::styled(title, theme.strong_style()),
        Span::styled("  [e]", theme.muted_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Table of every patrol unit with its coordinates.
fn render_patrol_details(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rows = PATROL_UNITS.iter().map(|unit| {
        Row::new(vec![
            Line::from(unit.city),
            Line::from(Span::styled(
                unit.status.label(),
                theme.patrol_color(unit.status),
            )),
            Line::from(format!("{:.4}", unit.latitude)),
            Line::from(format!("{:.4}", unit.longitude)),
            Line::from(unit.status.color_code()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(["City", "Status", "Latitude", "Longitude", "Color"])
            .style(theme.table_header_style()),
    )
    .column_spacing(2)
    .block(Block::bordered().border_style(theme.border_style()));

    frame.render_widget(table, area);
}

/// Recent activity log.
fn render_activity(frame: &mut Frame, area: Rect, theme: &Theme) {
    let area = render_subheader(frame, area, ACTIVITY_TITLE, theme);

    let rows = ACTIVITY_LOG.iter().map(|entry| {
        Row::new([
            entry.time,
            entry.city,
            entry.activity,
            entry.result,
            entry.officer,
        ])
        .style(theme.normal_style())
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(["Time", "City", "Activity", "Result", "Officer"])
            .style(theme.table_header_style()),
    )
    .column_spacing(1)
    .block(Block::bordered().border_style(theme.border_style()));

    frame.render_widget(table, area);
}
