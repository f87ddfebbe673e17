//! Ethics and safeguards panel.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs, Wrap},
};

use super::{RenderContext, render_header, render_subheader};
use crate::core::fixtures::{ETHICS_NOTICE, ETHICS_SECTIONS, EthicsBody, EthicsSection};
use crate::tui::Theme;
use crate::tui::widgets::CalloutWidget;

pub(super) const HEADER: &str = "Ethical Safeguards - Pakistan Implementation";

/// Renders the notice, the tab bar and the selected tab.
pub(super) fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let theme = ctx.theme;
    let area = render_header(frame, area, HEADER, theme);

    let notice = CalloutWidget::new(&ETHICS_NOTICE, theme);
    let notice_height = notice.height(area.width);
    let [notice_area, tabs_area, body] = Layout::vertical([
        Constraint::Length(notice_height),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(notice, notice_area);

    let selected = ctx.panels.ethics_tab.min(ETHICS_SECTIONS.len() - 1);
    let tabs = Tabs::new(ETHICS_SECTIONS.iter().map(|s| s.tab))
        .select(selected)
        .style(theme.muted_style())
        .highlight_style(theme.selected_style())
        .divider(Span::styled("│", theme.border_style()))
        .block(
            Block::bordered()
                .title_bottom(Line::from(vec![
                    Span::styled(" [←/→] ", theme.highlight_style()),
                    Span::styled("Switch tab ", theme.muted_style()),
                ]))
                .border_style(theme.border_style()),
        );
    frame.render_widget(tabs, tabs_area);

    render_section(frame, body, &ETHICS_SECTIONS[selected], theme);
}

/// Heading plus bullet list or notice of one tab.
fn render_section(frame: &mut Frame, area: Rect, section: &EthicsSection, theme: &Theme) {
    let [_, area] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
    let area = render_subheader(frame, area, section.heading, theme);

    match section.body {
        EthicsBody::Points(points) => {
            let lines: Vec<Line> = points
                .iter()
                .map(|p| {
                    Line::from(vec![
                        Span::styled("• ", theme.highlight_style()),
                        Span::styled(p.lead, theme.strong_style()),
                        Span::raw(" "),
                        Span::styled(p.text, theme.normal_style()),
                    ])
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
        }
        EthicsBody::Notice(ref notice) => {
            let widget = CalloutWidget::new(notice, theme);
            let height = widget.height(area.width);
            let [callout, _] =
                Layout::vertical([Constraint::Length(height), Constraint::Fill(1)]).areas(area);
            frame.render_widget(widget, callout);
        }
    }
}
