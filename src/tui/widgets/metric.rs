//! Headline metric card.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::core::fixtures::Metric;
use crate::tui::Theme;

/// A bordered card showing a metric label, its value and the delta.
pub struct MetricWidget<'a> {
    metric: &'a Metric,
    theme: &'a Theme,
}

impl<'a> MetricWidget<'a> {
    /// Card height including borders.
    pub const HEIGHT: u16 = 4;

    #[must_use]
    pub const fn new(metric: &'a Metric, theme: &'a Theme) -> Self {
        Self { metric, theme }
    }

    /// Delta text with a direction arrow.
    fn delta_text(&self) -> String {
        let delta = self.metric.delta;
        if self.metric.is_negative() {
            format!("↓ {}", delta.trim_start_matches('-'))
        } else {
            format!("↑ {delta}")
        }
    }
}

impl Widget for MetricWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.metric.label),
                self.theme.muted_style(),
            ))
            .border_style(self.theme.border_style());

        let lines = vec![
            Line::from(Span::styled(self.metric.value, self.theme.strong_style())),
            Line::from(Span::styled(
                self.delta_text(),
                self.theme.delta_style(self.metric.is_negative()),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::METRICS;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn rising_delta_has_up_arrow() {
        let theme = Theme::default();
        assert_eq!(MetricWidget::new(&METRICS[0], &theme).delta_text(), "↑ 3");
    }

    #[test]
    fn falling_delta_has_down_arrow() {
        let theme = Theme::default();
        assert_eq!(MetricWidget::new(&METRICS[1], &theme).delta_text(), "↓ 5%");
    }

    #[test]
    fn renders_label_value_and_delta() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 26, MetricWidget::HEIGHT);
        let mut buf = Buffer::empty(area);

        MetricWidget::new(&METRICS[2], &theme).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("Avg Response Time"));
        assert!(row_text(&buf, 1).contains("8.4 min"));
        assert!(row_text(&buf, 2).contains("↑ 1.2 min"));
    }
}
