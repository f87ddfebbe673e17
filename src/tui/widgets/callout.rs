//! Colored message box widget (success, error, warning, info).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::core::fixtures::{Callout, CalloutKind};
use crate::tui::Theme;

/// A bordered, colored message box.
///
/// The first line starts with a kind icon and the optional bold title; the
/// body follows and may contain explicit line breaks.
pub struct CalloutWidget<'a> {
    kind: CalloutKind,
    title: Option<&'a str>,
    body: &'a str,
    theme: &'a Theme,
}

impl<'a> CalloutWidget<'a> {
    /// Creates a widget for a static callout.
    #[must_use]
    pub const fn new(callout: &'a Callout, theme: &'a Theme) -> Self {
        Self {
            kind: callout.kind,
            title: callout.title,
            body: callout.body,
            theme,
        }
    }

    /// Creates a widget for a runtime message.
    #[must_use]
    pub const fn message(kind: CalloutKind, body: &'a str, theme: &'a Theme) -> Self {
        Self {
            kind,
            title: None,
            body,
            theme,
        }
    }

    /// Icon shown before the title.
    const fn icon(&self) -> &'static str {
        match self.kind {
            CalloutKind::Success => "✓",
            CalloutKind::Error => "✗",
            CalloutKind::Warning => "!",
            CalloutKind::Info => "i",
        }
    }

    /// Plain-text lines before wrapping.
    fn logical_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.body.split('\n').map(str::to_string).collect();
        let mut head = format!("{} ", self.icon());
        if let Some(title) = self.title {
            head.push_str(title);
            head.push(' ');
        }
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, &head);
        }
        lines
    }

    /// Height needed to show the whole message at `width`, borders included.
    #[must_use]
    pub fn height(&self, width: u16) -> u16 {
        let inner = usize::from(width.saturating_sub(2)).max(1);
        let rows: usize = self
            .logical_lines()
            .iter()
            .map(|line| wrapped_line_count(line, inner))
            .sum();
        u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
    }
}

/// Counts the rows a greedy word wrap of `text` takes at `width` columns.
#[must_use]
pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 1;
    let mut used = 0;
    for word in text.split(' ') {
        let w = word.width();
        let needed = if used == 0 { w } else { used + 1 + w };
        if needed <= width {
            used = needed;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        // Over-long words start a row and are broken across as many as they
        // need; a word that fills its last row exactly leaves it full.
        let extra = w.div_ceil(width).saturating_sub(1);
        rows += extra;
        used = w - extra * width;
    }
    rows
}

impl Widget for CalloutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.callout_style(self.kind);
        let bold = style.add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = Vec::new();
        for (i, text) in self.body.split('\n').enumerate() {
            if i == 0 {
                let mut spans = vec![Span::styled(format!("{} ", self.icon()), bold)];
                if let Some(title) = self.title {
                    spans.push(Span::styled(format!("{title} "), bold));
                }
                spans.push(Span::styled(text, self.theme.normal_style()));
                lines.push(Line::from(spans));
            } else {
                lines.push(Line::from(Span::styled(text, self.theme.normal_style())));
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().border_style(style))
            .render(area, buf);
    }
}
