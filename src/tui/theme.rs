//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

use crate::core::fixtures::{CalloutKind, PatrolStatus};

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent/highlight color.
    pub accent: Color,
    /// Success color (green).
    pub success: Color,
    /// Warning color (yellow).
    pub warning: Color,
    /// Error color (red).
    pub error: Color,
    /// Informational color (blue).
    pub info: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused form field.
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::LightBlue,
            muted: Color::DarkGray,
            border: Color::Gray,
            focus: Color::Cyan,
        }
    }
}

impl Theme {
    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for bold body text.
    #[must_use]
    pub fn strong_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for success messages.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for warning messages.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for informational messages.
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style for a form field, brighter when focused.
    #[must_use]
    pub fn field_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            self.border_style()
        }
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected sidebar entry or active tab.
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for placeholder text (visible on both light and dark backgrounds).
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    /// Style for table header rows.
    #[must_use]
    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for a metric delta: green when rising, red when falling.
    #[must_use]
    pub fn delta_style(&self, negative: bool) -> Style {
        if negative {
            self.error_style()
        } else {
            self.success_style()
        }
    }

    /// Style for a callout box of the given kind.
    #[must_use]
    pub fn callout_style(&self, kind: CalloutKind) -> Style {
        match kind {
            CalloutKind::Success => self.success_style(),
            CalloutKind::Error => self.error_style(),
            CalloutKind::Warning => self.warning_style(),
            CalloutKind::Info => self.info_style(),
        }
    }

    /// Marker color for a patrol status.
    #[must_use]
    pub fn patrol_color(&self, status: PatrolStatus) -> Color {
        let (r, g, b) = status.rgb();
        Color::Rgb(r, g, b)
    }
}
