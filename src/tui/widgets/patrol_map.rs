//! Live patrol map drawn on a braille canvas.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Widget,
        canvas::{Canvas, Circle, Map, MapResolution, Points},
    },
};

use crate::core::fixtures::{PatrolPoint, PatrolStatus};
use crate::tui::Theme;

/// Longitude range shown on the map.
pub const LON_BOUNDS: [f64; 2] = [60.0, 78.0];
/// Latitude range shown on the map.
pub const LAT_BOUNDS: [f64; 2] = [23.0, 37.5];

/// Degrees of radius per unit of marker size.
const DEGREES_PER_SIZE: f64 = 0.025;

/// Plots patrol points over a world outline clipped to Pakistan.
pub struct PatrolMapWidget<'a> {
    points: &'a [PatrolPoint],
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> PatrolMapWidget<'a> {
    #[must_use]
    pub const fn new(points: &'a [PatrolPoint], title: &'a str, theme: &'a Theme) -> Self {
        Self {
            points,
            title,
            theme,
        }
    }

    /// Legend line listing each status with its marker color.
    fn legend(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for status in PatrolStatus::all() {
            spans.push(Span::styled("● ", self.theme.patrol_color(*status)));
            spans.push(Span::styled(
                format!("{}  ", status.label()),
                self.theme.muted_style(),
            ));
        }
        Line::from(spans)
    }
}

/// Radius in degrees for a marker of the given size.
#[must_use]
pub fn marker_radius(size: u16) -> f64 {
    f64::from(size) * DEGREES_PER_SIZE
}

impl Widget for PatrolMapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ", self.title),
                self.theme.header_style(),
            ))
            .title_bottom(self.legend())
            .border_style(self.theme.border_style());

        let points = self.points;
        let theme = self.theme;

        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds(LON_BOUNDS)
            .y_bounds(LAT_BOUNDS)
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: theme.muted,
                    resolution: MapResolution::High,
                });
                ctx.layer();

                for point in points {
                    let color = theme.patrol_color(point.unit.status);
                    ctx.draw(&Circle {
                        x: point.longitude,
                        y: point.latitude,
                        radius: marker_radius(point.size),
                        color,
                    });
                    ctx.draw(&Points {
                        coords: &[(point.longitude, point.latitude)],
                        color,
                    });
                }

                // One label per city; Karachi has several units stacked together.
                let mut labelled: Vec<&str> = Vec::new();
                for point in points {
                    if labelled.contains(&point.unit.city) {
                        continue;
                    }
                    labelled.push(point.unit.city);
                    ctx.print(
                        point.longitude + 0.4,
                        point.latitude,
                        Span::styled(point.unit.city, theme.normal_style()),
                    );
                }
            })
            .render(area, buf);
    }
}
