//! Custom TUI widgets.

pub mod callout;
pub mod metric;
pub mod patrol_map;

pub use callout::{CalloutWidget, wrapped_line_count};
pub use metric::MetricWidget;
pub use patrol_map::PatrolMapWidget;
