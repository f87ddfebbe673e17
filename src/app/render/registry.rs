//! Mapping from view modes to panel renderers.

use ratatui::{Frame, layout::Rect};

use super::{RenderContext, analysis, dashboard, ethics, report};
use crate::core::{DashboardError, ViewMode};

/// A panel renderer: draws one module into the content area.
pub type RenderFn = fn(&mut Frame, Rect, &RenderContext);

/// Renderer for each module.
static VIEWS: [(ViewMode, RenderFn); 4] = [
    (ViewMode::Dashboard, dashboard::render),
    (ViewMode::RealTimeAnalysis, analysis::render),
    (ViewMode::ReportAssistant, report::render),
    (ViewMode::EthicsSafeguards, ethics::render),
];

/// Resolves a [`ViewMode`] to its renderer.
#[derive(Clone, Copy)]
pub struct ViewRegistry {
    views: &'static [(ViewMode, RenderFn)],
}

impl ViewRegistry {
    /// Creates the registry with every built-in panel.
    #[must_use]
    pub fn new() -> Self {
        Self { views: &VIEWS }
    }

    /// Creates a registry from an explicit table.
    #[must_use]
    pub const fn with_views(views: &'static [(ViewMode, RenderFn)]) -> Self {
        Self { views }
    }

    /// Looks up the renderer for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Configuration`] if no renderer is registered.
    pub fn resolve(&self, mode: ViewMode) -> Result<RenderFn, DashboardError> {
        self.views
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|(_, render)| *render)
            .ok_or(DashboardError::Configuration { mode })
    }

    /// Returns the modes that have no renderer.
    #[must_use]
    pub fn missing(&self) -> Vec<ViewMode> {
        ViewMode::all()
            .iter()
            .copied()
            .filter(|mode| self.resolve(*mode).is_err())
            .collect()
    }
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}
