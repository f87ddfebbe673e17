//! Domain logic for the dashboard: view modes, report generation and mock data.

pub mod error;
pub mod fixtures;
pub mod report;

use std::fmt;
use std::str::FromStr;

pub use error::{DashboardError, ReportField, ValidationKind};
pub use report::{
    City, GeneratedReport, IncidentReport, IncidentType, ReportDraft, Severity, download_filename,
    generate, generate_from_draft,
};

/// The dashboard modules selectable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Patrol command overview with metrics, map and activity log.
    #[default]
    Dashboard,
    /// Simulated bodycam analysis results.
    RealTimeAnalysis,
    /// Incident report form and generated draft.
    ReportAssistant,
    /// Static ethics statement.
    EthicsSafeguards,
}

impl ViewMode {
    /// Returns the sidebar label for the mode.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::RealTimeAnalysis => "Real-Time Analysis",
            Self::ReportAssistant => "Report Assistant",
            Self::EthicsSafeguards => "Ethics & Safeguards",
        }
    }

    /// Returns the zero-based sidebar position.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::RealTimeAnalysis => 1,
            Self::ReportAssistant => 2,
            Self::EthicsSafeguards => 3,
        }
    }

    /// Returns the mode at a sidebar position, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the next mode in sidebar order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::RealTimeAnalysis,
            Self::RealTimeAnalysis => Self::ReportAssistant,
            Self::ReportAssistant => Self::EthicsSafeguards,
            Self::EthicsSafeguards => Self::Dashboard,
        }
    }

    /// Returns the previous mode in sidebar order, wrapping around.
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::Dashboard => Self::EthicsSafeguards,
            Self::RealTimeAnalysis => Self::Dashboard,
            Self::ReportAssistant => Self::RealTimeAnalysis,
            Self::EthicsSafeguards => Self::ReportAssistant,
        }
    }

    /// Returns all modes in sidebar order.
    #[must_use]
    pub const fn all() -> &'static [ViewMode] {
        &[
            ViewMode::Dashboard,
            ViewMode::RealTimeAnalysis,
            ViewMode::ReportAssistant,
            ViewMode::EthicsSafeguards,
        ]
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    /// Parses a mode from its label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                let labels: Vec<&str> = Self::all().iter().map(ViewMode::label).collect();
                format!("unknown module `{wanted}` (expected one of: {})", labels.join(", "))
            })
    }
}
