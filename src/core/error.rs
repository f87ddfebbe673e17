//! Domain error types.

use std::fmt;

use thiserror::Error;

use super::ViewMode;

/// Errors raised by the dashboard's domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A view mode has no registered renderer.
    #[error("no renderer registered for module `{mode}`")]
    Configuration { mode: ViewMode },
    /// A report field failed validation.
    #[error("{field}: {kind}")]
    Validation {
        field: ReportField,
        kind: ValidationKind,
    },
}

impl DashboardError {
    /// Shorthand for a validation error.
    #[must_use]
    pub const fn validation(field: ReportField, kind: ValidationKind) -> Self {
        Self::Validation { field, kind }
    }
}

/// Identifies a field of the incident report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    OfficerId,
    IncidentType,
    Location,
    Severity,
    Description,
}

impl ReportField {
    /// Returns the form label for the field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OfficerId => "Officer ID",
            Self::IncidentType => "Incident Type",
            Self::Location => "City",
            Self::Severity => "Severity Level",
            Self::Description => "Incident Description",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a report field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationKind {
    #[error("field is required")]
    Empty,
    #[error("`{0}` is not a recognised option")]
    Unknown(String),
}
