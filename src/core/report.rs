//! Incident report model and template engine.
//!
//! Form input arrives as a [`ReportDraft`] of raw strings. [`ReportDraft::validate`]
//! is the only way to turn it into an [`IncidentReport`], and [`generate`] only
//! accepts the validated type, so a malformed field can never reach the template.

use std::fmt;

use super::error::{DashboardError, ReportField, ValidationKind};

/// Default officer identifier pre-filled in the form.
pub const DEFAULT_OFFICER_ID: &str = "ISB-042";

/// Kind of incident being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncidentType {
    #[default]
    TrafficViolation,
    Theft,
    Disturbance,
    Accident,
    Other,
}

impl IncidentType {
    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TrafficViolation => "Traffic Violation",
            Self::Theft => "Theft",
            Self::Disturbance => "Disturbance",
            Self::Accident => "Accident",
            Self::Other => "Other",
        }
    }

    /// Returns all incident types in form order.
    #[must_use]
    pub const fn all() -> &'static [IncidentType] {
        &[
            IncidentType::TrafficViolation,
            IncidentType::Theft,
            IncidentType::Disturbance,
            IncidentType::Accident,
            IncidentType::Other,
        ]
    }

    /// Looks up an incident type by its exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().find(|t| t.label() == label).copied()
    }
}

/// City where the incident happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum City {
    #[default]
    Islamabad,
    Karachi,
    Lahore,
    Rawalpindi,
    Peshawar,
    Other,
}

impl City {
    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Islamabad => "Islamabad",
            Self::Karachi => "Karachi",
            Self::Lahore => "Lahore",
            Self::Rawalpindi => "Rawalpindi",
            Self::Peshawar => "Peshawar",
            Self::Other => "Other",
        }
    }

    /// Returns all cities in form order.
    #[must_use]
    pub const fn all() -> &'static [City] {
        &[
            City::Islamabad,
            City::Karachi,
            City::Lahore,
            City::Rawalpindi,
            City::Peshawar,
            City::Other,
        ]
    }

    /// Looks up a city by its exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().find(|c| c.label() == label).copied()
    }
}

/// Severity level, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Returns the display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Returns all levels in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Severity] {
        &[
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ]
    }

    /// Looks up a level by its exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().find(|s| s.label() == label).copied()
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(IncidentType, City, Severity);

/// A validated incident report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentReport {
    pub officer_id: String,
    pub incident_type: IncidentType,
    pub location: City,
    pub severity: Severity,
    pub description: String,
}

/// Raw, unvalidated form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub officer_id: String,
    pub incident_type: String,
    pub location: String,
    pub severity: String,
    pub description: String,
}

impl ReportDraft {
    /// Validates every field and builds an [`IncidentReport`].
    ///
    /// Fields are checked in form order and the first failure is returned.
    /// Text values are kept verbatim; whitespace-only counts as empty.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] if a field is empty or an
    /// enumerated field does not name one of its options.
    pub fn validate(&self) -> Result<IncidentReport, DashboardError> {
        let officer_id = required(ReportField::OfficerId, &self.officer_id)?;
        let incident_type = option(
            ReportField::IncidentType,
            &self.incident_type,
            IncidentType::from_label,
        )?;
        let location = option(ReportField::Location, &self.location, City::from_label)?;
        let severity = option(ReportField::Severity, &self.severity, Severity::from_label)?;
        let description = required(ReportField::Description, &self.description)?;

        Ok(IncidentReport {
            officer_id: officer_id.to_string(),
            incident_type,
            location,
            severity,
            description: description.to_string(),
        })
    }
}

impl From<&IncidentReport> for ReportDraft {
    fn from(report: &IncidentReport) -> Self {
        Self {
            officer_id: report.officer_id.clone(),
            incident_type: report.incident_type.label().to_string(),
            location: report.location.label().to_string(),
            severity: report.severity.label().to_string(),
            description: report.description.clone(),
        }
    }
}

fn required(field: ReportField, value: &str) -> Result<&str, DashboardError> {
    if value.trim().is_empty() {
        Err(DashboardError::validation(field, ValidationKind::Empty))
    } else {
        Ok(value)
    }
}

fn option<T>(
    field: ReportField,
    value: &str,
    lookup: fn(&str) -> Option<T>,
) -> Result<T, DashboardError> {
    let value = required(field, value)?;
    lookup(value.trim()).ok_or_else(|| {
        DashboardError::validation(field, ValidationKind::Unknown(value.to_string()))
    })
}

/// A generated report ready to be shown and downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub report: IncidentReport,
    pub text: String,
    pub filename: String,
}

impl GeneratedReport {
    /// Returns the artifact contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Renders the report template.
///
/// Fields are substituted verbatim. The incident type is lower-cased in the
/// narrative sentence only.
#[must_use]
pub fn generate(report: &IncidentReport) -> String {
    let IncidentReport {
        officer_id,
        incident_type,
        location,
        severity,
        description,
    } = report;
    let narrative_type = incident_type.label().to_lowercase();

    format!(
        "**PAKISTAN POLICE DEPARTMENT - INCIDENT REPORT**\n\
         \n\
         **Officer:** {officer_id}\n\
         **Location:** {location}\n\
         **Incident Type:** {incident_type}\n\
         **Severity:** {severity}\n\
         \n\
         **Narrative:**\n\
         Officer responded to a {narrative_type} incident in {location}. {description}\n\
         \n\
         The situation was assessed and handled according to standard operating procedures\n\
         of the Pakistan Police Department.\n\
         \n\
         **Actions Taken:** Documentation completed, evidence collected, and relevant\n\
         authorities notified as per protocol.\n\
         \n\
         **AI Assistance:** This report was drafted with A.I.O. assistance to ensure\n\
         accuracy and compliance with departmental standards.\n"
    )
}

/// Returns the suggested artifact name for a report filed in `location`.
#[must_use]
pub fn download_filename(location: City) -> String {
    format!("police_report_{}.txt", location.label())
}

/// Validates a draft and renders it.
///
/// # Errors
///
/// Returns the validation error for the first invalid field; the template is
/// not touched in that case.
pub fn generate_from_draft(draft: &ReportDraft) -> Result<GeneratedReport, DashboardError> {
    let report = draft.validate()?;
    let text = generate(&report);
    let filename = download_filename(report.location);
    Ok(GeneratedReport {
        report,
        text,
        filename,
    })
}
