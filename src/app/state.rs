//! Application state structures.
//!
//! - **`ReportFormState`**: the incident report form widgets and focus
//! - **`PanelState`**: expanders and the ethics tab selection
//! - **`SubmissionState`**: the outcome of the last form submission
//! - **`StatusMessage`**: one-line feedback for the download action
//!
//! These hold widget state between key events. Renderers never see them
//! mutably; each pass reads them through a `RenderContext`.

use tui_textarea::TextArea;

use crate::core::fixtures::{CalloutKind, ETHICS_SECTIONS};
use crate::core::{City, DashboardError, GeneratedReport, IncidentType, ReportDraft, Severity};

/// Initial description text; also the placeholder once the field is cleared.
pub const DEFAULT_DESCRIPTION: &str = "Describe what happened...";

/// Focusable elements of the report form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    OfficerId,
    IncidentType,
    Location,
    Severity,
    Description,
    Submit,
}

impl FormField {
    /// Returns all fields in tab order.
    #[must_use]
    pub const fn all() -> &'static [FormField] {
        &[
            FormField::OfficerId,
            FormField::IncidentType,
            FormField::Location,
            FormField::Severity,
            FormField::Description,
            FormField::Submit,
        ]
    }

    /// Returns the next field, wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        cycle(Self::all(), *self, true)
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub fn prev(&self) -> Self {
        cycle(Self::all(), *self, false)
    }

    /// Whether the field is a choice changed with Left/Right.
    #[must_use]
    pub const fn is_choice(&self) -> bool {
        matches!(self, Self::IncidentType | Self::Location | Self::Severity)
    }
}

/// Steps through `all` from `current`, wrapping at both ends.
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    all[next]
}

/// Builds a text area with the form's styling defaults.
fn text_area(initial: &str, placeholder: &str) -> TextArea<'static> {
    let lines = if initial.is_empty() {
        vec![String::new()]
    } else {
        initial.split('\n').map(String::from).collect()
    };
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(placeholder);
    textarea.move_cursor(tui_textarea::CursorMove::Bottom);
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

/// Widget state of the incident report form.
pub struct ReportFormState {
    /// Officer ID text input (single line).
    pub officer_id: TextArea<'static>,
    /// Incident type select box.
    pub incident_type: IncidentType,
    /// City select box.
    pub location: City,
    /// Severity slider.
    pub severity: Severity,
    /// Free-text description (multi-line).
    pub description: TextArea<'static>,
    /// Currently focused element.
    pub focus: FormField,
}

impl ReportFormState {
    /// Creates a form with the officer ID pre-filled.
    #[must_use]
    pub fn new(officer_id: &str) -> Self {
        Self {
            officer_id: text_area(officer_id, "Officer ID"),
            incident_type: IncidentType::default(),
            location: City::default(),
            severity: Severity::default(),
            description: text_area(DEFAULT_DESCRIPTION, DEFAULT_DESCRIPTION),
            focus: FormField::default(),
        }
    }

    /// Collects the current widget values as an unvalidated draft.
    #[must_use]
    pub fn draft(&self) -> ReportDraft {
        ReportDraft {
            officer_id: self.officer_id.lines().join(""),
            incident_type: self.incident_type.label().to_string(),
            location: self.location.label().to_string(),
            severity: self.severity.label().to_string(),
            description: self.description.lines().join("\n"),
        }
    }

    /// Returns the focused text area, if the focus is on a text field.
    pub fn focused_text_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match self.focus {
            FormField::OfficerId => Some(&mut self.officer_id),
            FormField::Description => Some(&mut self.description),
            _ => None,
        }
    }

    /// Moves the choice under focus one step. Returns whether a value changed.
    pub fn step_choice(&mut self, forward: bool) -> bool {
        match self.focus {
            FormField::IncidentType => {
                self.incident_type = cycle(IncidentType::all(), self.incident_type, forward);
            }
            FormField::Location => {
                self.location = cycle(City::all(), self.location, forward);
            }
            FormField::Severity => {
                // A slider stops at its ends instead of wrapping.
                let levels = Severity::all();
                let pos = levels
                    .iter()
                    .position(|s| *s == self.severity)
                    .unwrap_or(0);
                let target = if forward {
                    (pos + 1).min(levels.len() - 1)
                } else {
                    pos.saturating_sub(1)
                };
                if target == pos {
                    return false;
                }
                self.severity = levels[target];
            }
            _ => return false,
        }
        true
    }

    /// Replaces the officer ID text.
    #[cfg(test)]
    pub fn set_officer_id(&mut self, value: &str) {
        self.officer_id = text_area(value, "Officer ID");
    }

    /// Replaces the description text.
    #[cfg(test)]
    pub fn set_description(&mut self, value: &str) {
        self.description = text_area(value, DEFAULT_DESCRIPTION);
    }
}

/// Display state of the non-form panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    /// "View Patrol Details" expander on the dashboard.
    pub patrol_details_expanded: bool,
    /// "Detected Objects" expander on the analysis panel.
    pub detections_expanded: bool,
    /// Selected tab on the ethics panel.
    pub ethics_tab: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            patrol_details_expanded: false,
            detections_expanded: true,
            ethics_tab: 0,
        }
    }
}

impl PanelState {
    /// Switches to the next or previous ethics tab, wrapping around.
    pub fn step_ethics_tab(&mut self, forward: bool) {
        let len = ETHICS_SECTIONS.len();
        self.ethics_tab = if forward {
            (self.ethics_tab + 1) % len
        } else {
            (self.ethics_tab + len - 1) % len
        };
    }
}

/// Outcome of the last report submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// The report was generated and can be downloaded.
    Generated {
        report: GeneratedReport,
        /// Vertical scroll offset of the draft preview.
        scroll: u16,
    },
    /// Validation failed; nothing is offered for download.
    Rejected(DashboardError),
}

impl SubmissionState {
    /// Returns the generated report, if any.
    #[must_use]
    pub fn report(&self) -> Option<&GeneratedReport> {
        match self {
            Self::Generated { report, .. } => Some(report),
            Self::Rejected(_) => None,
        }
    }
}

/// Short feedback line shown under the report draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: CalloutKind,
    pub text: String,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Warning,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: CalloutKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_tab_order_wraps() {
        assert_eq!(FormField::OfficerId.next(), FormField::IncidentType);
        assert_eq!(FormField::Submit.next(), FormField::OfficerId);
        assert_eq!(FormField::OfficerId.prev(), FormField::Submit);
    }

    #[test]
    fn field_kinds() {
        assert!(FormField::Severity.is_choice());
        assert!(!FormField::Description.is_choice());
        assert!(!FormField::Submit.is_choice());
    }

    #[test]
    fn new_form_has_defaults() {
        let form = ReportFormState::new("ISB-042");
        let draft = form.draft();

        assert_eq!(draft.officer_id, "ISB-042");
        assert_eq!(draft.incident_type, "Traffic Violation");
        assert_eq!(draft.location, "Islamabad");
        assert_eq!(draft.severity, "Low");
        assert_eq!(draft.description, DEFAULT_DESCRIPTION);
        assert_eq!(form.focus, FormField::OfficerId);
    }

    #[test]
    fn select_boxes_wrap() {
        let mut form = ReportFormState::new("ISB-042");
        form.focus = FormField::Location;

        assert!(form.step_choice(false));
        assert_eq!(form.location, City::Other);
        assert!(form.step_choice(true));
        assert_eq!(form.location, City::Islamabad);
    }

    #[test]
    fn severity_slider_clamps() {
        let mut form = ReportFormState::new("ISB-042");
        form.focus = FormField::Severity;

        assert!(!form.step_choice(false));
        assert_eq!(form.severity, Severity::Low);
        for _ in 0..5 {
            form.step_choice(true);
        }
        assert_eq!(form.severity, Severity::Critical);
    }

    #[test]
    fn step_choice_ignores_text_fields() {
        let mut form = ReportFormState::new("ISB-042");
        form.focus = FormField::Description;
        assert!(!form.step_choice(true));
    }

    #[test]
    fn multi_line_description_is_joined() {
        let mut form = ReportFormState::new("ISB-042");
        form.set_description("line one\nline two");
        assert_eq!(form.draft().description, "line one\nline two");
    }

    #[test]
    fn ethics_tab_wraps() {
        let mut panels = PanelState::default();
        panels.step_ethics_tab(false);
        assert_eq!(panels.ethics_tab, ETHICS_SECTIONS.len() - 1);
        panels.step_ethics_tab(true);
        assert_eq!(panels.ethics_tab, 0);
    }

    #[test]
    fn detections_start_expanded() {
        let panels = PanelState::default();
        assert!(panels.detections_expanded);
        assert!(!panels.patrol_details_expanded);
    }
}
