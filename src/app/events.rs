//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::render::{draft_viewport, max_draft_scroll};
use super::state::{FormField, StatusMessage, SubmissionState};
use crate::core::{ViewMode, generate_from_draft};
use crate::fs::save_report;

/// Rows scrolled per PageUp/PageDown in the report draft.
const SCROLL_PAGE_SIZE: u16 = 5;

impl App {
    /// Handles pasted text from bracketed paste mode.
    ///
    /// Text goes into the focused text field of the report form; elsewhere
    /// paste is ignored. Line endings are normalized to `\n` and other control
    /// characters are dropped. The single-line officer field also drops
    /// newlines.
    pub fn handle_paste(&mut self, text: &str) {
        if self.mode != ViewMode::ReportAssistant || text.is_empty() {
            return;
        }

        let single_line = self.report_form.focus == FormField::OfficerId;
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let filtered: String = normalized
            .chars()
            .filter(|c| !c.is_control() || (*c == '\n' && !single_line))
            .collect();

        if filtered.is_empty() {
            return;
        }
        if let Some(textarea) = self.report_form.focused_text_mut() {
            textarea.insert_str(&filtered);
            self.form_edited();
        }
    }

    /// Handles a key event.
    ///
    /// Global shortcuts are checked first; the rest is routed to the report
    /// form or, on the static panels, to sidebar navigation.
    pub fn handle_key(&mut self, key: KeyEvent) {
        tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key");

        if self.handle_global_key(key) {
            return;
        }

        if self.mode == ViewMode::ReportAssistant {
            self.handle_report_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    /// Switches the selected module.
    ///
    /// Any pending submission or download status belongs to the previous
    /// pass and is dropped.
    pub fn select_mode(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        tracing::info!(from = %self.mode, to = %mode, "module selected");
        self.mode = mode;
        self.submission = None;
        self.status = None;
    }

    /// Shortcuts that work in every module. Returns true if consumed.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char('n') if ctrl => self.select_mode(self.mode.next()),
            KeyCode::Char('p') if ctrl => self.select_mode(self.mode.prev()),
            KeyCode::F(n @ 1..=4) => {
                if let Some(mode) = ViewMode::from_index(usize::from(n - 1)) {
                    self.select_mode(mode);
                }
            }
            _ => return false,
        }
        true
    }

    /// Keys on the Dashboard, Real-Time Analysis and Ethics panels.
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_mode(self.mode.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.select_mode(self.mode.next()),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(mode) = ViewMode::from_index(index) {
                    self.select_mode(mode);
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('e') => self.toggle_expander(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab
                if self.mode == ViewMode::EthicsSafeguards =>
            {
                self.panels.step_ethics_tab(false);
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab
                if self.mode == ViewMode::EthicsSafeguards =>
            {
                self.panels.step_ethics_tab(true);
            }
            _ => {}
        }
    }

    /// Toggles the expander of the current panel, if it has one.
    fn toggle_expander(&mut self) {
        match self.mode {
            ViewMode::Dashboard => {
                self.panels.patrol_details_expanded = !self.panels.patrol_details_expanded;
            }
            ViewMode::RealTimeAnalysis => {
                self.panels.detections_expanded = !self.panels.detections_expanded;
            }
            ViewMode::ReportAssistant | ViewMode::EthicsSafeguards => {}
        }
    }

    /// Keys on the Report Assistant panel.
    ///
    /// Key priorities:
    /// 1. Form-wide shortcuts (submit, download, scroll, focus movement)
    /// 2. Choice fields (Left/Right)
    /// 3. Text fields (typed input)
    fn handle_report_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focus = self.report_form.focus;

        match key.code {
            KeyCode::Char('g') if ctrl => {
                self.submit_report();
                return;
            }
            KeyCode::Char('d') if ctrl => {
                self.download_report();
                return;
            }
            KeyCode::PageDown => {
                self.scroll_draft(true);
                return;
            }
            KeyCode::PageUp => {
                self.scroll_draft(false);
                return;
            }
            KeyCode::Esc => {
                self.submission = None;
                self.status = None;
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') if focus == FormField::Submit => {
                self.submit_report();
                return;
            }
            KeyCode::Tab => {
                self.report_form.focus = focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.report_form.focus = focus.prev();
                return;
            }
            // Description is multi-line; elsewhere these keys move focus.
            KeyCode::Enter | KeyCode::Down if focus != FormField::Description => {
                self.report_form.focus = focus.next();
                return;
            }
            KeyCode::Up if focus != FormField::Description => {
                self.report_form.focus = focus.prev();
                return;
            }
            _ => {}
        }

        if focus.is_choice() {
            let forward = match key.code {
                KeyCode::Right | KeyCode::Char('l' | ' ') => true,
                KeyCode::Left | KeyCode::Char('h') => false,
                _ => return,
            };
            if self.report_form.step_choice(forward) {
                self.form_edited();
            }
            return;
        }

        if let Some(textarea) = self.report_form.focused_text_mut() {
            if textarea.input(key) {
                self.form_edited();
            }
        }
    }

    /// Invalidates the previous submission after any form change.
    fn form_edited(&mut self) {
        self.submission = None;
        self.status = None;
    }

    /// Validates the form and, if valid, generates the report.
    ///
    /// On a validation error no report is kept, so nothing can be downloaded.
    pub fn submit_report(&mut self) {
        let draft = self.report_form.draft();
        self.status = None;
        self.submission = Some(match generate_from_draft(&draft) {
            Ok(report) => {
                tracing::info!(
                    location = %report.report.location,
                    incident = %report.report.incident_type,
                    severity = %report.report.severity,
                    "report generated"
                );
                SubmissionState::Generated { report, scroll: 0 }
            }
            Err(e) => {
                tracing::warn!(error = %e, "report rejected");
                SubmissionState::Rejected(e)
            }
        });
    }

    /// Writes the generated report to the download directory.
    pub fn download_report(&mut self) {
        let Some(report) = self.submission.as_ref().and_then(SubmissionState::report) else {
            self.status = Some(StatusMessage::warning(
                "Generate a report before downloading",
            ));
            return;
        };

        self.status = Some(match save_report(&self.download_dir, report) {
            Ok(path) => StatusMessage::success(format!(
                "Saved {} at {}",
                path.display(),
                chrono::Local::now().format("%H:%M:%S")
            )),
            Err(e) => {
                tracing::error!(error = %format!("{e:#}"), "report download failed");
                StatusMessage::error(format!("Download failed: {e:#}"))
            }
        });
    }

    /// Scrolls the generated draft preview.
    ///
    /// Scrolling down stops once the last wrapped row is at the bottom of the
    /// preview. Before the first draw the size is unknown and the renderer
    /// clamps instead.
    fn scroll_draft(&mut self, down: bool) {
        let viewport = draft_viewport(self.layout.content, self.status.is_some());
        if let Some(SubmissionState::Generated { report, scroll }) = &mut self.submission {
            let max = if viewport.is_empty() {
                u16::MAX
            } else {
                max_draft_scroll(report, viewport)
            };
            let current = (*scroll).min(max);
            *scroll = if down {
                current.saturating_add(SCROLL_PAGE_SIZE).min(max)
            } else {
                current.saturating_sub(SCROLL_PAGE_SIZE)
            };
        }
    }
}
