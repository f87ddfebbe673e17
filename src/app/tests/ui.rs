//! Rendering tests.
//!
//! Each panel is rendered to a `TestBackend` and checked for its headings,
//! plus the shell (title, sidebar, footer) and the unresolved-module fallback.

use super::helpers::*;
use crate::app::*;
use crate::core::ViewMode;
use anyhow::Result;
use ratatui::crossterm::event::KeyCode;

fn app_on(mode: ViewMode) -> App {
    let mut app = create_test_app();
    app.select_mode(mode);
    app
}

// =============================================================================
// Shell Tests
// =============================================================================

#[test]
fn shell_shows_title_and_caption() -> Result<()> {
    let text = render_text(&create_test_app())?;

    assert!(text.contains("A.I.O. - Augmented Intelligence Operator"));
    assert!(text.contains("AI-Powered Policing Assistant Demo - Pakistan"));
    assert!(text.contains("Pakistan Police Department Simulation"));
    Ok(())
}

#[test]
fn sidebar_lists_every_module() -> Result<()> {
    let text = render_text(&create_test_app())?;

    assert!(text.contains("Choose Module"));
    for mode in ViewMode::all() {
        assert!(text.contains(mode.label()), "sidebar misses {mode}");
    }
    Ok(())
}

#[test]
fn sidebar_marks_selected_module() -> Result<()> {
    let text = render_text(&app_on(ViewMode::ReportAssistant))?;
    assert!(text.contains("› F3 Report Assistant"));
    assert!(!text.contains("› F1"));
    Ok(())
}

#[test]
fn footer_hints_follow_the_module() -> Result<()> {
    let dashboard = render_text(&create_test_app())?;
    assert!(dashboard.contains("[e] Expand"));

    let report = render_text(&app_on(ViewMode::ReportAssistant))?;
    assert!(report.contains("[Ctrl+G] Generate"));
    assert!(!report.contains("[e] Expand"));
    Ok(())
}

#[test]
fn small_terminal_renders_without_panic() -> Result<()> {
    for mode in ViewMode::all() {
        let app = app_on(*mode);
        render_app_to_terminal(&app, 40, 12)?;
    }
    Ok(())
}

#[test]
fn missing_renderer_shows_configuration_error() -> Result<()> {
    static EMPTY: [(ViewMode, RenderFn); 0] = [];
    let app = App::with_registry(AppOptions::default(), ViewRegistry::with_views(&EMPTY));

    let text = render_text(&app)?;

    assert!(text.contains("no renderer registered for module `Dashboard`"));
    // The shell still renders around the error.
    assert!(text.contains("Choose Module"));
    Ok(())
}

// =============================================================================
// Panel Tests
// =============================================================================

#[test]
fn dashboard_renders_metrics_map_and_activity() -> Result<()> {
    let text = render_text(&create_test_app())?;

    assert!(text.contains("Patrol Command Dashboard - Pakistan"));
    assert!(text.contains("Incidents Today"));
    assert!(text.contains("8.4 min"));
    assert!(text.contains("Live Patrol Map - Pakistan"));
    assert!(text.contains("▸ View Patrol Details"));
    assert!(text.contains("Recent AI-Assisted Activities in Pakistan"));
    assert!(text.contains("Wanted Person Identified"));
    Ok(())
}

#[test]
fn patrol_details_appear_when_expanded() -> Result<()> {
    let mut app = create_test_app();
    let collapsed = render_text(&app)?;
    assert!(!collapsed.contains("Longitude"));

    app.handle_key(char_key('e'));
    let expanded = render_text(&app)?;

    assert!(expanded.contains("▾ View Patrol Details"));
    assert!(expanded.contains("Longitude"));
    assert!(expanded.contains("33.6844"));
    assert!(expanded.contains("#FFA500"));
    Ok(())
}

#[test]
fn analysis_renders_detections_and_checks() -> Result<()> {
    let text = render_text(&app_on(ViewMode::RealTimeAnalysis))?;

    assert!(text.contains("Real-Time AI Analysis - Pakistan Context"));
    assert!(text.contains("Live Bodycam Analysis"));
    assert!(text.contains("Simulated traffic scene in Pakistan"));
    assert!(text.contains("Detected Objects"));
    assert!(text.contains("License Plate"));
    assert!(text.contains("99%"));
    assert!(text.contains("LEA 1234"));
    assert!(text.contains("Pakistan-Specific Features"));
    assert!(text.contains("NADRA Verification:"));
    Ok(())
}

#[test]
fn collapsed_detections_hide_table() -> Result<()> {
    let mut app = app_on(ViewMode::RealTimeAnalysis);
    app.handle_key(char_key('e'));

    let text = render_text(&app)?;

    assert!(text.contains("▸ Detected Objects"));
    assert!(!text.contains("Confidence"));
    Ok(())
}

#[test]
fn report_panel_renders_form() -> Result<()> {
    let text = render_text(&app_on(ViewMode::ReportAssistant))?;

    assert!(text.contains("AI Report Assistant"));
    assert!(text.contains("Automated report generation for Pakistani police procedures"));
    assert!(text.contains("Officer ID"));
    assert!(text.contains("ISB-042"));
    assert!(text.contains("‹ Traffic Violation ›"));
    assert!(text.contains("‹ Islamabad ›"));
    assert!(text.contains("Severity Level"));
    assert!(text.contains("Describe what happened..."));
    assert!(text.contains("[ Generate AI Report ]"));
    Ok(())
}

#[test]
fn report_panel_shows_generated_draft() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut app = create_filled_report_app(dir.path(), "Minor fender bender.");
    app.handle_key(ctrl_key('g'));

    let text = render_text(&app)?;

    assert!(text.contains("Report Generated Successfully!"));
    assert!(text.contains("AI-Generated Report Draft"));
    assert!(text.contains("PAKISTAN POLICE DEPARTMENT"));
    assert!(text.contains("Download Report"));
    assert!(text.contains("police_report_Islamabad.txt"));
    Ok(())
}

#[test]
fn report_panel_shows_validation_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut app = create_filled_report_app(dir.path(), "");
    app.handle_key(ctrl_key('g'));

    let text = render_text(&app)?;

    assert!(text.contains("Incident Description: field is required"));
    assert!(!text.contains("Download Report"));
    Ok(())
}

#[test]
fn draft_scrolls_to_the_last_wrapped_row() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut app = create_filled_report_app(dir.path(), LONG_DESCRIPTION);
    app.handle_key(ctrl_key('g'));

    let top = buffer_text(&render_app_to_terminal(&app, 100, 24)?);
    assert!(top.contains("PAKISTAN POLICE DEPARTMENT"));
    assert!(!top.contains("departmental standards"));

    for _ in 0..20 {
        app.handle_key(key(KeyCode::PageDown));
    }
    let bottom = buffer_text(&render_app_to_terminal(&app, 100, 24)?);

    assert!(!bottom.contains("PAKISTAN POLICE DEPARTMENT"));
    assert!(bottom.contains("departmental standards"));
    Ok(())
}

#[test]
fn ethics_renders_notice_and_first_tab() -> Result<()> {
    let text = render_text(&app_on(ViewMode::EthicsSafeguards))?;

    assert!(text.contains("Ethical Safeguards - Pakistan Implementation"));
    assert!(text.contains("Important:"));
    assert!(text.contains("Privacy Protection"));
    assert!(text.contains("Bias Prevention"));
    assert!(text.contains("Human Oversight"));
    assert!(text.contains("Data Privacy Compliance"));
    assert!(text.contains("PECA 2016 Compliance:"));
    Ok(())
}

#[test]
fn ethics_human_oversight_tab_shows_protocol() -> Result<()> {
    let mut app = app_on(ViewMode::EthicsSafeguards);
    app.handle_key(key(KeyCode::Left));

    let text = render_text(&app)?;

    assert!(text.contains("Human-in-the-Loop Protocol"));
    assert!(text.contains("CRITICAL PROTOCOL FOR PAKISTAN DEPLOYMENT"));
    assert!(!text.contains("PECA 2016 Compliance:"));
    Ok(())
}
