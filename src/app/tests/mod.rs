//! Tests for the app module.
//!
//! This module is organized into submodules by functionality:
//! - `helpers` - Shared test utilities
//! - `navigation` - Module selection, expanders and ethics tabs
//! - `report_form` - Form input, submission and download
//! - `ui` - Rendering of the shell and each panel

#[allow(clippy::unwrap_used, clippy::expect_used)]
pub mod helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod ui;
