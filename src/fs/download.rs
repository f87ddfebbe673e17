//! Report artifact writer.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::GeneratedReport;

/// Writes a generated report into `dir` under its suggested filename.
///
/// Creates `dir` if needed and overwrites an existing file of the same name.
/// Returns the full path written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn save_report(dir: &Path, report: &GeneratedReport) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory: {}", dir.display()))?;

    let path = dir.join(&report.filename);
    std::fs::write(&path, report.bytes())
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = report.text.len(), "report saved");
    Ok(path)
}
