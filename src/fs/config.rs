//! Dashboard configuration.
//!
//! Settings are read from `.aio/config.json`. Every field is optional; missing
//! fields take their defaults and command-line flags override file values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ViewMode;
use crate::core::report::DEFAULT_OFFICER_ID;

/// Values loaded from the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Officer ID pre-filled in the report form.
    pub officer_id: String,
    /// Where downloaded reports are written. Relative to the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    /// Sidebar label of the module shown at startup.
    pub initial_module: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            officer_id: DEFAULT_OFFICER_ID.to_string(),
            download_dir: None,
            initial_module: ViewMode::default().label().to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parses the configured startup module.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_module` is not a module label.
    pub fn initial_mode(&self) -> Result<ViewMode> {
        self.initial_module
            .parse::<ViewMode>()
            .map_err(anyhow::Error::msg)
            .context("Invalid `initial_module` in config")
    }
}

/// Loads configuration from `path`.
///
/// If the file doesn't exist, returns the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    if !path.exists() {
        return Ok(DashboardConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Saves configuration to `path` as pretty-printed JSON.
///
/// The parent directory must exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_config(path: &Path, config: &DashboardConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path, json)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_form_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.officer_id, "ISB-042");
        assert_eq!(config.download_dir, None);
        assert_eq!(config.initial_module, "Dashboard");
    }

    #[test]
    fn missing_file_returns_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = load_config(&temp_dir.path().join("config.json"))?;
        assert_eq!(config, DashboardConfig::default());
        Ok(())
    }

    #[test]
    fn partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "officer_id": "KHI-015" }"#)?;

        let config = load_config(&path)?;
        assert_eq!(config.officer_id, "KHI-015");
        assert_eq!(config.initial_module, "Dashboard");
        assert_eq!(config.download_dir, None);
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json")?;

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }

    #[test]
    fn json_omits_unset_download_dir() -> Result<()> {
        let json = serde_json::to_string_pretty(&DashboardConfig::default())?;
        assert!(json.contains("\"officer_id\": \"ISB-042\""));
        assert!(json.contains("\"initial_module\": \"Dashboard\""));
        assert!(!json.contains("download_dir"));
        Ok(())
    }

    #[test]
    fn initial_mode_parses_label() -> Result<()> {
        let config = DashboardConfig {
            initial_module: "ethics & safeguards".to_string(),
            ..DashboardConfig::default()
        };
        assert_eq!(config.initial_mode()?, ViewMode::EthicsSafeguards);
        Ok(())
    }

    #[test]
    fn initial_mode_rejects_unknown_label() {
        let config = DashboardConfig {
            initial_module: "Settings".to_string(),
            ..DashboardConfig::default()
        };
        let err = config.initial_mode().unwrap_err();
        assert!(format!("{err:#}").contains("unknown module `Settings`"));
    }
}
