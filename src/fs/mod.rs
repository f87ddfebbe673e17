//! File system operations.

use std::path::{Path, PathBuf};

use anyhow::Context;

pub mod config;
pub mod download;

pub use config::{DashboardConfig, load_config, save_config};
pub use download::save_report;

/// Directory for dashboard configuration and logs, relative to the base.
pub const AIO_DIR: &str = ".aio";

/// Holds all dashboard-related paths derived from a base directory.
///
/// Production code roots this at the current working directory; tests root it
/// at a temporary directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use aio_dashboard::fs::AioPaths;
///
/// let paths = AioPaths::new(Path::new("/tmp/demo"));
/// assert_eq!(paths.config_file(), Path::new("/tmp/demo/.aio/config.json"));
/// ```
#[derive(Debug, Clone)]
pub struct AioPaths {
    base: PathBuf,
}

impl AioPaths {
    /// Creates paths rooted at the given base directory.
    #[must_use]
    pub fn new(base: &Path) -> Self {
        Self {
            base: base.to_path_buf(),
        }
    }

    /// Creates paths rooted at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_cwd() -> anyhow::Result<Self> {
        let base = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self { base })
    }

    /// Returns the `.aio` directory path.
    #[must_use]
    pub fn aio_dir(&self) -> PathBuf {
        self.base.join(AIO_DIR)
    }

    /// Returns the configuration file path (`.aio/config.json`).
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.aio_dir().join("config.json")
    }

    /// Returns the log file path (`.aio/aio.log`).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.aio_dir().join("aio.log")
    }

    /// Ensures the `.aio` directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_aio_dir(&self) -> anyhow::Result<()> {
        let dir = self.aio_dir();
        if !dir.exists() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Resolves a configured download directory against the base.
    ///
    /// Relative paths are joined to the base; `None` means the base itself.
    #[must_use]
    pub fn download_dir(&self, configured: Option<&Path>) -> PathBuf {
        match configured {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => self.base.join(dir),
            None => self.base.clone(),
        }
    }

    /// Loads the configuration file, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_config(&self) -> anyhow::Result<DashboardConfig> {
        load_config(&self.config_file())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn paths_are_derived_from_base() {
        let paths = AioPaths::new(Path::new("/test/base"));

        assert_eq!(paths.aio_dir(), Path::new("/test/base/.aio"));
        assert_eq!(paths.config_file(), Path::new("/test/base/.aio/config.json"));
        assert_eq!(paths.log_file(), Path::new("/test/base/.aio/aio.log"));
    }

    #[test]
    fn ensure_aio_dir_creates_directory() {
        let temp = TempDir::new().unwrap();
        let paths = AioPaths::new(temp.path());

        assert!(!paths.aio_dir().exists());
        paths.ensure_aio_dir().unwrap();
        assert!(paths.aio_dir().exists());
        // Second call is a no-op.
        paths.ensure_aio_dir().unwrap();
    }

    #[test]
    fn download_dir_resolution() {
        let paths = AioPaths::new(Path::new("/test/base"));

        assert_eq!(paths.download_dir(None), Path::new("/test/base"));
        assert_eq!(
            paths.download_dir(Some(Path::new("reports"))),
            Path::new("/test/base/reports")
        );
        assert_eq!(
            paths.download_dir(Some(Path::new("/var/reports"))),
            Path::new("/var/reports")
        );
    }

    #[test]
    fn save_and_load_config_roundtrip() {
        let temp = TempDir::new().unwrap();
        let paths = AioPaths::new(temp.path());

        let config = DashboardConfig {
            officer_id: "LHR-023".to_string(),
            download_dir: Some(PathBuf::from("out")),
            initial_module: "Report Assistant".to_string(),
        };

        paths.ensure_aio_dir().unwrap();
        save_config(&paths.config_file(), &config).unwrap();
        assert_eq!(paths.load_config().unwrap(), config);
    }
}
