//! CLI argument parsing using clap.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::app::AppOptions;
use crate::core::{ReportDraft, Severity, ViewMode, generate_from_draft};
use crate::fs::{AioPaths, DashboardConfig, load_config, save_report};

/// `A.I.O.` - Augmented Intelligence Operator
///
/// Police patrol dashboard demo: patrol map, simulated bodycam analysis,
/// incident report assistant and ethics safeguards.
/// Without a subcommand, opens the interactive dashboard.
#[derive(Parser, Debug)]
#[command(name = "aio", version, about, long_about = None)]
pub struct Args {
    /// Module shown first (e.g. "Report Assistant")
    #[arg(long, global = true)]
    pub module: Option<ViewMode>,

    /// Officer ID pre-filled in the report form
    #[arg(long, global = true)]
    pub officer: Option<String>,

    /// Directory that downloaded reports are written to
    #[arg(long, global = true)]
    pub download_dir: Option<PathBuf>,

    /// Configuration file (default: .aio/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an incident report without opening the dashboard
    Report(ReportArgs),
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Report fields; validated the same way as the report form.
#[derive(ClapArgs, Debug)]
pub struct ReportArgs {
    /// Incident type (Traffic Violation, Theft, Disturbance, Accident, Other)
    #[arg(long)]
    pub incident_type: String,

    /// City (Islamabad, Karachi, Lahore, Rawalpindi, Peshawar, Other)
    #[arg(long)]
    pub location: String,

    /// Severity level (Low, Medium, High, Critical)
    #[arg(long, default_value_t = Severity::Low.label().to_string())]
    pub severity: String,

    /// Free-text incident description
    #[arg(long)]
    pub description: String,

    /// Print the report instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    /// Loads the config file named by `--config`, or the default one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_config(&self, paths: &AioPaths) -> Result<DashboardConfig> {
        match &self.config {
            Some(path) => load_config(path),
            None => paths.load_config(),
        }
    }

    /// Loads the config this invocation builds on.
    ///
    /// `init --force` replaces the file, so it starts from defaults without
    /// reading the old one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file has to be read and cannot be parsed.
    pub fn base_config(&self, paths: &AioPaths) -> Result<DashboardConfig> {
        match self.command {
            Some(Command::Init { force: true }) => Ok(DashboardConfig::default()),
            _ => self.load_config(paths),
        }
    }

    /// Merges flags over the config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured initial module is unknown.
    pub fn resolve_options(
        &self,
        config: &DashboardConfig,
        paths: &AioPaths,
    ) -> Result<AppOptions> {
        let initial_mode = match self.module {
            Some(mode) => mode,
            None => config.initial_mode()?,
        };
        let officer_id = self
            .officer
            .clone()
            .unwrap_or_else(|| config.officer_id.clone());
        let download_dir = paths.download_dir(
            self.download_dir
                .as_deref()
                .or(config.download_dir.as_deref()),
        );

        Ok(AppOptions {
            initial_mode,
            officer_id,
            download_dir,
        })
    }

    /// The config that `aio init` writes: file values overridden by flags.
    #[must_use]
    pub fn effective_config(&self, config: &DashboardConfig) -> DashboardConfig {
        DashboardConfig {
            officer_id: self
                .officer
                .clone()
                .unwrap_or_else(|| config.officer_id.clone()),
            download_dir: self.download_dir.clone().or_else(|| config.download_dir.clone()),
            initial_module: self
                .module
                .map_or_else(|| config.initial_module.clone(), |m| m.label().to_string()),
        }
    }
}

impl ReportArgs {
    /// Builds an unvalidated draft, as the form would.
    #[must_use]
    pub fn draft(&self, officer_id: &str) -> ReportDraft {
        ReportDraft {
            officer_id: officer_id.to_string(),
            incident_type: self.incident_type.clone(),
            location: self.location.clone(),
            severity: self.severity.clone(),
            description: self.description.clone(),
        }
    }
}

/// Runs `aio report`: validates, generates, then prints or saves.
///
/// # Errors
///
/// Returns the validation error for the first invalid field, or an I/O
/// error if the report cannot be written.
pub fn run_report(report: &ReportArgs, options: &AppOptions, out: &mut impl Write) -> Result<()> {
    let draft = report.draft(&options.officer_id);
    let generated = generate_from_draft(&draft)?;

    if report.stdout {
        out.write_all(generated.bytes())
            .context("Failed to write report to stdout")?;
    } else {
        let path = save_report(&options.download_dir, &generated)?;
        writeln!(out, "Saved {}", path.display()).context("Failed to write to stdout")?;
    }
    Ok(())
}

/// Runs `aio init`: writes `config` to `path`.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it
/// cannot be written.
pub fn run_init(path: &Path, config: &DashboardConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    crate::fs::save_config(path, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::core::{DashboardError, ReportField, ValidationKind};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aio").chain(args.iter().copied())).unwrap()
    }

    fn report_args(args: &[&str]) -> ReportArgs {
        match parse(args).command {
            Some(Command::Report(report)) => report,
            other => panic!("expected report subcommand, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_opens_dashboard() {
        let args = parse(&[]);
        assert!(args.command.is_none());
        assert!(args.module.is_none());
    }

    #[test]
    fn module_flag_accepts_labels() {
        let args = parse(&["--module", "report assistant"]);
        assert_eq!(args.module, Some(ViewMode::ReportAssistant));
    }

    #[test]
    fn unknown_module_is_rejected() {
        let result = Args::try_parse_from(["aio", "--module", "Radar"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_config() {
        let temp = TempDir::new().unwrap();
        let paths = AioPaths::new(temp.path());
        let config = DashboardConfig {
            officer_id: "KHI-015".to_string(),
            download_dir: Some(PathBuf::from("reports")),
            initial_module: "Ethics & Safeguards".to_string(),
        };

        let from_file = parse(&[]).resolve_options(&config, &paths).unwrap();
        assert_eq!(from_file.officer_id, "KHI-015");
        assert_eq!(from_file.initial_mode, ViewMode::EthicsSafeguards);
        assert_eq!(from_file.download_dir, temp.path().join("reports"));

        let flagged = parse(&[
            "--officer",
            "LHR-023",
            "--module",
            "Dashboard",
            "--download-dir",
            "out",
        ])
        .resolve_options(&config, &paths)
        .unwrap();
        assert_eq!(flagged.officer_id, "LHR-023");
        assert_eq!(flagged.initial_mode, ViewMode::Dashboard);
        assert_eq!(flagged.download_dir, temp.path().join("out"));
    }

    #[test]
    fn bad_configured_module_is_an_error() {
        let paths = AioPaths::new(Path::new("/tmp"));
        let config = DashboardConfig {
            initial_module: "Radar".to_string(),
            ..DashboardConfig::default()
        };
        assert!(parse(&[]).resolve_options(&config, &paths).is_err());
    }

    #[test]
    fn report_subcommand_parses() {
        let report = report_args(&[
            "report",
            "--incident-type",
            "Theft",
            "--location",
            "Lahore",
            "--description",
            "Phone snatched",
        ]);
        assert_eq!(report.incident_type, "Theft");
        assert_eq!(report.severity, "Low");
        assert!(!report.stdout);
    }

    #[test]
    fn report_prints_to_stdout() {
        let report = report_args(&[
            "report",
            "--incident-type",
            "Traffic Violation",
            "--location",
            "Islamabad",
            "--description",
            "Minor fender bender.",
            "--stdout",
        ]);
        let mut out = Vec::new();

        run_report(&report, &AppOptions::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ISB-042"));
        assert!(text.contains("traffic violation incident"));
    }

    #[test]
    fn report_writes_file() {
        let temp = TempDir::new().unwrap();
        let report = report_args(&[
            "report",
            "--incident-type",
            "Accident",
            "--location",
            "Lahore",
            "--severity",
            "High",
            "--description",
            "Two cars collided",
        ]);
        let options = AppOptions {
            download_dir: temp.path().to_path_buf(),
            ..AppOptions::default()
        };
        let mut out = Vec::new();

        run_report(&report, &options, &mut out).unwrap();

        let path = temp.path().join("police_report_Lahore.txt");
        assert!(path.exists());
        assert!(String::from_utf8(out).unwrap().contains("police_report_Lahore.txt"));
    }

    #[test]
    fn report_validates_like_the_form() {
        let temp = TempDir::new().unwrap();
        let report = report_args(&[
            "report",
            "--incident-type",
            "Theft",
            "--location",
            "Multan",
            "--description",
            "Bicycle stolen",
        ]);
        let options = AppOptions {
            download_dir: temp.path().to_path_buf(),
            ..AppOptions::default()
        };

        let err = run_report(&report, &options, &mut Vec::new()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<DashboardError>(),
            Some(&DashboardError::Validation {
                field: ReportField::Location,
                kind: ValidationKind::Unknown("Multan".to_string()),
            })
        );
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn init_writes_effective_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".aio").join("config.json");
        let args = parse(&["--officer", "PSH-007", "init"]);
        let config = args.effective_config(&DashboardConfig::default());

        run_init(&path, &config, false).unwrap();

        let saved = load_config(&path).unwrap();
        assert_eq!(saved.officer_id, "PSH-007");
        assert_eq!(saved.initial_module, "Dashboard");
    }

    #[test]
    fn forced_init_replaces_broken_config() {
        let temp = TempDir::new().unwrap();
        let paths = AioPaths::new(temp.path());
        paths.ensure_aio_dir().unwrap();
        std::fs::write(paths.config_file(), "{ not json").unwrap();

        assert!(parse(&["init"]).base_config(&paths).is_err());

        let args = parse(&["--officer", "RWP-011", "init", "--force"]);
        let config = args.effective_config(&args.base_config(&paths).unwrap());
        run_init(&paths.config_file(), &config, true).unwrap();

        let saved = paths.load_config().unwrap();
        assert_eq!(saved.officer_id, "RWP-011");
        assert_eq!(saved.initial_module, "Dashboard");
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(run_init(&path, &DashboardConfig::default(), false).is_err());
        assert!(run_init(&path, &DashboardConfig::default(), true).is_ok());
    }
}
