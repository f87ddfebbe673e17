//! `A.I.O.` - Augmented Intelligence Operator
//!
//! Entry point for the application.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use aio_dashboard::app::App;
use aio_dashboard::cli::{Args, Command, run_init, run_report};
use aio_dashboard::fs::AioPaths;
use aio_dashboard::tui::TerminalEventGuard;

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "AIO_LOG";

fn main() -> Result<()> {
    let args = Args::parse();
    let paths = AioPaths::from_cwd()?;

    init_logging(&paths)?;

    let config = args.base_config(&paths)?;

    match &args.command {
        Some(Command::Report(report)) => {
            let options = args.resolve_options(&config, &paths)?;
            return run_report(report, &options, &mut std::io::stdout().lock());
        }
        Some(Command::Init { force }) => {
            let path = args.config.clone().unwrap_or_else(|| paths.config_file());
            run_init(&path, &args.effective_config(&config), *force)?;
            println!("Wrote {}", path.display());
            return Ok(());
        }
        None => {}
    }

    let options = args.resolve_options(&config, &paths)?;

    // Initialize the terminal with crossterm backend
    let mut terminal = ratatui::init();

    let result = run_app(&mut terminal, App::new(options));

    // Restore the terminal
    ratatui::restore();

    result
}

/// Installs a file logger when `AIO_LOG` is set.
///
/// The terminal belongs to the UI, so logs go to `.aio/aio.log`.
fn init_logging(paths: &AioPaths) -> Result<()> {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return Ok(());
    };

    paths.ensure_aio_dir()?;
    let log_file = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(())
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Must be created after ratatui::init, which can reset terminal flags.
    let _event_guard = TerminalEventGuard::new();

    loop {
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Paste(text) => {
                    tracing::debug!(len = text.len(), lines = text.lines().count(), "paste");
                    app.handle_paste(&text);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    tracing::info!("dashboard closed");
    Ok(())
}
