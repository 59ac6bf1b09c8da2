//! projreg-tui - Terminal project registration form
//!
//! A Ratatui-based form that collects a project registration whose required
//! fields depend on the chosen project type, validates it, and hands accepted
//! registrations to a submission sink.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use projreg_tui::app::App;
use projreg_tui::config::TuiConfig;
use projreg_tui::logging;
use projreg_tui::sink::TracingSink;
use projreg_tui::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (TuiConfig::default(), Some(err)),
    };

    // Initialize logging before the terminal is taken over
    let log_dir = TuiConfig::log_dir();
    let appender = match log_dir.as_deref().map(logging::file_appender).transpose() {
        Ok(appender) => appender,
        Err(err) => {
            eprintln!("Logging disabled: {err:#}");
            None
        }
    };
    let has_log_file = appender.is_some();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    let log_guard = logging::init(filter, appender);

    if let Some(err) = config_error {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, Box::new(TracingSink::new()));
    let result = run_app(&mut terminal, &mut app, config.poll_interval()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Flush buffered log lines
    drop(log_guard);
    if let Some(dir) = log_dir.filter(|_| has_log_file) {
        eprintln!("Registrations logged to {}", logging::log_file_path(&dir).display());
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key).await?;
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
