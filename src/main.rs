//! Tallinn Weather CLI - view the multi-day forecast in the terminal
//!
//! A terminal UI application that fetches the MET Norway forecast for
//! Tallinn once at startup and renders it as a 24-hour window, a seven-day
//! summary, and pageable per-day detail views.

mod app;
mod cli;
mod data;
mod navigator;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppState};
use cli::{Cli, StartupConfig};

/// Diagnostics land in a file because stdout belongs to the TUI.
const LOG_FILE: &str = "tlnweather.log";

/// Sets up the log4rs file sink for warn-level diagnostics.
/// Logging is best-effort; a failure here never blocks startup.
fn init_logging() {
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} {m}{n}")))
        .build(LOG_FILE);
    let Ok(appender) = appender else {
        return;
    };

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Warn));
    if let Ok(config) = config {
        let _ = log4rs::init_config(config);
    }
}

/// Sets up a panic hook that restores the terminal before printing the panic
/// message. This ensures the terminal is usable even if the application
/// panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::Forecast if app.navigator.is_open() => {
            ui::render_day_detail(frame, app);
        }
        AppState::Forecast => {
            ui::render_forecast(frame, app);
        }
    }
}

/// Renders a loading message while the forecast is being fetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading forecast data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    init_logging();

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::with_startup_config(config);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger the one-and-only fetch
    app.load_forecast().await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
