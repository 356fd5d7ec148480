mod app;
mod config;
mod desktop;
mod domain;
mod error;
mod input;
mod logging;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use config::{Cli, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli)?;

    logging::init_logging(&config.log_file, config.log_level())?;
    info!(
        work_minutes = config.timer.work_minutes,
        break_minutes = config.timer.break_minutes,
        theme = config.theme.name(),
        "starting focus-timer"
    );

    let mut app = AppState::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Cancel any pending countdown step
    app.shutdown();

    // Print any errors
    if let Err(err) = result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    info!("exiting");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Wait for input, but no longer than the next countdown step
        let timeout = app.ticker.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Apply any countdown steps that have come due
        app.tick(Instant::now());
    }
}
