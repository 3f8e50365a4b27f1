//! Mobile Ledger - Entry Point
//!
//! Initializes logging and the terminal, opens the ledger, and runs the
//! event loop until the user quits.

use std::io;
use std::path::Path;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use mobile_ledger::logging::{self, LOG_FILE};
use mobile_ledger::{App, AppConfig};

fn main() -> Result<()> {
    logging::init(Path::new(LOG_FILE));

    log::info!("Starting Mobile Ledger v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    let mut app = App::start(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Mobile Ledger shut down cleanly");
    result
}

/// Redraw, then block for the next key press
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events, not releases
            if key.kind == KeyEventKind::Press && app.handle_input(key)? {
                break;
            }
        }
    }

    Ok(())
}
