//! hunt_tui - Interactive TUI for planning hunts
//!
//! Usage: `hunt_tui [CONFIG]` where CONFIG is a `.toml` or `.json` hunt
//! config. Set `HUNT_LOG=<file>` to write logs to a file.

mod app;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hunt_core::ConfigError;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid hunt config: {0}")]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), AppError> {
    init_logging()?;

    // Tables are fixed for the whole session
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (model, source) = App::load_model(config_path.as_deref())?;
    let mut app = App::new(model, source);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome.map_err(AppError::from)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match (key.code, key.modifiers) {
                (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                (KeyCode::Tab, _) => app.next_tab(),
                (KeyCode::BackTab, _) => app.prev_tab(),
                (KeyCode::Char('?'), _) => app.toggle_help(),
                (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.adjust(-1),
                (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.adjust(1),
                (KeyCode::PageDown, _) => app.adjust(-10),
                (KeyCode::PageUp, _) => app.adjust(10),
                (KeyCode::Char(c), _) if c.is_ascii_digit() => {
                    if let Some(digit) = c.to_digit(10) {
                        app.push_digit(digit);
                    }
                }
                (KeyCode::Backspace, _) => app.pop_digit(),
                (KeyCode::Char('r'), _) => app.reset(),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Log to the file named by `HUNT_LOG`; stay silent otherwise so the
/// terminal UI is not drawn over.
fn init_logging() -> io::Result<()> {
    let Ok(path) = std::env::var("HUNT_LOG") else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
