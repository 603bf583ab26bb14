//! Dungeon Dice terminal application.
//!
//! Pick a die from the grid and roll it. The grid reflows as the terminal
//! is resized; dice that don't fill a whole row sit centered underneath.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for scripting:
//!
//! ```bash
//! cargo run -p dungeon-dice -- --headless --width 430 --seed 7
//! ```

mod app;
mod board;
mod config;
mod events;
mod headless;
mod logging;
mod ui;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use config::{Config, Mode};
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = match Config::from_env(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if config.mode == Mode::Help {
        print_help();
        return Ok(());
    }

    let _log_guard = match logging::init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "Warning: could not open log file in {}: {e}",
                config.log_dir.display()
            );
            None
        }
    };
    tracing::info!(mode = ?config.mode, seed = ?config.seed, "starting");

    if config.mode == Mode::Headless {
        return headless::run_headless(&config).map_err(|e| e.into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(&config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "terminal error");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        // Render; the frame area drives the grid plan
        terminal.draw(|f| {
            app.resize(f.area());
            render(f, &app);
        })?;

        if event::poll(Duration::from_millis(250))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        }
    }
}

fn print_help() {
    println!("Dungeon Dice - roll polyhedral dice");
    println!();
    println!("USAGE:");
    println!("  dungeon-dice [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help       Show this help message");
    println!("  --headless       Run in headless mode (line commands, no TUI)");
    println!("  --width <W>      Initial width for headless mode (default: 80)");
    println!("  --seed <N>       Seed the dice for reproducible rolls");
    println!();
    println!("ENVIRONMENT:");
    println!("  {}   Button width in cells (default: 12)", config::BUTTON_WIDTH_VAR);
    println!("  {}        Padding on each side (default: 1)", config::PADDING_VAR);
    println!("  {}        Space between buttons (default: 1)", config::SPACING_VAR);
    println!("  {}        Directory for {}", config::LOG_DIR_VAR, logging::LOG_FILE_NAME);
    println!("  RUST_LOG                    Log filter");
    println!();
    println!("KEYS:");
    println!("  arrows / h j k l   Move selection");
    println!("  Enter / Space      Roll the selected die");
    println!("  1-7                Roll a die directly");
    println!("  mouse click        Roll the clicked die");
    println!("  q / Esc            Quit");
}
