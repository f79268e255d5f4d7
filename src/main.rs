// termpanes: a three-pane terminal console

use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;

use clap::Parser;
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use termpanes::cli::Cli;
use termpanes::config::Config;
use termpanes::error::{BackendInitError, Result};
use termpanes::layout::Dimensions;
use termpanes::ui::{screen, App, CrosstermEvents};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;

    let config = Config::load(cli.config.as_deref())?;
    let console = config.console(cli.variant)?;
    info!(variant = ?cli.variant, "starting console");

    let (width, height) = terminal::size().map_err(BackendInitError)?;
    let mut app = App::new(console, Dimensions::new(width, height))?;

    let mut terminal = setup_terminal()?;
    let res = app.run(&mut terminal, &mut CrosstermEvents);
    restore_terminal(&mut terminal)?;

    res?;
    Ok(())
}

/// Logs go to a file so they never draw over the alternate screen
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));
    let builder = fmt().with_env_filter(filter).with_target(false).with_ansi(false);

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

/// Initialize the terminal for TUI mode, undoing every step taken so far
/// if a later one fails.
fn setup_terminal() -> std::result::Result<Terminal<CrosstermBackend<Stdout>>, BackendInitError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    screen::rollback_on_err(screen::enter(&mut stdout), &mut stdout)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()));
    Ok(screen::rollback_on_err(terminal, &mut stdout)?)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    screen::leave(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}
