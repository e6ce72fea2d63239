//! # VFCalc Interactive Form
//!
//! Terminal front end for the visceral fat calculator. Runs a full-screen
//! form on the alternate screen: edit the measurements, press Enter to
//! calculate, and both indices render as classification band charts. The
//! Store Data checkbox appends the session to the database on calculate.
//!
//! `vf_cli --interactive` launches this binary and forwards `--debug`
//! and `--db`.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;

/// Log file written in the working directory when --debug is set
const LOG_FILE: &str = ".log";

#[derive(Parser)]
#[command(name = "vf_tui")]
#[command(version, about = "Visceral fat and BMI calculator - interactive form", long_about = None)]
struct Cli {
    /// Write debug logging to the .log file
    #[arg(short, long)]
    debug: bool,

    /// Database file (defaults to VF_DATABASE_PATH or vf_data.db)
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    // Without --debug no subscriber is installed: a stderr writer would
    // scribble over the alternate screen.
    if args.debug {
        if let Err(e) = init_logging() {
            eprintln!("Warning: could not open {LOG_FILE}: {e}");
        }
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(args.db);
    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal before reporting any loop error.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn init_logging() -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let args = Cli::parse_from(["vf_tui", "--debug", "--db", "custom.db"]);
        assert!(args.debug);
        assert_eq!(args.db, Some(PathBuf::from("custom.db")));

        let args = Cli::parse_from(["vf_tui"]);
        assert!(!args.debug);
        assert_eq!(args.db, None);
    }
}
