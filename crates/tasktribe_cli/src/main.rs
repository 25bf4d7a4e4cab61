//! Interactive entry point for the TaskTribe ambassador manager.
//!
//! # Responsibility
//! - Parse command-line logging options.
//! - Build one `Roster` and hand stdin/stdout to the menu loop.

mod menu;

use clap::Parser;
use log::info;
use menu::Menu;
use std::path::PathBuf;
use std::process::ExitCode;
use tasktribe_core::{default_log_level, init_logging, LogConfig, Roster};

/// In-memory roster and task tracker for the ambassador program
#[derive(Parser, Debug)]
#[command(name = "tasktribe")]
#[command(version, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASKTRIBE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "TASKTRIBE_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout belongs to the menu, so logs only ever go to files.
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = LogConfig::new(level, log_dir).and_then(|config| init_logging(&config)) {
            eprintln!("logging disabled: {err}");
        }
    }

    info!(
        "event=session_start module=cli status=ok version={}",
        tasktribe_core::core_version()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock(), Roster::new());
    match menu.run() {
        Ok(()) => {
            info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
