//! goaltrack CLI
//!
//! Track goals for the current session from a single terminal screen.
//! The list lives in memory only; quitting discards it.

use std::process::ExitCode;

use clap::Parser;

/// The binary takes no configuration: no options, no environment
/// variables, no config file. clap provides --help and --version.
#[derive(Parser)]
#[command(name = "goaltrack")]
#[command(about = "Single-screen terminal goal tracker")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match goaltrack::tui::run::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
