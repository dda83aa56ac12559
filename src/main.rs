//! Bill Splitter - split a shared bill evenly or by custom amounts
//!
//! Provides:
//! - A desktop window for entering people, amounts and tip (default command)
//! - `bill-splitter split` for the same calculation in a terminal
//! - `bill-splitter config` for inspecting saved preferences
//!
//! Tips are allocated in proportion to each person's share of the bill.

mod cli;
mod clipboard;
mod core;
mod logging;
mod native_ui;
mod settings;

use clap::Parser;
use cli::{exit_codes, Cli, Commands};

use crate::core::ValidationError;
use crate::settings::Settings;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output, cli.log_level.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let result = match cli.command {
        Some(Commands::Split(args)) => cli::split::run(args, cli.no_color),
        Some(Commands::Config(args)) => cli::config::run(args),
        Some(Commands::Gui) | None => native_ui::run(Settings::load()),
    };

    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", error_message(&e));
            categorize_error(&e)
        }
    }
}

/// User-facing text for an error; validation failures use the form wording
fn error_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<ValidationError>() {
        Some(validation) => validation.user_message(),
        None => format!("{:#}", e),
    }
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<ValidationError>().is_some() {
        exit_codes::VALIDATION_ERROR
    } else {
        exit_codes::UNEXPECTED_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_exit_code() {
        let err = anyhow::Error::from(ValidationError::InvalidTip);
        assert_eq!(categorize_error(&err), exit_codes::VALIDATION_ERROR);
        assert_eq!(error_message(&err), "Invalid value for Tip %.");
    }

    #[test]
    fn test_other_errors_are_unexpected() {
        let err = anyhow::anyhow!("Clipboard is not available");
        assert_eq!(categorize_error(&err), exit_codes::UNEXPECTED_FAILURE);
        assert_eq!(error_message(&err), "Clipboard is not available");
    }
}
