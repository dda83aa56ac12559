//! CLI module - command-line interface
//!
//! - `bill-splitter` - opens the desktop window (same as `gui`)
//! - `bill-splitter split` - split a bill in the terminal
//! - `bill-splitter config` - inspect settings

pub mod config;
pub mod split;

use clap::{Parser, Subcommand};

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
}

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT"),
    " ",
    env!("BUILD_DATE"),
    ", ",
    env!("BUILD_TARGET"),
    ")"
);

/// Bill Splitter - split a shared bill evenly or by custom amounts
///
/// The tip is allocated in proportion to each person's share.
/// Opens the desktop window when no subcommand is given.
#[derive(Parser, Debug)]
#[command(name = "bill-splitter")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit machine-readable logs (JSON) to stderr
    #[arg(long = "json-output", global = true)]
    pub json_output: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long = "log-level", global = true, value_parser = ["trace", "verbose", "debug", "info", "warning", "warn", "error", "critical"])]
    pub log_level: Option<String>,

    /// Disable ANSI colors in output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the desktop window (default command)
    Gui,

    /// Split a bill and print each person's share
    Split(split::SplitArgs),

    /// Inspect or validate the settings file
    Config(config::ConfigArgs),
}
