//! Config command implementation
//!
//! Utilities for validating and inspecting the settings file.

use clap::{Parser, Subcommand};
use std::path::Path;

use crate::settings::Settings;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Validate the settings file
    Validate,
    /// Dump the effective settings to stdout
    Dump {
        /// Output format: json or toml
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// Show the settings file path
    Path,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Validate => validate_config(),
        ConfigCommand::Dump { format } => {
            println!("{}", render_settings(&Settings::load(), &format)?);
            Ok(())
        }
        ConfigCommand::Path => show_paths(),
    }
}

/// Outcome of checking one settings file
#[derive(Debug, PartialEq)]
enum FileCheck {
    Valid,
    Missing,
    Invalid(String),
}

fn check_settings_file(path: &Path) -> FileCheck {
    if !path.exists() {
        return FileCheck::Missing;
    }
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Settings>(&content) {
            Ok(_) => FileCheck::Valid,
            Err(e) => FileCheck::Invalid(e.to_string()),
        },
        Err(e) => FileCheck::Invalid(format!("Could not read file: {}", e)),
    }
}

/// Validate the settings file
fn validate_config() -> anyhow::Result<()> {
    print!("Checking settings.json... ");
    let path = Settings::settings_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

    match check_settings_file(&path) {
        FileCheck::Valid => {
            println!("OK");
            println!();
            println!("Configuration is valid.");
            Ok(())
        }
        FileCheck::Missing => {
            println!("NOT FOUND (using defaults)");
            Ok(())
        }
        FileCheck::Invalid(reason) => {
            println!("INVALID");
            println!("  - settings.json: {}", reason);
            anyhow::bail!("Configuration validation failed.");
        }
    }
}

/// Serialize settings in the requested format
fn render_settings(settings: &Settings, format: &str) -> anyhow::Result<String> {
    match format.to_lowercase().as_str() {
        "json" => Ok(serde_json::to_string_pretty(settings)?),
        "toml" => Ok(toml::to_string_pretty(settings)?),
        _ => anyhow::bail!("Unknown format '{}'. Supported formats: json, toml", format),
    }
}

/// Show configuration file paths
fn show_paths() -> anyhow::Result<()> {
    match Settings::settings_path() {
        Some(path) => {
            let exists = if path.exists() { "" } else { " (not found)" };
            println!("Settings: {}{}", path.display(), exists);
        }
        None => println!("Settings: (could not determine path)"),
    }
    Ok(())
}
