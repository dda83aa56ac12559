//! Split command implementation
//!
//! Builds the same form the desktop window collects, so validation and
//! results are identical in both front ends.

use clap::Args;

use crate::clipboard;
use crate::core::{self, BillForm, BillResult, SplitMode};
use crate::settings::Settings;

/// Arguments for the split command
#[derive(Args, Debug, Default)]
pub struct SplitArgs {
    /// Participant name (repeat once per person, in order)
    #[arg(short = 'n', long = "name")]
    pub names: Vec<String>,

    /// Base amount per participant for custom splits (same order as --name)
    #[arg(short = 'a', long = "amount", allow_hyphen_values = true)]
    pub amounts: Vec<String>,

    /// Split mode: even or custom [default: from settings]
    #[arg(short, long, env = "BILLSPLIT_MODE")]
    pub mode: Option<SplitMode>,

    /// Total bill amount for even splits
    #[arg(short, long, allow_hyphen_values = true)]
    pub total: Option<String>,

    /// Tip percentage [default: from settings]
    #[arg(long, env = "BILLSPLIT_TIP", allow_hyphen_values = true)]
    pub tip: Option<String>,

    /// Currency symbol [default: from settings]
    #[arg(short, long, env = "BILLSPLIT_CURRENCY")]
    pub currency: Option<String>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Copy the summary to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use 'text' or 'json'", s)),
        }
    }
}

impl SplitArgs {
    /// Fill unset options from settings and build the raw form
    pub fn to_form(&self, settings: &Settings) -> BillForm {
        BillForm {
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| settings.currency_symbol.clone()),
            split_mode: self.mode.unwrap_or(settings.default_split_mode),
            tip: self.tip.clone().unwrap_or_else(|| settings.default_tip_text()),
            total: self.total.clone().unwrap_or_default(),
            names: self.names.clone(),
            amounts: self.amounts.clone(),
        }
    }
}

/// Run the split command
pub fn run(args: SplitArgs, no_color: bool) -> anyhow::Result<()> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        args.format
    };

    let settings = Settings::load();
    let form = args.to_form(&settings);

    tracing::debug!(
        "Running split command: mode={}, people={}, format={:?}",
        form.split_mode,
        form.names.len(),
        format
    );

    let result = form.calculate()?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&result, !no_color && is_terminal())),
        OutputFormat::Json => print_json_output(&result, args.pretty)?,
    }

    if args.copy {
        clipboard::copy_text(&core::summary_text(&result))?;
        eprintln!("Summary copied to clipboard!");
    }

    Ok(())
}

/// Render the result table and summary as terminal text
fn render_text(result: &BillResult, use_color: bool) -> String {
    let rows = core::rows(result);
    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    if use_color {
        out.push_str("\x1b[1mBill Summary\x1b[0m\n");
    } else {
        out.push_str("Bill Summary\n");
    }
    out.push_str(&format!("  {:<width$}  Amount Owed\n", "Name", width = width));
    for (name, amount) in &rows {
        out.push_str(&format!("  {:<width$}  {}\n", name, amount, width = width));
    }
    out.push('\n');
    out.push_str(&core::summary_text(result));
    out.push('\n');

    let drift = result.rounding_drift();
    if drift.abs() >= 0.005 {
        out.push_str(&format!(
            "(Rounded shares add up to {})\n",
            core::format_amount(&result.currency, result.allocated_total())
        ));
    }
    out
}

/// Print JSON output
fn print_json_output(result: &BillResult, pretty: bool) -> anyhow::Result<()> {
    let payload = core::to_json(result);
    let output = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    println!("{}", output);
    Ok(())
}

/// Check if stdout is a terminal
fn is_terminal() -> bool {
    use std::io::IsTerminal;
    std::io::stdout().is_terminal()
}
