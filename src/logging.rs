//! Logging setup
//!
//! Logs go to stderr so text and JSON results on stdout stay clean.
//! `RUST_LOG` takes precedence over the command-line flags.

use tracing_subscriber::EnvFilter;

/// Map a `--log-level` value (including aliases) to a tracing level name
pub fn normalize_level(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "verbose" | "debug" => "debug",
        "info" => "info",
        "warning" | "warn" => "warn",
        "error" | "critical" => "error",
        _ => "warn",
    }
}

/// Pick the effective level from the global flags
pub fn effective_level(verbose: bool, log_level: Option<&str>) -> &'static str {
    match log_level {
        Some(level) => normalize_level(level),
        None if verbose => "debug",
        None => "warn",
    }
}

/// Install the global tracing subscriber
pub fn init(verbose: bool, json_output: bool, log_level: Option<&str>) -> anyhow::Result<()> {
    let level = effective_level(verbose, log_level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bill_splitter={}", level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if json_output {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("{}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level_aliases() {
        assert_eq!(normalize_level("verbose"), "debug");
        assert_eq!(normalize_level("WARNING"), "warn");
        assert_eq!(normalize_level("critical"), "error");
        assert_eq!(normalize_level("trace"), "trace");
    }

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level(false, None), "warn");
        assert_eq!(effective_level(true, None), "debug");
        assert_eq!(effective_level(true, Some("error")), "error");
    }
}
