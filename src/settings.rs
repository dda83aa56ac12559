//! Settings management for Bill Splitter
//!
//! Handles persistent user preferences:
//! - Currency symbol
//! - Light/dark theme
//! - Default tip percentage and split mode
//!
//! Bills themselves are never stored.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::SplitMode;

/// Window color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Symbol prefixed to every amount
    pub currency_symbol: String,

    /// Color scheme for the desktop window
    pub theme: ThemeMode,

    /// Tip percentage pre-filled in the form
    pub default_tip_percent: f64,

    /// Split mode selected when the window opens
    pub default_split_mode: SplitMode,

    /// Show a confirmation after copying the summary
    pub confirm_copy: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            theme: ThemeMode::Light,
            default_tip_percent: 0.0,
            default_split_mode: SplitMode::Even,
            confirm_copy: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("BillSplitter").join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a specific file, falling back to defaults if it is
    /// missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Self::parse(&content))
        {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, sanitising values the form cannot use
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let mut settings: Settings = serde_json::from_str(content)?;
        if !settings.default_tip_percent.is_finite() || settings.default_tip_percent < 0.0 {
            settings.default_tip_percent = 0.0;
        }
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::settings_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine settings path"))?;
        self.save_to(&path)
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Could not write {}", path.display()))?;

        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Tip field text as pre-filled in the form ("0", "12.5")
    pub fn default_tip_text(&self) -> String {
        self.default_tip_percent.to_string()
    }
}
