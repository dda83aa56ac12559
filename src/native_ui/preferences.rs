//! Preferences window
//!
//! Edits a draft copy of the settings; nothing changes until Save.

use egui::{RichText, Vec2};

use super::theme::{styled_button, Palette, Spacing, ERROR_COLOR};
use crate::core::{parse_non_negative, SplitMode};
use crate::settings::Settings;

/// Preferences window state
#[derive(Default)]
pub struct PreferencesWindow {
    pub is_open: bool,
    draft: Settings,
    tip_text: String,
    status_msg: Option<String>,
}

impl PreferencesWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, settings: &Settings) {
        self.is_open = true;
        self.draft = settings.clone();
        self.tip_text = settings.default_tip_text();
        self.status_msg = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Validate the draft; returns the settings to store on success
    fn apply_draft(&mut self) -> Option<Settings> {
        match parse_non_negative(&self.tip_text) {
            Some(tip) => {
                self.draft.default_tip_percent = tip;
                self.status_msg = None;
                Some(self.draft.clone())
            }
            None => {
                self.status_msg = Some("Invalid value for Tip %.".to_string());
                None
            }
        }
    }

    /// Show the window; returns new settings when the user saves
    pub fn show(&mut self, ctx: &egui::Context, palette: &Palette) -> Option<Settings> {
        if !self.is_open {
            return None;
        }

        let mut save = false;
        let mut cancel = false;

        egui::Window::new("Preferences")
            .collapsible(false)
            .resizable(false)
            .default_size(Vec2::new(320.0, 220.0))
            .show(ctx, |ui| {
                egui::Grid::new("preferences_grid")
                    .num_columns(2)
                    .spacing([8.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Currency Symbol:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.draft.currency_symbol)
                                .desired_width(60.0),
                        );
                        ui.end_row();

                        ui.label("Default Tip %:");
                        ui.add(egui::TextEdit::singleline(&mut self.tip_text).desired_width(60.0));
                        ui.end_row();

                        ui.label("Default Split:");
                        ui.horizontal(|ui| {
                            for mode in [SplitMode::Even, SplitMode::Custom] {
                                ui.radio_value(
                                    &mut self.draft.default_split_mode,
                                    mode,
                                    mode.display_name(),
                                );
                            }
                        });
                        ui.end_row();
                    });

                ui.add_space(Spacing::ROW);
                ui.checkbox(&mut self.draft.confirm_copy, "Confirm after copying summary");

                if let Some(msg) = &self.status_msg {
                    ui.add_space(Spacing::ROW);
                    ui.label(RichText::new(msg).color(ERROR_COLOR));
                }

                ui.add_space(Spacing::SECTION);
                ui.horizontal(|ui| {
                    save = styled_button(ui, palette, "Save").clicked();
                    cancel = styled_button(ui, palette, "Cancel").clicked();
                });
            });

        if cancel {
            self.close();
            return None;
        }
        if save {
            let saved = self.apply_draft();
            if saved.is_some() {
                self.close();
            }
            return saved;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_copies_settings() {
        let settings = Settings {
            default_tip_percent: 12.5,
            ..Default::default()
        };
        let mut prefs = PreferencesWindow::new();
        prefs.open(&settings);
        assert!(prefs.is_open);
        assert_eq!(prefs.tip_text, "12.5");
        assert_eq!(prefs.draft, settings);
    }

    #[test]
    fn test_apply_draft_parses_tip() {
        let mut prefs = PreferencesWindow::new();
        prefs.open(&Settings::default());
        prefs.tip_text = " 18 ".to_string();
        prefs.draft.currency_symbol = "$".to_string();

        let saved = prefs.apply_draft().unwrap();
        assert_eq!(saved.default_tip_percent, 18.0);
        assert_eq!(saved.currency_symbol, "$");
    }

    #[test]
    fn test_apply_draft_rejects_bad_tip() {
        let mut prefs = PreferencesWindow::new();
        prefs.open(&Settings::default());
        prefs.tip_text = "-3".to_string();

        assert!(prefs.apply_draft().is_none());
        assert_eq!(prefs.status_msg.as_deref(), Some("Invalid value for Tip %."));
    }
}
