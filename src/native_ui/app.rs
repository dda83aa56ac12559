//! Main egui application - bill entry form, total prompt and summary window

use egui::{Align2, RichText, Vec2};
use egui_extras::{Column, TableBuilder};

use super::preferences::PreferencesWindow;
use super::theme::{styled_button, FontSize, Palette, Spacing, ERROR_COLOR};
use crate::clipboard;
use crate::core::{self, parse_people_count, BillForm, SplitMode, ValidationError};
use crate::settings::Settings;

/// One line of the people list
#[derive(Debug, Clone, Default)]
struct PersonRow {
    name: String,
    amount: String,
}

/// "Enter total bill amount" dialog, holding the form that is waiting for it
struct TotalPrompt {
    form: BillForm,
    input: String,
    focused: bool,
}

/// Rendered result, kept until the summary window is closed
struct SummaryView {
    rows: Vec<(String, String)>,
    summary: String,
}

/// Error or information message shown in a centered dialog
#[derive(Debug, Clone, PartialEq)]
struct Notice {
    title: &'static str,
    message: String,
}

impl Notice {
    fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error",
            message: message.into(),
        }
    }

    fn info(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

pub struct BillSplitterApp {
    settings: Settings,
    palette: Palette,
    currency: String,
    people_count: String,
    split_mode: SplitMode,
    tip: String,
    rows: Vec<PersonRow>,
    /// Row named by the last validation error
    invalid_row: Option<usize>,
    total_prompt: Option<TotalPrompt>,
    summary: Option<SummaryView>,
    notice: Option<Notice>,
    preferences: PreferencesWindow,
}

impl BillSplitterApp {
    fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let app = Self::with_settings(settings);
        app.palette.apply(&cc.egui_ctx);
        app
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            palette: Palette::for_mode(settings.theme),
            currency: settings.currency_symbol.clone(),
            people_count: String::new(),
            split_mode: settings.default_split_mode,
            tip: settings.default_tip_text(),
            rows: Vec::new(),
            invalid_row: None,
            total_prompt: None,
            summary: None,
            notice: None,
            preferences: PreferencesWindow::new(),
            settings,
        }
    }

    /// Rebuild the people list from the "Number of People" field
    fn set_people(&mut self) {
        match parse_people_count(&self.people_count) {
            Ok(count) => {
                tracing::debug!("Creating {} people entries", count);
                self.rows = vec![PersonRow::default(); count];
                self.invalid_row = None;
            }
            Err(e) => self.notice = Some(Notice::error(e.user_message())),
        }
    }

    fn form(&self) -> BillForm {
        BillForm {
            currency: self.currency.clone(),
            split_mode: self.split_mode,
            tip: self.tip.clone(),
            total: String::new(),
            names: self.rows.iter().map(|r| r.name.clone()).collect(),
            amounts: self.rows.iter().map(|r| r.amount.clone()).collect(),
        }
    }

    /// Start a calculation; even splits first ask for the total bill
    fn calculate(&mut self) {
        let form = self.form();
        if let Err(e) = form.precheck() {
            self.reject(&e);
            return;
        }

        match form.split_mode {
            SplitMode::Even => {
                self.total_prompt = Some(TotalPrompt {
                    form,
                    input: String::new(),
                    focused: false,
                });
            }
            SplitMode::Custom => self.finish(form),
        }
    }

    /// Continue an even split with the entered total. Empty input cancels.
    fn submit_total(&mut self, prompt: TotalPrompt) {
        if prompt.input.trim().is_empty() {
            return;
        }
        let mut form = prompt.form;
        form.total = prompt.input;
        self.finish(form);
    }

    fn finish(&mut self, form: BillForm) {
        match form.calculate() {
            Ok(result) => {
                tracing::info!(
                    "Split {} ways: grand total {}",
                    result.participants.len(),
                    core::format_amount(&result.currency, result.grand_total)
                );
                self.invalid_row = None;
                self.summary = Some(SummaryView {
                    rows: core::rows(&result),
                    summary: core::summary_text(&result),
                });
            }
            Err(e) => {
                tracing::debug!("Calculation rejected: {}", e);
                self.reject(&e);
            }
        }
    }

    fn reject(&mut self, e: &ValidationError) {
        self.invalid_row = e.participant_index();
        self.notice = Some(Notice::error(e.user_message()));
    }

    fn copy_summary(&mut self) {
        let Some(summary) = &self.summary else {
            return;
        };
        match clipboard::copy_text(&summary.summary) {
            Ok(()) if self.settings.confirm_copy => {
                self.notice = Some(Notice::info("Copied", "Summary copied to clipboard!"));
            }
            Ok(()) => {}
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.notice = Some(Notice::error(format!("{:#}", e)));
            }
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = self.settings.theme.toggled();
        self.palette = Palette::for_mode(self.settings.theme);
        self.palette.apply(ctx);
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {:#}", e);
        }
    }

    fn is_dialog_open(&self) -> bool {
        self.total_prompt.is_some() || self.notice.is_some()
    }

    fn draw_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("💵 Bill Splitter").size(FontSize::TITLE).strong());
        });
        ui.add_space(Spacing::SECTION);

        let mut set_clicked = false;
        egui::Grid::new("bill_form")
            .num_columns(2)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label("Currency Symbol:");
                ui.add(egui::TextEdit::singleline(&mut self.currency).desired_width(50.0));
                ui.end_row();

                ui.label("Number of People:");
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut self.people_count).desired_width(50.0));
                    set_clicked = styled_button(ui, &self.palette, "Set").clicked();
                });
                ui.end_row();

                ui.label("Split Type:");
                ui.horizontal(|ui| {
                    for mode in [SplitMode::Even, SplitMode::Custom] {
                        ui.radio_value(&mut self.split_mode, mode, mode.display_name());
                    }
                });
                ui.end_row();

                ui.label("Tip %:");
                ui.add(egui::TextEdit::singleline(&mut self.tip).desired_width(50.0));
                ui.end_row();
            });

        if set_clicked {
            self.set_people();
        }

        if !self.rows.is_empty() {
            ui.add_space(Spacing::SECTION);
            let amounts_enabled = self.split_mode == SplitMode::Custom;
            let invalid_row = self.invalid_row;
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                egui::Grid::new("people_grid")
                    .num_columns(3)
                    .spacing([8.0, Spacing::ROW])
                    .show(ui, |ui| {
                        ui.label("");
                        ui.strong("Name");
                        ui.strong("Amount");
                        ui.end_row();

                        for (i, row) in self.rows.iter_mut().enumerate() {
                            let number = RichText::new(format!("{}.", i + 1));
                            if invalid_row == Some(i) {
                                ui.label(number.color(ERROR_COLOR).strong());
                            } else {
                                ui.label(number);
                            }
                            ui.add(
                                egui::TextEdit::singleline(&mut row.name)
                                    .desired_width(160.0)
                                    .hint_text("Name"),
                            );
                            ui.add_enabled(
                                amounts_enabled,
                                egui::TextEdit::singleline(&mut row.amount)
                                    .desired_width(80.0)
                                    .hint_text("0.00"),
                            );
                            ui.end_row();
                        }
                    });
            });
        }

        ui.add_space(Spacing::SECTION);
        let mut calculate = false;
        let mut toggle = false;
        let mut preferences = false;
        ui.horizontal(|ui| {
            calculate = styled_button(ui, &self.palette, "Calculate").clicked();
            toggle = styled_button(ui, &self.palette, "🌙 Toggle Theme").clicked();
            preferences = styled_button(ui, &self.palette, "⚙ Preferences").clicked();
        });

        if calculate {
            self.calculate();
        }
        if toggle {
            self.toggle_theme(ctx);
        }
        if preferences {
            self.preferences.open(&self.settings);
        }
    }

    fn draw_total_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.total_prompt.as_mut() else {
            return;
        };

        let mut submit = false;
        let mut cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));

        egui::Window::new("Total Bill")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(format!("Enter total bill amount ({}):", prompt.form.currency));
                ui.add_space(Spacing::ROW);
                let response =
                    ui.add(egui::TextEdit::singleline(&mut prompt.input).desired_width(180.0));
                if !prompt.focused {
                    response.request_focus();
                    prompt.focused = true;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.add_space(Spacing::ROW);
                ui.horizontal(|ui| {
                    submit |= styled_button(ui, &self.palette, "OK").clicked();
                    cancel |= styled_button(ui, &self.palette, "Cancel").clicked();
                });
            });

        if submit {
            if let Some(prompt) = self.total_prompt.take() {
                self.submit_total(prompt);
            }
        } else if cancel {
            self.total_prompt = None;
        }
    }

    fn draw_summary(&mut self, ctx: &egui::Context) {
        let Some(summary) = &self.summary else {
            return;
        };

        let mut open = true;
        let mut copy = false;
        let mut close_all = false;

        egui::Window::new("📜 Bill Summary")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::RIGHT_TOP, Vec2::new(-8.0, 8.0))
            .min_width(280.0)
            .show(ctx, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::centered_and_justified(
                        egui::Direction::LeftToRight,
                    ))
                    .column(Column::exact(150.0))
                    .column(Column::exact(100.0))
                    .header(22.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("Name");
                        });
                        header.col(|ui| {
                            ui.strong("Amount Owed");
                        });
                    })
                    .body(|mut body| {
                        for (name, amount) in &summary.rows {
                            body.row(20.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(name.as_str());
                                });
                                row.col(|ui| {
                                    ui.label(amount.as_str());
                                });
                            });
                        }
                    });

                ui.add_space(Spacing::SECTION);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(summary.summary.as_str())
                            .size(FontSize::SUMMARY)
                            .strong(),
                    );
                });
                ui.add_space(Spacing::SECTION);
                ui.horizontal(|ui| {
                    copy = styled_button(ui, &self.palette, "📋 Copy").clicked();
                    close_all = styled_button(ui, &self.palette, "❌ Close").clicked();
                });
            });

        if copy {
            self.copy_summary();
        }
        if !open {
            self.summary = None;
        }
        if close_all {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn draw_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismiss = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        egui::Window::new(notice.title)
            .id(egui::Id::new("notice_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(notice.message.as_str()).size(FontSize::BODY));
                ui.add_space(Spacing::SECTION);
                ui.vertical_centered(|ui| {
                    dismiss |= styled_button(ui, &self.palette, "OK").clicked();
                });
            });

        if dismiss {
            self.notice = None;
        }
    }
}

impl eframe::App for BillSplitterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let form_enabled = !self.is_dialog_open();
        let frame = egui::Frame::default()
            .fill(self.palette.bg)
            .inner_margin(Spacing::PANEL_MARGIN);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.add_enabled_ui(form_enabled, |ui| self.draw_form(ui, ctx));
        });

        self.draw_total_prompt(ctx);
        self.draw_summary(ctx);
        self.draw_notice(ctx);

        if let Some(saved) = self.preferences.show(ctx, &self.palette) {
            self.settings = saved;
            self.persist_settings();
        }
    }
}

/// Run the application
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 600.0])
            .with_min_inner_size([360.0, 420.0])
            .with_position([0.0, 0.0])
            .with_resizable(true)
            .with_title("💵 Bill Splitter"),
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Bill Splitter",
        options,
        Box::new(move |cc| Ok(Box::new(BillSplitterApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
