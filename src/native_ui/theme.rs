//! Theme colors and styling for the bill splitter window

use egui::{Color32, RichText, Rounding, Stroke};

use crate::settings::ThemeMode;

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark: bool,
    /// Window and panel background
    pub bg: Color32,
    /// Text
    pub fg: Color32,
    /// Text entry background
    pub entry_bg: Color32,
    /// Button fill
    pub btn_bg: Color32,
    /// Button text
    pub btn_fg: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        dark: false,
        bg: Color32::from_rgb(0xff, 0xff, 0xff),
        fg: Color32::from_rgb(0x00, 0x00, 0x00),
        entry_bg: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        btn_bg: Color32::from_rgb(0x4c, 0xaf, 0x50),
        btn_fg: Color32::from_rgb(0xff, 0xff, 0xff),
    };

    pub const DARK: Palette = Palette {
        dark: true,
        bg: Color32::from_rgb(0x2c, 0x2c, 0x2c),
        fg: Color32::from_rgb(0xff, 0xff, 0xff),
        entry_bg: Color32::from_rgb(0x44, 0x44, 0x44),
        btn_bg: Color32::from_rgb(0x21, 0x96, 0xf3),
        btn_fg: Color32::from_rgb(0xff, 0xff, 0xff),
    };

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }

    /// Apply to every window of the context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.bg;
        visuals.window_fill = self.bg;
        visuals.extreme_bg_color = self.entry_bg;
        visuals.override_text_color = Some(self.fg);
        visuals.selection.bg_fill = self.btn_bg;
        ctx.set_visuals(visuals);
    }
}

/// Highlight for fields named by a validation error
pub const ERROR_COLOR: Color32 = Color32::from_rgb(255, 69, 58);

/// Button color while pressed or hovered
pub const BUTTON_ACTIVE: Color32 = Color32::from_rgb(0x45, 0xa0, 0x49);

pub struct FontSize;

impl FontSize {
    pub const TITLE: f32 = 24.0;
    pub const BODY: f32 = 14.0;
    pub const SUMMARY: f32 = 16.0;
    pub const BUTTON: f32 = 13.0;
    /// Extra size a button grows by on hover
    pub const BUTTON_GROW: f32 = 1.5;
}

pub struct Spacing;

impl Spacing {
    pub const SECTION: f32 = 10.0;
    pub const ROW: f32 = 5.0;
    pub const PANEL_MARGIN: f32 = 16.0;
}

pub struct Radius;

impl Radius {
    pub const BUTTON: f32 = 4.0;
}

/// Linear mix of two colors; `ratio` 0.0 gives `a`, 1.0 gives `b`
pub fn blend(a: Color32, b: Color32, ratio: f32) -> Color32 {
    let ratio = ratio.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * ratio) as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Flat themed button that grows slightly while hovered
pub fn styled_button(ui: &mut egui::Ui, palette: &Palette, label: &str) -> egui::Response {
    let id = ui.id().with(("styled_button", label));
    let was_hovered = ui.data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
    let t = ui.ctx().animate_bool(id.with("hover"), was_hovered);

    let text = RichText::new(label)
        .size(FontSize::BUTTON + FontSize::BUTTON_GROW * t)
        .strong()
        .color(palette.btn_fg);
    let button = egui::Button::new(text)
        .fill(blend(palette.btn_bg, BUTTON_ACTIVE, t))
        .stroke(Stroke::NONE)
        .rounding(Rounding::same(Radius::BUTTON));

    let response = ui.add(button).on_hover_cursor(egui::CursorIcon::PointingHand);
    let hovered = response.hovered();
    ui.data_mut(|d| d.insert_temp(id, hovered));
    response
}
