use egui::{Color32, FontFamily, FontId, TextStyle, Visuals};
use flexpad_core::Rgba;

// Chrome palette
pub const BG: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);
pub const BG_PANEL: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);
pub const TEXT: Color32 = Color32::from_rgb(0xb4, 0xff, 0xb4);
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x50, 0x80, 0x50);
pub const DIM: Color32 = Color32::from_rgb(0x28, 0x28, 0x28);
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xff, 0x41);

// Default key colors, ready to feed into KeyDefinition::with_colors
pub const KEY_TEXT: Rgba = Rgba::rgb(0xb4, 0xff, 0xb4);
pub const KEY_BG: Rgba = Rgba::rgb(0x28, 0x28, 0x28);
pub const KEY_BG_HIGHLIGHT: Rgba = Rgba::rgb(0x00, 0xff, 0x41);
pub const KEY_DANGER: Rgba = Rgba::rgb(0xff, 0x32, 0x32);

pub struct PadTheme;

impl PadTheme {
    /// Apply the dark monospace look to the whole context
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (TextStyle::Small, FontId::new(10.0, FontFamily::Monospace)),
            (TextStyle::Body, FontId::new(13.0, FontFamily::Monospace)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
            (TextStyle::Button, FontId::new(13.0, FontFamily::Monospace)),
            (TextStyle::Heading, FontId::new(18.0, FontFamily::Monospace)),
        ]
        .into();
        style.spacing.item_spacing = egui::vec2(4.0, 4.0);

        let mut visuals = Visuals::dark();
        visuals.panel_fill = BG;
        visuals.window_fill = BG_PANEL;
        visuals.extreme_bg_color = BG;
        visuals.faint_bg_color = DIM;
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT);
        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT);
        visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, ACCENT);

        style.visuals = visuals;
        ctx.set_style(style);
    }
}
