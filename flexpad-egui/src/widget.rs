//! The keypad widget pass
//!
//! One call per frame: advances any show/hide transition, applies pending
//! highlight requests, paints every generated button, and routes clicks
//! back into the keypad.

use std::time::Instant;

use egui::{Align2, Color32, FontId, Sense, Ui};
use flexpad_core::{Haptics, Keypad, Rect, Rgba};

/// What happened during one keypad pass
#[derive(Debug, Default, Clone, Copy)]
pub struct KeypadResponse {
    /// Index of the button pressed this frame, if any
    pub pressed: Option<usize>,
}

/// Draw `keypad` into the current `ui` region and dispatch any press.
///
/// Button frames are interpreted relative to the top-left of the region,
/// matching the coordinate space the [`crate::PadSurface`] was laid out in.
/// Image faces fall back to rendering their asset name; resolving real
/// assets stays with the host application.
pub fn draw_keypad(ui: &mut Ui, keypad: &mut Keypad, haptics: &impl Haptics) -> KeypadResponse {
    keypad.tick(Instant::now());
    keypad.sync_highlight();

    let origin = ui.max_rect().min;
    let mut pressed = None;

    for (index, button) in keypad.buttons().iter().enumerate() {
        if button.is_hidden() || button.opacity() <= 0.0 {
            continue;
        }
        let rect = screen_rect(origin, button.frame());
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            continue;
        }

        let response = ui.interact(rect, ui.id().with(("flexpad", index)), Sense::click());
        let opacity = button.opacity();
        let radius = rect.width().min(rect.height()) / 2.0; // circular keys

        let painter = ui.painter();
        painter.rect_filled(rect, radius, color32(button.background(), opacity));
        let face = button.face().text();
        if !face.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                face,
                FontId::monospace(rect.height() * 0.38),
                color32(button.text_color(), opacity),
            );
        }

        if response.clicked() {
            pressed = Some(index);
        }
    }

    if let Some(index) = pressed {
        keypad.press(index, haptics);
    }
    KeypadResponse { pressed }
}

fn screen_rect(origin: egui::Pos2, frame: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + frame.origin.x, origin.y + frame.origin.y),
        egui::vec2(frame.size.w, frame.size.h),
    )
}

fn color32(color: Rgba, opacity: f32) -> Color32 {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)) as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}
