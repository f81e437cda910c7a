//! Flexpad demo - PIN entry pad
//!
//! Wires a keypad into an eframe window: digits accumulate a value, the
//! delegate reports changes, and the bottom controls exercise show/hide
//! animation and highlight requests.

mod config;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use flexpad_core::{
    ButtonFunction, HapticStrength, Haptics, KeyDefinition, Keypad, KeypadConfig, KeypadDelegate,
    Rect,
};
use flexpad_egui::{draw_keypad, theme, LogHaptics, PadSurface, PadTheme};

use crate::config::AppConfig;

/// Keypad layout area inside the central panel
const PAD_BOUNDS: Rect = Rect::new(20.0, 20.0, 264.0, 440.0);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([340.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "flexpad",
        options,
        Box::new(|_cc| Ok(Box::new(PadDemo::new()?))),
    )
    .map_err(|err| anyhow::anyhow!("eframe: {err}"))
}

/// Delegate shown in the status panel
#[derive(Default)]
struct StatusDelegate {
    value: String,
    last_event: String,
}

impl KeypadDelegate for StatusDelegate {
    fn value_changed(&mut self, value: &str, id: &str) {
        self.value = value.to_string();
        self.last_event = format!("[{id}] value changed");
        info!(id, value, "keypad value changed");
    }

    fn show_hide_began(&mut self, id: &str, will_show: bool) {
        self.last_event = format!("[{id}] {} begins", if will_show { "show" } else { "hide" });
    }

    fn show_hide_complete(&mut self, id: &str, is_shown: bool, animated: bool) {
        self.last_event = format!(
            "[{id}] {} complete (animated: {animated})",
            if is_shown { "show" } else { "hide" }
        );
        info!(id, is_shown, animated, "keypad visibility settled");
    }
}

/// Haptics toggled by the config checkbox
struct DemoHaptics {
    enabled: bool,
}

impl Haptics for DemoHaptics {
    fn impulse(&self, strength: HapticStrength) {
        if self.enabled {
            LogHaptics.impulse(strength);
        }
    }
}

struct PadDemo {
    keypad: Keypad,
    delegate: Rc<RefCell<StatusDelegate>>,
    config: AppConfig,
    /// Next index for the spotlight demo; one past the end clears it
    spotlight: usize,
    theme_applied: bool,
}

impl PadDemo {
    fn new() -> anyhow::Result<Self> {
        let mut keypad = Keypad::new();
        let delegate = Rc::new(RefCell::new(StatusDelegate::default()));
        let as_dyn: Rc<RefCell<dyn KeypadDelegate>> = delegate.clone();

        let mut config = KeypadConfig::new("pin").delegate(Rc::downgrade(&as_dyn));
        for digit in 1..=9u32 {
            config = config.key(digit, digit_key(digit.to_string()));
        }
        config = config
            .key(
                10,
                KeyDefinition::new(".", ButtonFunction::AppendIfNonEmpty(".".into()))
                    .with_colors(theme::KEY_TEXT, theme::KEY_BG, theme::KEY_BG_HIGHLIGHT),
            )
            .key(11, digit_key("0"))
            .key(
                12,
                KeyDefinition::new("⌫", ButtonFunction::Backspace)
                    .with_colors(theme::KEY_TEXT, theme::KEY_BG, theme::KEY_DANGER)
                    .with_haptic(HapticStrength::Light),
            )
            .key(
                13,
                KeyDefinition::new("C", ButtonFunction::Reset)
                    .with_colors(theme::KEY_TEXT, theme::KEY_BG, theme::KEY_DANGER)
                    .with_haptic(HapticStrength::Medium),
            )
            .key(14, digit_key("00"))
            .key(
                15,
                KeyDefinition::new("✓", ButtonFunction::custom(|| info!("pin submitted")))
                    .with_haptic(HapticStrength::Heavy),
            );

        let mut surface = PadSurface::grid(
            PAD_BOUNDS,
            &[
                &[1, 2, 3],
                &[4, 5, 6],
                &[7, 8, 9],
                &[10, 11, 12],
                &[13, 14, 15],
            ],
            8.0,
        );
        keypad.build(config, &mut surface)?;

        Ok(Self {
            keypad,
            delegate,
            config: AppConfig::load(),
            spotlight: 0,
            theme_applied: false,
        })
    }

    fn save_config(&self) {
        if let Err(err) = self.config.save() {
            warn!(%err, "failed to save config");
        }
    }
}

fn digit_key(label: impl Into<String>) -> KeyDefinition {
    let label = label.into();
    let function = ButtonFunction::Append(label.clone());
    KeyDefinition::new(label, function).with_colors(
        theme::KEY_TEXT,
        theme::KEY_BG,
        theme::KEY_BG_HIGHLIGHT,
    )
}

impl eframe::App for PadDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            PadTheme::apply(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.add_space(4.0);
            let delegate = self.delegate.borrow();
            let shown = if delegate.value.is_empty() {
                "—"
            } else {
                delegate.value.as_str()
            };
            ui.heading(format!("PIN: {shown}"));
            ui.label(egui::RichText::new(&delegate.last_event).color(theme::TEXT_DIM));
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let label = if self.keypad.is_shown() { "Hide" } else { "Show" };
                if ui.button(label).clicked() {
                    let show = !self.keypad.is_shown();
                    self.keypad.set_visible(show, self.config.animations);
                }
                if ui.button("Spotlight").clicked() {
                    // Walking one past the last button clears every highlight.
                    self.keypad.highlight(self.spotlight);
                    self.spotlight = (self.spotlight + 1) % (self.keypad.buttons().len() + 1);
                }
            });
            ui.horizontal(|ui| {
                if ui
                    .checkbox(&mut self.config.animations, "animate")
                    .changed()
                {
                    self.save_config();
                }
                if ui.checkbox(&mut self.config.haptics, "haptics").changed() {
                    self.save_config();
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let haptics = DemoHaptics {
                enabled: self.config.haptics,
            };
            draw_keypad(ui, &mut self.keypad, &haptics);
        });

        // Keep animating transitions without user input.
        ctx.request_repaint_after(Duration::from_millis(33));
    }
}
