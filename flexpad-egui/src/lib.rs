//! egui presentation layer for the flexpad keypad
//!
//! Provides the retained [`PadSurface`] the core builds against, the
//! per-frame [`draw_keypad`] pass, and a default dark theme.

mod haptics;
mod layout;
pub mod theme;
mod widget;

pub use haptics::LogHaptics;
pub use layout::PadSurface;
pub use theme::PadTheme;
pub use widget::{draw_keypad, KeypadResponse};
