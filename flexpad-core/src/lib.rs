//! UI-agnostic keypad core
//!
//! Discovers tagged placeholder slots in a host container, replaces each
//! with a generated button, and accumulates a text value as buttons are
//! pressed. The core depends on no widget toolkit; presentation lives
//! behind the [`ViewHost`], [`KeypadDelegate`], and [`Haptics`] traits.

mod animation;
mod config;
mod function;
mod geometry;
mod host;
mod key;
mod keypad;

pub use animation::Timing;
pub use config::{BuildError, ConfigError, KeypadConfig};
pub use function::ButtonFunction;
pub use geometry::{Point, Rect, Rgba, Size};
pub use host::{Haptics, KeypadDelegate, NoHaptics, ViewHost};
pub use key::{ButtonFace, HapticStrength, KeyDefinition};
pub use keypad::{HighlightHandle, KeyButton, Keypad};
