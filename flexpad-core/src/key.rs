//! Per-slot key styling and behavior
//!
//! A [`KeyDefinition`] describes one button slot: its visible face, its
//! press semantics, and its colors. Definitions are immutable once built;
//! construction goes through consuming `with_*` builders.

use crate::function::ButtonFunction;
use crate::geometry::Rgba;

/// Haptic impulse strength requested when a key is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticStrength {
    Light,
    Medium,
    Heavy,
    Soft,
    Rigid,
}

/// What the button shows: a text label or a named image asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonFace {
    Label(String),
    Image(String),
}

impl ButtonFace {
    /// Text rendered for this face; for images, the asset name used as a
    /// lookup key by the presentation layer.
    pub fn text(&self) -> &str {
        match self {
            Self::Label(text) | Self::Image(text) => text,
        }
    }
}

/// Immutable description of one key slot
#[derive(Debug, Clone)]
pub struct KeyDefinition {
    face: ButtonFace,
    function: ButtonFunction,
    text_color: Rgba,
    background: Rgba,
    highlighted_background: Rgba,
    font: Option<String>,
    haptic: Option<HapticStrength>,
}

impl KeyDefinition {
    /// A labeled key with default colors and no haptics
    pub fn new(label: impl Into<String>, function: ButtonFunction) -> Self {
        Self {
            face: ButtonFace::Label(label.into()),
            function,
            text_color: Rgba::WHITE,
            background: Rgba::rgb(0x28, 0x28, 0x28),
            highlighted_background: Rgba::rgb(0x00, 0xff, 0x41),
            font: None,
            haptic: None,
        }
    }

    /// Same as [`KeyDefinition::new`] but faced with a named image asset
    pub fn with_image(image: impl Into<String>, function: ButtonFunction) -> Self {
        let mut def = Self::new("", function);
        def.face = ButtonFace::Image(image.into());
        def
    }

    pub fn with_colors(mut self, text: Rgba, normal: Rgba, highlighted: Rgba) -> Self {
        self.text_color = text;
        self.background = normal;
        self.highlighted_background = highlighted;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_haptic(mut self, strength: HapticStrength) -> Self {
        self.haptic = Some(strength);
        self
    }

    pub fn face(&self) -> &ButtonFace {
        &self.face
    }

    pub fn function(&self) -> &ButtonFunction {
        &self.function
    }

    /// Literal text this key contributes to the accumulated value
    pub fn backing_value(&self) -> &str {
        self.function.backing_value()
    }

    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn highlighted_background(&self) -> Rgba {
        self.highlighted_background
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn haptic(&self) -> Option<HapticStrength> {
        self.haptic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_value_tracks_function() {
        let key = KeyDefinition::new("7", ButtonFunction::Append("7".into()));
        assert_eq!(key.backing_value(), "7");

        let key = KeyDefinition::with_image("delete_icon", ButtonFunction::Backspace);
        assert_eq!(key.backing_value(), "");
        assert_eq!(key.face().text(), "delete_icon");
    }

    #[test]
    fn test_builders_set_styling() {
        let key = KeyDefinition::new("1", ButtonFunction::Append("1".into()))
            .with_colors(Rgba::BLACK, Rgba::rgb(1, 2, 3), Rgba::rgb(4, 5, 6))
            .with_font("mono")
            .with_haptic(HapticStrength::Light);

        assert_eq!(key.text_color(), Rgba::BLACK);
        assert_eq!(key.background(), Rgba::rgb(1, 2, 3));
        assert_eq!(key.highlighted_background(), Rgba::rgb(4, 5, 6));
        assert_eq!(key.font(), Some("mono"));
        assert_eq!(key.haptic(), Some(HapticStrength::Light));
    }
}
