//! Button press semantics
//!
//! Every key on the pad carries one [`ButtonFunction`] describing what a
//! press does to the keypad's accumulated value. Dispatch is an exhaustive
//! match so adding a variant forces every call site to decide.

use std::fmt;
use std::sync::Arc;

/// What pressing a button means for the accumulated value
#[derive(Clone)]
pub enum ButtonFunction {
    /// Clear the accumulated value
    Reset,
    /// Remove the last character; no-op when already empty
    Backspace,
    /// Append the text only when the value is currently non-empty
    ///
    /// Useful for separators and decimal points that make no sense as a
    /// leading character.
    AppendIfNonEmpty(String),
    /// Unconditionally append the text
    Append(String),
    /// Replace the whole value with the text
    Overwrite(String),
    /// Run an arbitrary caller-supplied action; the value is untouched
    Custom(Arc<dyn Fn() + Send + Sync>),
    /// A button that exists but triggers nothing
    Noop,
}

impl ButtonFunction {
    /// Convenience constructor wrapping a closure
    pub fn custom(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(action))
    }

    /// The literal text this function contributes to the value
    ///
    /// Independent of the button's visible face, so a key can display an
    /// icon while backing a different text value. Empty for functions that
    /// carry no text.
    pub fn backing_value(&self) -> &str {
        match self {
            Self::AppendIfNonEmpty(text) | Self::Append(text) | Self::Overwrite(text) => text,
            Self::Reset | Self::Backspace | Self::Custom(_) | Self::Noop => "",
        }
    }

    /// Apply one press to the accumulated value
    pub fn apply(&self, value: &mut String) {
        match self {
            Self::Reset => value.clear(),
            Self::Backspace => {
                value.pop();
            }
            Self::AppendIfNonEmpty(text) => {
                if !value.is_empty() {
                    value.push_str(text);
                }
            }
            Self::Append(text) => value.push_str(text),
            Self::Overwrite(text) => {
                value.clear();
                value.push_str(text);
            }
            Self::Custom(action) => action(),
            Self::Noop => {}
        }
    }
}

impl fmt::Debug for ButtonFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => f.write_str("Reset"),
            Self::Backspace => f.write_str("Backspace"),
            Self::AppendIfNonEmpty(text) => f.debug_tuple("AppendIfNonEmpty").field(text).finish(),
            Self::Append(text) => f.debug_tuple("Append").field(text).finish(),
            Self::Overwrite(text) => f.debug_tuple("Overwrite").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Noop => f.write_str("Noop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn applied(function: ButtonFunction, start: &str) -> String {
        let mut value = start.to_string();
        function.apply(&mut value);
        value
    }

    #[test]
    fn test_reset_clears_any_value() {
        assert_eq!(applied(ButtonFunction::Reset, ""), "");
        assert_eq!(applied(ButtonFunction::Reset, "1234"), "");
    }

    #[test]
    fn test_backspace_drops_last_char() {
        assert_eq!(applied(ButtonFunction::Backspace, "12"), "1");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        assert_eq!(applied(ButtonFunction::Backspace, ""), "");
    }

    #[test]
    fn test_append_if_nonempty_skips_empty_value() {
        let function = ButtonFunction::AppendIfNonEmpty("5".into());
        assert_eq!(applied(function.clone(), ""), "");
        assert_eq!(applied(function, "3"), "35");
    }

    #[test]
    fn test_append_is_unconditional() {
        let function = ButtonFunction::Append("7".into());
        assert_eq!(applied(function.clone(), ""), "7");
        assert_eq!(applied(function, "3"), "37");
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let function = ButtonFunction::Overwrite("9".into());
        assert_eq!(applied(function.clone(), ""), "9");
        assert_eq!(applied(function, "8675309"), "9");
    }

    #[test]
    fn test_custom_runs_action_once_and_keeps_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let function = ButtonFunction::custom(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let mut value = "42".to_string();
        function.apply(&mut value);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(value, "42");
    }

    #[test]
    fn test_backing_value_comes_from_carried_text() {
        assert_eq!(ButtonFunction::Append("7".into()).backing_value(), "7");
        assert_eq!(
            ButtonFunction::AppendIfNonEmpty(".".into()).backing_value(),
            "."
        );
        assert_eq!(ButtonFunction::Overwrite("9".into()).backing_value(), "9");
        assert_eq!(ButtonFunction::Reset.backing_value(), "");
        assert_eq!(ButtonFunction::Backspace.backing_value(), "");
        assert_eq!(ButtonFunction::Noop.backing_value(), "");
    }
}
