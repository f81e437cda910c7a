//! Capability traits connecting the core to its environment
//!
//! The core never touches a concrete widget toolkit. It consumes three
//! narrow interfaces: the host view hierarchy it rebuilds, the delegate it
//! reports to, and an optional haptic engine.

use crate::geometry::Rect;
use crate::key::HapticStrength;
use crate::keypad::KeyButton;

/// The container the keypad lives in
///
/// Children are addressed by an opaque handle. Placeholder children carry a
/// positive integer tag; tag 0 (or below) marks decorative children the
/// keypad must leave untouched.
pub trait ViewHost {
    type ViewId: Copy;

    /// The container's own frame, used to center buttons when hiding
    fn bounds(&self) -> Rect;

    /// Direct children, in layout order
    fn children(&self) -> Vec<Self::ViewId>;

    fn tag(&self, view: Self::ViewId) -> i32;

    fn frame(&self, view: Self::ViewId) -> Rect;

    /// Remove a placeholder child from the hierarchy
    fn remove(&mut self, view: Self::ViewId);

    /// Told once per generated button taking a placeholder's slot; the
    /// button itself stays owned by the keypad.
    fn insert(&mut self, button: &KeyButton);
}

/// Observer of keypad state changes
///
/// All notifications are fire-and-forget; the keypad tolerates the delegate
/// being gone at any time.
pub trait KeypadDelegate {
    /// The accumulated value changed; called once per press, after the
    /// mutation, with the post-mutation value.
    fn value_changed(&mut self, value: &str, id: &str);

    /// Show/hide was requested; fires before any visual transition begins
    fn show_hide_began(&mut self, id: &str, will_show: bool);

    /// A show/hide transition finished (immediately when not animated)
    fn show_hide_complete(&mut self, id: &str, is_shown: bool, animated: bool);
}

/// Haptic feedback engine
pub trait Haptics {
    /// Fire-and-forget impulse; implementations without hardware support
    /// simply ignore it.
    fn impulse(&self, strength: HapticStrength);
}

/// Haptics implementation that does nothing
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impulse(&self, _strength: HapticStrength) {}
}
