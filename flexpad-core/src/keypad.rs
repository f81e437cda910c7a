//! The keypad controller
//!
//! Owns the accumulated value, the generated buttons, and the visibility
//! state. [`Keypad::build`] reconciles a [`KeypadConfig`] against the
//! placeholder children of a [`ViewHost`] and replaces each placeholder
//! with a generated [`KeyButton`]; presses are routed back through
//! [`Keypad::press`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Weak;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::animation::{Timing, Transition};
use crate::config::{BuildError, KeypadConfig};
use crate::function::ButtonFunction;
use crate::geometry::{Rect, Rgba, Size};
use crate::host::{Haptics, KeypadDelegate, ViewHost};
use crate::key::{ButtonFace, HapticStrength, KeyDefinition};

/// One generated button, owned exclusively by its keypad
///
/// Created during build from a placeholder's layout slot and never
/// recreated; destroyed with the keypad.
#[derive(Debug, Clone)]
pub struct KeyButton {
    tag: u32,
    face: ButtonFace,
    function: ButtonFunction,
    backing_value: String,
    text_color: Rgba,
    normal_background: Rgba,
    highlighted_background: Rgba,
    font: Option<String>,
    haptic: Option<HapticStrength>,
    /// Placeholder frame recorded at build, restored after a hide
    home_frame: Rect,
    frame: Rect,
    opacity: f32,
    hidden: bool,
    highlighted: bool,
}

impl KeyButton {
    fn new(tag: u32, frame: Rect, definition: KeyDefinition) -> Self {
        let backing_value = definition.backing_value().to_string();
        Self {
            tag,
            backing_value,
            text_color: definition.text_color(),
            normal_background: definition.background(),
            highlighted_background: definition.highlighted_background(),
            font: definition.font().map(str::to_string),
            haptic: definition.haptic(),
            face: definition.face().clone(),
            function: definition.function().clone(),
            home_frame: frame,
            frame,
            opacity: 1.0,
            hidden: false,
            highlighted: false,
        }
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn face(&self) -> &ButtonFace {
        &self.face
    }

    pub fn function(&self) -> &ButtonFunction {
        &self.function
    }

    /// Literal text this button contributes to the accumulated value
    pub fn backing_value(&self) -> &str {
        &self.backing_value
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn home_frame(&self) -> Rect {
        self.home_frame
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Current background, accounting for highlight state
    pub fn background(&self) -> Rgba {
        if self.highlighted {
            self.highlighted_background
        } else {
            self.normal_background
        }
    }

    pub fn text_color(&self) -> Rgba {
        self.text_color
    }

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn haptic(&self) -> Option<HapticStrength> {
        self.haptic
    }
}

/// Cloneable, thread-safe handle for requesting a highlight
///
/// Safe to use from background completion handlers; the request is applied
/// to the buttons on the next [`Keypad::sync_highlight`] on the UI thread.
#[derive(Clone)]
pub struct HighlightHandle {
    cell: Arc<Mutex<Option<usize>>>,
}

impl HighlightHandle {
    /// Request that only the button at `index` shows its highlighted
    /// background; an out-of-range index clears every highlight.
    pub fn highlight(&self, index: usize) {
        *self.cell.lock() = Some(index);
    }
}

/// The keypad controller
pub struct Keypad {
    id: String,
    value: String,
    shown: bool,
    built: bool,
    bounds: Rect,
    timing: Timing,
    buttons: Vec<KeyButton>,
    delegate: Option<Weak<RefCell<dyn KeypadDelegate>>>,
    transition: Option<Transition>,
    pending_highlight: Arc<Mutex<Option<usize>>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            id: String::new(),
            value: String::new(),
            shown: true,
            built: false,
            bounds: Rect::default(),
            timing: Timing::default(),
            buttons: Vec::new(),
            delegate: None,
            transition: None,
            pending_highlight: Arc::new(Mutex::new(None)),
        }
    }

    /// Override the default show/hide durations
    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Identifier passed to delegate notifications
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The accumulated value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the accumulated value without notifying the delegate
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn buttons(&self) -> &[KeyButton] {
        &self.buttons
    }

    /// Replace every positively-tagged placeholder child of `host` with a
    /// generated button described by `config`.
    ///
    /// Validation runs first; on any mismatch no placeholder is touched.
    /// A keypad builds once: rebuilding requires a fresh instance.
    pub fn build<H: ViewHost>(
        &mut self,
        config: KeypadConfig,
        host: &mut H,
    ) -> Result<(), BuildError> {
        if self.built {
            return Err(BuildError::AlreadyBuilt);
        }

        let children = host.children();
        let present: HashSet<u32> = children
            .iter()
            .map(|&view| host.tag(view))
            .filter(|&tag| tag > 0)
            .map(|tag| tag as u32)
            .collect();
        config.validate(&present)?;

        let (id, mut keys, delegate) = config.into_parts();
        self.id = id;
        self.delegate = delegate;
        self.bounds = host.bounds();

        for view in children {
            let tag = host.tag(view);
            if tag <= 0 {
                // Reserved for the caller's own decorative children.
                continue;
            }
            if let Some(definition) = keys.remove(&(tag as u32)) {
                let button = KeyButton::new(tag as u32, host.frame(view), definition);
                host.remove(view);
                host.insert(&button);
                self.buttons.push(button);
            }
        }

        self.built = true;
        debug!(id = %self.id, buttons = self.buttons.len(), "keypad built");
        Ok(())
    }

    /// Dispatch a press of the button at `index` in the button list.
    ///
    /// Applies the button's function to the accumulated value, fires the
    /// button's haptic selector if it has one, and notifies the delegate
    /// exactly once with the post-mutation value. Never fails; an unknown
    /// index is ignored.
    pub fn press(&mut self, index: usize, haptics: &impl Haptics) {
        let Some(button) = self.buttons.get(index) else {
            warn!(index, "press for unknown button index ignored");
            return;
        };

        button.function.apply(&mut self.value);

        if let Some(strength) = button.haptic {
            haptics.impulse(strength);
        }

        debug!(tag = button.tag, value = %self.value, "key pressed");
        let value = self.value.clone();
        self.notify(|delegate, id| delegate.value_changed(&value, id));
    }

    /// Show or hide the keypad's buttons.
    ///
    /// The visibility flag updates immediately and the delegate hears
    /// `show_hide_began` before any visual change. Hiding targets a
    /// zero-size frame at the container's center; showing restores each
    /// button's recorded placeholder frame. The animated path completes
    /// through [`Keypad::tick`]; a new call replaces any in-flight
    /// transition, whose completion then never fires.
    pub fn set_visible(&mut self, show: bool, animated: bool) {
        self.shown = show;
        self.notify(|delegate, id| delegate.show_hide_began(id, show));

        let hidden_frame = Rect::centered_in(self.bounds, Size::ZERO);
        if animated {
            let duration = if show {
                self.timing.show
            } else {
                self.timing.hide
            };
            let frames = self
                .buttons
                .iter()
                .map(|button| {
                    let target = if show { button.home_frame } else { hidden_frame };
                    (button.frame, target)
                })
                .collect();
            self.transition = Some(Transition::new(show, Instant::now(), duration, frames));
        } else {
            self.transition = None;
            for button in &mut self.buttons {
                button.frame = if show { button.home_frame } else { hidden_frame };
                button.opacity = if show { 1.0 } else { 0.0 };
            }
            self.notify(|delegate, id| delegate.show_hide_complete(id, show, false));
        }
    }

    /// Advance an in-flight show/hide transition.
    ///
    /// Call once per frame from the presentation loop. Fires the delegate's
    /// `show_hide_complete` when the transition finishes.
    pub fn tick(&mut self, now: Instant) {
        let Some(transition) = self.transition.take() else {
            return;
        };

        let progress = transition.progress(now);
        for (index, button) in self.buttons.iter_mut().enumerate() {
            if let Some(frame) = transition.frame_at(index, progress) {
                button.frame = frame;
            }
            button.opacity = transition.opacity_at(progress);
        }

        if progress >= 1.0 {
            let shown = transition.target_shown();
            self.notify(|delegate, id| delegate.show_hide_complete(id, shown, true));
        } else {
            self.transition = Some(transition);
        }
    }

    /// Request that only the button at `index` shows its highlighted
    /// background.
    ///
    /// Safe from any thread: the request is recorded and the actual button
    /// mutation happens in [`Keypad::sync_highlight`] on the UI thread. An
    /// out-of-range index leaves every button with its normal background,
    /// which makes radio-style exclusive selection straightforward.
    pub fn highlight(&self, index: usize) {
        *self.pending_highlight.lock() = Some(index);
    }

    /// A cloneable handle for issuing highlight requests from background
    /// completion handlers.
    pub fn highlight_handle(&self) -> HighlightHandle {
        HighlightHandle {
            cell: self.pending_highlight.clone(),
        }
    }

    /// Apply the latest pending highlight request, if any. UI thread only.
    pub fn sync_highlight(&mut self) {
        let Some(index) = self.pending_highlight.lock().take() else {
            return;
        };
        for (position, button) in self.buttons.iter_mut().enumerate() {
            button.highlighted = position == index;
        }
    }

    /// Hide or show just the buttons, without animation or delegate
    /// notification.
    pub fn hide_buttons(&mut self, hide: bool) {
        for button in &mut self.buttons {
            button.hidden = hide;
        }
    }

    /// Run `f` against the delegate if it is still alive; silence otherwise.
    fn notify(&self, f: impl FnOnce(&mut dyn KeypadDelegate, &str)) {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        f(&mut *delegate.borrow_mut(), &self.id);
    }
}
