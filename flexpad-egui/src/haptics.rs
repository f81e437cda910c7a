use flexpad_core::{Haptics, HapticStrength};
use tracing::debug;

/// Desktop stand-in for a haptic engine: logs each impulse
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn impulse(&self, strength: HapticStrength) {
        debug!(?strength, "haptic impulse");
    }
}
