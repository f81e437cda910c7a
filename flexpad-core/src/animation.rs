//! Show/hide transition timing and interpolation

use std::time::{Duration, Instant};

use crate::geometry::Rect;

/// Durations for the animated show and hide paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub show: Duration,
    pub hide: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            show: Duration::from_millis(300),
            hide: Duration::from_millis(200),
        }
    }
}

/// One in-flight show/hide transition
///
/// A new `set_visible` call replaces the current transition wholesale
/// (coalesce-to-latest); the superseded transition's completion never fires.
#[derive(Debug)]
pub(crate) struct Transition {
    target_shown: bool,
    started: Instant,
    duration: Duration,
    /// Per-button (start, end) frames, indexed like the button list
    frames: Vec<(Rect, Rect)>,
    opacity: (f32, f32),
}

impl Transition {
    pub fn new(
        target_shown: bool,
        started: Instant,
        duration: Duration,
        frames: Vec<(Rect, Rect)>,
    ) -> Self {
        let opacity = if target_shown { (0.0, 1.0) } else { (1.0, 0.0) };
        Self {
            target_shown,
            started,
            duration,
            frames,
            opacity,
        }
    }

    pub fn target_shown(&self) -> bool {
        self.target_shown
    }

    /// Normalized progress in 0..=1; a zero duration completes immediately
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn frame_at(&self, index: usize, progress: f32) -> Option<Rect> {
        self.frames
            .get(index)
            .map(|&(from, to)| Rect::lerp(from, to, progress))
    }

    pub fn opacity_at(&self, progress: f32) -> f32 {
        crate::geometry::lerp(self.opacity.0, self.opacity.1, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_to_one() {
        let started = Instant::now();
        let transition = Transition::new(true, started, Duration::from_millis(100), Vec::new());
        assert_eq!(transition.progress(started), 0.0);
        assert_eq!(transition.progress(started + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let started = Instant::now();
        let transition = Transition::new(false, started, Duration::ZERO, Vec::new());
        assert_eq!(transition.progress(started), 1.0);
    }

    #[test]
    fn test_opacity_direction_follows_target() {
        let started = Instant::now();
        let showing = Transition::new(true, started, Duration::from_millis(100), Vec::new());
        assert_eq!(showing.opacity_at(0.0), 0.0);
        assert_eq!(showing.opacity_at(1.0), 1.0);

        let hiding = Transition::new(false, started, Duration::from_millis(100), Vec::new());
        assert_eq!(hiding.opacity_at(0.0), 1.0);
        assert_eq!(hiding.opacity_at(1.0), 0.0);
    }
}
