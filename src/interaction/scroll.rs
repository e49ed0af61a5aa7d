// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling as a stepped interpolation.
//!
//! The animation is a pure function of `(start, target, progress)`; the
//! driver (a tick subscription in the application, a deterministic clock in
//! tests) decides how often to sample it.

use std::time::{Duration, Instant};

/// Duration of an animated scroll to a section.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Cubic ease-in-out over `0.0..=1.0`.
#[must_use]
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Interpolated offset between `start` and `target` at eased `progress`.
/// Progress outside `0.0..=1.0` is clamped, so the result never overshoots
/// the target.
#[must_use]
pub fn interpolate(start: f32, target: f32, progress: f32) -> f32 {
    start + (target - start) * ease(progress)
}

/// An in-flight animated scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(start: f32, target: f32, now: Instant) -> Self {
        Self {
            start,
            target,
            started_at: now,
            duration: SCROLL_DURATION,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Offset to apply at time `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        interpolate(self.start, self.target, progress)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_is_clamped_at_both_ends() {
        assert_eq!(interpolate(0.0, 100.0, -0.5), 0.0);
        assert_eq!(interpolate(0.0, 100.0, 0.0), 0.0);
        assert_eq!(interpolate(0.0, 100.0, 1.0), 100.0);
        assert_eq!(interpolate(0.0, 100.0, 2.0), 100.0);
    }

    #[test]
    fn interpolation_is_monotonic() {
        let mut last = interpolate(200.0, 1400.0, 0.0);
        for i in 1..=100 {
            let value = interpolate(200.0, 1400.0, i as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1400.0);
    }

    #[test]
    fn downward_scroll_reaches_the_smaller_offset() {
        assert_eq!(interpolate(900.0, 100.0, 1.0), 100.0);
        let mid = interpolate(900.0, 100.0, 0.5);
        assert!(mid < 900.0 && mid > 100.0);
    }

    #[test]
    fn animation_terminates_at_target_on_any_clock() {
        let t0 = Instant::now();
        let anim = ScrollAnimation::new(0.0, 800.0, t0).with_duration(Duration::from_millis(100));

        assert!(!anim.is_finished(t0));
        assert_eq!(anim.offset_at(t0), 0.0);

        let t_end = t0 + Duration::from_millis(250);
        assert!(anim.is_finished(t_end));
        assert_eq!(anim.offset_at(t_end), 800.0);
    }
}
