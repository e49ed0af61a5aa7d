// SPDX-License-Identifier: MPL-2.0
//! Frame-stepped animation for the circular skill gauges.
//!
//! The displayed percentage climbs from 0 to the target, one point per
//! frame, and the arc's dash offset is derived from the displayed value in
//! lockstep. The animation is monotonic, never overshoots, and terminates
//! exactly at the target; once started it cannot be aborted, it simply runs
//! to completion.

use crate::ui::design_tokens::sizing;
use std::f32::consts::PI;

/// Circumference of the gauge circle. Derived from the same radius constant
/// the canvas widget draws with.
pub const CIRCUMFERENCE: f32 = 2.0 * PI * sizing::GAUGE_RADIUS;

/// A running (or finished) gauge animation for a single skill card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeAnimation {
    target: u8,
    shown: u8,
}

impl GaugeAnimation {
    /// Starts a new animation toward `target` percent. Targets above 100 are
    /// clamped.
    #[must_use]
    pub fn new(target: u8) -> Self {
        Self {
            target: target.min(100),
            shown: 0,
        }
    }

    /// Advances the animation by one frame. Returns `true` while the
    /// animation still has frames left after this step.
    pub fn step(&mut self) -> bool {
        if self.shown < self.target {
            self.shown += 1;
        }
        !self.is_finished()
    }

    /// The percentage currently shown in the card's readout.
    #[must_use]
    pub fn displayed(&self) -> u8 {
        self.shown
    }

    /// The target percentage the animation terminates at.
    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Dash offset of the progress arc for the current frame:
    /// `CIRCUMFERENCE * (1 - shown/100)`. Starts at the full circumference
    /// (empty arc) and shrinks as the counter climbs.
    #[must_use]
    pub fn dash_offset(&self) -> f32 {
        CIRCUMFERENCE * (1.0 - f32::from(self.shown) / 100.0)
    }

    /// Fraction of the circle the arc should sweep, in `0.0..=1.0`.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        f32::from(self.shown) / 100.0
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.shown >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_one_step_per_frame_and_stops_at_target() {
        let mut gauge = GaugeAnimation::new(73);
        let mut seen = vec![gauge.displayed()];

        while gauge.step() {
            seen.push(gauge.displayed());
        }
        seen.push(gauge.displayed());

        // Strictly increasing, one point at a time, 0..=73.
        let expected: Vec<u8> = (0..=73).collect();
        assert_eq!(seen, expected);
        assert!(gauge.is_finished());

        // Further steps do not overshoot.
        gauge.step();
        assert_eq!(gauge.displayed(), 73);
    }

    #[test]
    fn dash_offset_tracks_the_counter() {
        let mut gauge = GaugeAnimation::new(73);
        assert!((gauge.dash_offset() - CIRCUMFERENCE).abs() < 1e-4);

        while gauge.step() {}

        let expected = CIRCUMFERENCE * (1.0 - 0.73);
        assert!((gauge.dash_offset() - expected).abs() < 1e-4);
    }

    #[test]
    fn zero_target_is_finished_immediately() {
        let mut gauge = GaugeAnimation::new(0);
        assert!(gauge.is_finished());
        assert!(!gauge.step());
        assert_eq!(gauge.displayed(), 0);
    }

    #[test]
    fn targets_above_one_hundred_are_clamped() {
        let gauge = GaugeAnimation::new(130);
        assert_eq!(gauge.target(), 100);
    }
}
