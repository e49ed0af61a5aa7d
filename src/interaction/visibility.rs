// SPDX-License-Identifier: MPL-2.0
//! Visibility-triggered observation.
//!
//! A [`Watcher`] tracks a set of page blocks and fires when a block's
//! intersection ratio with the viewport crosses a threshold. Two flavors
//! exist, matching the behaviors on the page:
//!
//! - persistent (fade-in blocks): the block keeps being observed after the
//!   first firing, but the triggered state is terminal, so repeated events
//!   are idempotent;
//! - one-shot (skill cards, timeline entries): observation for the block
//!   stops at the first firing.
//!
//! The watcher never touches widgets; callers compute block rectangles from
//! the page layout model and feed them in together with the viewport.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Vertical slice of the page currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the top edge, in page coordinates.
    pub top: f32,
    /// Visible height.
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Vertical extent of a tracked page block, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub top: f32,
    pub height: f32,
}

impl Block {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Fraction of `block` visible inside `view`, after shrinking the viewport's
/// bottom edge by `bottom_margin` pixels. Returns a value in `0.0..=1.0`.
#[must_use]
pub fn intersection_ratio(block: Block, view: Viewport, bottom_margin: f32) -> f32 {
    if block.height <= 0.0 {
        return 0.0;
    }

    let visible_bottom = view.bottom() - bottom_margin;
    let overlap = block.bottom().min(visible_bottom) - block.top.max(view.top);
    (overlap / block.height).clamp(0.0, 1.0)
}

/// Per-block observation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Triggered,
}

/// A threshold-crossing observer over a set of blocks keyed by identity.
#[derive(Debug)]
pub struct Watcher<K> {
    threshold: f32,
    bottom_margin: f32,
    one_shot: bool,
    states: HashMap<K, Phase>,
    /// Keys whose observation was cancelled after firing (one-shot only).
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Copy> Watcher<K> {
    /// A watcher that keeps observing blocks after they trigger.
    #[must_use]
    pub fn persistent(threshold: f32, bottom_margin: f32) -> Self {
        Self::new(threshold, bottom_margin, false)
    }

    /// A watcher that stops observing a block at its first firing.
    #[must_use]
    pub fn one_shot(threshold: f32, bottom_margin: f32) -> Self {
        Self::new(threshold, bottom_margin, true)
    }

    fn new(threshold: f32, bottom_margin: f32, one_shot: bool) -> Self {
        Self {
            threshold,
            bottom_margin,
            one_shot,
            states: HashMap::new(),
            fired: HashSet::new(),
        }
    }

    /// Registers a block for observation. Registering the same key twice has
    /// no effect; a block that already triggered stays triggered.
    pub fn track(&mut self, key: K) {
        if self.fired.contains(&key) {
            return;
        }
        self.states.entry(key).or_insert(Phase::Pending);
    }

    /// Feeds one visibility sample for `key` and reports whether the block
    /// transitioned to triggered right now.
    ///
    /// Samples for unknown keys are ignored, so a missing page element
    /// degrades to a no-op rather than an error.
    pub fn observe(&mut self, key: K, block: Block, view: Viewport) -> bool {
        let ratio = intersection_ratio(block, view, self.bottom_margin);
        self.offer(key, ratio)
    }

    /// Like [`Watcher::observe`], but with a precomputed intersection ratio.
    pub fn offer(&mut self, key: K, ratio: f32) -> bool {
        let Some(phase) = self.states.get_mut(&key) else {
            return false;
        };

        match *phase {
            Phase::Triggered => false,
            Phase::Pending if ratio >= self.threshold => {
                if self.one_shot {
                    // Observation for this key stops here.
                    self.states.remove(&key);
                    self.fired.insert(key);
                } else {
                    *phase = Phase::Triggered;
                }
                true
            }
            Phase::Pending => false,
        }
    }

    /// Whether `key` has fired at some point.
    #[must_use]
    pub fn is_triggered(&self, key: K) -> bool {
        self.fired.contains(&key) || matches!(self.states.get(&key), Some(Phase::Triggered))
    }

    /// Whether `key` is still awaiting its first firing.
    #[must_use]
    pub fn is_pending(&self, key: K) -> bool {
        matches!(self.states.get(&key), Some(Phase::Pending))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.fired.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(top: f32, height: f32) -> Viewport {
        Viewport { top, height }
    }

    fn block(top: f32, height: f32) -> Block {
        Block { top, height }
    }

    #[test]
    fn ratio_is_zero_when_block_is_below_viewport() {
        let r = intersection_ratio(block(1000.0, 100.0), view(0.0, 600.0), 0.0);
        assert_eq!(r, 0.0);
    }

    #[test]
    fn ratio_is_one_when_block_fully_visible() {
        let r = intersection_ratio(block(100.0, 100.0), view(0.0, 600.0), 0.0);
        assert_eq!(r, 1.0);
    }

    #[test]
    fn bottom_margin_shrinks_the_viewport() {
        // Block occupies the bottom 50px of a 600px viewport; a 50px margin
        // removes it entirely.
        let b = block(550.0, 100.0);
        assert!(intersection_ratio(b, view(0.0, 600.0), 0.0) > 0.0);
        assert_eq!(intersection_ratio(b, view(0.0, 600.0), 50.0), 0.0);
    }

    #[test]
    fn partial_overlap_is_proportional() {
        // 25 of 100 px visible.
        let r = intersection_ratio(block(575.0, 100.0), view(0.0, 600.0), 0.0);
        assert!((r - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn empty_watcher_ignores_samples() {
        let mut watcher: Watcher<u32> = Watcher::persistent(0.1, 50.0);
        assert!(!watcher.offer(7, 1.0));
        assert!(!watcher.is_triggered(7));
        assert!(watcher.is_empty());
    }

    #[test]
    fn persistent_watcher_fires_once_and_stays_triggered() {
        let mut watcher = Watcher::persistent(0.1, 0.0);
        watcher.track(1u32);

        assert!(!watcher.offer(1, 0.05));
        assert!(watcher.offer(1, 0.2));
        // Re-entry keeps firing events at the source, but the state machine
        // absorbs them.
        assert!(!watcher.offer(1, 0.0));
        assert!(!watcher.offer(1, 0.9));
        assert!(watcher.is_triggered(1));
    }

    #[test]
    fn one_shot_watcher_stops_observing_after_firing() {
        let mut watcher = Watcher::one_shot(0.4, 0.0);
        watcher.track(1u32);

        assert!(!watcher.offer(1, 0.39));
        assert!(watcher.offer(1, 0.4));
        assert!(!watcher.offer(1, 1.0));
        assert!(watcher.is_triggered(1));
        assert!(!watcher.is_pending(1));
    }

    #[test]
    fn observe_combines_ratio_and_threshold() {
        let mut watcher = Watcher::one_shot(0.25, 40.0);
        watcher.track(0u32);

        // Entry 200px tall, only its top 30px inside the shrunk viewport.
        let fired = watcher.observe(0, block(570.0, 200.0), view(0.0, 640.0));
        assert!(!fired);

        // Scrolled down far enough for 25% visibility.
        let fired = watcher.observe(0, block(570.0, 200.0), view(60.0, 640.0));
        assert!(fired);
    }
}
