//! Center-key click and long-press tracking.
//!
//! Remotes report the activation key as key-down events with a growing
//! repeat count followed by a key-up. [`PressTracker`] turns that stream
//! into at most one action per hold: a long press once the repeat count
//! reaches the threshold (latched, so further repeats stay silent), or a
//! click on release if no long press fired. Detaching a cell mid-hold drops
//! its state so nothing fires against a recycled cell.

use rustc_hash::FxHashMap;

use crate::config::LONG_PRESS_REPEATS;

/// Activation action resolved for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    /// Short press released.
    Click(usize),
    /// Key held past the repeat threshold.
    LongPress(usize),
}

#[derive(Debug, Default)]
struct PressState {
    long_fired: bool,
}

/// Per-cell activation-key tracker.
#[derive(Debug)]
pub struct PressTracker {
    cells: FxHashMap<usize, PressState>,
    threshold: u32,
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new(LONG_PRESS_REPEATS)
    }
}

impl PressTracker {
    /// Tracker firing a long press at `threshold` auto-repeats.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            cells: FxHashMap::default(),
            threshold: threshold.max(1),
        }
    }

    /// Activation key down on `position` with the given repeat count.
    /// Returns the long-press action exactly once per hold.
    pub fn key_down(&mut self, position: usize, repeat: u32) -> Option<CellAction> {
        let state = self.cells.entry(position).or_default();
        if state.long_fired || repeat < self.threshold {
            return None;
        }
        state.long_fired = true;
        Some(CellAction::LongPress(position))
    }

    /// Activation key released on `position`. Returns a click unless a long
    /// press already fired during this hold, or the cell was never pressed.
    pub fn key_up(&mut self, position: usize) -> Option<CellAction> {
        match self.cells.remove(&position) {
            Some(state) if !state.long_fired => Some(CellAction::Click(position)),
            _ => None,
        }
    }

    /// Drop tracking state for a cell, e.g. when its view detaches.
    pub fn detach(&mut self, position: usize) {
        self.cells.remove(&position);
    }

    /// Drop all tracking state.
    pub fn reset(&mut self) {
        self.cells.clear();
    }
}
