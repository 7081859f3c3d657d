//! Boundary-handler contract.
//!
//! When a directional press cannot move focus to another in-grid cell, the
//! navigator hands the event to the screen hosting the grid through
//! [`EdgeHandler`]: top edge (e.g. jump to a tab bar), left edge (e.g. open a
//! sidebar), right edge, and the load-more pair for paginated content. All
//! methods default to no-ops so hosts implement only the edges they care
//! about.

use bitflags::bitflags;

bitflags! {
    /// Which edge events are consumed unconditionally, regardless of what
    /// the handler returns.
    ///
    /// Both flags are set by default: an Up press at the top edge and a
    /// Right press at the right edge are absorbed so focus never escapes the
    /// grid sideways during layout churn. Left-edge consumption always
    /// follows the handler's return value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EdgeConsume: u8 {
        /// Always consume Up at the top edge.
        const TOP = 1 << 0;
        /// Always consume Right at the right edge.
        const RIGHT = 1 << 1;
    }
}

impl Default for EdgeConsume {
    fn default() -> Self {
        Self::TOP | Self::RIGHT
    }
}

/// Callbacks implemented by the screen hosting the grid.
pub trait EdgeHandler {
    /// Up pressed in the first row. Returns whether the handler consumed the
    /// event (ignored when [`EdgeConsume::TOP`] is set).
    fn on_top_edge(&mut self) -> bool {
        false
    }

    /// Left pressed in the first column. Returns whether the handler
    /// consumed the event.
    fn on_left_edge(&mut self) -> bool {
        false
    }

    /// Right pressed in the last column.
    fn on_right_edge(&mut self) {}

    /// Whether more data may be available past the current last row.
    fn can_load_more(&self) -> bool {
        false
    }

    /// Request additional data. Fire-and-forget; must tolerate being called
    /// while a previous request is still in flight.
    fn load_more(&mut self) {}
}

/// Handler that ignores every edge. Useful for grids that fill the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEdges;

impl EdgeHandler for NullEdges {}
