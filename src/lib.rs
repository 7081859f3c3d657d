//! DPAD focus navigation for paginated grids.
//!
//! gridnav implements the focus-navigation core of a remote-controlled grid
//! UI: arrow keys move focus between cells, presses at a grid edge are
//! delegated to the hosting screen, and a press at the bottom edge of a
//! paginated grid triggers a load-more and refocuses onto the newly
//! appended row once it arrives. The crate is view-layer agnostic: it
//! computes focus targets and scroll steps; the host applies them.
//!
//! # Architecture
//!
//! ```text
//! key event ─▶ KeyDecoder ─▶ DpadEvent ─▶ FocusDriver
//!                                           │
//!                      ┌────────────────────┼──────────────────┐
//!                      ▼                    ▼                  ▼
//!               FocusNavigator         GridState         PressTracker
//!               (state machine)     (viewport model)    (click/long-press)
//!                      │
//!              ┌───────┴────────┐
//!              ▼                ▼
//!         EdgeHandler      PageBridge
//!        (host screen)   (load-more latch)
//! ```
//!
//! [`navigator::FocusNavigator`] is the core: a synchronous state machine
//! that turns one directional press into a [`navigator::KeyOutcome`]. Work
//! that depends on a later layout pass or on data still in flight is split
//! into an explicit schedule/apply pair instead of relying on a UI
//! framework's post-to-frame primitive: the press records a pending anchor,
//! and the host calls the matching apply-phase function
//! (`apply_after_scroll`, `consume_pending_after_load`) when its world has
//! caught up.
//!
//! [`driver::FocusDriver`] assembles the pieces into a ready-made controller
//! for hosts that do not already have view plumbing of their own.
//!
//! # Example
//!
//! ```
//! use gridnav::prelude::*;
//!
//! struct Screen;
//! impl EdgeHandler for Screen {
//!     fn on_top_edge(&mut self) -> bool {
//!         // move focus to the tab bar
//!         true
//!     }
//! }
//!
//! struct Pages;
//! impl PageLoader for Pages {
//!     fn has_more(&self) -> bool {
//!         true
//!     }
//!     fn load_more(&mut self) {
//!         // kick off the next fetch
//!     }
//! }
//!
//! let grid = GridState::new(4).with_items(20).with_viewport_rows(5.0);
//! let mut driver = FocusDriver::new(grid, Screen, Pages);
//!
//! driver.grid_mut().set_focus(5);
//! let response = driver.handle_event(DpadEvent::Direction(Direction::Down));
//! assert!(response.consumed);
//! assert_eq!(driver.grid().focused(), Some(9));
//! ```

pub mod config;
pub mod driver;
pub mod edge;
pub mod grid;
pub mod input;
mod nav_macros;
pub mod navigator;
pub mod pagination;
pub mod press;

pub use config::{ConfigError, NavConfig, LONG_PRESS_REPEATS, SCROLL_STEP_RATIO};
pub use driver::{FocusDriver, Response};
pub use edge::{EdgeConsume, EdgeHandler, NullEdges};
pub use grid::{FocusSearch, GridModel, GridSearch, GridState};
pub use input::{Direction, DpadEvent, KeyBinding, KeyDecoder};
pub use navigator::{FocusNavigator, FocusRequest, KeyOutcome, NavContext};
pub use pagination::{PageBridge, PageLoader, SharedPageBridge};
pub use press::{CellAction, PressTracker};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{ConfigError, NavConfig};
    pub use crate::driver::{FocusDriver, Response};
    pub use crate::edge::{EdgeConsume, EdgeHandler, NullEdges};
    pub use crate::grid::{FocusSearch, GridModel, GridSearch, GridState};
    pub use crate::input::{Direction, DpadEvent, KeyBinding, KeyDecoder};
    pub use crate::navigator::{FocusNavigator, FocusRequest, KeyOutcome, NavContext};
    pub use crate::pagination::{PageBridge, PageLoader};
    pub use crate::press::{CellAction, PressTracker};
}
