//! DPAD focus-navigation state machine.
//!
//! [`FocusNavigator`] translates a directional key press at a focused cell
//! into one of four outcomes: move focus to another in-grid cell, delegate
//! to a boundary handler, absorb the event, or schedule a focus target to
//! apply after a scroll or an asynchronous load-more completes.
//!
//! The navigator runs synchronously inside the host's event dispatch and
//! never blocks. Anything that depends on a future layout pass or on data
//! that has not arrived yet is a two-phase operation: the key handler
//! records a [`PendingFocus`] anchor (schedule phase) and the host invokes
//! [`FocusNavigator::apply_after_scroll`] or
//! [`FocusNavigator::consume_pending_after_load`] once its next layout or
//! data append completes (apply phase). At most one anchor exists at a time;
//! every new key press, [`reset`](FocusNavigator::reset) or
//! [`release`](FocusNavigator::release) clears a stale one so focus never
//! lands on a position computed against an older grid.
//!
//! No branch errors or panics. An empty grid, a missing span, or a rejected
//! focus request all degrade to a pass-through or a consumed no-op; the
//! worst observable failure is focus staying where it was.

use crate::config::{ConfigError, NavConfig};
use crate::edge::{EdgeConsume, EdgeHandler};
use crate::grid::{row_of, span_of, FocusSearch, GridModel, GridSearch};
use crate::input::Direction;
use crate::nav_macros::nav_trace;

/// One directional key press at a focused cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    /// Pressed direction.
    pub direction: Direction,
    /// Position of the cell that held focus when the key arrived.
    pub origin: usize,
}

impl FocusRequest {
    /// Convenience constructor.
    #[must_use]
    pub fn new(direction: Direction, origin: usize) -> Self {
        Self { direction, origin }
    }
}

/// Snapshot of the grid taken by the host per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    /// Items currently in the grid.
    pub item_count: usize,
    /// Column span of the layout.
    pub column_count: usize,
    /// Whether the scroll container has more on-screen room in the pressed
    /// direction before it needs new data.
    pub can_scroll_further: bool,
}

impl NavContext {
    /// Build a context from a grid model and the host's scroll answer.
    pub fn of(grid: &dyn GridModel, can_scroll_further: bool) -> Self {
        Self {
            item_count: grid.item_count(),
            column_count: grid.column_count(),
            can_scroll_further,
        }
    }

    fn columns(&self) -> usize {
        self.column_count.max(1)
    }
}

/// What the host must do with the key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; let the platform's default focus search run.
    Pass,
    /// Event absorbed; nothing further to do.
    Consumed,
    /// Force-focus this position now and consume the event.
    Focus(usize),
    /// Consume the event, scroll by the configured step ratio of the focused
    /// cell's height, then call `apply_after_scroll` after the next layout
    /// pass.
    Scroll,
}

impl KeyOutcome {
    /// Whether the event was consumed by the navigator.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Pass)
    }
}

/// Why a focus target is deferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingKind {
    /// Waiting for the layout pass after a down-edge scroll.
    AfterScroll,
    /// Waiting for appended items after a load-more request.
    AfterLoad,
}

/// Deferred focus target: refocus relative to `anchor` once the wait ends.
#[derive(Debug, Clone, Copy)]
struct PendingFocus {
    anchor: usize,
    kind: PendingKind,
}

/// Per-grid-view focus navigator.
///
/// Create one per grid view and [`release`](Self::release) it alongside the
/// view. Install/release are idempotent.
#[derive(Debug)]
pub struct FocusNavigator {
    config: NavConfig,
    pending: Option<PendingFocus>,
    enabled: bool,
}

impl Default for FocusNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusNavigator {
    /// Navigator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(NavConfig::default())
    }

    /// Navigator with an explicit configuration, validated on build.
    pub fn with_config(config: NavConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_config(config.validated()?))
    }

    pub(crate) fn from_config(config: NavConfig) -> Self {
        Self {
            config,
            pending: None,
            enabled: true,
        }
    }

    /// Enable or disable navigation. Disabled, every key passes through and
    /// pending consumption is rejected.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether navigation is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Anchor of the pending deferred focus, if one is recorded.
    #[must_use]
    pub fn pending_anchor(&self) -> Option<usize> {
        self.pending.map(|p| p.anchor)
    }

    /// Whether the navigator is waiting for a load-more to complete.
    #[must_use]
    pub fn awaiting_load(&self) -> bool {
        matches!(
            self.pending,
            Some(PendingFocus {
                kind: PendingKind::AfterLoad,
                ..
            })
        )
    }

    /// Handle one directional press.
    ///
    /// `edges` receives the boundary callbacks; `ctx` is the host's snapshot
    /// of the grid for this press.
    pub fn handle_key<E>(&mut self, request: FocusRequest, ctx: NavContext, edges: &mut E) -> KeyOutcome
    where
        E: EdgeHandler + ?Sized,
    {
        if !self.enabled {
            return KeyOutcome::Pass;
        }
        // A fresh press invalidates any deferred target from an earlier one.
        self.pending = None;

        let outcome = match request.direction {
            Direction::Up => self.handle_up(request.origin, ctx, edges),
            Direction::Left => self.handle_left(request.origin, ctx, edges),
            Direction::Right => self.handle_right(request.origin, ctx, edges),
            Direction::Down => self.handle_down(request.origin, ctx, edges),
        };
        nav_trace!(
            direction = ?request.direction,
            origin = request.origin,
            ?outcome,
            "key handled"
        );
        outcome
    }

    fn handle_up<E>(&mut self, origin: usize, ctx: NavContext, edges: &mut E) -> KeyOutcome
    where
        E: EdgeHandler + ?Sized,
    {
        // Not in the first row, or rows are still scrolled out above: the
        // default focus search will find the cell above.
        if row_of(origin, ctx.columns()) > 0 || ctx.can_scroll_further {
            return KeyOutcome::Pass;
        }
        let handled = edges.on_top_edge();
        if self.config.edge_consume.contains(EdgeConsume::TOP) || handled {
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Pass
        }
    }

    fn handle_left<E>(&mut self, origin: usize, ctx: NavContext, edges: &mut E) -> KeyOutcome
    where
        E: EdgeHandler + ?Sized,
    {
        if Self::search(ctx, origin, Direction::Left).is_some() {
            return KeyOutcome::Pass;
        }
        if edges.on_left_edge() {
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Pass
        }
    }

    fn handle_right<E>(&mut self, origin: usize, ctx: NavContext, edges: &mut E) -> KeyOutcome
    where
        E: EdgeHandler + ?Sized,
    {
        if Self::search(ctx, origin, Direction::Right).is_some() {
            return KeyOutcome::Pass;
        }
        edges.on_right_edge();
        if self.config.edge_consume.contains(EdgeConsume::RIGHT) {
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Pass
        }
    }

    fn handle_down<E>(&mut self, origin: usize, ctx: NavContext, edges: &mut E) -> KeyOutcome
    where
        E: EdgeHandler + ?Sized,
    {
        // Force-focus the neighbor instead of passing, so focus cannot
        // escape the grid while rows attach/detach under the search.
        if let Some(next) = Self::search(ctx, origin, Direction::Down) {
            return KeyOutcome::Focus(next);
        }
        if ctx.can_scroll_further {
            self.pending = Some(PendingFocus {
                anchor: origin,
                kind: PendingKind::AfterScroll,
            });
            return KeyOutcome::Scroll;
        }
        if edges.can_load_more() {
            self.pending = Some(PendingFocus {
                anchor: origin,
                kind: PendingKind::AfterLoad,
            });
            nav_trace!(anchor = origin, "awaiting load-more");
            edges.load_more();
        }
        // Absorbed even when nothing was requested: bubbling the press at
        // the bottom edge would let focus escape the grid.
        KeyOutcome::Consumed
    }

    fn search(ctx: NavContext, origin: usize, direction: Direction) -> Option<usize> {
        struct CtxGrid(NavContext);
        impl GridModel for CtxGrid {
            fn item_count(&self) -> usize {
                self.0.item_count
            }
            fn column_count(&self) -> usize {
                self.0.column_count
            }
        }
        GridSearch.neighbor(&CtxGrid(ctx), origin, direction)
    }

    /// Apply phase for a down-edge scroll: called by the host after it
    /// scrolled and its layout pass completed.
    ///
    /// Prefers an in-grid neighbor newly revealed below the anchor (via the
    /// host's `search`), then `anchor + columns`, then `anchor + 1`. A
    /// matching pending state is cleared before the attempt; an outstanding
    /// load-refocus anchor is left in place, since a layout pass unrelated
    /// to the scroll must not destroy it. Returns the position the host
    /// should focus, if any.
    pub fn apply_after_scroll<S>(&mut self, grid: &dyn GridModel, search: &S) -> Option<usize>
    where
        S: FocusSearch + ?Sized,
    {
        let PendingFocus { anchor, kind } = self.pending?;
        if kind != PendingKind::AfterScroll {
            return None;
        }
        self.pending = None;
        if !self.enabled {
            return None;
        }
        search
            .neighbor(grid, anchor, Direction::Down)
            .or_else(|| Self::fallback_below(grid, anchor))
    }

    /// Apply phase for a load-more: called by the host after new items were
    /// appended to the grid.
    ///
    /// `focus_in_grid` is whether the grid still holds focus; when it does
    /// not (a dialog opened in the interim, say), the pending state is
    /// dropped without stealing focus back. Consumption is at-most-once: the
    /// anchor is cleared before the target is computed, and a second call is
    /// a no-op. Returns the position the host should focus, if any.
    pub fn consume_pending_after_load(
        &mut self,
        grid: &dyn GridModel,
        focus_in_grid: bool,
    ) -> Option<usize> {
        let PendingFocus { anchor, kind } = self.pending?;
        if kind != PendingKind::AfterLoad {
            // A scroll-refocus anchor is not ours to consume.
            return None;
        }
        self.pending = None;
        if !self.enabled || !focus_in_grid {
            nav_trace!(anchor, "pending focus dropped");
            return None;
        }
        let target = Self::fallback_below(grid, anchor);
        nav_trace!(anchor, ?target, "pending focus consumed");
        target
    }

    /// `anchor + columns` if it exists, else `anchor + 1` if it exists.
    fn fallback_below(grid: &dyn GridModel, anchor: usize) -> Option<usize> {
        let count = grid.item_count();
        let below = anchor + span_of(grid);
        if below < count {
            Some(below)
        } else if anchor + 1 < count {
            Some(anchor + 1)
        } else {
            None
        }
    }

    /// Clear transient state while keeping the navigator installed, e.g.
    /// when the backing list is swapped.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Release the navigator from its view. Idempotent; drops any pending
    /// deferred focus so nothing fires against a torn-down view.
    pub fn release(&mut self) {
        self.pending = None;
        self.enabled = true;
    }
}
