//! Per-view grid focus controller.
//!
//! [`FocusDriver`] is the assembled controller a host installs on one grid
//! view: it owns the navigator, a [`GridState`] viewport model, the
//! pagination bridge, and the press tracker, and it plays the role of the
//! platform focus search for `Pass` outcomes. Hosts with their own view
//! plumbing can skip the driver and use [`FocusNavigator`] directly.
//!
//! The deferred-work queue makes the two-phase operations explicit: a
//! down-edge scroll or an off-screen focus target is recorded here, and the
//! host invokes [`on_layout`](FocusDriver::on_layout) after its next layout
//! pass (the stand-in for post-to-next-frame) and
//! [`on_items_appended`](FocusDriver::on_items_appended) after a page of
//! items lands.

use smallvec::SmallVec;

use crate::config::{ConfigError, NavConfig};
use crate::edge::EdgeHandler;
use crate::grid::{FocusSearch, GridSearch, GridState};
use crate::input::{Direction, DpadEvent};
use crate::nav_macros::nav_trace;
use crate::navigator::{FocusNavigator, FocusRequest, KeyOutcome, NavContext};
use crate::pagination::{PageBridge, PageLoader};
use crate::press::{CellAction, PressTracker};

/// Work recorded in the schedule phase, applied on the next layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    /// Re-run the after-scroll refocus.
    Refocus,
    /// Focus a position that was scrolled into view but not yet laid out.
    Focus(usize),
}

/// Result of feeding one event to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Whether the event was consumed by the grid.
    pub consumed: bool,
    /// Click or long-press resolved by this event, if any.
    pub action: Option<CellAction>,
}

impl Response {
    fn ignored() -> Self {
        Self::default()
    }

    fn consumed() -> Self {
        Self {
            consumed: true,
            action: None,
        }
    }

    fn action(action: Option<CellAction>) -> Self {
        Self {
            consumed: true,
            action,
        }
    }
}

/// Routes the navigator's load-more edge through the pagination bridge while
/// delegating the spatial edges to the host's handler.
struct BridgedEdges<'a, E, L> {
    edges: &'a mut E,
    bridge: &'a mut PageBridge<L>,
}

impl<E: EdgeHandler, L: PageLoader> EdgeHandler for BridgedEdges<'_, E, L> {
    fn on_top_edge(&mut self) -> bool {
        self.edges.on_top_edge()
    }

    fn on_left_edge(&mut self) -> bool {
        self.edges.on_left_edge()
    }

    fn on_right_edge(&mut self) {
        self.edges.on_right_edge();
    }

    fn can_load_more(&self) -> bool {
        self.bridge.can_load_more()
    }

    fn load_more(&mut self) {
        self.bridge.request();
    }
}

/// Assembled DPAD controller for one grid view.
#[derive(Debug)]
pub struct FocusDriver<E, L> {
    navigator: FocusNavigator,
    grid: GridState,
    edges: E,
    bridge: PageBridge<L>,
    press: PressTracker,
    scroll_step: f32,
    deferred: SmallVec<[Deferred; 2]>,
}

impl<E: EdgeHandler, L: PageLoader> FocusDriver<E, L> {
    /// Build a driver with the default configuration.
    pub fn new(grid: GridState, edges: E, loader: L) -> Self {
        Self::from_config(grid, edges, loader, NavConfig::default())
    }

    /// Build a driver with an explicit configuration, validated on build.
    pub fn with_config(
        grid: GridState,
        edges: E,
        loader: L,
        config: NavConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_config(grid, edges, loader, config.validated()?))
    }

    fn from_config(grid: GridState, edges: E, loader: L, config: NavConfig) -> Self {
        Self {
            navigator: FocusNavigator::from_config(config),
            grid,
            edges,
            bridge: PageBridge::new(loader),
            press: PressTracker::new(config.long_press_repeats),
            scroll_step: config.scroll_step_ratio,
            deferred: SmallVec::new(),
        }
    }

    /// The viewport model.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Mutable access to the viewport model.
    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    /// The navigator.
    pub fn navigator(&self) -> &FocusNavigator {
        &self.navigator
    }

    /// The pagination bridge.
    pub fn bridge(&self) -> &PageBridge<L> {
        &self.bridge
    }

    /// The host's edge handler.
    pub fn edges(&self) -> &E {
        &self.edges
    }

    /// Enable or disable navigation.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.navigator.set_enabled(enabled);
    }

    /// Feed one decoded event through the controller.
    pub fn handle_event(&mut self, event: DpadEvent) -> Response {
        match event {
            DpadEvent::Direction(direction) => self.handle_direction(direction),
            DpadEvent::Center { repeat } => match self.grid.focused() {
                Some(origin) => Response::action(self.press.key_down(origin, repeat)),
                None => Response::ignored(),
            },
            DpadEvent::CenterRelease => match self.grid.focused() {
                Some(origin) => Response::action(self.press.key_up(origin)),
                None => Response::ignored(),
            },
            DpadEvent::Back => Response::ignored(),
        }
    }

    fn handle_direction(&mut self, direction: Direction) -> Response {
        if !self.navigator.is_enabled() {
            return Response::ignored();
        }
        let Some(origin) = self.grid.focused() else {
            // Nothing focused: adopt the first cell so the remote has an
            // entry point into the grid.
            if self.grid.set_focus(0) {
                self.grid.ensure_visible(0);
                return Response::consumed();
            }
            return Response::ignored();
        };

        let ctx = NavContext::of(&self.grid, self.grid.can_scroll_further(direction));
        let outcome = self.navigator.handle_key(
            FocusRequest::new(direction, origin),
            ctx,
            &mut BridgedEdges {
                edges: &mut self.edges,
                bridge: &mut self.bridge,
            },
        );

        match outcome {
            KeyOutcome::Pass => self.default_search(origin, direction),
            KeyOutcome::Consumed => Response::consumed(),
            KeyOutcome::Focus(target) => {
                self.grid.set_focus(target);
                self.grid.ensure_visible(target);
                Response::consumed()
            }
            KeyOutcome::Scroll => {
                self.grid.scroll_by(self.scroll_step);
                self.deferred.push(Deferred::Refocus);
                nav_trace!(step = self.scroll_step, "down-edge scroll scheduled");
                Response::consumed()
            }
        }
    }

    /// The driver's stand-in for the platform focus search on `Pass`.
    fn default_search(&mut self, origin: usize, direction: Direction) -> Response {
        if let Some(target) = GridSearch.neighbor(&self.grid, origin, direction) {
            self.grid.set_focus(target);
            self.grid.ensure_visible(target);
            return Response::consumed();
        }
        if direction == Direction::Up && self.grid.can_scroll_further(Direction::Up) {
            self.grid.scroll_by(-1.0);
            return Response::consumed();
        }
        // Nothing in the grid handles it; the event escapes to the host.
        Response::ignored()
    }

    /// Apply phase after the host's layout pass completed. Returns the
    /// position that received focus, if any deferred work resolved to one.
    pub fn on_layout(&mut self) -> Option<usize> {
        let mut focused = None;
        for action in std::mem::take(&mut self.deferred) {
            match action {
                Deferred::Refocus => {
                    if let Some(target) = self.navigator.apply_after_scroll(&self.grid, &GridSearch)
                    {
                        if self.grid.set_focus(target) {
                            self.grid.ensure_visible(target);
                            focused = Some(target);
                        }
                    }
                }
                Deferred::Focus(position) => {
                    if self.grid.set_focus(position) {
                        focused = Some(position);
                    }
                }
            }
        }
        focused
    }

    /// Apply phase after `appended` new items landed at the end of the grid.
    ///
    /// Returns the position focused immediately; a target that is not yet
    /// laid out is scrolled into view and focused on the next
    /// [`on_layout`](Self::on_layout) call instead.
    pub fn on_items_appended(&mut self, appended: usize) -> Option<usize> {
        self.grid.append_items(appended);
        self.bridge.notify_loaded(appended);
        if appended == 0 {
            // Nothing landed; moving focus off the anchor would be wrong.
            self.navigator.reset();
            return None;
        }
        let focus_in_grid = self.grid.focused().is_some();
        let target = self
            .navigator
            .consume_pending_after_load(&self.grid, focus_in_grid)?;
        if self.grid.is_visible(target) {
            self.grid.set_focus(target);
            Some(target)
        } else {
            self.grid.ensure_visible(target);
            self.deferred.push(Deferred::Focus(target));
            None
        }
    }

    /// Detach the controller from its view: drops pending deferred work,
    /// press state, and focus. Idempotent.
    pub fn release(&mut self) {
        self.navigator.release();
        self.deferred.clear();
        self.press.reset();
        self.grid.clear_focus();
    }
}
