#![allow(clippy::unwrap_used)]
//! Property-based tests for gridnav.
//!
//! Uses proptest to sweep grid shapes and key sequences for invariants the
//! unit tests only spot-check.

use gridnav::prelude::*;
use proptest::prelude::*;

/// Edge handler that advertises more data and counts load requests.
#[derive(Debug, Default)]
struct CountingEdges {
    more: bool,
    loads: usize,
}

impl EdgeHandler for CountingEdges {
    fn can_load_more(&self) -> bool {
        self.more
    }
    fn load_more(&mut self) {
        self.loads += 1;
    }
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    /// Down with a same-column neighbor in range always focuses exactly
    /// origin + columns.
    #[test]
    fn down_targets_same_column_neighbor(
        columns in 1usize..8,
        rows in 2usize..12,
        origin in 0usize..64,
    ) {
        let items = columns * rows;
        prop_assume!(origin + columns < items);

        let mut nav = FocusNavigator::new();
        let mut edges = CountingEdges::default();
        let ctx = NavContext {
            item_count: items,
            column_count: columns,
            can_scroll_further: false,
        };
        let outcome = nav.handle_key(FocusRequest::new(Direction::Down, origin), ctx, &mut edges);
        prop_assert_eq!(outcome, KeyOutcome::Focus(origin + columns));
    }

    /// An empty grid never panics and never produces a focus or scroll
    /// outcome, whatever the origin claims to be.
    #[test]
    fn empty_grid_never_navigates(
        columns in 0usize..8,
        origin in 0usize..128,
        direction in any_direction(),
        can_scroll in any::<bool>(),
        more in any::<bool>(),
    ) {
        let mut nav = FocusNavigator::new();
        let mut edges = CountingEdges { more, loads: 0 };
        let ctx = NavContext {
            item_count: 0,
            column_count: columns,
            can_scroll_further: can_scroll,
        };
        let outcome = nav.handle_key(FocusRequest::new(direction, origin), ctx, &mut edges);
        prop_assert!(matches!(
            outcome,
            KeyOutcome::Pass | KeyOutcome::Consumed | KeyOutcome::Scroll
        ));
    }

    /// Navigation outcomes always stay inside the grid: a forced focus
    /// target is a valid position.
    #[test]
    fn focus_targets_are_in_range(
        columns in 1usize..8,
        items in 1usize..100,
        origin in 0usize..100,
        direction in any_direction(),
    ) {
        prop_assume!(origin < items);
        let mut nav = FocusNavigator::new();
        let mut edges = CountingEdges::default();
        let ctx = NavContext {
            item_count: items,
            column_count: columns,
            can_scroll_further: false,
        };
        let outcome = nav.handle_key(FocusRequest::new(direction, origin), ctx, &mut edges);
        if let KeyOutcome::Focus(target) = outcome {
            prop_assert!(target < items);
            prop_assert_ne!(target, origin);
        }
    }

    /// However many Down presses hit a loadable bottom edge, only one load
    /// is requested while the first is in flight, and consumption after
    /// growth targets anchor + columns.
    #[test]
    fn repeated_bottom_edge_presses_load_once(
        columns in 1usize..8,
        rows in 1usize..10,
        presses in 1usize..6,
        appended in 1usize..40,
    ) {
        let items = columns * rows;
        let origin = items - 1; // last row, last cell

        let mut driver = FocusDriver::new(
            GridState::new(columns)
                .with_items(items)
                .with_viewport_rows(rows as f32),
            NullEdges,
            MoreLoader::default(),
        );
        driver.grid_mut().set_focus(origin);

        for _ in 0..presses {
            let response = driver.handle_event(DpadEvent::Direction(Direction::Down));
            prop_assert!(response.consumed);
        }
        prop_assert_eq!(driver.bridge().loader().calls, 1);

        let focused_now = driver.on_items_appended(appended);
        let focused = focused_now.or_else(|| driver.on_layout());
        let expected = if origin + columns < items + appended {
            Some(origin + columns)
        } else if origin + 1 < items + appended {
            Some(origin + 1)
        } else {
            None
        };
        prop_assert_eq!(focused, expected);

        // Consumption is at-most-once.
        prop_assert_eq!(driver.on_items_appended(0), None);
    }

    /// Pending anchors never survive release().
    #[test]
    fn release_always_clears_pending(
        columns in 1usize..8,
        rows in 1usize..10,
        direction in any_direction(),
    ) {
        let items = columns * rows;
        let mut nav = FocusNavigator::new();
        let mut edges = CountingEdges { more: true, loads: 0 };
        let ctx = NavContext {
            item_count: items,
            column_count: columns,
            can_scroll_further: false,
        };
        nav.handle_key(FocusRequest::new(direction, items - 1), ctx, &mut edges);
        nav.release();
        prop_assert_eq!(nav.pending_anchor(), None);
        let grid = GridState::new(columns).with_items(items + 50);
        prop_assert_eq!(nav.consume_pending_after_load(&grid, true), None);
    }
}

/// Loader that always has more data, counting calls.
#[derive(Debug, Default)]
struct MoreLoader {
    calls: usize,
}

impl PageLoader for MoreLoader {
    fn has_more(&self) -> bool {
        true
    }
    fn load_more(&mut self) {
        self.calls += 1;
    }
}
