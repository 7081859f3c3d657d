//! Grid data contract and row/column arithmetic.
//!
//! The navigator never owns or mutates grid data. It reads two numbers
//! through [`GridModel`] (item count and column span) and derives rows and
//! columns from a cell's linear position. A zero column span is clamped to 1
//! so a misconfigured layout degrades to a single-column list instead of a
//! division by zero.
//!
//! [`GridState`] is a concrete model for hosts that do not already have one:
//! it tracks the focused position and a fractional row scroll offset over a
//! fixed-height viewport, which is everything the driver needs to answer
//! "can this container scroll further before it needs more data".

use crate::input::Direction;

/// Read-only view of a focusable grid.
///
/// Implemented by whatever owns the backing item list. `column_count` is the
/// span of the layout (a single-column list reports 1; staggered layouts
/// report their span), and any non-positive value is treated as 1.
pub trait GridModel {
    /// Number of items currently in the grid.
    fn item_count(&self) -> usize;
    /// Column span of the layout.
    fn column_count(&self) -> usize;
}

/// Column span clamped to at least 1.
pub(crate) fn span_of(grid: &dyn GridModel) -> usize {
    grid.column_count().max(1)
}

/// Row of `position` under the given span.
#[must_use]
pub fn row_of(position: usize, columns: usize) -> usize {
    position / columns.max(1)
}

/// Column of `position` under the given span.
#[must_use]
pub fn col_of(position: usize, columns: usize) -> usize {
    position % columns.max(1)
}

/// Index of the last row, or `None` for an empty grid.
#[must_use]
pub fn last_row(item_count: usize, columns: usize) -> Option<usize> {
    item_count.checked_sub(1).map(|last| row_of(last, columns))
}

/// In-grid neighbor lookup for a directional press.
///
/// This is the seam where a host with a real platform focus search plugs in;
/// [`GridSearch`] is the deterministic arithmetic default.
pub trait FocusSearch {
    /// Position of the in-grid neighbor of `origin` in `direction`, if one
    /// exists.
    fn neighbor(&self, grid: &dyn GridModel, origin: usize, direction: Direction)
        -> Option<usize>;
}

/// Arithmetic focus search over the grid's row/column structure.
///
/// Down snaps to the nearest existing cell when the last row is partial: a
/// press from the third column of a full row lands on the last item of a
/// two-item final row.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSearch;

impl FocusSearch for GridSearch {
    fn neighbor(
        &self,
        grid: &dyn GridModel,
        origin: usize,
        direction: Direction,
    ) -> Option<usize> {
        let count = grid.item_count();
        if count == 0 || origin >= count {
            return None;
        }
        let columns = span_of(grid);
        let row = row_of(origin, columns) as isize + direction.row_delta();
        let col = col_of(origin, columns) as isize + direction.col_delta();
        if row < 0 || col < 0 || col >= columns as isize {
            return None;
        }
        if row > last_row(count, columns)? as isize {
            return None;
        }
        let target = row as usize * columns + col as usize;
        match direction {
            // Partial last rows snap to the nearest existing cell.
            Direction::Down => Some(target.min(count - 1)),
            _ => (target < count).then_some(target),
        }
    }
}

/// Owned grid/viewport model: item count, span, focus, and scroll state.
///
/// Scroll offsets are fractional rows so sub-row scroll steps (the 0.8-cell
/// step used on the down edge) accumulate correctly.
#[derive(Debug, Clone)]
pub struct GridState {
    items: usize,
    columns: usize,
    focused: Option<usize>,
    scroll_row: f32,
    viewport_rows: f32,
}

impl GridState {
    /// Create an empty grid with the given column span.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            items: 0,
            columns: columns.max(1),
            focused: None,
            scroll_row: 0.0,
            viewport_rows: 0.0,
        }
    }

    /// Set the initial item count.
    #[must_use]
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = items;
        self
    }

    /// Set the viewport height in rows.
    #[must_use]
    pub fn with_viewport_rows(mut self, rows: f32) -> Self {
        self.viewport_rows = rows.max(0.0);
        self
    }

    /// Currently focused position, if focus is inside the grid.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus to `position`. Returns false (and leaves focus unchanged)
    /// when the position does not exist.
    pub fn set_focus(&mut self, position: usize) -> bool {
        if position < self.items {
            self.focused = Some(position);
            true
        } else {
            false
        }
    }

    /// Drop focus, e.g. when a dialog above the grid takes it.
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Total number of rows.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.items.div_ceil(self.columns)
    }

    /// Current scroll offset in rows.
    #[must_use]
    pub fn scroll_row(&self) -> f32 {
        self.scroll_row
    }

    /// Whether the viewport can move further in `direction` over existing
    /// rows. Horizontal directions never scroll.
    #[must_use]
    pub fn can_scroll_further(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.scroll_row > 0.0,
            Direction::Down => self.scroll_row + self.viewport_rows < self.total_rows() as f32,
            Direction::Left | Direction::Right => false,
        }
    }

    /// Scroll by a (possibly fractional, possibly negative) number of rows,
    /// clamped to the content.
    pub fn scroll_by(&mut self, rows: f32) {
        let max = (self.total_rows() as f32 - self.viewport_rows).max(0.0);
        self.scroll_row = (self.scroll_row + rows).clamp(0.0, max);
    }

    /// Whether the row holding `position` is fully inside the viewport.
    #[must_use]
    pub fn is_visible(&self, position: usize) -> bool {
        if position >= self.items {
            return false;
        }
        let row = row_of(position, self.columns) as f32;
        row >= self.scroll_row && row + 1.0 <= self.scroll_row + self.viewport_rows
    }

    /// Scroll the minimum amount needed to bring `position` into view.
    pub fn ensure_visible(&mut self, position: usize) {
        if position >= self.items || self.viewport_rows <= 0.0 {
            return;
        }
        let row = row_of(position, self.columns) as f32;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row + 1.0 > self.scroll_row + self.viewport_rows {
            self.scroll_row = row + 1.0 - self.viewport_rows;
        }
    }

    /// Append `count` items to the end of the grid.
    pub fn append_items(&mut self, count: usize) {
        self.items += count;
    }

    /// Clear items, focus, and scroll state.
    pub fn reset(&mut self) {
        self.items = 0;
        self.focused = None;
        self.scroll_row = 0.0;
    }
}

impl GridModel for GridState {
    fn item_count(&self) -> usize {
        self.items
    }

    fn column_count(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn grid(items: usize, columns: usize) -> GridState {
        GridState::new(columns).with_items(items)
    }

    #[test]
    fn row_col_math() {
        assert_eq!(row_of(17, 4), 4);
        assert_eq!(col_of(17, 4), 1);
        assert_eq!(last_row(20, 4), Some(4));
        assert_eq!(last_row(21, 4), Some(5));
        assert_eq!(last_row(0, 4), None);
    }

    #[test]
    fn zero_span_degrades_to_single_column() {
        let g = grid(3, 0);
        assert_eq!(GridSearch.neighbor(&g, 1, Direction::Down), Some(2));
        assert_eq!(GridSearch.neighbor(&g, 1, Direction::Right), None);
        assert_eq!(row_of(2, 0), 2);
    }

    #[test]
    fn search_finds_in_grid_neighbors() {
        let g = grid(20, 4);
        assert_eq!(GridSearch.neighbor(&g, 5, Direction::Up), Some(1));
        assert_eq!(GridSearch.neighbor(&g, 5, Direction::Down), Some(9));
        assert_eq!(GridSearch.neighbor(&g, 5, Direction::Left), Some(4));
        assert_eq!(GridSearch.neighbor(&g, 5, Direction::Right), Some(6));
    }

    #[test]
    fn search_stops_at_edges() {
        let g = grid(20, 4);
        assert_eq!(GridSearch.neighbor(&g, 2, Direction::Up), None);
        assert_eq!(GridSearch.neighbor(&g, 17, Direction::Down), None);
        assert_eq!(GridSearch.neighbor(&g, 4, Direction::Left), None);
        assert_eq!(GridSearch.neighbor(&g, 7, Direction::Right), None);
        assert_eq!(GridSearch.neighbor(&g, 19, Direction::Right), None);
    }

    #[test]
    fn search_snaps_into_partial_last_row() {
        // 18 items, 4 columns: last row holds positions 16..=17.
        let g = grid(18, 4);
        assert_eq!(GridSearch.neighbor(&g, 14, Direction::Down), Some(17));
        assert_eq!(GridSearch.neighbor(&g, 15, Direction::Down), Some(17));
        assert_eq!(GridSearch.neighbor(&g, 13, Direction::Down), Some(17));
    }

    #[test]
    fn search_on_empty_grid_is_none() {
        let g = grid(0, 4);
        for direction in Direction::ALL {
            assert_eq!(GridSearch.neighbor(&g, 0, direction), None);
        }
    }

    #[test]
    fn focus_rejects_out_of_range() {
        let mut g = grid(5, 2);
        assert!(g.set_focus(4));
        assert!(!g.set_focus(5));
        assert_eq!(g.focused(), Some(4));
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut g = grid(20, 4).with_viewport_rows(4.0);
        assert!(g.can_scroll_further(Direction::Down));
        assert!(!g.can_scroll_further(Direction::Up));
        g.scroll_by(10.0);
        assert_eq!(g.scroll_row(), 1.0);
        assert!(!g.can_scroll_further(Direction::Down));
        g.scroll_by(-10.0);
        assert_eq!(g.scroll_row(), 0.0);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut g = grid(40, 4).with_viewport_rows(4.0);
        assert!(g.is_visible(0));
        assert!(!g.is_visible(20));
        g.ensure_visible(20); // row 5
        assert_eq!(g.scroll_row(), 2.0);
        assert!(g.is_visible(20));
        g.ensure_visible(0);
        assert_eq!(g.scroll_row(), 0.0);
    }
}
