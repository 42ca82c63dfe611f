//! Projection of raw grid dates into status-annotated day cells.

use crate::grid::MonthGrid;
use crate::selection::SelectionState;
use crate::types::{CalendarDate, Day};

/// Map every date in `grid` to a [`Day`] cell.
///
/// Pure; preserves the grid's order and length exactly. `today` is passed in
/// per call rather than read from a cached clock, so two projections a day
/// apart disagree on `is_today` without any invalidation step.
pub fn project(grid: &MonthGrid, selection: &SelectionState, today: CalendarDate) -> Vec<Day> {
    grid.dates
        .iter()
        .map(|&date| Day {
            date: Some(date),
            is_current_month: grid.in_target_month(date),
            is_today: date == today,
            is_selected: selection.is_selected(date),
        })
        .collect()
}
