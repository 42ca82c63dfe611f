//! Selection state: at most one selected date per widget session.

use crate::types::CalendarDate;

/// Holds the zero-or-one selected date.
///
/// Created empty; mutated only through [`select`](Self::select) and
/// [`clear`](Self::clear). Matching is by calendar-date value and carries no
/// locale dependency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<CalendarDate>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Select a date, replacing any prior selection.
    pub fn select(&mut self, date: CalendarDate) {
        self.selected = Some(date);
    }

    /// Drop the selection, if any.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected == Some(date)
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }
}
