//! Core types, errors and constants for the calendar grid.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A calendar date in the proleptic Gregorian calendar.
///
/// Plain value type; comparison order (year, month, day) is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A single projected calendar cell.
///
/// `date` is present in every cell a projection produces; the placeholder
/// state exists only for callers that need to reserve an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: Option<CalendarDate>,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl Day {
    /// Degenerate cell with no date and all flags cleared.
    pub fn placeholder() -> Self {
        Day {
            date: None,
            is_current_month: false,
            is_today: false,
            is_selected: false,
        }
    }
}

/// Input-validation failures surfaced by the grid core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside 1-12.
    InvalidMonth(u32),
    /// Locale tag outside the supported set.
    UnsupportedLocale(String),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidMonth(month) => {
                write!(f, "invalid month: {} (must be 1-12)", month)
            }
            CalendarError::UnsupportedLocale(tag) => {
                write!(f, "unsupported locale: {}", tag)
            }
        }
    }
}

impl std::error::Error for CalendarError {}

// Grid geometry
pub const DAYS_PER_WEEK: usize = 7;
pub const MIN_GRID_CELLS: usize = 28; // 4 complete weeks
pub const MAX_GRID_CELLS: usize = 42; // 6 complete weeks

// Layout widths for the terminal preview
pub const MONTH_WIDTH: usize = 20;
pub const GUTTER_WIDTH: usize = 2;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
