//! Calendar grid construction using Zeller's algorithm for weekday lookup.

use chrono::Weekday;

use crate::locale::{self, Locale};
use crate::types::{CalendarDate, CalendarError, DAYS_PER_WEEK};

/// Check if a year is a leap year under the proleptic Gregorian rule:
/// divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-12).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

impl CalendarDate {
    /// Calculate weekday using Zeller's congruence algorithm.
    ///
    /// `div_euclid`/`rem_euclid` keep the formula correct for negative years.
    pub fn weekday(self) -> Weekday {
        let m = if self.month < 3 {
            self.month + 12
        } else {
            self.month
        };
        let q = self.day as i32;
        let year = if self.month < 3 {
            self.year - 1
        } else {
            self.year
        };
        let k: i32 = year.rem_euclid(100);
        let j: i32 = year.div_euclid(100);

        let h = (q + (13 * (m as i32 + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
        // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
        match h {
            0 => Weekday::Sat,
            1 => Weekday::Sun,
            2 => Weekday::Mon,
            3 => Weekday::Tue,
            4 => Weekday::Wed,
            5 => Weekday::Thu,
            6 => Weekday::Fri,
            _ => unreachable!(),
        }
    }

    /// The next calendar day, rolling over month and year boundaries.
    pub fn succ(self) -> CalendarDate {
        if self.day < days_in_month(self.year, self.month) {
            CalendarDate::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            CalendarDate::new(self.year, self.month + 1, 1)
        } else {
            CalendarDate::new(self.year + 1, 1, 1)
        }
    }

    /// The previous calendar day, rolling over month and year boundaries.
    pub fn pred(self) -> CalendarDate {
        if self.day > 1 {
            CalendarDate::new(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            CalendarDate::new(self.year, self.month - 1, days_in_month(self.year, self.month - 1))
        } else {
            CalendarDate::new(self.year - 1, 12, 31)
        }
    }
}

/// Days forward from weekday `from` to reach weekday `to` (0-6).
fn days_from(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7
}

/// The complete-weeks run of dates covering one target month.
///
/// Dates are strictly ascending with no gaps; the length is a multiple of 7.
/// Leading and trailing cells belong to the adjacent months.
#[derive(Debug)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub dates: Vec<CalendarDate>,
}

impl MonthGrid {
    /// Build the grid for a target month and locale.
    ///
    /// Walks back from the 1st to the locale's week start and forward from
    /// the last day to the day before the next week start, then emits every
    /// date in between. January and December roll into the adjacent year.
    pub fn build(year: i32, month: u32, locale: Locale) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let week_start = locale::lookup(locale).week_start;

        let first = CalendarDate::new(year, month, 1);
        let last = CalendarDate::new(year, month, days_in_month(year, month));

        let leading = days_from(week_start, first.weekday());
        let trailing = 6 - days_from(week_start, last.weekday());
        let total = leading + days_in_month(year, month) + trailing;
        debug_assert_eq!(total as usize % DAYS_PER_WEEK, 0);

        let mut date = first;
        for _ in 0..leading {
            date = date.pred();
        }

        let mut dates = Vec::with_capacity(total as usize);
        for _ in 0..total {
            dates.push(date);
            date = date.succ();
        }

        Ok(MonthGrid { year, month, dates })
    }

    /// True iff `date` falls in the grid's target month.
    pub fn in_target_month(&self, date: CalendarDate) -> bool {
        date.year == self.year && date.month == self.month
    }
}
