//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the `[month] [year]` convention.

use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::locale::Locale;
use crate::selection::SelectionState;
use crate::types::{COLOR_ENABLED_BY_DEFAULT, CalendarDate};

#[derive(Parser, Debug)]
#[command(name = "monthgrid")]
#[command(about = "Previews the date picker grid for a month", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Locale for labels and week start.
    #[arg(
        short,
        long,
        default_value = "en",
        help_heading = "Grid options",
        value_name = "locale"
    )]
    pub locale: Locale,

    /// Pre-selected date (YYYY-MM-DD).
    #[arg(short, long, help_heading = "Grid options", value_name = "date")]
    pub select: Option<String>,

    /// Show three months (previous, current, next).
    #[arg(short = '3', long = "three", help_heading = "Display options")]
    pub three_months: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Month (1-12 or name) - optional, defaults to the current month.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999) - optional, defaults to the current year.
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Preview the day-cell grid a date picker would show.

Without any arguments, display the current month.

Examples:
  monthgrid                          Current month
  monthgrid 2 2026                   February 2026
  monthgrid -3                       Previous, current and next month
  monthgrid --locale ru              Russian labels, week starts on Monday
  monthgrid --select 2026-02-14      Highlight a selected date";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Session context for one preview run: the (locale, today, selection)
/// tuple the grid core consumes, plus output options.
#[derive(Debug, Clone)]
pub struct PickerContext {
    pub locale: Locale,
    pub color: bool,
    /// Reference "today", resolved once per run and passed into projection.
    pub today: CalendarDate,
    pub selection: SelectionState,
}

impl PickerContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let color = !args.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let mut selection = SelectionState::new();
        if let Some(date_str) = &args.select {
            let date = chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date value: {} (expected YYYY-MM-DD)", date_str))?;
            selection.select(date.into());
        }

        Ok(PickerContext {
            locale: args.locale,
            color,
            today: get_today_date(),
            selection,
        })
    }
}

/// Get today's date, respecting MONTHGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> CalendarDate {
    if let Ok(test_time) = std::env::var("MONTHGRID_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date.into();
    }
    chrono::Local::now().date_naive().into()
}

/// Calculate display month from positional arguments.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
pub fn get_display_date(args: &Args) -> Result<(i32, u32), String> {
    let today = get_today_date();

    match (&args.month_arg, &args.year_arg) {
        (None, None) => Ok((today.year, today.month)),
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>() {
                // 4 digits = year
                if (1000..=9999).contains(&num) {
                    return Ok((num, today.month));
                }
                // 1-2 digits = month
                if (1..=12).contains(&num) {
                    return Ok((today.year, num as u32));
                }
            }
            // Try parsing as month name
            if let Some(month) = crate::formatter::parse_month(val) {
                return Ok((today.year, month));
            }
            Err(format!("Invalid argument: {}", val))
        }
        (Some(month_str), Some(year_str)) => {
            let month = crate::formatter::parse_month(month_str)
                .ok_or_else(|| format!("Invalid month: {}", month_str))?;
            let year = year_str
                .parse::<i32>()
                .map_err(|_| format!("Invalid year: {}", year_str))?;
            if !(1..=9999).contains(&year) {
                return Err(format!("Invalid year: {} (must be 1-9999)", year));
            }
            Ok((year, month))
        }
        (None, Some(_)) => Err("Invalid argument combination".to_string()),
    }
}
