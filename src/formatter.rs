//! Terminal rendering of projected day cells with localization and color.

use chrono::Weekday;
use unicode_width::UnicodeWidthStr;

use crate::args::PickerContext;
use crate::grid::MonthGrid;
use crate::locale::{self, Locale};
use crate::project::project;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarError,
    DAYS_PER_WEEK, Day, GUTTER_WIDTH, MONTH_WIDTH,
};

/// Parse month from string (numeric 1-12 or a name in either supported locale).
///
/// Names match by case-insensitive prefix of at least three characters, so
/// "feb", "february" and "февраль" all resolve.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    if s_lower.chars().count() < 3 {
        return None;
    }
    for loc in [Locale::En, Locale::Ru] {
        let meta = locale::lookup(loc);
        for (idx, label) in meta.month_labels.iter().enumerate() {
            if label.to_lowercase().starts_with(&s_lower) {
                return Some(idx as u32 + 1);
            }
        }
    }
    None
}

/// Format month header with optional year and color.
pub fn format_month_header(
    year: i32,
    month: u32,
    loc: Locale,
    width: usize,
    show_year: bool,
    color: bool,
) -> String {
    let month_name = locale::lookup(loc).month_label(month);
    let header = if show_year {
        format!("{} {}", month_name, year)
    } else {
        month_name.to_string()
    };
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format weekday header row, ordered from the locale's week start.
pub fn format_weekday_headers(loc: Locale, color: bool) -> String {
    let meta = locale::lookup(loc);
    let mut result = String::new();

    if color {
        result.push_str(COLOR_SAND_YELLOW);
    }

    for (i, weekday) in meta.weekday_order().into_iter().enumerate() {
        // 2-char cells, like the day numbers below them
        let short_name: String = meta.day_label(weekday).chars().take(2).collect();
        if i < DAYS_PER_WEEK - 1 {
            result.push_str(&format!("{} ", short_name));
        } else {
            result.push_str(&short_name);
        }
    }

    if color {
        result.push_str(COLOR_RESET);
    }

    result
}

/// Format one day cell.
///
/// Color priority: today > selected > adjacent month > weekend > regular.
/// Without color, adjacent-month fill days print as blanks.
fn format_day(cell: &Day, color: bool, is_last: bool) -> String {
    let formatted = match cell.date {
        None => "  ".to_string(),
        Some(date) => {
            let day_str = format!("{:>2}", date.day);
            let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

            if color && cell.is_today {
                format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
            } else if color && cell.is_selected {
                format!("{}{}{}", COLOR_TEAL, day_str, COLOR_RESET)
            } else if !cell.is_current_month {
                if color {
                    format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
                } else {
                    "  ".to_string()
                }
            } else if color && is_weekend {
                format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
            } else {
                day_str
            }
        }
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format a projected month as grid lines: header, weekday row, then weeks.
pub fn format_month_grid(ctx: &PickerContext, grid: &MonthGrid, show_year: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    lines.push(format_month_header(
        grid.year,
        grid.month,
        ctx.locale,
        MONTH_WIDTH,
        show_year,
        ctx.color,
    ));
    lines.push(format_weekday_headers(ctx.locale, ctx.color));

    let cells = project(grid, &ctx.selection, ctx.today);
    for week in cells.chunks(DAYS_PER_WEEK) {
        let mut line = String::new();
        for (day_in_week, cell) in week.iter().enumerate() {
            let is_last = day_in_week == DAYS_PER_WEEK - 1;
            line.push_str(&format_day(cell, ctx.color, is_last));
        }
        lines.push(line);
    }

    lines
}

/// Print a single month.
pub fn print_month(ctx: &PickerContext, year: i32, month: u32) -> Result<(), CalendarError> {
    let grid = MonthGrid::build(year, month, ctx.locale)?;
    for line in format_month_grid(ctx, &grid, true) {
        println!("{}", line);
    }
    Ok(())
}

/// Print previous, current and next month, side by side when the terminal
/// is wide enough and stacked otherwise.
pub fn print_three_months(ctx: &PickerContext, year: i32, month: u32) -> Result<(), CalendarError> {
    let prev_month = if month == 1 { 12 } else { month - 1 };
    let prev_year = if month == 1 { year - 1 } else { year };
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    let grids = [
        MonthGrid::build(prev_year, prev_month, ctx.locale)?,
        MonthGrid::build(year, month, ctx.locale)?,
        MonthGrid::build(next_year, next_month, ctx.locale)?,
    ];

    if fits_side_by_side(grids.len()) {
        print_months_side_by_side(ctx, &grids);
    } else {
        for grid in &grids {
            for line in format_month_grid(ctx, grid, true) {
                println!("{}", line);
            }
            println!();
        }
    }
    Ok(())
}

/// Whether `count` month blocks fit on one terminal row.
fn fits_side_by_side(count: usize) -> bool {
    let needed = count * MONTH_WIDTH + (count - 1) * GUTTER_WIDTH;
    match terminal_size::terminal_size() {
        Some((w, _)) => w.0 as usize >= needed,
        None => true,
    }
}

/// Print multiple months side by side.
pub fn print_months_side_by_side(ctx: &PickerContext, grids: &[MonthGrid]) {
    let blocks: Vec<Vec<String>> = grids
        .iter()
        .map(|g| format_month_grid(ctx, g, true))
        .collect();
    let max_height = blocks.iter().map(|b| b.len()).max().unwrap_or(0);

    for row in 0..max_height {
        let mut line = String::new();
        for (i, block) in blocks.iter().enumerate() {
            if row < block.len() {
                let text = &block[row];
                line.push_str(text);
                let padding = MONTH_WIDTH.saturating_sub(text.width());
                for _ in 0..padding {
                    line.push(' ');
                }
            } else {
                for _ in 0..MONTH_WIDTH {
                    line.push(' ');
                }
            }
            if i < blocks.len() - 1 {
                for _ in 0..GUTTER_WIDTH {
                    line.push(' ');
                }
            }
        }
        println!("{}", line.trim_end());
    }
}
