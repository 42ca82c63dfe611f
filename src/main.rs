//! Date picker grid preview CLI.
//!
//! # Usage
//! ```ignore
//! monthgrid                      // Current month
//! monthgrid 2 2026               // February 2026
//! monthgrid -3                   // Previous, current and next month
//! monthgrid --locale ru          // Russian labels, Monday week start
//! monthgrid --select 2026-02-14  // Highlight a selected date
//! ```

use monthgrid::args::{Args, PickerContext, get_display_date};
use monthgrid::formatter::{print_month, print_three_months};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("monthgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = PickerContext::new(args)?;
    let (year, month) = get_display_date(args)?;

    if args.three_months {
        print_three_months(&ctx, year, month).map_err(|e| e.to_string())
    } else {
        print_month(&ctx, year, month).map_err(|e| e.to_string())
    }
}
