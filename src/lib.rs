//! Locale-aware calendar grid core for date picker widgets.
//!
//! Features:
//! - Complete-weeks month grids with leading/trailing fill days
//! - Russian and English locale catalogs (labels and week start)
//! - Selection and "today" status projected onto day cells
//! - Terminal preview of the projected grid

pub mod args;
pub mod formatter;
pub mod grid;
pub mod locale;
pub mod project;
pub mod selection;
pub mod types;
