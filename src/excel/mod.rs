//! Excel extraction for the daily KPI workbook
//!
//! - `layout`: fixed cell coordinates of a daily sheet
//! - `cell`: defensive number/text coercion
//! - `reader`: sheet lookup and DayRecord assembly

mod cell;
pub mod layout;
mod reader;

pub use cell::SheetGrid;
pub use reader::{
    read_day_from_range, DateSelection, KpiReader, KpiWorkbook, WorkbookData,
    DEFAULT_EXCLUDED_SHEETS,
};
