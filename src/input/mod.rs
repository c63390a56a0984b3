//! Spreadsheet input.

mod xlsx;

pub use xlsx::{read_sheet, Sheet};
