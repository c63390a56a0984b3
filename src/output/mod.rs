//! Output of batch results.
//!
//! - [`xlsx`] - result spreadsheets
//! - [`terminal`] - colored run summaries

mod terminal;
mod xlsx;

pub use terminal::{print_create_report, print_update_report};
pub use xlsx::{
    write_create_report, write_host_export, write_update_report, CREATE_REPORT_PREFIX,
    HOST_EXPORT_PREFIX, UPDATE_REPORT_PREFIX,
};
