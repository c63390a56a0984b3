//! Per-row batch results.

use super::ConnectionRow;
use crate::error::RowError;

/// Result of one `host.create` attempt.
#[derive(Debug)]
pub struct CreateOutcome {
    pub row: ConnectionRow,
    pub hostname: String,
    /// Assigned hostid, or why the row failed.
    pub result: Result<String, RowError>,
}

impl CreateOutcome {
    pub fn hostid(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    /// Human readable line for the terminal and logs.
    pub fn message(&self) -> String {
        match &self.result {
            Ok(id) => format!("{} → Host created. Host ID: {id}", self.hostname),
            Err(e) => format!("Error creating host {}: {e}", self.hostname),
        }
    }
}

/// Result of one `host.update` attempt.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub row_number: usize,
    pub hostid: Option<String>,
    /// Labels of the fields written, or why the row failed.
    pub result: Result<Vec<String>, RowError>,
}

impl UpdateOutcome {
    pub fn message(&self) -> String {
        match (&self.result, &self.hostid) {
            (Ok(_), Some(id)) => format!("Host {id} updated"),
            (Err(e), Some(id)) => format!("Error updating host {id}: {e}"),
            (_, None) => format!("Host ID not found for row {}", self.row_number),
        }
    }

    pub fn report_row(&self) -> UpdateReportRow {
        match &self.result {
            Ok(fields) => UpdateReportRow {
                hostid: self.hostid.clone().unwrap_or_default(),
                status: "success",
                message: "Update successful".to_string(),
                updated_fields: fields.join(", "),
            },
            Err(e) => UpdateReportRow {
                hostid: self.hostid.clone().unwrap_or_default(),
                status: "error",
                message: e.to_string(),
                updated_fields: String::new(),
            },
        }
    }
}

/// One line of the update report spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReportRow {
    pub hostid: String,
    pub status: &'static str,
    pub message: String,
    pub updated_fields: String,
}
