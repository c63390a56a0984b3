//! Read the first worksheet of an xlsx file into header-keyed records.

use crate::error::SheetError;
use crate::models::Record;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Header row plus the non-blank data rows of one worksheet.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub path: String,
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Sheet {
    /// Wanted columns that are not in the header row, in the given order.
    pub fn missing_columns(&self, wanted: &[&str]) -> Vec<String> {
        wanted
            .iter()
            .filter(|w| !self.headers.iter().any(|h| h == *w))
            .map(|w| w.to_string())
            .collect()
    }

    pub fn require_columns(&self, wanted: &[&str]) -> Result<(), SheetError> {
        let missing = self.missing_columns(wanted);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SheetError::MissingColumns {
                path: self.path.clone(),
                columns: missing,
            })
        }
    }
}

/// Render a cell as text. Whole floats print without a decimal part so ids
/// and slot numbers keep their spreadsheet form.
fn cell_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

pub fn read_sheet(path: &Path) -> Result<Sheet, SheetError> {
    let display = path.display().to_string();
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e: calamine::XlsxError| SheetError::Read {
        path: display.clone(),
        detail: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SheetError::NoSheet(display.clone()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SheetError::Read {
            path: display.clone(),
            detail: e.to_string(),
        })?;

    // Spreadsheet row number of the header, 1-based.
    let first_row = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    let mut rows = range.rows().enumerate();
    let headers: Vec<String> = match rows.next() {
        Some((_, header)) => header.iter().map(|c| cell_string(c).trim().to_string()).collect(),
        None => Vec::new(),
    };

    let mut records = Vec::new();
    for (offset, row) in rows {
        let values: Vec<String> = row.iter().map(cell_string).collect();
        if values.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        let mut record = Record::new(first_row + offset);
        for (header, value) in headers.iter().zip(values.iter()) {
            if !header.is_empty() {
                record.insert(header, value);
            }
        }
        records.push(record);
    }

    log::info!(
        "Read {} rows from {display} sheet '{sheet_name}'",
        records.len()
    );
    Ok(Sheet {
        path: display,
        headers,
        records,
    })
}
