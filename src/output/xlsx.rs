//! Result spreadsheets.

use crate::config::report_timestamp;
use crate::error::SheetError;
use crate::models::{columns, CreateOutcome, UpdateReportRow, CREATE_COLUMNS};
use crate::processing::HostExportRow;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CREATE_REPORT_PREFIX: &str = "created_hosts";
pub const UPDATE_REPORT_PREFIX: &str = "zabbix_update_report";
pub const HOST_EXPORT_PREFIX: &str = "hosts_zabbix";

const UPDATE_HEADERS: [&str; 4] = ["hostid", "status", "message", "updated_fields"];
const EXPORT_HEADERS: [&str; 4] = ["customer id", "hostid", "nombre", "serial onu"];

/// `<dir>/<prefix>_<timestamp>.xlsx`, creating `dir` if needed. The file is
/// reserved on disk; runs within the same second get `_1`, `_2`, ... appended.
fn report_path(dir: &Path, prefix: &str) -> Result<PathBuf, SheetError> {
    std::fs::create_dir_all(dir)?;
    let stamp = report_timestamp();
    let mut attempt = 0u32;
    loop {
        let name = match attempt {
            0 => format!("{prefix}_{stamp}.xlsx"),
            n => format!("{prefix}_{stamp}_{n}.xlsx"),
        };
        let candidate = dir.join(name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(_) => return Ok(candidate),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                log::debug!("{} exists, trying next suffix", candidate.display());
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn write_header(ws: &mut Worksheet, headers: &[&str]) -> Result<(), SheetError> {
    let bold = Format::new().set_bold();
    for (col, name) in headers.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, &bold)?;
    }
    Ok(())
}

fn write_row(ws: &mut Worksheet, row: u32, values: &[&str]) -> Result<(), SheetError> {
    for (col, value) in values.iter().enumerate() {
        ws.write_string(row, col as u16, *value)?;
    }
    Ok(())
}

fn save(mut workbook: Workbook, path: PathBuf) -> Result<PathBuf, SheetError> {
    workbook.save(&path)?;
    log::info!("Report written to {}", path.display());
    Ok(path)
}

/// hostid first, then the input columns, the hostname and the error.
pub fn write_create_report(dir: &Path, outcomes: &[CreateOutcome]) -> Result<PathBuf, SheetError> {
    let path = report_path(dir, CREATE_REPORT_PREFIX)?;
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();

    let mut headers = vec![columns::HOSTID];
    headers.extend(CREATE_COLUMNS);
    headers.extend([columns::HOSTNAME, "error"]);
    write_header(ws, &headers)?;

    for (i, outcome) in outcomes.iter().enumerate() {
        let error = outcome
            .result
            .as_ref()
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        let mut values = vec![outcome.hostid().unwrap_or("")];
        values.extend(outcome.row.values());
        values.extend([outcome.hostname.as_str(), error.as_str()]);
        write_row(ws, i as u32 + 1, &values)?;
    }
    save(workbook, path)
}

pub fn write_update_report(dir: &Path, rows: &[UpdateReportRow]) -> Result<PathBuf, SheetError> {
    let path = report_path(dir, UPDATE_REPORT_PREFIX)?;
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    write_header(ws, &UPDATE_HEADERS)?;
    for (i, r) in rows.iter().enumerate() {
        write_row(
            ws,
            i as u32 + 1,
            &[r.hostid.as_str(), r.status, r.message.as_str(), r.updated_fields.as_str()],
        )?;
    }
    save(workbook, path)
}

pub fn write_host_export(dir: &Path, rows: &[HostExportRow]) -> Result<PathBuf, SheetError> {
    let path = report_path(dir, HOST_EXPORT_PREFIX)?;
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    write_header(ws, &EXPORT_HEADERS)?;
    for (i, r) in rows.iter().enumerate() {
        write_row(
            ws,
            i as u32 + 1,
            &[
                r.customer_id.as_str(),
                r.hostid.as_str(),
                r.nombre.as_str(),
                r.serial.as_str(),
            ],
        )?;
    }
    save(workbook, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::read_sheet;

    #[test]
    fn test_update_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            UpdateReportRow {
                hostid: "10500".to_string(),
                status: "success",
                message: "Update successful".to_string(),
                updated_fields: "Latitud, Longitud".to_string(),
            },
            UpdateReportRow {
                hostid: String::new(),
                status: "error",
                message: "missing hostid in row 2".to_string(),
                updated_fields: String::new(),
            },
        ];
        let path = write_update_report(&dir.path().join("results"), &rows).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("zabbix_update_report_") && name.ends_with(".xlsx"));

        let sheet = read_sheet(&path).unwrap();
        assert_eq!(sheet.headers, UPDATE_HEADERS);
        assert_eq!(sheet.records.len(), 2);
        assert_eq!(sheet.records[0].get("updated_fields"), Some("Latitud, Longitud"));
        assert_eq!(sheet.records[1].get("hostid"), None);
        assert_eq!(sheet.records[1].get("status"), Some("error"));
    }

    #[test]
    fn test_reports_in_same_second_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_update_report(dir.path(), &[]).unwrap();
        let second = write_update_report(dir.path(), &[]).unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
        assert!(read_sheet(&first).is_ok());
        assert!(read_sheet(&second).is_ok());
    }
}
