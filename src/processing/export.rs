//! Export of existing hosts, parsed back into customer fields.

use crate::api::HostApi;
use crate::error::BatchError;
use crate::models::HostSummary;
use crate::output::write_host_export;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static SERIAL_REGEX: OnceLock<Regex> = OnceLock::new();
static CUSTOMER_REGEX: OnceLock<Regex> = OnceLock::new();

fn serial_regex() -> &'static Regex {
    SERIAL_REGEX
        .get_or_init(|| Regex::new(r"(TPLG|FHTT|ALCL)\w{8}").expect("Invalid Regex"))
}

fn customer_regex() -> &'static Regex {
    CUSTOMER_REGEX.get_or_init(|| Regex::new(r"ID(\d{6,9})").expect("Invalid Regex"))
}

const NOT_FOUND: &str = "N/A";

/// One line of the host export spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct HostExportRow {
    pub customer_id: String,
    pub hostid: String,
    pub nombre: String,
    pub serial: String,
}

/// Split a visible host name back into customer id, name and ONU serial.
pub fn parse_host_name(host: &HostSummary) -> HostExportRow {
    let serial = serial_regex().find(&host.name).map(|m| m.as_str());
    let customer_id = customer_regex()
        .captures(&host.name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    let nombre = match serial {
        Some(s) => host.name.split(s).next().unwrap_or_default().trim(),
        None => host.name.as_str(),
    };
    HostExportRow {
        customer_id: customer_id.unwrap_or(NOT_FOUND).to_string(),
        hostid: host.hostid.clone(),
        nombre: nombre.to_string(),
        serial: serial.unwrap_or(NOT_FOUND).to_string(),
    }
}

/// List every host and write them to a timestamped spreadsheet.
pub async fn run_export<A: HostApi>(api: &A, results_dir: &Path) -> Result<PathBuf, BatchError> {
    let hosts = api.list_hosts().await.map_err(BatchError::Hosts)?;
    log::info!("Got {} hosts from Zabbix", hosts.len());
    let rows: Vec<HostExportRow> = hosts.iter().map(parse_host_name).collect();
    Ok(write_host_export(results_dir, &rows)?)
}
