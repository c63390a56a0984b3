//! Update batch: patch selected fields on existing hosts.

use super::groups::{resolve_group_ids, GroupCatalog};
use super::transform::{build_update_patch, UpdateField};
use crate::api::HostApi;
use crate::error::{BatchError, RowError};
use crate::input::Sheet;
use crate::models::{columns, Record, UpdateOutcome};
use crate::output::write_update_report;
use std::path::{Path, PathBuf};

/// Columns needed to rebuild the hostname.
pub const HOSTNAME_COLUMNS: [&str; 4] = [
    columns::NAME,
    columns::CUSTOMER,
    columns::ONT,
    columns::LOCALITY,
];

#[derive(Debug)]
pub struct UpdateReport {
    pub outcomes: Vec<UpdateOutcome>,
    pub report_path: PathBuf,
}

impl UpdateReport {
    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }
}

/// Batch level checks, run before any remote call.
pub fn check_update_request(sheet: &Sheet, fields: &[UpdateField]) -> Result<(), BatchError> {
    if fields.is_empty() {
        return Err(BatchError::NoFieldsSelected);
    }
    let mut missing = sheet.missing_columns(&[columns::HOSTID]);
    if fields.contains(&UpdateField::Hostname) {
        missing.extend(sheet.missing_columns(&HOSTNAME_COLUMNS));
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BatchError::MissingColumns(missing))
    }
}

async fn update_one<A: HostApi>(
    api: &A,
    hostid: &str,
    record: &Record,
    fields: &[UpdateField],
    catalog: &GroupCatalog,
) -> Result<Vec<String>, RowError> {
    let group_ids = if fields.contains(&UpdateField::ModifyGroups) {
        Some(resolve_group_ids(
            record.text(columns::LOCALITY),
            record.text(columns::OLT),
            record.get(columns::FEEDER).map(str::trim).unwrap_or("N/A"),
            catalog,
        )?)
    } else {
        None
    };
    let patch = build_update_patch(record, fields, group_ids.as_deref());
    api.update_host(hostid, &patch).await?;
    Ok(fields.iter().map(|f| f.label().to_string()).collect())
}

/// Patch every record in input order; exactly one outcome per record.
pub async fn update_hosts<A: HostApi>(
    api: &A,
    records: &[Record],
    fields: &[UpdateField],
    catalog: &GroupCatalog,
) -> Vec<UpdateOutcome> {
    let mut outcomes = Vec::with_capacity(records.len());
    for record in records {
        let hostid = record.get(columns::HOSTID).map(|id| id.trim().to_string());
        let result = match &hostid {
            Some(id) => update_one(api, id, record, fields, catalog).await,
            None => Err(RowError::MissingIdentifier { row: record.number }),
        };
        let outcome = UpdateOutcome {
            row_number: record.number,
            hostid,
            result,
        };
        match &outcome.result {
            Ok(_) => log::info!("{}", outcome.message()),
            Err(_) => log::warn!("{}", outcome.message()),
        }
        outcomes.push(outcome);
    }
    outcomes
}

/// Fetch the group catalog, patch all rows and write the update report.
pub async fn run_update<A: HostApi>(
    api: &A,
    sheet: &Sheet,
    fields: &[UpdateField],
    results_dir: &Path,
) -> Result<UpdateReport, BatchError> {
    check_update_request(sheet, fields)?;
    log::info!(
        "#Start update batch with {} rows, fields: {}",
        sheet.records.len(),
        fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
    );
    let groups = api.list_host_groups().await.map_err(BatchError::Catalog)?;
    let catalog = GroupCatalog::from_groups(groups);

    let outcomes = update_hosts(api, &sheet.records, fields, &catalog).await;
    let rows: Vec<_> = outcomes.iter().map(UpdateOutcome::report_row).collect();
    let report_path = write_update_report(results_dir, &rows)?;

    let report = UpdateReport {
        outcomes,
        report_path,
    };
    log::info!(
        "#End update batch: {} of {} hosts updated",
        report.updated(),
        report.outcomes.len()
    );
    Ok(report)
}
