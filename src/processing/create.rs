//! Create batch: one `host.create` per spreadsheet row.

use super::groups::{resolve_group_ids, GroupCatalog};
use super::transform::build_create_spec;
use crate::api::HostApi;
use crate::error::{BatchError, RowError};
use crate::input::Sheet;
use crate::models::{ConnectionRow, CreateOutcome, CREATE_COLUMNS};
use crate::output::write_create_report;
use std::path::{Path, PathBuf};

/// Outcomes of a create batch and the report written for it.
#[derive(Debug)]
pub struct CreateReport {
    pub outcomes: Vec<CreateOutcome>,
    /// `None` when the input had no rows.
    pub report_path: Option<PathBuf>,
}

impl CreateReport {
    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }
}

/// Validate the create schema and turn the sheet into connection rows.
pub fn connection_rows(sheet: &Sheet) -> Result<Vec<ConnectionRow>, BatchError> {
    sheet.require_columns(&CREATE_COLUMNS)?;
    Ok(sheet.records.iter().map(ConnectionRow::from_record).collect())
}

async fn create_one<A: HostApi>(
    api: &A,
    row: &ConnectionRow,
    catalog: &GroupCatalog,
    template_id: &str,
) -> Result<String, RowError> {
    let group_ids = resolve_group_ids(&row.locality, &row.olt, &row.feeder, catalog)?;
    let spec = build_create_spec(row, &group_ids, template_id);
    Ok(api.create_host(&spec).await?)
}

/// Create every row in input order. A failed row is recorded and the batch
/// moves on to the next one.
pub async fn create_hosts<A: HostApi>(
    api: &A,
    rows: Vec<ConnectionRow>,
    catalog: &GroupCatalog,
    template_id: &str,
) -> Vec<CreateOutcome> {
    let mut outcomes = Vec::with_capacity(rows.len());
    for row in rows {
        let hostname = row.hostname();
        let result = create_one(api, &row, catalog, template_id).await;
        let outcome = CreateOutcome {
            row,
            hostname,
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

/// Fetch the group catalog, create all rows and write the result report.
pub async fn run_create<A: HostApi>(
    api: &A,
    rows: Vec<ConnectionRow>,
    template_id: &str,
    results_dir: &Path,
) -> Result<CreateReport, BatchError> {
    log::info!("#Start create batch with {} rows", rows.len());
    let groups = api.list_host_groups().await.map_err(BatchError::Catalog)?;
    let catalog = GroupCatalog::from_groups(groups);
    log::info!("Got {} host groups", catalog.len());

    let outcomes = create_hosts(api, rows, &catalog, template_id).await;
    let report_path = if outcomes.is_empty() {
        log::warn!("No rows in input, no report written");
        None
    } else {
        Some(write_create_report(results_dir, &outcomes)?)
    };

    let report = CreateReport {
        outcomes,
        report_path,
    };
    log::info!(
        "#End create batch: {} of {} hosts created",
        report.created(),
        report.outcomes.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::error::GroupKind;
    use crate::models::{columns, Record};

    fn record(n: usize, name: &str, customer: &str, olt: &str) -> Record {
        Record::new(n)
            .with(columns::NAME, name)
            .with(columns::CUSTOMER, customer)
            .with(columns::LOCALITY, "Maracay")
            .with(columns::OLT, olt)
            .with(columns::FEEDER, "N/A")
            .with(columns::ONT, "")
    }

    fn api() -> FakeApi {
        FakeApi::with_groups(&[("Clientes FTTH POC (Maracay)", "41"), ("OLT-MCY-01", "57")])
    }

    #[tokio::test]
    async fn test_create_single_row_payload() {
        let api = api();
        let rows = vec![ConnectionRow::from_record(&record(1, "José Pérez", "123456", "N/A"))];
        let catalog = GroupCatalog::from_groups(api.groups.clone());
        let outcomes = create_hosts(&api, rows, &catalog, "10566").await;

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].hostname, "Jose Perez PDFN ID123456 MCY OSS");
        assert_eq!(outcomes[0].hostid(), Some("10001"));

        let created = api.created.borrow();
        assert_eq!(created[0].host, "Jose Perez PDFN ID123456 MCY OSS");
        let ids: Vec<&str> = created[0].groups.iter().map(|g| g.groupid.as_str()).collect();
        assert_eq!(ids, vec!["35", "34", "41", "90"]);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_batch() {
        let mut api = api();
        api.reject.push("Carla PDFN ID300 MCY OSS".to_string());
        let rows = vec![
            record(1, "Ana", "100", "OLT-MCY-01"),
            record(2, "Beto", "200", "OLT-NOPE"),
            record(3, "Carla", "300", "N/A"),
            record(4, "Dora", "400", "N/A"),
        ]
        .iter()
        .map(ConnectionRow::from_record)
        .collect();
        let catalog = GroupCatalog::from_groups(api.groups.clone());
        let outcomes = create_hosts(&api, rows, &catalog, "10566").await;

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].hostid(), Some("10001"));
        match &outcomes[1].result {
            Err(RowError::Group(g)) => assert_eq!(g.kind, GroupKind::Olt),
            other => panic!("expected group error, got {other:?}"),
        }
        assert!(matches!(outcomes[2].result, Err(RowError::Api(_))));
        assert!(outcomes[2].message().starts_with("Error creating host Carla PDFN ID300"));
        assert_eq!(outcomes[3].hostid(), Some("10002"));
        assert_eq!(api.created.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_writes_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = run_create(&api(), Vec::new(), "10566", dir.path())
            .await
            .unwrap();
        assert!(report.outcomes.is_empty());
        assert!(report.report_path.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_connection_rows_requires_schema() {
        let sheet = Sheet {
            path: "in.xlsx".to_string(),
            headers: vec!["Nombre".to_string(), "Customer".to_string()],
            records: vec![],
        };
        let err = connection_rows(&sheet).unwrap_err();
        assert!(err.to_string().contains("Localidad"), "{err}");
    }
}
