//! Batch creation and update of Zabbix hosts for FTTH customer connections,
//! driven by xlsx spreadsheets.

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use api::ZabbixSession;
use config::Settings;
use error::BatchError;
use processing::{CreateReport, UpdateField, UpdateReport};
use std::path::{Path, PathBuf};

async fn login(settings: &Settings) -> Result<ZabbixSession, BatchError> {
    ZabbixSession::login(&settings.url, &settings.username, &settings.password)
        .await
        .map_err(BatchError::Auth)
}

/// Create one host per row of `file`.
pub async fn create_batch(settings: &Settings, file: &Path) -> Result<CreateReport, BatchError> {
    let sheet = input::read_sheet(file)?;
    let rows = processing::connection_rows(&sheet)?;
    let session = login(settings).await?;
    processing::run_create(&session, rows, &settings.template_id, &settings.results_dir).await
}

/// Patch `fields` on the hosts listed in `file`.
pub async fn update_batch(
    settings: &Settings,
    file: &Path,
    fields: &[UpdateField],
) -> Result<UpdateReport, BatchError> {
    let sheet = input::read_sheet(file)?;
    processing::check_update_request(&sheet, fields)?;
    let session = login(settings).await?;
    processing::run_update(&session, &sheet, fields, &settings.results_dir).await
}

/// Export all hosts to a spreadsheet.
pub async fn export_hosts(settings: &Settings) -> Result<PathBuf, BatchError> {
    let session = login(settings).await?;
    processing::run_export(&session, &settings.results_dir).await
}
