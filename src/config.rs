//! Runtime settings and fixed constants.
//!
//! Settings come from the environment (optionally a `.env` file loaded by
//! `main`). Nothing here is mutable once loaded.

use chrono_tz::Tz;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Template linked to every created host unless overridden.
pub const DEFAULT_TEMPLATE_ID: &str = "10566";
/// Folder where result spreadsheets are written.
pub const DEFAULT_RESULTS_DIR: &str = "results";
/// Zabbix agent port used for the host interface.
pub const AGENT_PORT: &str = "10050";
/// Timestamps in report file names use the operator's local time.
pub const REPORT_TZ: Tz = chrono_tz::America::Caracas;
pub const REPORT_TS_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Connection and output settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub template_id: String,
    pub results_dir: PathBuf,
}

impl Settings {
    /// Read settings from `ZABBIX_URL`, `ZABBIX_USERNAME`, `ZABBIX_PASSWORD`,
    /// `ZABBIX_TEMPLATE_ID` and `RESULTS_DIR`.
    pub fn from_env() -> Result<Settings, ConfigError> {
        Ok(Settings {
            url: required("ZABBIX_URL")?,
            username: required("ZABBIX_USERNAME")?,
            password: required("ZABBIX_PASSWORD")?,
            template_id: env::var("ZABBIX_TEMPLATE_ID")
                .unwrap_or_else(|_| DEFAULT_TEMPLATE_ID.to_string()),
            results_dir: env::var("RESULTS_DIR")
                .unwrap_or_else(|_| DEFAULT_RESULTS_DIR.to_string())
                .into(),
        })
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// Current time formatted for report file names.
pub fn report_timestamp() -> String {
    chrono::Utc::now()
        .with_timezone(&REPORT_TZ)
        .format(REPORT_TS_FORMAT)
        .to_string()
}
