//! Error types.
//!
//! Row-scoped errors ([`RowError`]) end up as a message on the row's report
//! entry. Batch-scoped errors ([`BatchError`]) stop a run before any row is
//! processed.

use crate::api::RpcError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("login rejected: {0}")]
    Auth(String),
    #[error("{method} rejected by server: {error}")]
    Remote { method: &'static str, error: RpcError },
    #[error("unexpected {method} payload at '{path}': {detail}")]
    Payload {
        method: &'static str,
        path: String,
        detail: String,
    },
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Which lookup failed during group resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Locality,
    Olt,
    Feeder,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupKind::Locality => "Localidad",
            GroupKind::Olt => "OLT",
            GroupKind::Feeder => "Feeder",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} '{name}' is not a host group in Zabbix")]
pub struct GroupError {
    pub kind: GroupKind,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum RowError {
    #[error("group error: {0}")]
    Group(#[from] GroupError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("missing hostid in row {row}")]
    MissingIdentifier { row: usize },
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cannot read {path}: {detail}")]
    Read { path: String, detail: String },
    #[error("spreadsheet {0} has no worksheet")]
    NoSheet(String),
    #[error("spreadsheet {path} lacks required columns: {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },
    #[error("cannot write report: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("cannot prepare results folder: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot log in to Zabbix: {0}")]
    Auth(#[source] ApiError),
    #[error("cannot fetch host groups: {0}")]
    Catalog(#[source] ApiError),
    #[error("cannot list hosts: {0}")]
    Hosts(#[source] ApiError),
    #[error("required columns are missing: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("no fields selected for update")]
    NoFieldsSelected,
    #[error(transparent)]
    Sheet(#[from] SheetError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_error_names_the_value() {
        let e = GroupError {
            kind: GroupKind::Olt,
            name: "OLT-MCY-02".to_string(),
        };
        assert_eq!(e.to_string(), "OLT 'OLT-MCY-02' is not a host group in Zabbix");
    }

    #[test]
    fn test_missing_columns_lists_all() {
        let e = BatchError::MissingColumns(vec!["Nombre".into(), "Customer".into()]);
        assert!(e.to_string().ends_with("Nombre, Customer"));
    }
}
