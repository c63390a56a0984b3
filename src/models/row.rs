//! Spreadsheet row models.

use std::collections::HashMap;

/// Column headers as they appear in the input spreadsheets.
pub mod columns {
    pub const NAME: &str = "Nombre";
    pub const CUSTOMER: &str = "Customer";
    pub const LOCALITY: &str = "Localidad";
    pub const OLT: &str = "OLT";
    pub const FEEDER: &str = "Feeder";
    pub const SLOT: &str = "Slot";
    pub const PON: &str = "PON";
    pub const NAP: &str = "NAP";
    pub const ONT: &str = "ONT/ONU";
    pub const IP: &str = "Dirección IP";
    pub const MAC: &str = "MAC address";
    pub const COORDINATES: &str = "Ubicación de la caja NAP (Coordenadas)";
    pub const ADDRESS: &str = "Dirección";
    pub const PHONE: &str = "Numero de telefono";
    pub const HOSTID: &str = "hostid";
    pub const HOSTNAME: &str = "hostname";
}

/// Columns the create flow requires, in report order.
pub const CREATE_COLUMNS: [&str; 14] = [
    columns::NAME,
    columns::CUSTOMER,
    columns::LOCALITY,
    columns::OLT,
    columns::FEEDER,
    columns::SLOT,
    columns::PON,
    columns::NAP,
    columns::ONT,
    columns::IP,
    columns::MAC,
    columns::COORDINATES,
    columns::ADDRESS,
    columns::PHONE,
];

/// Value used for blank cells in the create flow.
pub const BLANK: &str = "N/A";

/// One spreadsheet row keyed by header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Spreadsheet row number, 1-based with the header on row 1.
    pub number: usize,
    cells: HashMap<String, String>,
}

impl Record {
    pub fn new(number: usize) -> Record {
        Record {
            number,
            cells: HashMap::new(),
        }
    }

    pub fn with(mut self, column: &str, value: &str) -> Record {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: &str, value: &str) {
        self.cells.insert(column.to_string(), value.to_string());
    }

    /// Cell value if present and not blank.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Trimmed cell value, empty when absent.
    pub fn text(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }
}

/// A customer connection row of the create spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRow {
    pub number: usize,
    pub name: String,
    pub customer_id: String,
    pub locality: String,
    pub olt: String,
    pub feeder: String,
    pub slot: String,
    pub pon: String,
    pub nap: String,
    pub ont: String,
    pub ip: String,
    pub mac: String,
    pub coordinates: String,
    pub address: String,
    pub phone: String,
}

impl ConnectionRow {
    /// Build from a record, filling blank cells with `N/A`.
    pub fn from_record(record: &Record) -> ConnectionRow {
        let cell = |col: &str| record.get(col).unwrap_or(BLANK).to_string();
        let trimmed = |col: &str| record.get(col).unwrap_or(BLANK).trim().to_string();
        ConnectionRow {
            number: record.number,
            name: trimmed(columns::NAME),
            customer_id: trimmed(columns::CUSTOMER),
            locality: trimmed(columns::LOCALITY),
            olt: trimmed(columns::OLT),
            feeder: trimmed(columns::FEEDER),
            slot: trimmed(columns::SLOT),
            pon: trimmed(columns::PON),
            nap: cell(columns::NAP),
            ont: trimmed(columns::ONT),
            ip: trimmed(columns::IP),
            mac: cell(columns::MAC),
            coordinates: trimmed(columns::COORDINATES),
            address: trimmed(columns::ADDRESS),
            phone: cell(columns::PHONE),
        }
    }

    /// Values in [`CREATE_COLUMNS`] order.
    pub fn values(&self) -> [&str; 14] {
        [
            &self.name,
            &self.customer_id,
            &self.locality,
            &self.olt,
            &self.feeder,
            &self.slot,
            &self.pon,
            &self.nap,
            &self.ont,
            &self.ip,
            &self.mac,
            &self.coordinates,
            &self.address,
            &self.phone,
        ]
    }
}
