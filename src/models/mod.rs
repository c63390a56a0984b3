//! Domain models for host provisioning.
//!
//! - [`Record`] and [`ConnectionRow`] - spreadsheet rows
//! - [`CreateHostSpec`], [`HostPatch`], [`Inventory`] - JSON-RPC payloads
//! - [`CreateOutcome`], [`UpdateOutcome`] - per-row results

mod host;
mod outcome;
mod row;

pub use host::{
    AgentInterface, CreateHostSpec, GroupRef, HostGroup, HostPatch, HostSummary, Inventory,
    TemplateRef,
};
pub use outcome::{CreateOutcome, UpdateOutcome, UpdateReportRow};
pub use row::{columns, ConnectionRow, Record, CREATE_COLUMNS};
