//! Row translation and batch logic.
//!
//! - [`normalize`] - diacritic stripping and the locality tables
//! - [`groups`] - host group resolution
//! - [`transform`] - hostname synthesis and payload building
//! - [`create`] / [`update`] - the two batch flows
//! - [`export`] - host listing export

pub mod create;
pub mod export;
pub mod groups;
pub mod normalize;
pub mod transform;
pub mod update;

// Re-export public functions
pub use create::{connection_rows, create_hosts, run_create, CreateReport};
pub use export::{parse_host_name, run_export, HostExportRow};
pub use groups::{resolve_group_ids, GroupCatalog};
pub use normalize::{locality_abbreviation, strip_diacritics};
pub use transform::{
    build_create_spec, build_update_patch, parse_coordinates, synthesize_hostname, UpdateField,
};
pub use update::{check_update_request, run_update, update_hosts, UpdateReport};
