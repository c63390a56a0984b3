//! Row to payload translation.

use super::normalize::{locality_abbreviation, strip_diacritics};
use crate::config::AGENT_PORT;
use crate::models::{
    columns, AgentInterface, ConnectionRow, CreateHostSpec, GroupRef, HostPatch, Inventory,
    Record, TemplateRef,
};
use std::fmt;
use std::str::FromStr;

/// Placeholder used in hostnames when the connection has no ONT/ONU serial.
pub const NO_ONT_TOKEN: &str = "PDFN";
/// The update spreadsheet may spell the address header without the accent.
const ADDRESS_PLAIN: &str = "Direccion";

/// A field the operator can choose to patch on existing hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateField {
    Hostname,
    Nap,
    Serial,
    MacAddress,
    Phone,
    Address,
    Latitude,
    Longitude,
    Olt,
    Slot,
    Pon,
    Locality,
    ModifyGroups,
}

impl UpdateField {
    pub const ALL: [UpdateField; 13] = [
        UpdateField::Hostname,
        UpdateField::Nap,
        UpdateField::Serial,
        UpdateField::MacAddress,
        UpdateField::Phone,
        UpdateField::Address,
        UpdateField::Latitude,
        UpdateField::Longitude,
        UpdateField::Olt,
        UpdateField::Slot,
        UpdateField::Pon,
        UpdateField::Locality,
        UpdateField::ModifyGroups,
    ];

    /// Label shown to the operator, also the source column name.
    pub fn label(self) -> &'static str {
        match self {
            UpdateField::Hostname => "Hostname",
            UpdateField::Nap => "NAP",
            UpdateField::Serial => "ONT/ONU",
            UpdateField::MacAddress => "MAC address",
            UpdateField::Phone => "Numero de telefono",
            UpdateField::Address => "Direccion",
            UpdateField::Latitude => "Latitud",
            UpdateField::Longitude => "Longitud",
            UpdateField::Olt => "OLT",
            UpdateField::Slot => "Slot",
            UpdateField::Pon => "PON",
            UpdateField::Locality => "Localidad",
            UpdateField::ModifyGroups => "modify_groups",
        }
    }
}

impl fmt::Display for UpdateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UpdateField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        UpdateField::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = UpdateField::ALL.iter().map(|f| f.label()).collect();
                format!("unknown field '{s}', expected one of: {}", known.join(", "))
            })
    }
}

/// `"{name} {ont|PDFN} ID{customer} {locality code}"`
pub fn synthesize_hostname(name: &str, customer_id: &str, ont: &str, locality: &str) -> String {
    let ont = match ont.trim() {
        "" | "N/A" => NO_ONT_TOKEN,
        serial => serial,
    };
    format!(
        "{} {} ID{} {}",
        strip_diacritics(name.trim()).trim(),
        ont,
        customer_id.trim(),
        locality_abbreviation(locality.trim())
    )
}

/// Split `"lat, lon"` on the first comma. Anything without a comma yields
/// two empty strings.
pub fn parse_coordinates(text: &str) -> (String, String) {
    match text.trim().split_once(',') {
        Some((lat, lon)) => (lat.trim().to_string(), lon.trim().to_string()),
        None => (String::new(), String::new()),
    }
}

fn nap_text(nap: &str) -> String {
    format!("NAP: {nap}")
}

impl ConnectionRow {
    pub fn hostname(&self) -> String {
        synthesize_hostname(&self.name, &self.customer_id, &self.ont, &self.locality)
    }
}

/// `host.create` params for a connection row.
pub fn build_create_spec(
    row: &ConnectionRow,
    group_ids: &[String],
    template_id: &str,
) -> CreateHostSpec {
    let hostname = row.hostname();
    let (lat, lon) = parse_coordinates(&row.coordinates);
    CreateHostSpec {
        host: hostname.clone(),
        name: hostname,
        description: nap_text(&row.nap),
        groups: GroupRef::list(group_ids),
        templates: vec![TemplateRef {
            templateid: template_id.to_string(),
        }],
        interfaces: vec![AgentInterface::new(&row.ip, AGENT_PORT)],
        inventory_mode: 0,
        inventory: Inventory {
            serialno_a: Some(row.ont.clone()),
            macaddress_a: Some(row.mac.clone()),
            contact: Some(row.phone.clone()),
            location: Some(row.address.clone()),
            location_lat: Some(lat),
            location_lon: Some(lon),
            notes: Some(nap_text(&row.nap)),
            site_address_a: Some(row.olt.clone()),
            site_address_b: Some(row.slot.clone()),
            site_address_c: Some(row.pon.clone()),
            site_city: Some(row.locality.clone()),
        },
    }
}

/// Sparse `host.update` params holding only the selected fields.
///
/// `group_ids` replaces the host's groups when given; the caller resolves
/// them only when [`UpdateField::ModifyGroups`] is selected. Blank source
/// cells leave the matching inventory field untouched.
pub fn build_update_patch(
    record: &Record,
    fields: &[UpdateField],
    group_ids: Option<&[String]>,
) -> HostPatch {
    let mut patch = HostPatch {
        groups: group_ids.map(GroupRef::list),
        ..Default::default()
    };
    let value = |col: &str| record.get(col).map(|v| v.trim().to_string());
    let (lat, lon) = parse_coordinates(record.text(columns::COORDINATES));
    let inv = &mut patch.inventory;

    for field in fields {
        match field {
            UpdateField::Hostname => {
                let hostname = synthesize_hostname(
                    record.text(columns::NAME),
                    record.text(columns::CUSTOMER),
                    record.text(columns::ONT),
                    record.text(columns::LOCALITY),
                );
                patch.host = Some(hostname.clone());
                patch.name = Some(hostname);
            }
            UpdateField::Nap => {
                let nap = nap_text(record.text(columns::NAP));
                patch.description = Some(nap.clone());
                inv.notes = Some(nap);
            }
            UpdateField::Serial => inv.serialno_a = value(columns::ONT),
            UpdateField::MacAddress => inv.macaddress_a = value(columns::MAC),
            UpdateField::Phone => inv.contact = value(columns::PHONE),
            UpdateField::Address => {
                inv.location = value(ADDRESS_PLAIN).or_else(|| value(columns::ADDRESS))
            }
            UpdateField::Latitude => inv.location_lat = Some(lat.clone()).filter(|v| !v.is_empty()),
            UpdateField::Longitude => {
                inv.location_lon = Some(lon.clone()).filter(|v| !v.is_empty())
            }
            UpdateField::Olt => inv.site_address_a = value(columns::OLT),
            UpdateField::Slot => inv.site_address_b = value(columns::SLOT),
            UpdateField::Pon => inv.site_address_c = value(columns::PON),
            UpdateField::Locality => inv.site_city = value(columns::LOCALITY),
            UpdateField::ModifyGroups => {}
        }
    }
    patch
}
