//! Zabbix host payloads.

use serde::{Deserialize, Serialize};

/// Host as returned by `host.get` with `output: ["hostid", "name"]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostSummary {
    pub hostid: String,
    pub name: String,
}

/// Host group as returned by `hostgroup.get`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostGroup {
    pub groupid: String,
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GroupRef {
    pub groupid: String,
}

impl GroupRef {
    pub fn list(ids: &[String]) -> Vec<GroupRef> {
        ids.iter()
            .map(|id| GroupRef {
                groupid: id.clone(),
            })
            .collect()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TemplateRef {
    pub templateid: String,
}

/// Zabbix agent interface (type 1) reached by IP.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AgentInterface {
    #[serde(rename = "type")]
    pub kind: u8,
    pub main: u8,
    pub useip: u8,
    pub ip: String,
    pub dns: String,
    pub port: String,
}

impl AgentInterface {
    pub fn new(ip: &str, port: &str) -> AgentInterface {
        AgentInterface {
            kind: 1,
            main: 1,
            useip: 1,
            ip: ip.to_string(),
            dns: String::new(),
            port: port.to_string(),
        }
    }
}

/// Host inventory fields. Unset fields are left out of the payload.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serialno_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macaddress_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_address_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_address_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_address_c: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_city: Option<String>,
}

impl Inventory {
    pub fn is_empty(&self) -> bool {
        *self == Inventory::default()
    }
}

/// `host.create` params.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateHostSpec {
    pub host: String,
    pub name: String,
    pub description: String,
    pub groups: Vec<GroupRef>,
    pub templates: Vec<TemplateRef>,
    pub interfaces: Vec<AgentInterface>,
    pub inventory_mode: i8,
    pub inventory: Inventory,
}

/// Sparse `host.update` params, without the `hostid`.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct HostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupRef>>,
    #[serde(skip_serializing_if = "Inventory::is_empty")]
    pub inventory: Inventory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let v = serde_json::to_value(HostPatch::default()).unwrap();
        assert_eq!(v, json!({}));
    }

    #[test]
    fn test_interface_uses_type_key() {
        let v = serde_json::to_value(AgentInterface::new("10.0.0.7", "10050")).unwrap();
        assert_eq!(
            v,
            json!({"type": 1, "main": 1, "useip": 1, "ip": "10.0.0.7", "dns": "", "port": "10050"})
        );
    }
}
