//! Host group resolution for a connection.

use super::normalize::locality_group_name;
use crate::error::{GroupError, GroupKind};
use crate::models::HostGroup;
use std::collections::HashMap;

/// Always applied first.
pub const BASE_GROUP_ID: &str = "35";
/// Applied to every locality except the owned Caracas network.
pub const LEASED_TIER_GROUP_ID: &str = "34";
/// Always applied last.
pub const TAIL_GROUP_ID: &str = "90";

const OWNED_NETWORK_LOCALITY: &str = "Caracas (Red propia)";
const NOT_APPLICABLE: [&str; 3] = ["", "N/A", "No aplica"];

/// Group display name to groupid, fetched once per batch.
#[derive(Debug, Clone, Default)]
pub struct GroupCatalog {
    ids: HashMap<String, String>,
}

impl GroupCatalog {
    pub fn from_groups(groups: Vec<HostGroup>) -> GroupCatalog {
        groups
            .into_iter()
            .map(|g| (g.name, g.groupid))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.ids.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for GroupCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        GroupCatalog {
            ids: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_string(), v.as_ref().trim().to_string()))
                .collect(),
        }
    }
}

/// Ordered groupids for a connection: base tier(s), locality, OLT, feeder,
/// then the tail tier. Ids are not deduplicated.
pub fn resolve_group_ids(
    locality: &str,
    olt: &str,
    feeder: &str,
    catalog: &GroupCatalog,
) -> Result<Vec<String>, GroupError> {
    let mut ids = vec![BASE_GROUP_ID.to_string()];
    if locality != OWNED_NETWORK_LOCALITY {
        ids.push(LEASED_TIER_GROUP_ID.to_string());
    }

    let locality_id = locality_group_name(locality)
        .and_then(|group| catalog.get(group))
        .ok_or_else(|| GroupError {
            kind: GroupKind::Locality,
            name: locality.to_string(),
        })?;
    ids.push(locality_id.to_string());

    for (kind, value) in [(GroupKind::Olt, olt), (GroupKind::Feeder, feeder)] {
        if NOT_APPLICABLE.contains(&value) {
            continue;
        }
        let id = catalog.get(value).ok_or_else(|| GroupError {
            kind,
            name: value.to_string(),
        })?;
        ids.push(id.to_string());
    }

    ids.push(TAIL_GROUP_ID.to_string());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> GroupCatalog {
        GroupCatalog::from_iter([
            ("Clientes FTTH POC (Caracas) - Red propia", "12"),
            ("Clientes FTTH POC (Maracay)", "41"),
            ("OLT-MCY-01", "57"),
            ("FEEDER-MCY-A", "58"),
        ])
    }

    #[test]
    fn test_owned_caracas_skips_leased_tier() {
        let cat = GroupCatalog::from_iter([("Clientes FTTH POC (Caracas) - Red propia", "12")]);
        let ids = resolve_group_ids("Caracas (Red propia)", "N/A", "", &cat).unwrap();
        assert_eq!(ids, vec!["35", "12", "90"]);
    }

    #[test]
    fn test_full_chain_order() {
        let ids = resolve_group_ids("Maracay", "OLT-MCY-01", "FEEDER-MCY-A", &catalog()).unwrap();
        assert_eq!(ids, vec!["35", "34", "41", "57", "58", "90"]);
    }

    #[test]
    fn test_sentinels_are_skipped() {
        for sentinel in ["", "N/A", "No aplica"] {
            let ids = resolve_group_ids("Maracay", sentinel, sentinel, &catalog()).unwrap();
            assert_eq!(ids, vec!["35", "34", "41", "90"]);
        }
    }

    #[test]
    fn test_unknown_olt_fails() {
        let err = resolve_group_ids("Maracay", "OLT-XYZ-99", "N/A", &catalog()).unwrap_err();
        assert_eq!(err.kind, GroupKind::Olt);
        assert_eq!(err.name, "OLT-XYZ-99");
    }

    #[test]
    fn test_unknown_feeder_fails() {
        let err = resolve_group_ids("Maracay", "OLT-MCY-01", "F-9", &catalog()).unwrap_err();
        assert_eq!(err.kind, GroupKind::Feeder);
    }

    #[test]
    fn test_locality_group_missing_from_catalog() {
        let err = resolve_group_ids("Valencia", "N/A", "N/A", &catalog()).unwrap_err();
        assert_eq!(err.kind, GroupKind::Locality);
        assert_eq!(err.name, "Valencia");

        let err = resolve_group_ids("Mérida", "N/A", "N/A", &catalog()).unwrap_err();
        assert_eq!(err.kind, GroupKind::Locality);
    }

    #[test]
    fn test_catalog_trims_names() {
        let cat = GroupCatalog::from_groups(vec![HostGroup {
            groupid: " 7 ".to_string(),
            name: " OLT-A ".to_string(),
        }]);
        assert_eq!(cat.get("OLT-A"), Some("7"));
        assert_eq!(cat.len(), 1);
    }
}
