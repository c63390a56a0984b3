//! In-memory [`HostApi`] for unit tests.

use super::{HostApi, RpcError};
use crate::error::ApiError;
use crate::models::{CreateHostSpec, HostGroup, HostPatch, HostSummary};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct FakeApi {
    pub groups: Vec<HostGroup>,
    pub hosts: Vec<HostSummary>,
    /// Hostnames or hostids the fake server rejects.
    pub reject: Vec<String>,
    pub created: RefCell<Vec<CreateHostSpec>>,
    pub updated: RefCell<Vec<(String, HostPatch)>>,
    /// Number of `list_host_groups` calls.
    pub catalog_calls: Cell<usize>,
    next_id: Cell<u64>,
}

impl FakeApi {
    pub fn with_groups(groups: &[(&str, &str)]) -> FakeApi {
        FakeApi {
            groups: groups
                .iter()
                .map(|(name, id)| HostGroup {
                    groupid: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            next_id: Cell::new(10_001),
            ..Default::default()
        }
    }

    fn rejected(method: &'static str, what: &str) -> ApiError {
        ApiError::Remote {
            method,
            error: RpcError {
                code: -32602,
                message: "Invalid params.".to_string(),
                data: Some(format!("{what} rejected")),
            },
        }
    }
}

impl HostApi for FakeApi {
    async fn list_hosts(&self) -> Result<Vec<HostSummary>, ApiError> {
        Ok(self.hosts.clone())
    }

    async fn list_host_groups(&self) -> Result<Vec<HostGroup>, ApiError> {
        self.catalog_calls.set(self.catalog_calls.get() + 1);
        Ok(self.groups.clone())
    }

    async fn create_host(&self, spec: &CreateHostSpec) -> Result<String, ApiError> {
        if self.reject.contains(&spec.host) {
            return Err(Self::rejected("host.create", &spec.host));
        }
        self.created.borrow_mut().push(spec.clone());
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(id.to_string())
    }

    async fn update_host(&self, hostid: &str, patch: &HostPatch) -> Result<(), ApiError> {
        if self.reject.iter().any(|r| r == hostid) {
            return Err(Self::rejected("host.update", hostid));
        }
        self.updated
            .borrow_mut()
            .push((hostid.to_string(), patch.clone()));
        Ok(())
    }
}
