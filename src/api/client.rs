//! Zabbix API session over HTTP.

use super::rpc::{RpcError, RpcOutcome, RpcRequest, RpcResponse};
use crate::error::ApiError;
use crate::models::{CreateHostSpec, HostGroup, HostPatch, HostSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Host operations the batch flows need.
#[allow(async_fn_in_trait)]
pub trait HostApi {
    async fn list_hosts(&self) -> Result<Vec<HostSummary>, ApiError>;
    async fn list_host_groups(&self) -> Result<Vec<HostGroup>, ApiError>;
    /// Returns the assigned hostid.
    async fn create_host(&self, spec: &CreateHostSpec) -> Result<String, ApiError>;
    async fn update_host(&self, hostid: &str, patch: &HostPatch) -> Result<(), ApiError>;
}

/// Authenticated connection to one Zabbix API endpoint.
pub struct ZabbixSession {
    http: reqwest::Client,
    url: String,
    token: String,
    next_id: AtomicU64,
}

#[derive(Deserialize)]
struct HostIds {
    hostids: Vec<String>,
}

#[derive(Serialize)]
struct UpdateParams<'a> {
    hostid: &'a str,
    inventory_mode: i8,
    #[serde(flatten)]
    patch: &'a HostPatch,
}

/// Log in with `user.login` and return the session token.
pub async fn authenticate(
    http: &reqwest::Client,
    url: &str,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    log::info!("Logging in to {url} as {username}");
    let params = json!({"username": username, "password": password});
    match call(http, url, "user.login", &params, None, 1).await {
        Ok(RpcOutcome::Success(token)) => Ok(token),
        Ok(RpcOutcome::Failure(e)) => Err(ApiError::Auth(e.to_string())),
        Err(e) => Err(ApiError::Auth(e.to_string())),
    }
}

async fn call<P: Serialize, T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    method: &'static str,
    params: &P,
    auth: Option<&str>,
    id: u64,
) -> Result<RpcOutcome<T>, ApiError> {
    log::debug!("rpc {method} id={id}");
    let request = RpcRequest::new(method, params, auth, id);
    let body: Value = http
        .post(url)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    if response_is_loggable(method) {
        log::trace!("rpc {method} id={id} response={body}");
    }
    RpcResponse::from_value(body, method)?.into_outcome(method)
}

/// The login response carries the session token.
fn response_is_loggable(method: &str) -> bool {
    method != "user.login"
}

fn remote(method: &'static str, error: RpcError) -> ApiError {
    ApiError::Remote { method, error }
}

impl ZabbixSession {
    pub async fn login(url: &str, username: &str, password: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::new();
        let token = authenticate(&http, url, username, password).await?;
        Ok(ZabbixSession {
            http,
            url: url.to_string(),
            token,
            next_id: AtomicU64::new(2),
        })
    }

    async fn request<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: &P,
    ) -> Result<T, ApiError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        match call(&self.http, &self.url, method, params, Some(&self.token), id).await? {
            RpcOutcome::Success(v) => Ok(v),
            RpcOutcome::Failure(e) => Err(remote(method, e)),
        }
    }
}

impl HostApi for ZabbixSession {
    async fn list_hosts(&self) -> Result<Vec<HostSummary>, ApiError> {
        self.request("host.get", &json!({"output": ["hostid", "name"]}))
            .await
    }

    async fn list_host_groups(&self) -> Result<Vec<HostGroup>, ApiError> {
        self.request("hostgroup.get", &json!({"output": ["groupid", "name"]}))
            .await
    }

    async fn create_host(&self, spec: &CreateHostSpec) -> Result<String, ApiError> {
        let ids: HostIds = self.request("host.create", spec).await?;
        ids.hostids.into_iter().next().ok_or(ApiError::Payload {
            method: "host.create",
            path: "hostids".to_string(),
            detail: "empty hostid list".to_string(),
        })
    }

    async fn update_host(&self, hostid: &str, patch: &HostPatch) -> Result<(), ApiError> {
        let params = UpdateParams {
            hostid,
            inventory_mode: 0,
            patch,
        };
        let _: HostIds = self.request("host.update", &params).await?;
        Ok(())
    }
}
