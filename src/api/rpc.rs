//! JSON-RPC 2.0 envelope used by the Zabbix API.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Serialize, Debug)]
pub struct RpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
    pub id: u64,
}

impl<'a, P: Serialize> RpcRequest<'a, P> {
    pub fn new(method: &'a str, params: P, auth: Option<&'a str>, id: u64) -> Self {
        RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            auth,
            id,
        }
    }
}

/// `error` member of a failed response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "[{}] {} {}", self.code, self.message, data),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// Success payload or the server's structured error.
#[derive(Debug, PartialEq)]
pub enum RpcOutcome<T> {
    Success(T),
    Failure(RpcError),
}

impl RpcResponse {
    pub fn from_value(value: Value, method: &'static str) -> Result<RpcResponse, ApiError> {
        serde_path_to_error::deserialize(value).map_err(|e| ApiError::Payload {
            method,
            path: e.path().to_string(),
            detail: e.inner().to_string(),
        })
    }

    /// An `error` member, or a missing `result`, is always a failure.
    pub fn into_outcome<T: DeserializeOwned>(
        self,
        method: &'static str,
    ) -> Result<RpcOutcome<T>, ApiError> {
        if let Some(error) = self.error {
            return Ok(RpcOutcome::Failure(error));
        }
        let Some(result) = self.result else {
            return Ok(RpcOutcome::Failure(RpcError {
                code: 0,
                message: "response carries no result".to_string(),
                data: None,
            }));
        };
        let decoded = serde_path_to_error::deserialize(result).map_err(|e| ApiError::Payload {
            method,
            path: e.path().to_string(),
            detail: e.inner().to_string(),
        })?;
        Ok(RpcOutcome::Success(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome<T: DeserializeOwned>(v: Value) -> RpcOutcome<T> {
        RpcResponse::from_value(v, "test.method")
            .unwrap()
            .into_outcome("test.method")
            .unwrap()
    }

    #[test]
    fn test_request_envelope() {
        let req = RpcRequest::new("host.get", json!({"output": ["hostid"]}), Some("tok"), 2);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"jsonrpc": "2.0", "method": "host.get", "params": {"output": ["hostid"]}, "auth": "tok", "id": 2})
        );
    }

    #[test]
    fn test_login_envelope_has_no_auth() {
        let req = RpcRequest::new("user.login", json!({}), None, 1);
        let v = serde_json::to_value(&req).unwrap();
        assert!(v.get("auth").is_none());
    }

    #[test]
    fn test_result_is_success() {
        let o: RpcOutcome<String> = outcome(json!({"jsonrpc": "2.0", "result": "abc", "id": 1}));
        assert_eq!(o, RpcOutcome::Success("abc".to_string()));
    }

    #[test]
    fn test_error_wins_over_result() {
        let o: RpcOutcome<String> = outcome(json!({
            "result": "abc",
            "error": {"code": -32602, "message": "Invalid params.", "data": "Host already exists."}
        }));
        match o {
            RpcOutcome::Failure(e) => {
                assert_eq!(e.code, -32602);
                assert_eq!(e.to_string(), "[-32602] Invalid params. Host already exists.");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_result_is_failure() {
        let o: RpcOutcome<String> = outcome(json!({"jsonrpc": "2.0", "id": 1}));
        assert!(matches!(o, RpcOutcome::Failure(_)));
    }

    #[test]
    fn test_bad_payload_names_path() {
        let err = RpcResponse::from_value(json!({"result": [{"hostid": 5}]}), "host.get")
            .unwrap()
            .into_outcome::<Vec<crate::models::HostSummary>>("host.get")
            .unwrap_err();
        assert!(err.to_string().contains("[0].hostid"), "{err}");
    }
}
