//! Zabbix JSON-RPC API access.
//!
//! - [`rpc`] - request envelope and tagged response outcome
//! - [`client`] - the authenticated HTTP session and the [`HostApi`] seam

mod client;
mod rpc;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{authenticate, HostApi, ZabbixSession};
pub use rpc::{RpcError, RpcOutcome, RpcRequest, RpcResponse};
