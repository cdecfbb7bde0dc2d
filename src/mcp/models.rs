//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::Params;

// =============================================================================
// MCP Constants
// =============================================================================

/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC 2.0 error codes used by the servers
pub mod error_codes {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method, tool or resource does not exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: i32 = -32603;
}

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier; absent for notifications.
    ///
    /// An explicit `"id": null` is kept as `Some(Value::Null)` so it still
    /// gets a response.
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
}

fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonRpcRequest {
    /// Notifications carry no `id` and never receive a response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Parameters of `tools/call`
#[derive(Debug, Deserialize)]
pub struct ToolsCallParams {
    /// Name of the tool to invoke
    pub name: String,

    /// Tool arguments (missing or null means no arguments)
    #[serde(default)]
    pub arguments: Option<Params>,
}

/// Parameters of `resources/read`
#[derive(Debug, Deserialize)]
pub struct ResourcesReadParams {
    /// URI of the resource to read
    pub uri: String,
}

/// Name and version reported in the `initialize` handshake
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    /// Server identifier
    pub name: String,

    /// Server version
    pub version: String,
}

impl ServerInfo {
    /// Creates a server identity
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A JSON-RPC error ready to be written back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcFault {
    /// JSON-RPC error code
    pub code: i32,

    /// Human-readable description of the error
    pub message: String,
}

impl RpcFault {
    /// Creates a fault with the given code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// `-32602` fault for malformed method parameters
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_PARAMS, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_id_is_a_request_and_missing_id_a_notification() {
        let with_null: JsonRpcRequest =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": null, "method": "ping" }))
                .unwrap();
        assert!(!with_null.is_notification());
        assert_eq!(with_null.id, Some(Value::Null));

        let without: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(without.is_notification());
    }
}
