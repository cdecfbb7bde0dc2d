//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication
//! and for rendering catalog entries and envelopes as MCP payloads.

use serde_json::{json, Value};

use super::dispatcher::Envelope;
use crate::catalog::{CapabilityDescriptor, ContentItem};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Renders a tool descriptor as a `tools/list` entry.
///
/// `title` is only emitted when the display name differs from the tool name.
pub fn tool_entry(descriptor: &CapabilityDescriptor) -> Value {
    let input_schema = descriptor
        .input_schema()
        .cloned()
        .unwrap_or_else(|| json!({ "type": "object" }));
    let mut entry = json!({
        "name": descriptor.identifier,
        "description": descriptor.description,
        "inputSchema": input_schema,
    });

    if descriptor.display_name != descriptor.identifier {
        entry["title"] = json!(descriptor.display_name);
    }

    entry
}

/// Renders a resource descriptor as a `resources/list` entry.
pub fn resource_entry(descriptor: &CapabilityDescriptor) -> Value {
    json!({
        "uri": descriptor.identifier,
        "name": descriptor.display_name,
        "mimeType": descriptor.mime_type(),
        "description": descriptor.description,
    })
}

/// Renders an envelope as a `tools/call` result.
pub fn tool_call_result(envelope: Envelope) -> Value {
    let is_error = envelope.is_error();
    let mut result = json!({ "content": envelope.into_content() });
    if is_error {
        result["isError"] = json!(true);
    }
    result
}

/// Renders an envelope as a `resources/read` result.
///
/// Each content item becomes one entry of `contents`, tagged with the URI and
/// MIME type of the resource.
pub fn resource_read_result(uri: &str, mime_type: Option<&str>, envelope: Envelope) -> Value {
    let is_error = envelope.is_error();
    let contents: Vec<Value> = envelope
        .into_content()
        .into_iter()
        .map(|item| match item {
            ContentItem::Text { text } => json!({
                "uri": uri,
                "mimeType": mime_type,
                "text": text,
            }),
        })
        .collect();

    let mut result = json!({ "contents": contents });
    if is_error {
        result["isError"] = json!(true);
    }
    result
}
