//! MCP (Model Context Protocol) route handlers
//!
//! `McpHandler` maps JSON-RPC methods onto the request dispatcher. It is
//! transport agnostic: the stdio server loop and the HTTP routes below both
//! feed it parsed requests and write back whatever it returns.

use super::{dispatcher::*, helpers::*, models::*};
use crate::catalog::{CapabilityKind, Params};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Shared handler that can be safely passed between threads
pub type SharedState = Arc<McpHandler>;

/// JSON-RPC front end for one server's catalog
pub struct McpHandler {
    dispatcher: RequestDispatcher,
    server_info: ServerInfo,
}

impl McpHandler {
    /// Creates a handler serving `dispatcher` under the given identity
    pub fn new(dispatcher: RequestDispatcher, server_info: ServerInfo) -> Self {
        Self {
            dispatcher,
            server_info,
        }
    }

    /// Identity reported during `initialize`
    pub fn server_info(&self) -> &ServerInfo {
        &self.server_info
    }

    /// Handles one JSON-RPC message.
    ///
    /// Returns the response to write back, or `None` for notifications.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<Value> {
        if request.is_notification() {
            debug!(method = %request.method, "received notification");
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        let params = request.params.unwrap_or(Value::Null);
        debug!(method = %request.method, id = ?id, "received request");

        let response = match self.call_method(&request.method, params).await {
            Ok(result) => rpc_success(id, result),
            Err(fault) => rpc_error(id, fault.code, fault.message),
        };
        Some(response)
    }

    async fn call_method(&self, method: &str, params: Value) -> Result<Value, RpcFault> {
        match method {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(json!({})),
            m if m.starts_with("notifications/") => Ok(json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "resources/list" => Ok(self.handle_resources_list()),
            "tools/call" => self.handle_tools_call(parse_params(params)?).await,
            "resources/read" => self.handle_resources_read(parse_params(params)?).await,
            _ => {
                warn!(method, "unknown method");
                Err(RpcFault::new(
                    error_codes::METHOD_NOT_FOUND,
                    "Method not found",
                ))
            }
        }
    }

    // =========================================================================
    // MCP Method Handlers
    // =========================================================================

    /// Handles `initialize` request (Handshake).
    ///
    /// Only the capability kinds this server actually registers are advertised.
    fn handle_initialize(&self) -> Value {
        let catalog = self.dispatcher.catalog();
        let mut capabilities = json!({});
        if catalog.has_any(CapabilityKind::Tool) {
            capabilities["tools"] = json!({});
        }
        if catalog.has_any(CapabilityKind::Resource) {
            capabilities["resources"] = json!({});
        }

        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": capabilities,
            "serverInfo": self.server_info,
        })
    }

    /// Handles `tools/list` request.
    fn handle_tools_list(&self) -> Value {
        let tools: Vec<Value> = self
            .dispatcher
            .handle_list(CapabilityKind::Tool)
            .iter()
            .map(tool_entry)
            .collect();
        json!({ "tools": tools })
    }

    /// Handles `resources/list` request.
    fn handle_resources_list(&self) -> Value {
        let resources: Vec<Value> = self
            .dispatcher
            .handle_list(CapabilityKind::Resource)
            .iter()
            .map(resource_entry)
            .collect();
        json!({ "resources": resources })
    }

    /// Handles `tools/call` request.
    async fn handle_tools_call(&self, params: ToolsCallParams) -> Result<Value, RpcFault> {
        let arguments = params.arguments.unwrap_or_default();
        let envelope = self
            .invoke(CapabilityKind::Tool, &params.name, arguments)
            .await?;
        Ok(tool_call_result(envelope))
    }

    /// Handles `resources/read` request.
    async fn handle_resources_read(&self, params: ResourcesReadParams) -> Result<Value, RpcFault> {
        let envelope = self
            .invoke(CapabilityKind::Resource, &params.uri, Params::new())
            .await?;
        let mime_type = self
            .dispatcher
            .catalog()
            .describe(CapabilityKind::Resource, &params.uri)
            .and_then(|descriptor| descriptor.mime_type());
        Ok(resource_read_result(&params.uri, mime_type, envelope))
    }

    async fn invoke(
        &self,
        kind: CapabilityKind,
        identifier: &str,
        params: Params,
    ) -> Result<Envelope, RpcFault> {
        self.dispatcher
            .handle_invoke(kind, identifier, params)
            .await
            .map_err(|err| {
                match &err {
                    DispatchError::NotFound { .. } => warn!(%kind, identifier, "{err}"),
                    DispatchError::Unhandled { source, .. } => {
                        error!(%kind, identifier, error = ?source, "unhandled handler error")
                    }
                }
                RpcFault::from(&err)
            })
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, RpcFault> {
    serde_json::from_value(params)
        .map_err(|e| RpcFault::invalid_params(format!("Invalid params: {e}")))
}

// =============================================================================
// HTTP Routes
// =============================================================================

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            let reason = e.body_text();
            warn!(error = %reason, "JSON parse error");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, error_codes::PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    // Over HTTP every POST gets a body, so notifications are acknowledged with `{}`.
    let response_body = state
        .handle(req)
        .await
        .unwrap_or_else(|| rpc_success(Value::Null, json!({})));

    Json(response_body).into_response()
}
