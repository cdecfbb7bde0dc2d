//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC requests line by line, dispatches them through
//! [`McpHandler`], and writes responses back in arrival order.
//! Notifications (no `id`) are handled without a response.

use std::future::Future;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{info, warn};

use super::error::TransportError;
use super::stdio::StdioTransport;
use crate::mcp::helpers::rpc_error;
use crate::mcp::models::{error_codes, JsonRpcRequest};
use crate::mcp::SharedState;
use serde_json::Value;

/// Parses one line into a request, or builds the error response for it.
///
/// Invalid JSON is `-32700` with a null id. Well-formed JSON that is not a
/// request object is `-32600`, echoing the `id` when one is present.
fn parse_request(line: &str) -> Result<JsonRpcRequest, Value> {
    let value: Value = serde_json::from_str(line).map_err(|e| {
        warn!(error = %e, "failed to parse JSON-RPC message");
        rpc_error(Value::Null, error_codes::PARSE_ERROR, "Parse error")
    })?;

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "invalid JSON-RPC request");
        rpc_error(id, error_codes::INVALID_REQUEST, "Invalid Request")
    })
}

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: SharedState,
}

impl<R, W> McpServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: SharedState) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input is closed.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Runs the server loop until the input is closed or `shutdown` resolves.
    ///
    /// Shutdown is only observed while waiting for the next message; a request
    /// that has been read is always answered in full first.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<(), TransportError>
    where
        F: Future<Output = ()>,
    {
        info!(server = %self.handler.server_info().name, "MCP server running on stdio");
        tokio::pin!(shutdown);

        loop {
            let next = tokio::select! {
                line = self.transport.read_line() => line?,
                _ = &mut shutdown => {
                    info!("shutdown requested, closing transport");
                    break;
                }
            };

            let line = match next {
                Some(line) if line.is_empty() => continue,
                Some(line) => line,
                None => {
                    info!("stdin closed, shutting down");
                    break;
                }
            };

            let response = match parse_request(&line) {
                Ok(request) => self.handler.handle(request).await,
                Err(fault) => Some(fault),
            };

            if let Some(response) = response {
                let json = serde_json::to_string(&response)?;
                self.transport.write_line(&json).await?;
            }
        }

        self.transport.flush().await
    }

    /// Consumes the server, returning the transport's writer.
    pub fn into_writer(self) -> W {
        self.transport.into_writer()
    }
}
