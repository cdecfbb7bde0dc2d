//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants, error codes)
//! - RPC helpers (success/error responses, listing and result rendering)
//! - The request dispatcher (catalog lookup, envelopes, faults)
//! - MCP handlers (initialize, tools/*, resources/*) and HTTP routes

pub mod dispatcher;
pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use dispatcher::{DispatchError, Envelope, RequestDispatcher};
pub use handlers::{routes, McpHandler, SharedState};
pub use models::{JsonRpcRequest, ServerInfo};
