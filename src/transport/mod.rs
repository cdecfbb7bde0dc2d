//! Stdio Transport Module
//!
//! Line-delimited JSON-RPC over stdin/stdout:
//! - `StdioTransport` reads and writes single-line messages
//! - `McpServer` runs the serial request/response loop until EOF or shutdown

pub mod error;
pub mod server;
pub mod stdio;

pub use error::TransportError;
pub use server::McpServer;
pub use stdio::StdioTransport;
