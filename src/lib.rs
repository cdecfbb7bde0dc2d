//! MultiversX MCP Servers Library
//!
//! This library provides a capability catalog and request dispatcher shared
//! by several MCP servers, together with the stdio and HTTP transports that
//! expose them.

// Core
pub mod catalog;
pub mod mcp;

// Server definitions
pub mod servers;

// Infrastructure
pub mod config;
pub mod router;
pub mod transport;
