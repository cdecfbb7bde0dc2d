//! Command line and environment configuration.

use clap::Parser;
use std::net::SocketAddr;

use crate::servers::{api_service::DEFAULT_API_URL, ServerKind};

/// Runtime configuration for the MCP binary
#[derive(Debug, Clone, Parser)]
#[command(name = "mx-mcp", version, about = "MultiversX MCP servers over stdio")]
pub struct Config {
    /// Which server to host.
    #[arg(long, env = "MX_MCP_SERVER", value_enum, default_value_t = ServerKind::ApiService)]
    pub server: ServerKind,

    /// Base URL of the MultiversX API used by the economics tools.
    #[arg(long, env = "MX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout for the economics API, in seconds.
    #[arg(long, env = "MX_API_TIMEOUT_SECS", default_value_t = 30)]
    pub api_timeout_secs: u64,

    /// Also serve JSON-RPC over HTTP on this address, e.g. `127.0.0.1:8000`.
    #[arg(long, env = "MX_MCP_HTTP_ADDR")]
    pub http_addr: Option<SocketAddr>,

    /// Disable the stdio transport (requires `--http-addr`).
    #[arg(long, env = "MX_MCP_NO_STDIO", default_value_t = false)]
    pub no_stdio: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerKind::ApiService,
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout_secs: 30,
            http_addr: None,
            no_stdio: false,
        }
    }
}
