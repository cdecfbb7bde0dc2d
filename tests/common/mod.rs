//! Shared helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use mx_mcp_rust::catalog::CapabilityCatalog;
use mx_mcp_rust::config::Config;
use mx_mcp_rust::mcp::{McpHandler, RequestDispatcher, ServerInfo, SharedState};
use mx_mcp_rust::servers::{build_handler, ServerKind};
use std::sync::Arc;

/// Builds the handler for one of the bundled servers.
pub fn handler_for(kind: ServerKind) -> SharedState {
    let config = Config {
        server: kind,
        ..Config::default()
    };
    Arc::new(build_handler(&config).expect("handler builds"))
}

/// Wraps a hand-built catalog in a handler.
pub fn handler_with(catalog: CapabilityCatalog) -> SharedState {
    Arc::new(McpHandler::new(
        RequestDispatcher::new(Arc::new(catalog)),
        ServerInfo::new("test-server", "0.0.0"),
    ))
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}
