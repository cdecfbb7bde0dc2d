use anyhow::{bail, Context};
use clap::Parser;
use mx_mcp_rust::config::Config;
use mx_mcp_rust::router::create_app_router;
use mx_mcp_rust::servers::build_handler;
use mx_mcp_rust::transport::{McpServer, StdioTransport};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::parse();
    if config.no_stdio && config.http_addr.is_none() {
        bail!("--no-stdio requires --http-addr");
    }

    let handler = Arc::new(build_handler(&config).context("failed to build server catalog")?);
    info!(
        server = %handler.server_info().name,
        version = %handler.server_info().version,
        "catalog ready"
    );

    if let Some(addr) = config.http_addr {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("HTTP transport listening on http://{}", addr);

        let app = create_app_router(handler.clone());
        let serve = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        if config.no_stdio {
            serve.await.context("HTTP server failed")?;
            return Ok(());
        }

        tokio::spawn(async move {
            if let Err(e) = serve.await {
                error!(error = %e, "HTTP server failed");
            }
        });
    }

    let mut server = McpServer::new(StdioTransport::stdio(), handler);
    server.run_until(shutdown_signal()).await?;

    info!("MCP server stopped");
    // The blocking stdin reader may still be parked on a read; exit instead of
    // waiting for the runtime to join it.
    std::process::exit(0);
}

/// Resolves on Ctrl-C / SIGINT.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for interrupt signal");
        std::future::pending::<()>().await;
    }
}
