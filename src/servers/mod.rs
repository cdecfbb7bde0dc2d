//! Server Definitions Module
//!
//! Each server is a declarative table of capabilities plugged into the shared
//! catalog and dispatcher:
//! - `api_service`: EGLD economics tools backed by the MultiversX API
//! - `sdk_py_cli`: `mxpy` how-to resources
//! - `sdk_rs`: `sc-meta` how-to resources
//! - `template`: placeholder tools and resources

pub mod api_service;
pub mod sdk_py_cli;
pub mod sdk_rs;
pub mod template;

use crate::catalog::helpers::{static_text, with_resource};
use crate::catalog::{CapabilityCatalog, CatalogError};
use crate::config::Config;
use crate::mcp::{McpHandler, RequestDispatcher, ServerInfo};
use std::{sync::Arc, time::Duration};
use thiserror::Error;

/// MIME type of every instructional document
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// A resource whose content is a fixed document
#[derive(Debug, Clone, Copy)]
pub struct StaticResource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

/// Registers every entry of `resources` as a `text/plain` resource.
pub fn register_static_resources(
    catalog: &mut CapabilityCatalog,
    resources: &[StaticResource],
) -> Result<(), CatalogError> {
    for resource in resources {
        with_resource(
            catalog,
            resource.uri,
            resource.name,
            TEXT_MIME_TYPE,
            resource.description,
            static_text(resource.text),
        )?;
    }
    Ok(())
}

/// Errors raised while assembling a server at startup
#[derive(Debug, Error)]
pub enum BuildError {
    /// Two capabilities share an identifier.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The economics HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// The servers this binary can host
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ServerKind {
    /// EGLD economics tools (`mx-api-service`)
    ApiService,
    /// `mxpy` guides (`mx-sdk-py-cli`)
    SdkPyCli,
    /// `sc-meta` guides (`mx-sdk-rs`)
    SdkRs,
    /// Placeholder tools and resources (`mx-template`)
    Template,
}

impl ServerKind {
    /// Name and version reported during `initialize`
    pub fn server_info(self) -> ServerInfo {
        match self {
            ServerKind::ApiService => {
                ServerInfo::new(api_service::SERVER_NAME, api_service::SERVER_VERSION)
            }
            ServerKind::SdkPyCli => {
                ServerInfo::new(sdk_py_cli::SERVER_NAME, sdk_py_cli::SERVER_VERSION)
            }
            ServerKind::SdkRs => ServerInfo::new(sdk_rs::SERVER_NAME, sdk_rs::SERVER_VERSION),
            ServerKind::Template => {
                ServerInfo::new(template::SERVER_NAME, template::SERVER_VERSION)
            }
        }
    }

    /// Builds the catalog for this server.
    pub fn build_catalog(self, config: &Config) -> Result<CapabilityCatalog, BuildError> {
        let mut catalog = CapabilityCatalog::new();
        match self {
            ServerKind::ApiService => {
                let client = api_service::EconomicsClient::new(
                    config.api_url.clone(),
                    Duration::from_secs(config.api_timeout_secs),
                )?;
                api_service::register(&mut catalog, client)?;
            }
            ServerKind::SdkPyCli => register_static_resources(&mut catalog, sdk_py_cli::RESOURCES)?,
            ServerKind::SdkRs => register_static_resources(&mut catalog, sdk_rs::RESOURCES)?,
            ServerKind::Template => {
                template::register_tools(&mut catalog)?;
                register_static_resources(&mut catalog, template::RESOURCES)?;
            }
        }
        Ok(catalog)
    }
}

/// Builds the catalog for the configured server and wraps it in an MCP handler.
pub fn build_handler(config: &Config) -> Result<McpHandler, BuildError> {
    let catalog = config.server.build_catalog(config)?;
    let dispatcher = RequestDispatcher::new(Arc::new(catalog));
    Ok(McpHandler::new(dispatcher, config.server.server_info()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CapabilityKind;

    fn build(kind: ServerKind) -> CapabilityCatalog {
        let config = Config {
            server: kind,
            ..Config::default()
        };
        kind.build_catalog(&config).expect("catalog builds")
    }

    #[test]
    fn every_server_builds_without_duplicates() {
        let counts: Vec<_> = [
            ServerKind::ApiService,
            ServerKind::SdkPyCli,
            ServerKind::SdkRs,
            ServerKind::Template,
        ]
        .into_iter()
        .map(|kind| {
            let catalog = build(kind);
            (
                catalog.list(CapabilityKind::Tool).len(),
                catalog.list(CapabilityKind::Resource).len(),
            )
        })
        .collect();

        assert_eq!(counts, [(5, 0), (0, 8), (0, 3), (2, 2)]);
    }

    #[test]
    fn resource_uris_use_the_server_scheme() {
        for (kind, scheme) in [
            (ServerKind::SdkPyCli, "mx-sdk-py-cli://"),
            (ServerKind::SdkRs, "mx-sdk-rs://"),
            (ServerKind::Template, "mx-template://"),
        ] {
            for descriptor in build(kind).list(CapabilityKind::Resource) {
                assert!(descriptor.identifier.starts_with(scheme));
                assert_eq!(descriptor.mime_type(), Some(TEXT_MIME_TYPE));
            }
        }
    }

    #[test]
    fn registering_a_table_twice_fails() {
        let mut catalog = CapabilityCatalog::new();
        register_static_resources(&mut catalog, sdk_rs::RESOURCES).unwrap();

        let err = register_static_resources(&mut catalog, sdk_rs::RESOURCES).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn server_info_matches_kind() {
        assert_eq!(
            ServerKind::ApiService.server_info(),
            ServerInfo::new("mx-api-service", "0.0.1")
        );
        assert_eq!(ServerKind::SdkRs.server_info().name, "mx-sdk-rs");
    }
}
