//! Catalog and handler error types.

use thiserror::Error;

use super::models::CapabilityKind;

/// Errors raised while building or querying a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Another entry of the same kind already uses this identifier.
    #[error("duplicate {kind} identifier: {identifier}")]
    DuplicateIdentifier {
        kind: CapabilityKind,
        identifier: String,
    },
    /// No entry of this kind matches the identifier.
    #[error("{kind} not found: {identifier}")]
    NotFound {
        kind: CapabilityKind,
        identifier: String,
    },
}

/// Errors a handler may raise.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// An external dependency failed. Reported to the caller as content.
    #[error("API error: {0}")]
    Upstream(String),
    /// Anything else. Surfaced as a request-level failure and logged.
    #[error(transparent)]
    Unanticipated(#[from] anyhow::Error),
}
