//! Request dispatch against the capability catalog.
//!
//! Routing failures ("I don't know this capability") become a
//! [`DispatchError`], which the transport reports as a JSON-RPC error.
//! Upstream failures inside a known handler become a [`Envelope::Failure`]
//! and are returned as ordinary content.

use thiserror::Error;
use tracing::debug;

use super::models::{error_codes, RpcFault};
use crate::catalog::{
    CapabilityCatalog, CapabilityDescriptor, CapabilityKind, ContentItem, HandlerError, Params,
    SharedCatalog,
};

/// Outcome of a handler that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    /// The handler produced its content
    Success { content: Vec<ContentItem> },
    /// The handler hit a recoverable failure; `content` holds one text item
    Failure { content: Vec<ContentItem> },
}

impl Envelope {
    /// Builds a failure envelope holding a single text item
    pub fn failure(message: impl Into<String>) -> Self {
        Envelope::Failure {
            content: vec![ContentItem::text(message)],
        }
    }

    /// Content items carried by the envelope
    pub fn content(&self) -> &[ContentItem] {
        match self {
            Envelope::Success { content } | Envelope::Failure { content } => content,
        }
    }

    /// Consumes the envelope, returning its content items
    pub fn into_content(self) -> Vec<ContentItem> {
        match self {
            Envelope::Success { content } | Envelope::Failure { content } => content,
        }
    }

    /// True for [`Envelope::Failure`]
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Failure { .. })
    }
}

/// Request-level failures, reported as JSON-RPC errors rather than content
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No capability of this kind is registered under the identifier
    #[error("{}", not_found_message(.kind, .identifier))]
    NotFound {
        kind: CapabilityKind,
        identifier: String,
    },
    /// The handler failed in a way it does not know how to report
    #[error("{kind} {identifier} failed: {source}")]
    Unhandled {
        kind: CapabilityKind,
        identifier: String,
        #[source]
        source: anyhow::Error,
    },
}

fn not_found_message(kind: &CapabilityKind, identifier: &str) -> String {
    match kind {
        CapabilityKind::Tool => format!("Unknown tool: {identifier}"),
        CapabilityKind::Resource => format!("Resource not found: {identifier}"),
    }
}

impl DispatchError {
    /// JSON-RPC error code for this failure
    pub fn code(&self) -> i32 {
        match self {
            DispatchError::NotFound { .. } => error_codes::METHOD_NOT_FOUND,
            DispatchError::Unhandled { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Identifier the failing request named
    pub fn identifier(&self) -> &str {
        match self {
            DispatchError::NotFound { identifier, .. }
            | DispatchError::Unhandled { identifier, .. } => identifier,
        }
    }
}

impl From<&DispatchError> for RpcFault {
    fn from(err: &DispatchError) -> Self {
        RpcFault::new(err.code(), err.to_string())
    }
}

/// Routes list and invoke requests to the catalog
#[derive(Clone)]
pub struct RequestDispatcher {
    catalog: SharedCatalog,
}

impl RequestDispatcher {
    /// Creates a dispatcher over a frozen catalog
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this dispatcher serves
    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// Returns every descriptor of `kind` in registration order
    pub fn handle_list(&self, kind: CapabilityKind) -> Vec<CapabilityDescriptor> {
        self.catalog.list(kind).into_iter().cloned().collect()
    }

    /// Looks up and runs the handler for `identifier`.
    ///
    /// - unknown identifier: `Err(DispatchError::NotFound)`
    /// - handler success: `Ok(Envelope::Success)` with the content untouched
    /// - [`HandlerError::Upstream`]: `Ok(Envelope::Failure)` with one text item
    /// - [`HandlerError::Unanticipated`]: `Err(DispatchError::Unhandled)`
    pub async fn handle_invoke(
        &self,
        kind: CapabilityKind,
        identifier: &str,
        params: Params,
    ) -> Result<Envelope, DispatchError> {
        let handler = self
            .catalog
            .lookup(kind, identifier)
            .map_err(|_| DispatchError::NotFound {
                kind,
                identifier: identifier.to_string(),
            })?;

        debug!(%kind, identifier, "invoking handler");

        match handler(params).await {
            Ok(content) => Ok(Envelope::Success { content }),
            Err(err @ HandlerError::Upstream(_)) => {
                debug!(%kind, identifier, error = %err, "handler reported upstream failure");
                Ok(Envelope::failure(err.to_string()))
            }
            Err(HandlerError::Unanticipated(source)) => Err(DispatchError::Unhandled {
                kind,
                identifier: identifier.to_string(),
                source,
            }),
        }
    }
}
