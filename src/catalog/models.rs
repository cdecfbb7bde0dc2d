//! Capability Domain Models
//!
//! This module contains the data structures describing what a server
//! advertises (descriptors) and what its handlers produce (content items).

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, sync::Arc};

use super::error::HandlerError;

// =============================================================================
// Capability Descriptors
// =============================================================================

/// The two kinds of capability a server can advertise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// Invocable capability taking structured arguments
    Tool,
    /// URI-addressed document
    Resource,
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityKind::Tool => f.write_str("tool"),
            CapabilityKind::Resource => f.write_str("resource"),
        }
    }
}

/// What a capability accepts (tools) or declares (resources)
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityShape {
    /// JSON schema of the tool arguments
    InputSchema(Value),
    /// MIME type of the resource document
    MimeType(String),
}

/// Static description of a single registered capability
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityDescriptor {
    /// Tool name or resource URI, unique within its kind
    pub identifier: String,

    /// Whether this is a tool or a resource
    pub kind: CapabilityKind,

    /// Human readable name shown to clients
    pub display_name: String,

    /// What the capability does
    pub description: String,

    /// Input schema or MIME type, depending on `kind`
    pub shape: CapabilityShape,
}

impl CapabilityDescriptor {
    /// Describes a tool with the given JSON schema for its arguments.
    pub fn tool(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            identifier: name,
            kind: CapabilityKind::Tool,
            description: description.into(),
            shape: CapabilityShape::InputSchema(input_schema),
        }
    }

    /// Describes a resource served under `uri`.
    pub fn resource(
        uri: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: uri.into(),
            kind: CapabilityKind::Resource,
            display_name: name.into(),
            description: description.into(),
            shape: CapabilityShape::MimeType(mime_type.into()),
        }
    }

    /// Overrides the display name (tools default to their identifier).
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.display_name = title.into();
        self
    }

    /// Returns the declared MIME type for resources.
    pub fn mime_type(&self) -> Option<&str> {
        match &self.shape {
            CapabilityShape::MimeType(mime) => Some(mime),
            CapabilityShape::InputSchema(_) => None,
        }
    }

    /// Returns the argument schema for tools.
    pub fn input_schema(&self) -> Option<&Value> {
        match &self.shape {
            CapabilityShape::InputSchema(schema) => Some(schema),
            CapabilityShape::MimeType(_) => None,
        }
    }
}

// =============================================================================
// Handler Output
// =============================================================================

/// A single piece of content returned by a handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Plain text content
    Text { text: String },
}

impl ContentItem {
    /// Builds a text content item.
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    /// Returns the text payload.
    pub fn as_text(&self) -> &str {
        match self {
            ContentItem::Text { text } => text,
        }
    }
}

/// Arguments passed to a handler, keyed by parameter name
pub type Params = Map<String, Value>;

/// Result of running a handler
pub type HandlerResult = Result<Vec<ContentItem>, HandlerError>;

/// Handler owned by a catalog entry.
///
/// Handlers are shared (`Arc`) so that lookup can hand out the same value on
/// every call without cloning the closure state.
pub type Handler = Arc<dyn Fn(Params) -> BoxFuture<'static, HandlerResult> + Send + Sync>;
