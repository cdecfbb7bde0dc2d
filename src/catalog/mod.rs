//! Capability Catalog Module
//!
//! This module contains the process-wide registry of tools and resources:
//! - Domain models (descriptors, content items, handler type)
//! - Error types (registration conflicts, handler failures)
//! - The catalog itself (register, list, lookup)
//! - Handler and schema helpers

pub mod error;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use error::{CatalogError, HandlerError};
pub use models::{
    CapabilityDescriptor, CapabilityKind, CapabilityShape, ContentItem, Handler, HandlerResult,
    Params,
};
pub use state::{CapabilityCatalog, SharedCatalog};
