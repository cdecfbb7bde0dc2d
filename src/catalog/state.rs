//! Capability Catalog State
//!
//! The catalog is filled once at startup through `&mut self` and then frozen
//! behind an `Arc`; nothing can register or remove entries after that point.

use super::error::CatalogError;
use super::models::{CapabilityDescriptor, CapabilityKind, Handler};
use std::{collections::HashMap, sync::Arc};

/// Shared, read-only catalog handed to the dispatcher
pub type SharedCatalog = Arc<CapabilityCatalog>;

/// A registered capability: its descriptor and the handler that serves it
struct CatalogEntry {
    descriptor: CapabilityDescriptor,
    handler: Handler,
}

/// Entries of one kind, in registration order, with an identifier index
#[derive(Default)]
struct KindTable {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

/// Registry mapping tool names and resource URIs to their handlers
#[derive(Default)]
pub struct CapabilityCatalog {
    tools: KindTable,
    resources: KindTable,
}

impl CapabilityCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, kind: CapabilityKind) -> &KindTable {
        match kind {
            CapabilityKind::Tool => &self.tools,
            CapabilityKind::Resource => &self.resources,
        }
    }

    fn table_mut(&mut self, kind: CapabilityKind) -> &mut KindTable {
        match kind {
            CapabilityKind::Tool => &mut self.tools,
            CapabilityKind::Resource => &mut self.resources,
        }
    }

    /// Adds a capability.
    ///
    /// Fails with [`CatalogError::DuplicateIdentifier`] when the identifier is
    /// already taken by an entry of the same kind. The same identifier may be
    /// used once as a tool and once as a resource.
    pub fn register(
        &mut self,
        descriptor: CapabilityDescriptor,
        handler: Handler,
    ) -> Result<(), CatalogError> {
        let kind = descriptor.kind;
        let table = self.table_mut(kind);

        if table.index.contains_key(&descriptor.identifier) {
            return Err(CatalogError::DuplicateIdentifier {
                kind,
                identifier: descriptor.identifier,
            });
        }

        table
            .index
            .insert(descriptor.identifier.clone(), table.entries.len());
        table.entries.push(CatalogEntry {
            descriptor,
            handler,
        });
        Ok(())
    }

    /// Returns the descriptors of `kind` in registration order
    pub fn list(&self, kind: CapabilityKind) -> Vec<&CapabilityDescriptor> {
        self.table(kind)
            .entries
            .iter()
            .map(|entry| &entry.descriptor)
            .collect()
    }

    /// Finds the handler registered under `identifier` (exact, case-sensitive match)
    pub fn lookup(&self, kind: CapabilityKind, identifier: &str) -> Result<&Handler, CatalogError> {
        self.entry(kind, identifier)
            .map(|entry| &entry.handler)
            .ok_or_else(|| CatalogError::NotFound {
                kind,
                identifier: identifier.to_string(),
            })
    }

    /// Finds the descriptor registered under `identifier`
    pub fn describe(
        &self,
        kind: CapabilityKind,
        identifier: &str,
    ) -> Option<&CapabilityDescriptor> {
        self.entry(kind, identifier).map(|entry| &entry.descriptor)
    }

    /// True when at least one capability of `kind` is registered
    pub fn has_any(&self, kind: CapabilityKind) -> bool {
        !self.table(kind).entries.is_empty()
    }

    fn entry(&self, kind: CapabilityKind, identifier: &str) -> Option<&CatalogEntry> {
        let table = self.table(kind);
        table
            .index
            .get(identifier)
            .and_then(|&position| table.entries.get(position))
    }
}
