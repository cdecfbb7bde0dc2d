//! Catalog Helpers
//!
//! Small constructors for handlers and schemas shared by every server table.

use super::error::{CatalogError, HandlerError};
use super::models::{CapabilityDescriptor, ContentItem, Handler, HandlerResult, Params};
use super::state::CapabilityCatalog;
use futures_util::FutureExt;
use serde_json::{json, Value};
use std::{future::Future, sync::Arc};

/// Wraps an async closure into a catalog [`Handler`].
pub fn handler_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(Params) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(move |params| f(params).boxed())
}

/// Builds a handler that always answers with a single text item.
pub fn static_text(text: impl Into<String>) -> Handler {
    let text: Arc<str> = Arc::from(text.into());
    handler_fn(move |_params| {
        let text = Arc::clone(&text);
        async move { Ok::<_, HandlerError>(vec![ContentItem::text(&*text)]) }
    })
}

/// Registers a tool under `name`, returning the catalog for chaining.
pub fn with_tool<'a>(
    catalog: &'a mut CapabilityCatalog,
    name: &str,
    description: &str,
    input_schema: Value,
    handler: Handler,
) -> Result<&'a mut CapabilityCatalog, CatalogError> {
    catalog.register(CapabilityDescriptor::tool(name, description, input_schema), handler)?;
    Ok(catalog)
}

/// Registers a resource served under `uri`, returning the catalog for chaining.
pub fn with_resource<'a>(
    catalog: &'a mut CapabilityCatalog,
    uri: &str,
    name: &str,
    mime_type: &str,
    description: &str,
    handler: Handler,
) -> Result<&'a mut CapabilityCatalog, CatalogError> {
    catalog.register(
        CapabilityDescriptor::resource(uri, name, mime_type, description),
        handler,
    )?;
    Ok(catalog)
}

/// Object schema with no declared properties.
pub fn empty_object_schema() -> Value {
    json!({
        "type": "object",
        "properties": {}
    })
}

/// Object schema whose properties are all optional strings.
///
/// Each pair is `(property name, description)`.
pub fn string_params_schema(properties: &[(&str, &str)]) -> Value {
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, description)| {
            (
                name.to_string(),
                json!({ "type": "string", "description": description }),
            )
        })
        .collect();

    json!({
        "type": "object",
        "properties": properties
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_text_ignores_params() {
        let handler = static_text("hello");
        let mut params = Params::new();
        params.insert("anything".into(), json!(1));

        let content = handler(params).await.unwrap();
        assert_eq!(content, vec![ContentItem::text("hello")]);
    }

    #[test]
    fn with_helpers_register_and_chain() {
        use crate::catalog::CapabilityKind;

        let mut catalog = CapabilityCatalog::new();
        with_tool(&mut catalog, "t", "a tool", empty_object_schema(), static_text("x"))
            .and_then(|c| with_resource(c, "s://r", "R", "text/plain", "a doc", static_text("y")))
            .unwrap();

        let tool = catalog.describe(CapabilityKind::Tool, "t").unwrap();
        assert_eq!(tool.input_schema(), Some(&empty_object_schema()));
        let resource = catalog.describe(CapabilityKind::Resource, "s://r").unwrap();
        assert_eq!(resource.display_name, "R");
        assert_eq!(resource.mime_type(), Some("text/plain"));

        let err = with_tool(&mut catalog, "t", "again", json!({}), static_text("z")).err().unwrap();
        assert!(matches!(err, CatalogError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn string_params_schema_lists_properties() {
        let schema = string_params_schema(&[("parameter1", "first"), ("parameter2", "second")]);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["parameter1"]["type"], "string");
        assert_eq!(schema["properties"]["parameter2"]["description"], "second");
    }
}
