//! `mx-template` server: placeholder tools and resources to copy from when
//! starting a new server.

use super::StaticResource;
use crate::catalog::helpers::{static_text, string_params_schema, with_tool};
use crate::catalog::{CapabilityCatalog, CatalogError};

/// Server identifier
pub const SERVER_NAME: &str = "mx-template";
/// Server version
pub const SERVER_VERSION: &str = "0.1.0";

const TOOLS: [(&str, &str, &str); 2] = [
    ("tool_1", "Tool description 1", "Tool 1 response"),
    ("tool_2", "Tool description 2", "Tool 2 response"),
];

pub const RESOURCES: &[StaticResource] = &[
    StaticResource {
        uri: "mx-template://name_1",
        name: "Resource Name 1",
        description: "Resource description 1",
        text: "Resource content 1",
    },
    StaticResource {
        uri: "mx-template://name_2",
        name: "Resource Name 2",
        description: "Resource description 2",
        text: "Resource content 2",
    },
];

/// Registers the placeholder tools. Both accept two optional string parameters.
pub fn register_tools(catalog: &mut CapabilityCatalog) -> Result<(), CatalogError> {
    for (name, description, response) in TOOLS {
        let schema = string_params_schema(&[
            ("parameter1", "Parameter 1 description"),
            ("parameter2", "Parameter 2 description"),
        ]);
        with_tool(catalog, name, description, schema, static_text(response))?;
    }
    Ok(())
}
