//! Tool declaration helpers using JSON Schema generation

use schemars::{schema_for, JsonSchema};

use crate::llm::core::types::ToolDeclaration;

/// Build a tool declaration whose input schema is generated from `T`.
/// Doc comments on `T`'s fields become parameter descriptions.
pub fn create_tool_declaration<T: JsonSchema>(
    name: impl Into<String>,
    description: impl Into<String>,
) -> ToolDeclaration {
    let schema = schema_for!(T);
    ToolDeclaration {
        name: name.into(),
        description: description.into(),
        input_schema: serde_json::to_value(&schema).unwrap_or_default(),
    }
}
