//! Tool executor trait

use async_trait::async_trait;

/// Executes tool calls requested by the model.
///
/// Returns the tool's JSON-encoded result, or an error message that is fed
/// back to the model as an error tool result.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(
        &self,
        tool_use_id: String,
        name: String,
        arguments: serde_json::Value,
    ) -> Result<String, String>;
}
