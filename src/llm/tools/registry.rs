//! Function registry for tool execution

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::declaration::create_tool_declaration;
use super::executor::ToolExecutor;
use crate::llm::core::types::ToolDeclaration;

type AsyncToolFn =
    Box<dyn Fn(serde_json::Value) -> BoxFuture<'static, Result<String, String>> + Send + Sync>;

/// Registry of async tool functions callable by the model.
///
/// Arguments are deserialized from the model's JSON input and results are
/// serialized back to JSON. Each registration also records the tool's
/// declaration so the registry can describe itself to the provider.
///
/// ```ignore
/// let mut registry = FunctionRegistry::new();
/// registry.register_tool("search_news", "Search recent news", move |args: SearchArgs| {
///     let news = news.clone();
///     async move { news.search(&args.query, 5).await.map_err(|e| e.to_string()) }
/// });
/// ```
pub struct FunctionRegistry {
    functions: HashMap<String, AsyncToolFn>,
    declarations: Vec<ToolDeclaration>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            declarations: Vec::new(),
        }
    }

    /// Register an async tool; its input schema is generated from `Args`.
    pub fn register_tool<F, Args, R, Fut>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        func: F,
    ) where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Args: DeserializeOwned + JsonSchema + Send + 'static,
        R: Serialize + Send + 'static,
        Fut: Future<Output = Result<R, String>> + Send + 'static,
    {
        let name = name.into();
        let declaration = create_tool_declaration::<Args>(name.clone(), description);

        let wrapper = move |args_json: serde_json::Value| {
            let args = match serde_json::from_value::<Args>(args_json) {
                Ok(args) => args,
                Err(e) => {
                    let err_msg = format!("Failed to deserialize arguments: {}", e);
                    return Box::pin(async move { Err(err_msg) }) as BoxFuture<'static, _>;
                }
            };

            let future = func(args);

            Box::pin(async move {
                let result = future.await?;
                serde_json::to_string(&result)
                    .map_err(|e| format!("Failed to serialize result: {}", e))
            }) as BoxFuture<'static, _>
        };

        self.declarations.retain(|d| d.name != name);
        self.declarations.push(declaration);
        self.functions.insert(name, Box::new(wrapper));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Declarations of every registered tool, in registration order
    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.declarations.clone()
    }

    async fn execute_function(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<String, String> {
        match self.functions.get(name) {
            Some(func) => func(arguments).await,
            None => Err(format!("Unknown tool: {}", name)),
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for FunctionRegistry {
    async fn execute(
        &self,
        _tool_use_id: String,
        name: String,
        arguments: serde_json::Value,
    ) -> Result<String, String> {
        self.execute_function(&name, arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, JsonSchema)]
    struct AddArgs {
        a: i32,
        b: i32,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct AddResult {
        sum: i32,
    }

    fn registry_with_add() -> FunctionRegistry {
        let mut registry = FunctionRegistry::new();
        registry.register_tool("add", "Add two integers", |args: AddArgs| async move {
            Ok(AddResult {
                sum: args.a + args.b,
            })
        });
        registry
    }

    #[tokio::test]
    async fn test_register_records_declaration() {
        let registry = registry_with_add();

        assert!(registry.contains("add"));
        assert_eq!(registry.len(), 1);
        let decls = registry.declarations();
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "add");
        assert_eq!(decls[0].description, "Add two integers");
    }

    #[tokio::test]
    async fn test_execute_async_function() {
        let registry = registry_with_add();

        let result = registry
            .execute_function("add", serde_json::json!({"a": 10, "b": 20}))
            .await
            .unwrap();

        let parsed: AddResult = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, AddResult { sum: 30 });
    }

    #[tokio::test]
    async fn test_function_error() {
        let mut registry = FunctionRegistry::new();
        registry.register_tool("divide", "Integer division", |args: AddArgs| async move {
            if args.b == 0 {
                Err("Division by zero".to_string())
            } else {
                Ok(AddResult {
                    sum: args.a / args.b,
                })
            }
        });

        let result = registry
            .execute_function("divide", serde_json::json!({"a": 10, "b": 0}))
            .await;

        assert_eq!(result.unwrap_err(), "Division by zero");
    }

    #[tokio::test]
    async fn test_deserialization_error() {
        let registry = registry_with_add();

        let result = registry
            .execute_function("add", serde_json::json!({"a": 5}))
            .await;

        assert!(result
            .unwrap_err()
            .contains("Failed to deserialize arguments"));
    }

    #[tokio::test]
    async fn test_unknown_function() {
        let registry = FunctionRegistry::new();

        let result = registry
            .execute_function("unknown", serde_json::json!({}))
            .await;

        assert_eq!(result.unwrap_err(), "Unknown tool: unknown");
    }

    #[tokio::test]
    async fn test_reregistering_replaces_declaration() {
        let mut registry = registry_with_add();
        registry.register_tool("add", "Add, again", |args: AddArgs| async move {
            Ok(AddResult {
                sum: args.a + args.b,
            })
        });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.declarations()[0].description, "Add, again");
    }

    #[tokio::test]
    async fn test_tool_executor_trait() {
        let registry = registry_with_add();

        let executor: &dyn ToolExecutor = &registry;
        let result = executor
            .execute(
                "tool-1".to_string(),
                "add".to_string(),
                serde_json::json!({"a": 7, "b": 3}),
            )
            .await
            .unwrap();

        let parsed: AddResult = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed, AddResult { sum: 10 });
    }
}
