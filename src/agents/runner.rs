//! Tool-use loop shared by every agent.
//!
//! Each `run` call:
//! - starts a fresh conversation from the prompt
//! - calls the model and executes any tool calls it requests
//! - feeds the tool results back and loops until a text-only turn
//! - gives up after `max_iterations` model turns

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use super::{AgentError, AgentKind};
use crate::llm::{
    ContentBlock, GenerateRequest, GenerationConfig, LlmProvider, Message, ToolDeclaration,
    ToolExecutor, UsageMetadata,
};

/// Final answer of a run plus the bookkeeping reported as metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub content: String,
    pub iterations: usize,
    pub tools_used: usize,
    pub usage: UsageMetadata,
}

impl RunOutput {
    pub fn metadata(&self, kind: AgentKind, model: &str) -> Map<String, Value> {
        let mut metadata = Map::new();
        metadata.insert("agent".to_string(), json!(kind.as_str()));
        metadata.insert("model".to_string(), json!(model));
        metadata.insert("iterations".to_string(), json!(self.iterations));
        metadata.insert("tools_used".to_string(), json!(self.tools_used));
        metadata.insert("input_tokens".to_string(), json!(self.usage.input_tokens));
        metadata.insert("output_tokens".to_string(), json!(self.usage.output_tokens));
        metadata
    }
}

pub struct AgentRunner {
    provider: Box<dyn LlmProvider>,

    tool_executor: Box<dyn ToolExecutor>,

    /// Tools offered to the model when a run allows tools
    tool_declarations: Vec<ToolDeclaration>,

    config: GenerationConfig,

    system: Option<String>,

    /// Maximum number of model turns per run (default: 5)
    max_iterations: usize,
}

impl AgentRunner {
    pub fn new(
        provider: Box<dyn LlmProvider>,
        tool_executor: Box<dyn ToolExecutor>,
        tool_declarations: Vec<ToolDeclaration>,
        config: GenerationConfig,
        system: Option<String>,
    ) -> Self {
        Self {
            provider,
            tool_executor,
            tool_declarations,
            config,
            system,
            max_iterations: 5,
        }
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max.max(1);
        self
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tool_declarations.iter().map(|d| d.name.as_str()).collect()
    }

    /// Run one prompt to completion. The conversation lives only for the
    /// duration of this call.
    pub async fn run(&self, prompt: &str, use_tools: bool) -> Result<RunOutput, AgentError> {
        let tools = (use_tools && !self.tool_declarations.is_empty())
            .then(|| self.tool_declarations.clone());

        let mut messages = vec![Message::user(prompt)];
        let mut usage = UsageMetadata::default();
        let mut tools_used = 0;

        for iteration in 1..=self.max_iterations {
            let request = GenerateRequest {
                messages: messages.clone(),
                tools: tools.clone(),
                config: self.config.clone(),
                system: self.system.clone(),
            };

            let response = self.provider.generate(request).await?;
            usage.add(&response.usage);

            let tool_uses = response.tool_uses();
            if tool_uses.is_empty() || tools.is_none() {
                debug!(iteration, tools_used, "agent run completed");
                return Ok(RunOutput {
                    content: response.text(),
                    iterations: iteration,
                    tools_used,
                    usage,
                });
            }

            messages.push(Message::assistant(response.content));

            let mut results = Vec::with_capacity(tool_uses.len());
            for (id, name, input) in tool_uses {
                tools_used += 1;
                debug!(tool = %name, %input, "executing tool");

                let block = match self.tool_executor.execute(id.clone(), name.clone(), input).await {
                    Ok(content) => ContentBlock::ToolResult {
                        tool_use_id: id,
                        content,
                        is_error: false,
                    },
                    Err(error) => {
                        warn!(tool = %name, %error, "tool execution failed");
                        ContentBlock::ToolResult {
                            tool_use_id: id,
                            content: error,
                            is_error: true,
                        }
                    }
                };
                results.push(block);
            }

            messages.push(Message::tool_results(results));
        }

        Err(AgentError::MaxIterationsReached(self.max_iterations))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::llm::{FinishReason, GenerateResponse, LlmError, MessageRole};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replays canned responses and records every request it receives.
    pub(crate) struct ScriptedProvider {
        responses: Mutex<Vec<GenerateResponse>>,
        pub(crate) requests: Arc<Mutex<Vec<GenerateRequest>>>,
    }

    impl ScriptedProvider {
        pub(crate) fn new(mut responses: Vec<GenerateResponse>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| LlmError::InvalidRequest("no more responses".to_string()))
        }
    }

    pub(crate) fn text_turn(text: &str) -> GenerateResponse {
        GenerateResponse {
            id: "msg_text".to_string(),
            content: vec![ContentBlock::Text {
                text: text.to_string(),
            }],
            finish_reason: FinishReason::EndTurn,
            usage: UsageMetadata::new(10, 5),
        }
    }

    pub(crate) fn tool_turn(id: &str, name: &str, input: Value) -> GenerateResponse {
        GenerateResponse {
            id: "msg_tool".to_string(),
            content: vec![ContentBlock::ToolUse {
                id: id.to_string(),
                name: name.to_string(),
                input,
            }],
            finish_reason: FinishReason::ToolUse,
            usage: UsageMetadata::new(20, 8),
        }
    }

    struct EchoExecutor;

    #[async_trait]
    impl ToolExecutor for EchoExecutor {
        async fn execute(
            &self,
            _tool_use_id: String,
            name: String,
            arguments: Value,
        ) -> Result<String, String> {
            if name == "broken" {
                return Err("tool exploded".to_string());
            }
            Ok(json!({ "echo": arguments }).to_string())
        }
    }

    fn declaration(name: &str) -> ToolDeclaration {
        ToolDeclaration {
            name: name.to_string(),
            description: "test tool".to_string(),
            input_schema: json!({"type": "object"}),
        }
    }

    fn runner(provider: ScriptedProvider, tools: Vec<ToolDeclaration>) -> AgentRunner {
        AgentRunner::new(
            Box::new(provider),
            Box::new(EchoExecutor),
            tools,
            GenerationConfig::new(256),
            Some("be brief".to_string()),
        )
    }

    #[tokio::test]
    async fn test_text_only_turn_completes() {
        let provider = ScriptedProvider::new(vec![text_turn("hello")]);
        let requests = provider.requests.clone();
        let output = runner(provider, vec![]).run("hi", true).await.unwrap();

        assert_eq!(output.content, "hello");
        assert_eq!(output.iterations, 1);
        assert_eq!(output.tools_used, 0);

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].tools.is_none());
        assert_eq!(requests[0].system.as_deref(), Some("be brief"));
    }

    #[tokio::test]
    async fn test_tool_call_then_answer() {
        let provider = ScriptedProvider::new(vec![
            tool_turn("call_1", "lookup", json!({"q": "rust"})),
            text_turn("done"),
        ]);
        let requests = provider.requests.clone();
        let output = runner(provider, vec![declaration("lookup")])
            .run("find rust", true)
            .await
            .unwrap();

        assert_eq!(output.content, "done");
        assert_eq!(output.iterations, 2);
        assert_eq!(output.tools_used, 1);
        assert_eq!(output.usage, UsageMetadata::new(30, 13));

        let requests = requests.lock().unwrap();
        let second = &requests[1].messages;
        assert_eq!(second.len(), 3);
        assert_eq!(second[1].role, MessageRole::Assistant);
        assert_eq!(second[2].role, MessageRole::Tool);
        match &second[2].content[0] {
            ContentBlock::ToolResult {
                tool_use_id,
                is_error,
                ..
            } => {
                assert_eq!(tool_use_id, "call_1");
                assert!(!is_error);
            }
            other => panic!("expected tool result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_tool_is_reported_to_model() {
        let provider = ScriptedProvider::new(vec![
            tool_turn("call_1", "broken", json!({})),
            text_turn("sorry"),
        ]);
        let requests = provider.requests.clone();
        let output = runner(provider, vec![declaration("broken")])
            .run("try it", true)
            .await
            .unwrap();

        assert_eq!(output.content, "sorry");
        let requests = requests.lock().unwrap();
        assert!(matches!(
            &requests[1].messages[2].content[0],
            ContentBlock::ToolResult { is_error: true, content, .. } if content == "tool exploded"
        ));
    }

    #[tokio::test]
    async fn test_tools_withheld_when_disabled() {
        let provider = ScriptedProvider::new(vec![text_turn("plain")]);
        let requests = provider.requests.clone();
        runner(provider, vec![declaration("lookup")])
            .run("hi", false)
            .await
            .unwrap();

        assert!(requests.lock().unwrap()[0].tools.is_none());
    }

    #[tokio::test]
    async fn test_max_iterations() {
        let provider = ScriptedProvider::new(vec![
            tool_turn("a", "lookup", json!({})),
            tool_turn("b", "lookup", json!({})),
            tool_turn("c", "lookup", json!({})),
        ]);
        let err = runner(provider, vec![declaration("lookup")])
            .with_max_iterations(2)
            .run("loop", true)
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::MaxIterationsReached(2)));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let err = runner(ScriptedProvider::new(vec![]), vec![])
            .run("hi", true)
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Llm(_)));
    }

    #[test]
    fn test_metadata_keys() {
        let output = RunOutput {
            content: String::new(),
            iterations: 2,
            tools_used: 1,
            usage: UsageMetadata::new(30, 13),
        };
        let metadata = output.metadata(AgentKind::Search, "claude-haiku-4-5@20251001");

        assert_eq!(metadata["agent"], "search");
        assert_eq!(metadata["model"], "claude-haiku-4-5@20251001");
        assert_eq!(metadata["iterations"], 2);
        assert_eq!(metadata["tools_used"], 1);
        assert_eq!(metadata["input_tokens"], 30);
        assert_eq!(metadata["output_tokens"], 13);
    }
}
