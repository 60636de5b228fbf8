use async_trait::async_trait;
use tracing::error;

use super::runner::AgentRunner;
use super::{Agent, AgentConfig, AgentKind, AgentOutcome};
use crate::llm::{FunctionRegistry, LlmProvider};

const SYSTEM_PROMPT: &str = "You are a helpful, knowledgeable assistant. \
Answer clearly and concisely. If you are unsure about something, say so.";

const CAPABILITIES: [&str; 4] = [
    "conversation",
    "question_answering",
    "explanation",
    "writing_assistance",
];

/// General conversation agent. Has no tools.
pub struct ChatAgent {
    runner: AgentRunner,
    model: String,
}

impl ChatAgent {
    pub fn new(provider: Box<dyn LlmProvider>, model: impl Into<String>, config: &AgentConfig) -> Self {
        let runner = AgentRunner::new(
            provider,
            Box::new(FunctionRegistry::new()),
            Vec::new(),
            config.generation_config().with_temperature(0.7),
            Some(SYSTEM_PROMPT.to_string()),
        )
        .with_max_iterations(config.max_iterations);

        Self {
            runner,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Agent for ChatAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Chat
    }

    fn capabilities(&self) -> Vec<String> {
        CAPABILITIES.iter().map(|c| c.to_string()).collect()
    }

    async fn execute(&self, prompt: &str, use_tools: bool) -> AgentOutcome {
        match self.runner.run(prompt, use_tools).await {
            Ok(output) => {
                let metadata = output.metadata(self.kind(), &self.model);
                AgentOutcome::completed(output.content, metadata)
            }
            Err(e) => {
                error!(agent = %self.kind(), error = %e, "chat agent failed");
                AgentOutcome::failed(e.to_string(), Default::default())
            }
        }
    }
}
