//! AI agents behind the chat and search endpoints.
//!
//! An `Agent` turns a prompt into an `AgentOutcome`. Agents are built by an
//! `AgentFactory` and cached by the `AgentGateway`, one instance per kind.

pub mod chat;
pub mod config;
pub mod factory;
pub mod gateway;
pub mod runner;
pub mod search;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm::LlmError;
use crate::news::NewsError;

pub use chat::ChatAgent;
pub use config::AgentConfig;
pub use factory::VertexAgentFactory;
pub use gateway::AgentGateway;
pub use search::SearchAgent;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("unknown agent type '{0}', expected 'chat' or 'search'")]
    UnknownKind(String),

    #[error("agent backend not configured: {0}")]
    NotConfigured(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("news service error: {0}")]
    News(#[from] NewsError),

    #[error("maximum iterations reached ({0})")]
    MaxIterationsReached(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Chat,
    Search,
}

impl AgentKind {
    pub const ALL: [AgentKind; 2] = [AgentKind::Chat, AgentKind::Search];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Chat => "chat",
            AgentKind::Search => "search",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(AgentKind::Chat),
            "search" => Ok(AgentKind::Search),
            other => Err(AgentError::UnknownKind(other.to_string())),
        }
    }
}

/// Result of one `execute` call. Failures inside the agent are reported
/// here rather than as an `Err`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentOutcome {
    pub success: bool,
    pub content: String,
    pub metadata: Map<String, Value>,
    pub error: Option<String>,
}

impl AgentOutcome {
    pub fn completed(content: String, metadata: Map<String, Value>) -> Self {
        Self {
            success: true,
            content,
            metadata,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            success: false,
            content: String::new(),
            metadata,
            error: Some(error.into()),
        }
    }

    /// `metadata["tools_used"]` as a count, 0 when absent.
    pub fn tools_used(&self) -> u64 {
        self.metadata
            .get("tools_used")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }
}

#[async_trait]
pub trait Agent: Send + Sync {
    fn kind(&self) -> AgentKind;

    fn capabilities(&self) -> Vec<String>;

    async fn execute(&self, prompt: &str, use_tools: bool) -> AgentOutcome;
}

#[async_trait]
pub trait AgentFactory: Send + Sync {
    async fn build(&self, kind: AgentKind) -> Result<Arc<dyn Agent>, AgentError>;
}
