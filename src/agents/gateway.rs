//! Agent Gateway: one lazily-built agent per kind, shared by all requests.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use super::{Agent, AgentError, AgentFactory, AgentKind};
use crate::models::{AgentCapabilities, CapabilitiesResponse, ChatResponse, SearchResponse};

pub struct AgentGateway {
    factory: Arc<dyn AgentFactory>,
    chat: OnceCell<Arc<dyn Agent>>,
    search: OnceCell<Arc<dyn Agent>>,
}

/// Prompt sent to the search agent for `POST /search`.
pub fn search_prompt(query: &str) -> String {
    format!(
        "Search for information about: {query}. Provide a comprehensive summary with key findings."
    )
}

impl AgentGateway {
    pub fn new(factory: Arc<dyn AgentFactory>) -> Self {
        Self {
            factory,
            chat: OnceCell::new(),
            search: OnceCell::new(),
        }
    }

    /// The cached agent for `kind`, built on first use. Concurrent first
    /// callers wait on a single construction; a failed construction is not
    /// cached.
    pub async fn agent(&self, kind: AgentKind) -> Result<Arc<dyn Agent>, AgentError> {
        let cell = match kind {
            AgentKind::Chat => &self.chat,
            AgentKind::Search => &self.search,
        };

        let agent = cell
            .get_or_try_init(|| async {
                info!(agent = %kind, "initializing agent");
                self.factory.build(kind).await
            })
            .await?;
        Ok(Arc::clone(agent))
    }

    pub async fn chat(&self, message: &str, kind: AgentKind) -> ChatResponse {
        let agent = match self.agent(kind).await {
            Ok(agent) => agent,
            Err(e) => {
                error!(agent = %kind, error = %e, "agent initialization failed");
                return ChatResponse::failure(kind.as_str(), e.to_string());
            }
        };

        let outcome = agent.execute(message, true).await;
        ChatResponse {
            success: outcome.success,
            response: outcome.content,
            agent_type: kind.as_str().to_string(),
            capabilities: agent.capabilities(),
            metadata: outcome.metadata,
            error: outcome.error,
        }
    }

    /// `max_results` is accepted for API compatibility; the prompt is fixed.
    pub async fn search(&self, query: &str, _max_results: usize) -> SearchResponse {
        let agent = match self.agent(AgentKind::Search).await {
            Ok(agent) => agent,
            Err(e) => {
                error!(error = %e, "search agent initialization failed");
                return SearchResponse::failure(query, Some(e.to_string()));
            }
        };

        let outcome = agent.execute(&search_prompt(query), true).await;
        if !outcome.success {
            return SearchResponse::failure(query, outcome.error);
        }

        let sources_count = outcome.tools_used();
        SearchResponse {
            success: true,
            query: query.to_string(),
            summary: outcome.content,
            search_results: Some(outcome.metadata),
            sources_count,
            error: None,
        }
    }

    /// Capability lists from freshly built agents; the cached ones are not
    /// touched.
    pub async fn capabilities(&self) -> CapabilitiesResponse {
        let listing = async {
            let search = self.factory.build(AgentKind::Search).await?;
            let chat = self.factory.build(AgentKind::Chat).await?;
            Ok::<_, AgentError>(AgentCapabilities {
                search_agent: search.capabilities(),
                chat_agent: chat.capabilities(),
            })
        };

        match listing.await {
            Ok(capabilities) => CapabilitiesResponse {
                success: true,
                capabilities: Some(capabilities),
                error: None,
            },
            Err(e) => {
                error!(error = %e, "capability listing failed");
                CapabilitiesResponse {
                    success: false,
                    capabilities: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
