use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::{Agent, AgentConfig, AgentError, AgentFactory, AgentKind, ChatAgent, SearchAgent};
use crate::llm::ClaudeClient;
use crate::news::NewsService;

/// Builds agents backed by Claude on Vertex AI.
pub struct VertexAgentFactory {
    config: AgentConfig,
    news: NewsService,
}

impl VertexAgentFactory {
    pub fn new(config: AgentConfig, news: NewsService) -> Self {
        Self { config, news }
    }

    fn project_id(&self) -> Result<String, AgentError> {
        self.config
            .project_id
            .clone()
            .ok_or_else(|| AgentError::NotConfigured("GCP_PROJECT_ID is not set".to_string()))
    }
}

#[async_trait]
impl AgentFactory for VertexAgentFactory {
    async fn build(&self, kind: AgentKind) -> Result<Arc<dyn Agent>, AgentError> {
        let project_id = self.project_id()?;
        let model = self.config.model;
        let client =
            ClaudeClient::new(project_id, self.config.location.clone(), model).await?;

        info!(agent = %kind, model = model.as_str(), "agent constructed");

        let agent: Arc<dyn Agent> = match kind {
            AgentKind::Chat => Arc::new(ChatAgent::new(Box::new(client), model.as_str(), &self.config)),
            AgentKind::Search => Arc::new(SearchAgent::new(
                Box::new(client),
                model.as_str(),
                self.news.clone(),
                &self.config,
            )),
        };
        Ok(agent)
    }
}
