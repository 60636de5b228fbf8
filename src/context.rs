use std::sync::Arc;

use crate::agents::{AgentFactory, AgentGateway, VertexAgentFactory};
use crate::config::AppConfig;
use crate::news::{NewsError, NewsService};
use crate::store::StatusStore;

/// Shared state handed to every handler. Built once at start.
pub struct AppContext {
    pub store: Arc<dyn StatusStore>,
    pub news: NewsService,
    pub agents: AgentGateway,
}

impl AppContext {
    pub fn new(store: Arc<dyn StatusStore>, news: NewsService, factory: Arc<dyn AgentFactory>) -> Self {
        Self {
            store,
            news,
            agents: AgentGateway::new(factory),
        }
    }

    /// Production wiring: news feed from config, Vertex-backed agents.
    pub fn from_config(config: &AppConfig, store: Arc<dyn StatusStore>) -> Result<Self, NewsError> {
        let news = NewsService::new(config.news_feed_base_url.clone(), config.news_fetch_timeout)?;
        let factory = Arc::new(VertexAgentFactory::new(config.agent.clone(), news.clone()));
        Ok(Self::new(store, news, factory))
    }
}
