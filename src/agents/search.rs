use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::error;

use super::runner::AgentRunner;
use super::{Agent, AgentConfig, AgentKind, AgentOutcome};
use crate::llm::{FunctionRegistry, LlmProvider};
use crate::news::{Headline, NewsService};

const SYSTEM_PROMPT: &str = "You are a research assistant with access to live news feeds. \
Use the search_news and top_headlines tools to gather current information, then write a \
well-organized summary of the key findings. Cite the sources you relied on by name.";

const CAPABILITIES: [&str; 4] = [
    "web_search",
    "news_search",
    "top_headlines",
    "summarization",
];

const DEFAULT_TOOL_LIMIT: usize = 5;
const MAX_TOOL_LIMIT: usize = 10;

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchNewsArgs {
    /// Free-text search query
    query: String,
    /// Maximum number of results (1-10, default 5)
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct TopHeadlinesArgs {
    /// One of: general, world, nation, business, technology, entertainment, sports, science, health
    #[serde(default)]
    category: Option<String>,
    /// One of: US, UK, AU, CA, IN
    #[serde(default)]
    country: Option<String>,
    /// Maximum number of results (1-10, default 5)
    #[serde(default)]
    limit: Option<usize>,
}

fn tool_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(DEFAULT_TOOL_LIMIT)
        .clamp(1, MAX_TOOL_LIMIT)
}

/// Tools backed by the news pipeline.
pub fn news_tools(news: NewsService) -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();

    let search = news.clone();
    registry.register_tool(
        "search_news",
        "Search recent news articles matching a query",
        move |args: SearchNewsArgs| {
            let news = search.clone();
            async move {
                let articles = news
                    .search(&args.query, tool_limit(args.limit))
                    .await
                    .map_err(|e| e.to_string())?;
                Ok::<_, String>(articles.iter().map(Headline::from).collect::<Vec<_>>())
            }
        },
    );

    registry.register_tool(
        "top_headlines",
        "Latest headlines for a news category and country",
        move |args: TopHeadlinesArgs| {
            let news = news.clone();
            async move {
                let category = args.category.unwrap_or_else(|| "general".to_string());
                let country = args.country.unwrap_or_else(|| "US".to_string());
                let articles = news
                    .fetch_articles(&category, &country, tool_limit(args.limit))
                    .await
                    .map_err(|e| e.to_string())?;
                Ok::<_, String>(articles.iter().map(Headline::from).collect::<Vec<_>>())
            }
        },
    );

    registry
}

/// Research agent that consults the news feeds before answering.
pub struct SearchAgent {
    runner: AgentRunner,
    model: String,
}

impl SearchAgent {
    pub fn new(
        provider: Box<dyn LlmProvider>,
        model: impl Into<String>,
        news: NewsService,
        config: &AgentConfig,
    ) -> Self {
        let tools = news_tools(news);
        let declarations = tools.declarations();
        let runner = AgentRunner::new(
            provider,
            Box::new(tools),
            declarations,
            config.generation_config().with_temperature(0.2),
            Some(SYSTEM_PROMPT.to_string()),
        )
        .with_max_iterations(config.max_iterations);

        Self {
            runner,
            model: model.into(),
        }
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.runner.tool_names()
    }
}

#[async_trait]
impl Agent for SearchAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Search
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
                error!(agent = %self.kind(), error = %e, "search agent failed");
                AgentOutcome::failed(e.to_string(), Default::default())
            }
        }
    }
}
