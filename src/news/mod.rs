//! News pipeline: catalog → fetch → parse → normalize.
//!
//! `NewsService` is the single entry point. Transport failures are reported
//! as `NewsError`; a feed that arrives but cannot be parsed is an empty
//! result, not an error.

pub mod catalog;
pub mod fetch;
pub mod normalize;
pub mod parse;

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::models::NewsArticle;
use catalog::{feed_url, search_url, GOOGLE_NEWS_RSS};
use fetch::{FeedFetcher, DEFAULT_FETCH_TIMEOUT};
use normalize::normalize_entry;
use parse::parse_feed;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed {url} answered with status {status}")]
    UpstreamStatus { status: u16, url: String },

    #[error("invalid feed url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Compact search hit handed to the search agent's tools.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub url: String,
    pub published: Option<String>,
}

impl From<&NewsArticle> for Headline {
    fn from(article: &NewsArticle) -> Self {
        Headline {
            title: article.title.clone(),
            source: article.source.clone(),
            url: article.url.clone(),
            published: article.published.map(|ts| ts.to_rfc3339()),
        }
    }
}

#[derive(Clone)]
pub struct NewsService {
    fetcher: FeedFetcher,
    base_url: String,
}

impl NewsService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, NewsError> {
        Ok(Self {
            fetcher: FeedFetcher::new(timeout)?,
            base_url: base_url.into(),
        })
    }

    /// Service against the public provider with the default 10s timeout.
    pub fn google_news() -> Result<Self, NewsError> {
        Self::new(GOOGLE_NEWS_RSS, DEFAULT_FETCH_TIMEOUT)
    }

    /// Latest articles for a category/country, at most `limit` of them.
    /// The entry list is cut to `limit` before normalization.
    pub async fn fetch_articles(
        &self,
        category: &str,
        country: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, NewsError> {
        let url = feed_url(&self.base_url, category, country);
        let articles = self
            .collect(&url, category, limit)
            .await
            .inspect_err(|e| error!(%category, %country, error = %e, "news scrape failed"))?;

        info!(%category, %country, count = articles.len(), "news scraped");
        Ok(articles)
    }

    /// Articles matching a free-text query, tagged with category `search`.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<NewsArticle>, NewsError> {
        let url = search_url(&self.base_url, query)?;
        self.collect(url.as_str(), "search", limit)
            .await
            .inspect_err(|e| error!(%query, error = %e, "news search failed"))
    }

    async fn collect(
        &self,
        url: &str,
        category: &str,
        limit: usize,
    ) -> Result<Vec<NewsArticle>, NewsError> {
        let raw = self.fetcher.fetch(url).await?;
        Ok(parse_feed(&raw)
            .into_iter()
            .take(limit)
            .filter_map(|entry| normalize_entry(entry, category))
            .collect())
    }
}
