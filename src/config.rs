//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::agents::config::AgentConfig;
use crate::llm::ClaudeModel;
use crate::news::catalog::GOOGLE_NEWS_RSS;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_GCP_LOCATION: &str = "us-central1";
const DEFAULT_MAX_TOKENS: u32 = 2048;
const DEFAULT_MAX_ITERATIONS: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_name: String,
    pub bind_addr: SocketAddr,
    pub news_feed_base_url: String,
    pub news_fetch_timeout: Duration,
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup. Empty values count
    /// as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database_url = require("DATABASE_URL")?;
        let db_name = require("DB_NAME")?;

        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), || {
            DEFAULT_BIND_ADDR.parse().map_err(|e: std::net::AddrParseError| e.to_string())
        })?;

        let timeout_secs = parse_or("NEWS_FETCH_TIMEOUT_SECS", get("NEWS_FETCH_TIMEOUT_SECS"), || {
            Ok(DEFAULT_FETCH_TIMEOUT_SECS)
        })?;

        let model = parse_or("AGENT_MODEL", get("AGENT_MODEL"), || Ok(ClaudeModel::Haiku45))?;
        let max_tokens =
            parse_or("AGENT_MAX_TOKENS", get("AGENT_MAX_TOKENS"), || Ok(DEFAULT_MAX_TOKENS))?;
        let max_iterations = parse_or("AGENT_MAX_ITERATIONS", get("AGENT_MAX_ITERATIONS"), || {
            Ok(DEFAULT_MAX_ITERATIONS)
        })?;

        Ok(Self {
            database_url,
            db_name,
            bind_addr,
            news_feed_base_url: get("NEWS_FEED_BASE_URL")
                .unwrap_or_else(|| GOOGLE_NEWS_RSS.to_string()),
            news_fetch_timeout: Duration::from_secs(timeout_secs),
            agent: AgentConfig {
                project_id: get("GCP_PROJECT_ID"),
                location: get("GCP_LOCATION").unwrap_or_else(|| DEFAULT_GCP_LOCATION.to_string()),
                model,
                max_tokens,
                max_iterations,
            },
        })
    }
}

fn parse_or<T, D>(key: &'static str, raw: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Result<T, String>,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
        None => default().map_err(|reason| ConfigError::Invalid {
            key,
            value: String::new(),
            reason,
        }),
    }
}
