// Wire types for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::news::catalog::CatalogEntry;

// Status checks

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

// Agents

fn default_agent_type() -> String {
    "chat".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_agent_type")]
    pub agent_type: String,
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub agent_type: String,
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn failure(agent_type: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: String::new(),
            agent_type: agent_type.into(),
            capabilities: Vec::new(),
            metadata: Map::new(),
            error: Some(error.into()),
        }
    }
}

fn default_max_results() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub summary: String,
    pub search_results: Option<Map<String, Value>>,
    pub sources_count: u64,
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn failure(query: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            query: query.into(),
            summary: String::new(),
            search_results: None,
            sources_count: 0,
            error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCapabilities {
    pub search_agent: Vec<String>,
    pub chat_agent: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CapabilitiesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<AgentCapabilities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// News

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: String,
    pub published: Option<DateTime<Utc>>,
    pub source: String,
    pub image_url: Option<String>,
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

fn default_limit() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsRequest {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsResponse {
    pub success: bool,
    pub articles: Vec<NewsArticle>,
    pub total_count: usize,
    pub category: String,
    pub country: String,
    pub error: Option<String>,
}

impl NewsResponse {
    /// `total_count` is always the length of `articles`.
    pub fn from_articles(request: &NewsRequest, articles: Vec<NewsArticle>) -> Self {
        Self {
            success: true,
            total_count: articles.len(),
            articles,
            category: request.category.clone(),
            country: request.country.clone(),
            error: None,
        }
    }

    pub fn failure(request: &NewsRequest, error: impl Into<String>) -> Self {
        Self {
            success: false,
            articles: Vec::new(),
            total_count: 0,
            category: request.category.clone(),
            country: request.country.clone(),
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CatalogEntry>,
    pub countries: Vec<CatalogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(request.agent_type, "chat");
        assert!(request.context.is_none());
    }

    #[test]
    fn test_search_request_defaults() {
        let request: SearchRequest = serde_json::from_str(r#"{"query":"rust"}"#).unwrap();
        assert_eq!(request.max_results, 5);
    }

    #[test]
    fn test_news_request_defaults() {
        let request: NewsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.category, "general");
        assert_eq!(request.country, "US");
        assert_eq!(request.limit, 20);
    }

    #[test]
    fn test_news_request_rejects_negative_limit() {
        assert!(serde_json::from_str::<NewsRequest>(r#"{"limit":-1}"#).is_err());
    }

    #[test]
    fn test_chat_failure_shape() {
        let value = serde_json::to_value(ChatResponse::failure("chat", "boom")).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "response": "",
                "agent_type": "chat",
                "capabilities": [],
                "metadata": {},
                "error": "boom"
            })
        );
    }

    #[test]
    fn test_news_response_counts_articles() {
        let request: NewsRequest = serde_json::from_str(r#"{"category":"health"}"#).unwrap();
        let response = NewsResponse::from_articles(&request, Vec::new());
        assert!(response.success);
        assert_eq!(response.total_count, 0);
        assert_eq!(response.category, "health");
    }

    #[test]
    fn test_status_check_round_trip() {
        let check = StatusCheck::new("uptime-check");
        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["client_name"], "uptime-check");
        let back: StatusCheck = serde_json::from_value(value).unwrap();
        assert_eq!(back, check);
    }

    #[test]
    fn test_capabilities_failure_omits_capabilities() {
        let response = CapabilitiesResponse {
            success: false,
            capabilities: None,
            error: Some("no credentials".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "error": "no credentials"})
        );
    }
}
