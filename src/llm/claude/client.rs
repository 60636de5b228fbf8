//! Claude client implementation

use async_trait::async_trait;
use reqwest::Client;
use std::str::FromStr;
use tracing::debug;

use crate::llm::auth::adc::AuthenticationManager;
use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse},
};

use super::mapper::{from_claude_response, to_claude_request};
use super::types::{ClaudeErrorEnvelope, ClaudeResponse};

/// Claude model identifiers for Vertex AI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaudeModel {
    Sonnet45,
    Haiku45,
}

impl ClaudeModel {
    /// Model identifier string for Vertex AI
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaudeModel::Sonnet45 => "claude-sonnet-4-5@20250929",
            ClaudeModel::Haiku45 => "claude-haiku-4-5@20251001",
        }
    }
}

impl FromStr for ClaudeModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "claude-sonnet-4-5" | "claude-sonnet-4-5@20250929" => Ok(ClaudeModel::Sonnet45),
            "claude-haiku-4-5" | "claude-haiku-4-5@20251001" => Ok(ClaudeModel::Haiku45),
            other => Err(LlmError::InvalidRequest(format!(
                "unsupported model '{}'",
                other
            ))),
        }
    }
}

/// Client for Claude models on Vertex AI
pub struct ClaudeClient {
    http_client: Client,
    auth_manager: AuthenticationManager,
    project_id: String,
    location: String,
    model: ClaudeModel,
}

impl ClaudeClient {
    /// Create a new Claude client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or no Application
    /// Default Credentials are available.
    pub async fn new(
        project_id: String,
        location: String,
        model: ClaudeModel,
    ) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        let auth_manager = AuthenticationManager::new().await?;

        Ok(Self {
            http_client,
            auth_manager,
            project_id,
            location,
            model,
        })
    }

    fn build_endpoint_url(&self) -> String {
        endpoint_url(&self.project_id, &self.location, self.model)
    }
}

fn endpoint_url(project_id: &str, location: &str, model: ClaudeModel) -> String {
    format!(
        "https://{}-aiplatform.googleapis.com/v1/projects/{}/locations/{}/publishers/anthropic/models/{}:rawPredict",
        location,
        project_id,
        location,
        model.as_str()
    )
}

#[async_trait]
impl LlmProvider for ClaudeClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let claude_request = to_claude_request(request);
        let token = self.auth_manager.get_token().await?;

        let url = self.build_endpoint_url();
        debug!(model = self.model.as_str(), "sending rawPredict request");
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .json(&claude_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_str::<ClaudeErrorEnvelope>(&body) {
                return Err(LlmError::ProviderError {
                    code: envelope.error.error_type,
                    message: envelope.error.message,
                });
            }
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ClaudeResponse = serde_json::from_str(&body)?;
        Ok(from_claude_response(parsed))
    }
}
