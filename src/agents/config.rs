use crate::llm::{ClaudeModel, GenerationConfig};

/// Settings shared by every agent the factory builds.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// GCP project hosting the model; agents cannot be built without it
    pub project_id: Option<String>,
    pub location: String,
    pub model: ClaudeModel,
    pub max_tokens: u32,
    /// Upper bound on model turns per `execute` call
    pub max_iterations: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: "us-central1".to_string(),
            model: ClaudeModel::Haiku45,
            max_tokens: 2048,
            max_iterations: 5,
        }
    }
}

impl AgentConfig {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.max_tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_uses_max_tokens() {
        let config = AgentConfig {
            max_tokens: 512,
            ..Default::default()
        };
        assert_eq!(config.generation_config().max_tokens, 512);
    }
}
