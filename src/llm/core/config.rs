//! Generation configuration parameters

use serde::{Deserialize, Serialize};

/// Parameters for controlling text generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Randomness (0.0-1.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: 2048,
            temperature: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.max_tokens, 2048);
        assert!(config.temperature.is_none());
    }

    #[test]
    fn test_config_serialization_skips_unset() {
        let config = GenerationConfig::new(512).with_temperature(0.3);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"max_tokens\":512"));
        assert!(json.contains("\"temperature\":0.3"));

        let unset = serde_json::to_string(&GenerationConfig::new(512)).unwrap();
        assert_eq!(unset, r#"{"max_tokens":512}"#);
    }
}
