//! Language model configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::post::DEFAULT_PROMPT_TEMPLATE;
use crate::error::ConfigError;

/// Chat completion API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// API base URL, `/chat/completions` is appended
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model name (e.g., "gpt-4")
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout as a human-readable duration (e.g., "120s", "2m")
    #[serde(default = "default_timeout")]
    pub timeout: String,

    /// Prompt template, `{topic}` is replaced with the post topic
    #[serde(default = "default_prompt_template")]
    pub prompt_template: String,
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_timeout() -> String {
    "120s".to_string()
}

fn default_prompt_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            timeout: default_timeout(),
            prompt_template: default_prompt_template(),
        }
    }
}

impl GeneratorConfig {
    /// Parsed request timeout
    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.timeout).map_err(|_| ConfigError::InvalidValue {
            field: "generator.timeout".to_string(),
            value: self.timeout.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_parsing() {
        let mut config = GeneratorConfig::default();
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(120));

        config.timeout = "2m 30s".to_string();
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(150));

        config.timeout = "soon".to_string();
        assert!(matches!(
            config.timeout(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
