//! Global blog configuration.

use serde::{Deserialize, Serialize};

use super::deploy::DeployConfig;
use super::generator::GeneratorConfig;
use super::site::{DependenciesConfig, SiteConfig};

/// Global blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogConfig {
    /// Topic of the generated post
    #[serde(default = "default_topic")]
    pub topic: String,

    /// Site layout
    #[serde(default)]
    pub site: SiteConfig,

    /// Dependency installation
    #[serde(default)]
    pub dependencies: DependenciesConfig,

    /// Language model settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Git remote settings
    #[serde(default)]
    pub deploy: DeployConfig,
}

fn default_topic() -> String {
    "Latest AI Trends in 2025".to_string()
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            site: SiteConfig::default(),
            dependencies: DependenciesConfig::default(),
            generator: GeneratorConfig::default(),
            deploy: DeployConfig::default(),
        }
    }
}
