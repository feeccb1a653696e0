//! # Blog Configuration
//!
//! A single optional YAML file (`autoblog.yaml` by default). Every field has
//! a default, so a missing file or an empty one yields a working setup.
//!
//! Secrets are never read from the file; they come from the environment
//! (optionally seeded from `.env`) via [`Credentials::from_env`].
//!
//! ## Example
//!
//! ```rust,ignore
//! let config = BlogConfig::load(Path::new("autoblog.yaml"))?;
//! println!("Posts go to {}/{}", config.site.dir, config.site.posts_subdir);
//! ```

mod deploy;
mod generator;
mod global;
mod site;

pub use global::BlogConfig;

use std::path::Path;
use tracing::debug;

use crate::domain::post::TOPIC_PLACEHOLDER;
use crate::error::ConfigError;

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "autoblog.yaml";

/// Environment variable holding the language model API key
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the Git host access token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_ACCESS_TOKEN";

impl BlogConfig {
    /// Load config from a YAML file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        let required = [
            ("topic", &self.topic),
            ("site.dir", &self.site.dir),
            ("site.posts_subdir", &self.site.posts_subdir),
            ("generator.model", &self.generator.model),
            ("deploy.repository", &self.deploy.repository),
            ("deploy.branch", &self.deploy.branch),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ConfigError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        if !self.generator.prompt_template.contains(TOPIC_PLACEHOLDER) {
            errors.push(ConfigError::InvalidValue {
                field: "generator.prompt_template".to_string(),
                value: format!("missing {} placeholder", TOPIC_PLACEHOLDER),
            });
        }

        if let Err(e) = self.generator.timeout() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Secrets required for a publish run
#[derive(Clone)]
pub struct Credentials {
    pub openai_api_key: String,
    pub github_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("openai_api_key", &"***")
            .field("github_token", &"***")
            .finish()
    }
}

impl Credentials {
    /// Read both credentials from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read both credentials through `lookup`; empty values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingCredential {
                    var: var.to_string(),
                })
        };

        Ok(Self {
            openai_api_key: require(OPENAI_API_KEY_VAR)?,
            github_token: require(GITHUB_TOKEN_VAR)?,
        })
    }
}
