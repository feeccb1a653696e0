//! Git remote configuration for publishing the site.

use serde::{Deserialize, Serialize};

/// Where and how the site is pushed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Git host (e.g., "github.com")
    #[serde(default = "default_host")]
    pub host: String,

    /// Repository as `owner/name`
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Branch to push
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_repository() -> String {
    "ALFOTECHNOLOGIES/Freyaz-AI-Blog".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "Auto-generated blog post".to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            repository: default_repository(),
            branch: default_branch(),
            commit_message: default_commit_message(),
        }
    }
}
