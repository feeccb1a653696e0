//! Site layout and dependency install configuration.

use serde::{Deserialize, Serialize};

/// Jekyll site layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site root, scaffolded with `jekyll new` when absent
    #[serde(default = "default_site_dir")]
    pub dir: String,

    /// Posts directory relative to the site root
    #[serde(default = "default_posts_subdir")]
    pub posts_subdir: String,
}

fn default_site_dir() -> String {
    "my_ai_blog".to_string()
}

fn default_posts_subdir() -> String {
    "_posts".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dir: default_site_dir(),
            posts_subdir: default_posts_subdir(),
        }
    }
}

/// Dependency installation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependenciesConfig {
    /// Requirements file passed to `pip install -r`
    #[serde(default = "default_requirements")]
    pub requirements: String,
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

impl Default for DependenciesConfig {
    fn default() -> Self {
        Self {
            requirements: default_requirements(),
        }
    }
}
