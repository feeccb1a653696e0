//! Publish workflow domain types
//!
//! Defines the publish run as a fixed sequence of steps.

use std::time::Duration;

/// Individual steps in a publish run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    /// Install dependencies from the requirements file
    InstallDependencies,
    /// Create the Jekyll site if missing
    ScaffoldSite,
    /// Ask the language model for the article
    GenerateArticle,
    /// Write the post into the site
    SaveArticle,
    /// Commit and push the site
    Deploy,
}

impl PublishStep {
    /// All steps in execution order
    pub fn all() -> [PublishStep; 5] {
        [
            Self::InstallDependencies,
            Self::ScaffoldSite,
            Self::GenerateArticle,
            Self::SaveArticle,
            Self::Deploy,
        ]
    }

    /// Get human-readable name for the step
    pub fn name(&self) -> &'static str {
        match self {
            Self::InstallDependencies => "Install Dependencies",
            Self::ScaffoldSite => "Scaffold Site",
            Self::GenerateArticle => "Generate Article",
            Self::SaveArticle => "Save Article",
            Self::Deploy => "Deploy",
        }
    }

    /// Get emoji for the step
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::InstallDependencies => "📦",
            Self::ScaffoldSite => "🏗️",
            Self::GenerateArticle => "🤖",
            Self::SaveArticle => "📝",
            Self::Deploy => "🚀",
        }
    }
}

/// Current phase of a publish run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishPhase {
    Pending,
    InProgress(PublishStep),
    Completed,
    Failed(PublishStep),
}

/// Result of a publish step execution
#[derive(Debug)]
pub struct StepResult {
    pub step: PublishStep,
    pub success: bool,
    pub duration: Duration,
    pub message: Option<String>,
}

impl StepResult {
    pub fn success(step: PublishStep, duration: Duration) -> Self {
        Self {
            step,
            success: true,
            duration,
            message: None,
        }
    }

    pub fn failure(step: PublishStep, duration: Duration, message: impl Into<String>) -> Self {
        Self {
            step,
            success: false,
            duration,
            message: Some(message.into()),
        }
    }
}

/// HTTPS push URL with the access token as userinfo
pub fn remote_url(host: &str, repository: &str, token: &str) -> String {
    format!("https://{}@{}/{}.git", token, host, repository)
}

/// Mask every occurrence of `token` so the text can be logged
pub fn redact_token(text: &str, token: &str) -> String {
    if token.is_empty() {
        return text.to_string();
    }
    text.replace(token, "***")
}
