//! Git operations
//!
//! Stages, commits and pushes the site directory. Every command runs with the
//! site root as its working directory; the process's own current directory is
//! never changed.

use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::publish::redact_token;
use crate::error::GitError;
use crate::tools::{self, get_tool_path};

/// Client for git operations in one working directory
pub struct GitClient {
    working_dir: PathBuf,
    program: String,
    /// Masked out of anything logged or returned in errors
    secret: Option<String>,
}

impl GitClient {
    /// Create a git client for a specific directory, using `GIT_BIN` or `git` from PATH
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self::with_program(get_tool_path(tools::tools::GIT), path)
    }

    pub fn with_program(program: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: path.into(),
            program: program.into(),
            secret: None,
        }
    }

    /// Builder: redact `secret` from logs and errors
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Stage paths for commit
    pub async fn add(&self, paths: &[&str]) -> Result<(), GitError> {
        let mut args = vec!["add"];
        args.extend_from_slice(paths);
        self.run("add", &args).await.map(|_| ())
    }

    /// Create a commit
    pub async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run("commit", &["commit", "-m", message])
            .await
            .map(|_| ())
    }

    /// Push `branch` to an explicit remote URL
    pub async fn push_to(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        info!("Pushing {} to {}", branch, self.redact(remote));
        self.run("push", &["push", remote, branch]).await.map(|_| ())
    }

    async fn run(&self, subcommand: &str, args: &[&str]) -> Result<String, GitError> {
        debug!(
            "git {} (in {})",
            self.redact(&args.join(" ")),
            self.working_dir.display()
        );

        let program = tools::require(&self.program).map_err(|e| GitError::Spawn {
            subcommand: subcommand.to_string(),
            message: e.to_string(),
        })?;

        let output = Command::new(&program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .await
            .map_err(|e| GitError::Spawn {
                subcommand: subcommand.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            // `git commit` with nothing staged reports on stdout
            let detail = if stderr.trim().is_empty() {
                stdout.trim()
            } else {
                stderr.trim()
            };
            return Err(GitError::CommandFailed {
                subcommand: subcommand.to_string(),
                stderr: self.redact(detail),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn redact(&self, text: &str) -> String {
        match &self.secret {
            Some(secret) => redact_token(text, secret),
            None => text.to_string(),
        }
    }
}
