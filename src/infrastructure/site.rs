//! Jekyll site on disk
//!
//! Scaffolds the site with `jekyll new` the first time and writes posts into
//! its posts directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::Post;
use crate::error::CommandError;
use crate::tools::{self, get_tool_path};

/// A Jekyll site rooted at `root`
pub struct JekyllSite {
    root: PathBuf,
    posts_subdir: PathBuf,
    program: String,
}

impl JekyllSite {
    /// Site using `JEKYLL_BIN` or `jekyll` from PATH
    pub fn new(root: impl Into<PathBuf>, posts_subdir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            posts_subdir: posts_subdir.into(),
            program: get_tool_path(tools::tools::JEKYLL),
        }
    }

    /// Builder: set the scaffolding program
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn posts_dir(&self) -> PathBuf {
        self.root.join(&self.posts_subdir)
    }

    /// Scaffold the site if the root is missing, then make sure the posts directory exists
    pub async fn ensure(&self) -> Result<()> {
        if self.root.exists() {
            debug!("Site exists at {}", self.root.display());
        } else {
            self.scaffold().await?;
        }

        let posts_dir = self.posts_dir();
        if !posts_dir.exists() {
            info!("Creating {}", posts_dir.display());
            tokio::fs::create_dir_all(&posts_dir)
                .await
                .with_context(|| format!("Failed to create {}", posts_dir.display()))?;
        }

        Ok(())
    }

    async fn scaffold(&self) -> Result<(), CommandError> {
        let program = tools::require(&self.program)?;
        info!("Scaffolding new site at {}", self.root.display());

        let status = Command::new(&program)
            .arg("new")
            .arg(&self.root)
            .status()
            .await
            .map_err(|e| CommandError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: format!("{} new {}", self.program, self.root.display()),
                status: status.to_string(),
            });
        }

        Ok(())
    }

    /// Write the post into the posts directory, replacing any same-named file
    pub async fn write_post(&self, post: &Post) -> Result<PathBuf> {
        let path = self.posts_dir().join(post.filename());
        tokio::fs::write(&path, post.render())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post() -> Post {
        Post::new(
            "Latest AI Trends in 2025",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Body text.",
        )
    }

    #[tokio::test]
    async fn test_existing_site_is_not_rescaffolded() {
        let dir = tempfile::tempdir().unwrap();
        let site = JekyllSite::new(dir.path(), "_posts").with_program("autoblog-no-such-jekyll");

        site.ensure().await.unwrap();
        assert!(dir.path().join("_posts").is_dir());
    }

    #[tokio::test]
    async fn test_missing_scaffolder_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let site = JekyllSite::new(dir.path().join("blog"), "_posts")
            .with_program("autoblog-no-such-jekyll");

        let err = site.ensure().await.unwrap_err();
        let err = err.downcast::<CommandError>().unwrap();
        assert!(matches!(err, CommandError::NotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_scaffold_failure_stops() {
        let dir = tempfile::tempdir().unwrap();
        let site = JekyllSite::new(dir.path().join("blog"), "_posts").with_program("false");

        let err = site.ensure().await.unwrap_err();
        assert!(err.to_string().contains("new"));
        assert!(!dir.path().join("blog").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_scaffold_then_create_posts_dir() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let scaffolder = dir.path().join("fake-jekyll");
        std::fs::write(&scaffolder, "#!/bin/sh\nmkdir -p \"$2\"\n").unwrap();
        std::fs::set_permissions(&scaffolder, std::fs::Permissions::from_mode(0o755)).unwrap();

        let root = dir.path().join("blog");
        let site = JekyllSite::new(&root, "_posts").with_program(scaffolder.to_string_lossy());

        site.ensure().await.unwrap();
        assert!(root.is_dir());
        assert!(root.join("_posts").is_dir());
    }

    #[tokio::test]
    async fn test_write_post() {
        let dir = tempfile::tempdir().unwrap();
        let site = JekyllSite::new(dir.path(), "_posts").with_program("autoblog-no-such-jekyll");
        site.ensure().await.unwrap();

        let path = site.write_post(&post()).await.unwrap();
        assert_eq!(
            path,
            dir.path()
                .join("_posts")
                .join("2025-01-15-Latest-AI-Trends-in-2025.md")
        );

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "---\ntitle: Latest AI Trends in 2025\ndate: 2025-01-15\n---\n\nBody text."
        );
    }

    #[tokio::test]
    async fn test_write_post_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let site = JekyllSite::new(dir.path(), "_posts").with_program("autoblog-no-such-jekyll");
        site.ensure().await.unwrap();

        site.write_post(&post()).await.unwrap();
        let mut second = post();
        second.body = "Rewritten.".to_string();
        let path = site.write_post(&second).await.unwrap();

        assert!(std::fs::read_to_string(path).unwrap().ends_with("Rewritten."));
    }
}
