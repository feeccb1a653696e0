//! Publish service - orchestrates the publish run
//!
//! Runs install, scaffold, generate, save and deploy in order and stops at
//! the first failure.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::{BlogConfig, Credentials};
use crate::domain::post::article_prompt;
use crate::domain::publish::{redact_token, remote_url};
use crate::domain::{Post, PublishPhase, PublishStep, StepResult};
use crate::error::PublishError;
use crate::infrastructure::{ChatClient, GitClient, JekyllSite, PackageInstaller};
use crate::ui;

/// State carried between steps of one run
#[derive(Debug, Default)]
struct PublishRun {
    post: Option<Post>,
    saved_path: Option<PathBuf>,
}

/// Service for orchestrating a publish run
pub struct PublishService {
    config: BlogConfig,
    credentials: Credentials,
    installer: PackageInstaller,
    site: JekyllSite,
    chat: ChatClient,
    git: GitClient,
}

impl PublishService {
    /// Create a publish service from validated config and resolved credentials
    pub fn new(config: BlogConfig, credentials: Credentials) -> Result<Self, PublishError> {
        let installer = PackageInstaller::new(&config.dependencies.requirements);
        let site = JekyllSite::new(&config.site.dir, &config.site.posts_subdir);
        let chat = ChatClient::new(
            &config.generator.api_base,
            &credentials.openai_api_key,
            &config.generator.model,
            config.generator.timeout()?,
        )?;
        let git =
            GitClient::in_dir(&config.site.dir).with_secret(&credentials.github_token);

        Ok(Self {
            config,
            credentials,
            installer,
            site,
            chat,
            git,
        })
    }

    /// Execute every step for a post dated `date`
    pub async fn execute(&self, date: NaiveDate) -> Result<Vec<StepResult>> {
        self.print_header(date);

        let mut run = PublishRun::default();
        let mut results = Vec::new();
        let mut phase = PublishPhase::Pending;
        debug!(?phase, "Publish run starting");

        for step in PublishStep::all() {
            phase = PublishPhase::InProgress(step);
            debug!(?phase, "Phase changed");
            info!("{} Starting: {}", step.emoji(), step.name());

            let start = Instant::now();
            let result = self.execute_step(step, date, &mut run).await;
            let duration = start.elapsed();

            match result {
                Ok(()) => {
                    info!(
                        "{} {} completed in {:.1}s",
                        "✅".green(),
                        step.name(),
                        duration.as_secs_f64()
                    );
                    results.push(StepResult::success(step, duration));
                }
                Err(e) => {
                    let msg = self.failure_message(&e);
                    info!("{} {} failed: {}", "❌".red(), step.name(), msg);
                    results.push(StepResult::failure(step, duration, &msg));
                    phase = PublishPhase::Failed(step);

                    self.print_summary(&results, phase, &run);
                    return Err(e.context(format!("{} failed", step.name())));
                }
            }
        }

        phase = PublishPhase::Completed;
        self.print_summary(&results, phase, &run);

        Ok(results)
    }

    /// Error chain as one line with the push token masked
    fn failure_message(&self, error: &anyhow::Error) -> String {
        redact_token(&format!("{:#}", error), &self.credentials.github_token)
    }

    async fn execute_step(
        &self,
        step: PublishStep,
        date: NaiveDate,
        run: &mut PublishRun,
    ) -> Result<()> {
        match step {
            PublishStep::InstallDependencies => self.step_install().await,
            PublishStep::ScaffoldSite => self.step_scaffold().await,
            PublishStep::GenerateArticle => self.step_generate(date, run).await,
            PublishStep::SaveArticle => self.step_save(run).await,
            PublishStep::Deploy => self.step_deploy().await,
        }
    }

    async fn step_install(&self) -> Result<()> {
        self.installer.install().await?;
        Ok(())
    }

    async fn step_scaffold(&self) -> Result<()> {
        self.site.ensure().await
    }

    async fn step_generate(&self, date: NaiveDate, run: &mut PublishRun) -> Result<()> {
        let prompt = article_prompt(&self.config.generator.prompt_template, &self.config.topic);

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Waiting for {}...", self.config.generator.model));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let body = self.chat.complete(&prompt).await;
        spinner.finish_and_clear();

        let body = body.context("Failed to generate article")?;
        info!("Generated {} characters", body.len());
        run.post = Some(Post::new(&self.config.topic, date, body));
        Ok(())
    }

    async fn step_save(&self, run: &mut PublishRun) -> Result<()> {
        let post = run
            .post
            .as_ref()
            .ok_or_else(|| anyhow!("No article was generated"))?;
        let path = self.site.write_post(post).await?;
        run.saved_path = Some(path);
        Ok(())
    }

    async fn step_deploy(&self) -> Result<()> {
        let deploy = &self.config.deploy;
        let remote = remote_url(&deploy.host, &deploy.repository, &self.credentials.github_token);

        self.git.add(&["."]).await?;
        self.git.commit(&deploy.commit_message).await?;
        self.git.push_to(&remote, &deploy.branch).await?;
        Ok(())
    }

    fn print_header(&self, date: NaiveDate) {
        ui::print_header(&format!("Publish: {}", self.config.topic));
        info!("Date: {}", date.format(crate::domain::post::DATE_FORMAT));
        info!("Site: {}", self.site.root().display());
        info!("Model: {}", self.config.generator.model);
        info!(
            "Remote: {}/{} ({})",
            self.config.deploy.host, self.config.deploy.repository, self.config.deploy.branch
        );
        println!();
    }

    fn print_summary(&self, results: &[StepResult], phase: PublishPhase, run: &PublishRun) {
        println!();
        ui::print_rule();

        match phase {
            PublishPhase::Completed => {
                ui::print_success(&format!("Published: {}", self.config.topic));
                if let Some(path) = &run.saved_path {
                    println!("   {}", path.display());
                }
            }
            PublishPhase::Failed(step) => {
                ui::print_error(&format!("Publish failed at {}", step.name()));
            }
            _ => {}
        }

        println!();
        for result in results {
            ui::print_step_result(result);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::process::Command as StdCommand;

    fn credentials() -> Credentials {
        Credentials {
            openai_api_key: "sk-test".to_string(),
            github_token: "ghp_test".to_string(),
        }
    }

    /// Service with its site at `site_dir`, a no-op installer and an unreachable model API
    fn offline_service(site_dir: &Path) -> PublishService {
        let mut config = BlogConfig::default();
        config.site.dir = site_dir.to_string_lossy().to_string();
        config.generator.api_base = "http://127.0.0.1:9/v1".to_string();
        config.generator.timeout = "2s".to_string();

        let mut service = PublishService::new(config, credentials()).unwrap();
        service.installer = PackageInstaller::with_program("true", "requirements.txt");
        service
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = StdCommand::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn test_install_failure_stops_before_scaffold() {
        let dir = tempfile::tempdir().unwrap();
        let site_dir = dir.path().join("blog");
        let mut service = offline_service(&site_dir);
        service.installer = PackageInstaller::with_program("false", "requirements.txt");

        let err = service.execute(date()).await.unwrap_err();
        assert_eq!(err.to_string(), "Install Dependencies failed");
        assert!(!site_dir.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_generation_failure_stops_before_save_and_deploy() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let site_dir = dir.path().join("blog");
        std::fs::create_dir(&site_dir).unwrap();

        let marker = dir.path().join("git-invoked");
        let fake_git = dir.path().join("fake-git");
        std::fs::write(
            &fake_git,
            format!("#!/bin/sh\ntouch \"{}\"\n", marker.display()),
        )
        .unwrap();
        std::fs::set_permissions(&fake_git, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut service = offline_service(&site_dir);
        service.git = GitClient::with_program(fake_git.to_string_lossy(), &site_dir);

        let err = service.execute(date()).await.unwrap_err();
        assert_eq!(err.to_string(), "Generate Article failed");

        let posts: Vec<_> = std::fs::read_dir(site_dir.join("_posts")).unwrap().collect();
        assert!(posts.is_empty());
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_deploy_commits_and_redacts_token_on_push_failure() {
        if which::which("git").is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let site_dir = dir.path().join("blog");
        std::fs::create_dir(&site_dir).unwrap();
        git(&site_dir, &["init", "-q"]);
        git(&site_dir, &["config", "user.name", "Autoblog Test"]);
        git(&site_dir, &["config", "user.email", "autoblog@example.com"]);
        std::fs::write(site_dir.join("index.md"), "hello").unwrap();

        let mut config = BlogConfig::default();
        config.site.dir = site_dir.to_string_lossy().to_string();
        config.deploy.host = "127.0.0.1:9".to_string();
        config.deploy.repository = "no-such-owner/no-such-repo".to_string();
        let service = PublishService::new(config, credentials()).unwrap();

        let err = service.step_deploy().await.unwrap_err();
        let message = service.failure_message(&err);
        assert!(message.contains("git push failed"), "{message}");
        assert!(!message.contains("ghp_test"));
        assert!(!format!("{:#}", err).contains("ghp_test"));

        let log = StdCommand::new("git")
            .args(["log", "--format=%s"])
            .current_dir(&site_dir)
            .output()
            .unwrap();
        assert_eq!(
            String::from_utf8_lossy(&log.stdout).trim(),
            "Auto-generated blog post"
        );
    }

    #[test]
    fn test_service_creation() {
        let service = PublishService::new(BlogConfig::default(), credentials()).unwrap();
        assert_eq!(service.site.root(), std::path::Path::new("my_ai_blog"));
    }

    #[test]
    fn test_service_rejects_bad_timeout() {
        let mut config = BlogConfig::default();
        config.generator.timeout = "whenever".to_string();
        assert!(matches!(
            PublishService::new(config, credentials()),
            Err(PublishError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_save_without_article_fails() {
        let service = PublishService::new(BlogConfig::default(), credentials()).unwrap();
        let mut run = PublishRun::default();
        let err = service.step_save(&mut run).await.unwrap_err();
        assert!(err.to_string().contains("No article"));
        assert!(run.saved_path.is_none());
    }

    #[tokio::test]
    async fn test_save_writes_generated_post() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BlogConfig::default();
        config.site.dir = dir.path().to_string_lossy().to_string();
        let service = PublishService::new(config, credentials()).unwrap();
        service.site.ensure().await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut run = PublishRun {
            post: Some(Post::new("Latest AI Trends in 2025", date, "Generated.")),
            saved_path: None,
        };
        service.step_save(&mut run).await.unwrap();

        let path = run.saved_path.unwrap();
        assert!(path.ends_with("_posts/2025-06-01-Latest-AI-Trends-in-2025.md"));
        assert!(std::fs::read_to_string(path).unwrap().ends_with("Generated."));
    }
}
