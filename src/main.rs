use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

mod cli;
mod config;
mod domain;
mod error;
mod infrastructure;
mod services;
mod tools;
mod ui;

use cli::Cli;
use config::{BlogConfig, Credentials};
use services::PublishService;

#[tokio::main]
async fn main() -> Result<()> {
    // Values already present in the environment take precedence over .env
    let dotenv = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_ansi(false)
        .init();

    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let mut config = BlogConfig::load(Path::new(&cli.config))?;
    if let Some(topic) = cli.topic {
        config.topic = topic;
    }

    config.validate().map_err(|errors| {
        let errors: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::anyhow!("Invalid configuration:\n  {}", errors.join("\n  "))
    })?;

    // Fail before any external call when a credential is missing
    let credentials = Credentials::from_env()?;

    let service = PublishService::new(config, credentials)?;
    let date = chrono::Local::now().date_naive();
    let results = service.execute(date).await?;

    info!("Completed {} steps", results.len());
    Ok(())
}
