//! CLI definitions for autoblog
//!
//! A bare invocation runs the whole publish pipeline; every flag is optional.

use clap::Parser;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "autoblog",
    version,
    about = "Generate a blog post with a language model and publish it to a Jekyll site",
    long_about = "Installs dependencies, scaffolds the Jekyll site if needed, generates a post \
                  for the configured topic, writes it to the posts directory and pushes the site.\n\n\
                  Requires OPENAI_API_KEY and GITHUB_ACCESS_TOKEN (a .env file is read if present)."
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to the YAML config file (missing file means defaults)
    #[arg(long, env = "AUTOBLOG_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Override the configured topic
    #[arg(long, env = "AUTOBLOG_TOPIC")]
    pub topic: Option<String>,
}
