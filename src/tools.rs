//! Runtime tool path resolution
//!
//! For each external tool (e.g., `jekyll`) we check for an environment variable
//! `{TOOL}_BIN` (e.g., `JEKYLL_BIN`) and fall back to PATH-based invocation if
//! it is not set. This lets a wrapper pin exact tool versions while plain
//! installs keep working.
//!
//! ```rust,ignore
//! use crate::tools::{get_tool_path, tools};
//! use tokio::process::Command;
//!
//! let git = get_tool_path(tools::GIT);
//! Command::new(&git).args(["status"]).status().await?;
//! ```

use std::env;
use std::path::PathBuf;

use crate::error::CommandError;

/// Get the path to an external tool
///
/// Returns the value of `{TOOL}_BIN` if set, otherwise the tool name itself.
pub fn get_tool_path(tool: &str) -> String {
    let env_var = format!("{}_BIN", tool.to_uppercase());
    env::var(&env_var).unwrap_or_else(|_| tool.to_string())
}

/// Locate a program, failing with a readable error when it is not installed
pub fn require(program: &str) -> Result<PathBuf, CommandError> {
    which::which(program).map_err(|_| CommandError::NotFound {
        program: program.to_string(),
    })
}

/// Common tool names
pub mod tools {
    pub const PIP: &str = "pip";
    pub const JEKYLL: &str = "jekyll";
    pub const GIT: &str = "git";
}
