//! Infrastructure layer - external I/O adapters
//!
//! This module contains all code that interacts with external systems:
//! - pip (dependency install)
//! - Jekyll site on disk
//! - Chat completion API
//! - Git operations

pub mod git;
pub mod openai;
pub mod packages;
pub mod site;

// Re-export commonly used types
pub use git::GitClient;
pub use openai::ChatClient;
pub use packages::PackageInstaller;
pub use site::JekyllSite;
