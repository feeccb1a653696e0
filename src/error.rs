//! Centralized error types for autoblog
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for publishing operations
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not set. Please set the {var} environment variable.")]
    MissingCredential { var: String },

    #[error("Required configuration missing: {field}")]
    MissingField { field: String },

    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },
}

/// External command errors
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{program} not found in PATH")]
    NotFound { program: String },

    #[error("Failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("{command} exited with {status}")]
    Failed { command: String, status: String },
}

/// Language model errors
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Completion request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode completion response: {message}")]
    Decode { message: String },

    #[error("Completion response contained no choices")]
    EmptyResponse,
}

/// Git operation errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git {subcommand}: {message}")]
    Spawn { subcommand: String, message: String },

    #[error("git {subcommand} failed: {stderr}")]
    CommandFailed { subcommand: String, stderr: String },
}
