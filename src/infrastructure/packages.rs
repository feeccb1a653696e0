//! Dependency installation via pip

use std::path::PathBuf;
use tokio::process::Command;
use tracing::info;

use crate::error::CommandError;
use crate::tools::{self, get_tool_path};

/// Runs `pip install -r <requirements>`
pub struct PackageInstaller {
    program: String,
    requirements: PathBuf,
}

impl PackageInstaller {
    /// Installer using `PIP_BIN` or `pip` from PATH
    pub fn new(requirements: impl Into<PathBuf>) -> Self {
        Self::with_program(get_tool_path(tools::tools::PIP), requirements)
    }

    pub fn with_program(program: impl Into<String>, requirements: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            requirements: requirements.into(),
        }
    }

    pub async fn install(&self) -> Result<(), CommandError> {
        let requirements = self.requirements.to_string_lossy();
        info!("Installing dependencies from {}", requirements);

        let program = tools::require(&self.program)?;

        let status = Command::new(&program)
            .args(["install", "-r", requirements.as_ref()])
            .status()
            .await
            .map_err(|e| CommandError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(CommandError::Failed {
                command: format!("{} install -r {}", self.program, requirements),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_install_success() {
        let installer = PackageInstaller::with_program("true", "requirements.txt");
        assert!(installer.install().await.is_ok());
    }

    #[tokio::test]
    async fn test_install_failure_reports_command() {
        let installer = PackageInstaller::with_program("false", "requirements.txt");
        let err = installer.install().await.unwrap_err();
        match err {
            CommandError::Failed { command, .. } => {
                assert_eq!(command, "false install -r requirements.txt")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_install_missing_program() {
        let installer =
            PackageInstaller::with_program("autoblog-no-such-pip", "requirements.txt");
        let err = installer.install().await.unwrap_err();
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
