//! Executor boundary trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::backup::BackupProperties;

/// Errors surfaced by an executor implementation.
///
/// Driver-level failures are contained at the executor boundary and carried
/// here as text; nothing below this layer propagates past the orchestrator.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Failed to reach or authenticate with the server.
    #[error("connection error: {0}")]
    Connection(String),

    /// The server rejected or aborted a command.
    #[error("command error: {0}")]
    Command(String),
}

impl ExecutorError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a command error.
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command(message.into())
    }
}

/// The two remote operations the backup pipeline needs.
///
/// Implementations own connection acquisition and release per call; each
/// invocation gets its own connection and command for its whole lifetime.
#[async_trait]
pub trait BackupExecutor: Send + Sync {
    /// Create the destination directory on the server.
    async fn ensure_backup_path(&self, backup: &BackupProperties) -> Result<(), ExecutorError>;

    /// Run the backup statement.
    async fn run_backup(&self, backup: &BackupProperties) -> Result<(), ExecutorError>;
}
