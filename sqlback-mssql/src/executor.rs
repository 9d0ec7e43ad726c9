//! SQL Server backup executor.

use std::time::Duration;

use async_trait::async_trait;
use sqlback_core::backup::BackupProperties;
use sqlback_core::executor::{BackupExecutor, ExecutorError};
use tiberius::ToSql;
use tokio::time::timeout;
use tracing::debug;

use crate::config::MssqlConfig;
use crate::error::{MssqlError, MssqlResult};
use crate::factory::{ConnectionFactory, TcpConnectionFactory};

/// Issues the two backup commands against SQL Server.
///
/// Every call opens its own connection through the injected factory and
/// drops it on all exit paths. Driver errors never escape this adapter:
/// they are converted into [`ExecutorError`] at the trait boundary.
pub struct MssqlExecutor<F = TcpConnectionFactory> {
    config: MssqlConfig,
    factory: F,
}

impl MssqlExecutor {
    /// Create an executor that dials the server over TCP.
    pub fn new(config: MssqlConfig) -> Self {
        Self::with_factory(config, TcpConnectionFactory)
    }
}

impl<F: ConnectionFactory> MssqlExecutor<F> {
    /// Create an executor with a custom connection factory.
    pub fn with_factory(config: MssqlConfig, factory: F) -> Self {
        Self { config, factory }
    }

    /// The configuration this executor connects with.
    pub fn config(&self) -> &MssqlConfig {
        &self.config
    }

    /// Connectivity probe: opens a connection and runs `SELECT 1`.
    pub async fn ping(&self) -> MssqlResult<()> {
        let mut client = self.factory.connect(&self.config).await?;
        client.simple_query("SELECT 1").await?.into_results().await?;
        Ok(())
    }

    /// Open a connection and run one statement with bound parameters,
    /// bounded by the backup command timeout.
    async fn execute(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
        command_timeout_secs: u32,
    ) -> MssqlResult<()> {
        let mut client = self.factory.connect(&self.config).await?;
        debug!(sql = %sql, "executing statement");

        let command_timeout = Duration::from_secs(u64::from(command_timeout_secs));
        timeout(command_timeout, client.execute(sql, params))
            .await
            .map_err(|_| MssqlError::Timeout(command_timeout.as_millis() as u64))??;
        Ok(())
    }
}

#[async_trait]
impl<F: ConnectionFactory> BackupExecutor for MssqlExecutor<F> {
    async fn ensure_backup_path(&self, backup: &BackupProperties) -> Result<(), ExecutorError> {
        self.execute(
            "EXEC master.dbo.xp_create_subdir @P1",
            &[&backup.path_parameters.path],
            backup.command_timeout_secs,
        )
        .await
        .map_err(ExecutorError::from)
    }

    async fn run_backup(&self, backup: &BackupProperties) -> Result<(), ExecutorError> {
        let sql = format!(
            "BACKUP DATABASE [{}] TO DISK = @P1 WITH NAME = @P2, DESCRIPTION = @P3",
            quote_identifier(&backup.database_name)
        );
        self.execute(
            &sql,
            &[
                &backup.execute_parameters.location,
                &backup.execute_parameters.name,
                &backup.execute_parameters.description,
            ],
            backup.command_timeout_secs,
        )
        .await
        .map_err(ExecutorError::from)
    }
}

impl From<MssqlError> for ExecutorError {
    fn from(err: MssqlError) -> Self {
        if err.is_connection_error() {
            ExecutorError::connection(err.to_string())
        } else {
            ExecutorError::command(err.to_string())
        }
    }
}

/// Escape closing brackets so the database name stays inside its
/// `[quoted]` identifier.
fn quote_identifier(name: &str) -> String {
    name.replace(']', "]]")
}

#[cfg(test)]
mod tests {
    use sqlback_core::parser::parse;

    use super::*;

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("PoohBear"), "PoohBear");
        assert_eq!(quote_identifier("odd]name"), "odd]]name");
    }

    #[test]
    fn test_executor_error_mapping() {
        let err: ExecutorError = MssqlError::connection("refused").into();
        assert!(matches!(err, ExecutorError::Connection(_)));

        let err: ExecutorError = MssqlError::config("bad").into();
        assert!(matches!(err, ExecutorError::Command(_)));

        let err: ExecutorError = MssqlError::Timeout(1000).into();
        assert!(matches!(err, ExecutorError::Command(_)));
    }

    #[test]
    fn test_executor_exposes_its_config() {
        let props = parse("Server=localhost;Database=mydb;User Id=sa;Password=p;");
        let config = MssqlConfig::from_properties(&props).unwrap();
        let executor = MssqlExecutor::new(config);
        assert_eq!(executor.config().database, "mydb");
    }
}
