//! `sqlback backup` command - run a full database backup.

use sqlback_core::clock::SystemClock;
use sqlback_core::prelude::*;
use sqlback_mssql::{MssqlConfig, MssqlExecutor};
use tokio_util::sync::CancellationToken;

use crate::cli::BackupArgs;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the backup command
pub async fn run(args: BackupArgs) -> CliResult<()> {
    output::header("Backup Database");

    let file_config = Config::load_layered(args.config.as_deref())?;
    let connection = args
        .connection
        .or(file_config.connection.string)
        .ok_or_else(|| {
            CliError::Config(
                "no connection string supplied (use --connection or sqlback.toml)".to_string(),
            )
        })?;
    let backup_dir = args.backup_dir.or(file_config.backup.dir).ok_or_else(|| {
        CliError::Config(
            "no backup directory supplied (use --backup-dir or sqlback.toml)".to_string(),
        )
    })?;
    let timeout_secs = args.timeout.unwrap_or(file_config.backup.timeout_secs);

    let props = parse(&connection);
    let validation = validate(&props);
    if !validation.success {
        for message in &validation.messages {
            output::error(message);
        }
        return Err(CliError::Validation(format!(
            "found {} problems with the connection string",
            validation.messages.len()
        )));
    }

    output::kv("Server", &props.server);
    output::kv("Database", &props.database_name);
    output::kv("Backup dir", &backup_dir);
    output::newline();

    let config = MssqlConfig::from_properties(&props).map_err(|e| CliError::Config(e.to_string()))?;
    let executor = MssqlExecutor::new(config);

    output::step(1, 2, "Checking connectivity...");
    executor.ping().await?;

    output::step(2, 2, "Running backup...");
    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let options = BackupOptions {
        backup_dir,
        timeout_secs,
    };
    let orchestrator = BackupOrchestrator::new(executor);
    let outcome = orchestrator
        .run_cancellable(&props, &options, &SystemClock, &token)
        .await;

    output::newline();
    for message in &outcome.messages {
        if outcome.success {
            output::warn(message);
        } else {
            output::error(message);
        }
    }

    if outcome.success {
        output::success("Backup completed.");
        Ok(())
    } else {
        Err(CliError::Backup("backup did not complete".to_string()))
    }
}
