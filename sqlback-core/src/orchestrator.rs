//! Backup orchestration state machine.

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::backup::{BackupOptions, BackupProperties};
use crate::clock::Clock;
use crate::executor::BackupExecutor;
use crate::properties::ConnectionProperties;
use crate::result::OperationResult;
use crate::validate::validate;

/// Message appended when the cancellation token fires. Appended at most
/// once per run.
pub const MSG_CANCELLED: &str = "Cancel called on the token.";

/// Informational notice appended after the path fallback kicks in.
pub const MSG_PATH_FALLBACK: &str = "Unable to check the path, reverting to default save path.";

/// Stages of one backup run. The backup parameters ride inside the stage
/// so fallback mutations stay local to the transition that makes them.
/// Terminal state is [`Stage::Done`], reached on success, validation
/// failure, execution failure or cancellation.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Structural and semantic validation; no I/O.
    Validate,
    /// Remote creation of the destination directory.
    EnsurePath(BackupProperties),
    /// The backup statement itself.
    Execute(BackupProperties),
    /// Terminal.
    Done,
}

/// Sequences validate → ensure-path → execute over an injected executor.
///
/// Never returns an error: every outcome, including driver failures and
/// cancellation, resolves into the returned [`OperationResult`].
pub struct BackupOrchestrator<E> {
    executor: E,
}

impl<E: BackupExecutor> BackupOrchestrator<E> {
    /// Wrap an executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Consume the orchestrator, returning the executor.
    pub fn into_executor(self) -> E {
        self.executor
    }

    /// Run one backup without cancellation.
    pub async fn run(
        &self,
        props: &ConnectionProperties,
        options: &BackupOptions,
        clock: &dyn Clock,
    ) -> OperationResult {
        self.drive(props, options, clock, None).await
    }

    /// Run one backup, polling the token before the path stage and after
    /// each awaited stage. Cancellation is cooperative: a request made
    /// mid-command is observed once the in-flight await returns.
    pub async fn run_cancellable(
        &self,
        props: &ConnectionProperties,
        options: &BackupOptions,
        clock: &dyn Clock,
        token: &CancellationToken,
    ) -> OperationResult {
        self.drive(props, options, clock, Some(token)).await
    }

    async fn drive(
        &self,
        props: &ConnectionProperties,
        options: &BackupOptions,
        clock: &dyn Clock,
        token: Option<&CancellationToken>,
    ) -> OperationResult {
        let mut result = OperationResult::new();
        let mut stage = Stage::Validate;

        loop {
            stage = match stage {
                Stage::Validate => {
                    debug!("validating connection properties");
                    let validation = validate(props);
                    if !validation.success {
                        return validation;
                    }
                    let backup = BackupProperties::build(props, options, clock);
                    if cancel_requested(token, &mut result) {
                        Stage::Done
                    } else {
                        Stage::EnsurePath(backup)
                    }
                }
                Stage::EnsurePath(mut backup) => {
                    debug!(path = %backup.path_parameters.path, "ensuring backup path");
                    if let Err(e) = self.executor.ensure_backup_path(&backup).await {
                        warn!(error = %e, "backup path provisioning failed, falling back");
                        result.fail(format!(
                            "Backup path folder check/create failed due to an exception. Exception: {e}"
                        ));
                        backup.set_executor_to_use_file_name_only();
                        result.note(MSG_PATH_FALLBACK);
                    }
                    if cancel_requested(token, &mut result) {
                        Stage::Done
                    } else {
                        Stage::Execute(backup)
                    }
                }
                Stage::Execute(backup) => {
                    debug!(location = %backup.execute_parameters.location, "executing backup");
                    match self.executor.run_backup(&backup).await {
                        Ok(()) => {
                            // The path fallback is informational once the
                            // backup itself lands.
                            result.success = true;
                        }
                        Err(e) => {
                            warn!(error = %e, "backup execution failed");
                            result.fail(format!(
                                "Backing up the database failed due to an exception. Exception: {e}"
                            ));
                        }
                    }
                    cancel_requested(token, &mut result);
                    Stage::Done
                }
                Stage::Done => break,
            };
        }

        result
    }
}

/// Poll the token; on observation flip the result, recording the fixed
/// cancellation message once.
fn cancel_requested(token: Option<&CancellationToken>, result: &mut OperationResult) -> bool {
    let Some(token) = token else {
        return false;
    };
    if !token.is_cancelled() {
        return false;
    }
    if result.messages.iter().any(|m| m == MSG_CANCELLED) {
        result.success = false;
    } else {
        result.fail(MSG_CANCELLED);
    }
    true
}
