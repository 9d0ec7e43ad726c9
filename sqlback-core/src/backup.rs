//! Backup parameter builder.

use crate::clock::Clock;
use crate::properties::ConnectionProperties;

/// Command timeout applied when the configured timeout is the zero
/// sentinel, meaning "unspecified".
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u32 = 3600;

/// Timestamp layout used in backup file names, second granularity. Two
/// backups of the same database inside one second collide; accepted
/// limitation.
const FILE_NAME_TIMESTAMP: &str = "%Y-%m-%d-%H-%M-%S";

/// Operator-supplied backup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOptions {
    /// Destination directory on the server. Must already end with the
    /// server's path separator; the builder does not insert one.
    pub backup_dir: String,
    /// Command timeout in seconds; 0 means "use the default".
    pub timeout_secs: u32,
}

/// Parameters for the path-provisioning call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParameters {
    /// Directory to create on the server.
    pub path: String,
}

/// Parameters for the backup statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteParameters {
    /// Backup set name (the database name).
    pub name: String,
    /// Destination the `.bak` file is written to.
    pub location: String,
    /// Backup set description.
    pub description: String,
}

/// Everything the executor needs to run one backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupProperties {
    /// Database being backed up.
    pub database_name: String,
    /// Generated `.bak` file name.
    pub backup_file_name: String,
    /// Configured destination directory.
    pub backup_path: String,
    /// Backup set description.
    pub description: String,
    /// Command timeout in seconds for both executor calls.
    pub command_timeout_secs: u32,
    /// Parameter set for the path-provisioning call.
    pub path_parameters: PathParameters,
    /// Parameter set for the backup statement.
    pub execute_parameters: ExecuteParameters,
}

impl BackupProperties {
    /// Derive backup parameters from validated properties, operator
    /// options and the injected clock. Pure apart from the clock read.
    pub fn build(
        props: &ConnectionProperties,
        options: &BackupOptions,
        clock: &dyn Clock,
    ) -> Self {
        let database_name = props.database_name.clone();
        let timestamp = clock.now().format(FILE_NAME_TIMESTAMP);
        let backup_file_name = format!("{database_name}_Full_{timestamp}.bak");
        let backup_path = options.backup_dir.clone();
        let description = format!("Full backup of the `{database_name}` database.");

        let command_timeout_secs = if options.timeout_secs == 0 {
            DEFAULT_COMMAND_TIMEOUT_SECS
        } else {
            options.timeout_secs
        };

        let location = format!("{backup_path}{backup_file_name}");

        Self {
            path_parameters: PathParameters {
                path: backup_path.clone(),
            },
            execute_parameters: ExecuteParameters {
                name: database_name.clone(),
                location,
                description: description.clone(),
            },
            database_name,
            backup_file_name,
            backup_path,
            description,
            command_timeout_secs,
        }
    }

    /// Destination path and file name, concatenated as-is. The configured
    /// path is expected to carry its own trailing separator.
    pub fn backup_path_and_file_name(&self) -> String {
        format!("{}{}", self.backup_path, self.backup_file_name)
    }

    /// Path fallback: rebuild the execution parameters around the bare
    /// file name so the backup lands in the server's default data
    /// directory instead of a possibly-invalid custom path.
    pub fn set_executor_to_use_file_name_only(&mut self) {
        self.execute_parameters = ExecuteParameters {
            name: self.database_name.clone(),
            location: self.backup_file_name.clone(),
            description: self.description.clone(),
        };
    }
}
