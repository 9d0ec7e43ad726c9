//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sqlback - SQL Server backup tool
#[derive(Parser, Debug)]
#[command(name = "sqlback")]
#[command(version)]
#[command(about = "Back up SQL Server databases from a connection string", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a full database backup
    Backup(BackupArgs),

    /// Parse and validate a connection string
    Validate(ValidateArgs),

    /// Display version information
    Version,
}

/// Arguments for the `backup` command
#[derive(Args, Debug)]
pub struct BackupArgs {
    /// SQL Server connection string
    #[arg(short, long, env = "SQLBACK_CONNECTION")]
    pub connection: Option<String>,

    /// Destination directory on the server, including its trailing
    /// separator (e.g. `D:\Backups\`)
    #[arg(short = 'd', long)]
    pub backup_dir: Option<String>,

    /// Command timeout in seconds (0 uses the default of 3600)
    #[arg(short, long)]
    pub timeout: Option<u32>,

    /// Path to a sqlback.toml config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `validate` command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// SQL Server connection string
    #[arg(short, long, env = "SQLBACK_CONNECTION")]
    pub connection: Option<String>,

    /// Also open a connection and run a `SELECT 1` probe
    #[arg(long)]
    pub probe: bool,

    /// Path to a sqlback.toml config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
