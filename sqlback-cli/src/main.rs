//! sqlback - back up SQL Server databases from a connection string.

use clap::Parser;

use sqlback_cli::cli::{Cli, Command};
use sqlback_cli::commands;
use sqlback_cli::error::CliResult;
use sqlback_cli::{logging, output};

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Backup(args) => commands::backup::run(args).await,
        Command::Validate(args) => commands::validate::run(args).await,
        Command::Version => commands::version::run().await,
    }
}
