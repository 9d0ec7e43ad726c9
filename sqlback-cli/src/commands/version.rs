//! `sqlback version` command.

use crate::error::CliResult;
use crate::output;

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::kv("sqlback", env!("CARGO_PKG_VERSION"));
    Ok(())
}
