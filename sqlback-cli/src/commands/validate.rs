//! `sqlback validate` command - parse and validate a connection string.

use sqlback_core::prelude::*;
use sqlback_mssql::{MssqlConfig, MssqlExecutor};

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output::{self, success};

/// Run the validate command
pub async fn run(args: ValidateArgs) -> CliResult<()> {
    output::header("Validate Connection String");

    let file_config = Config::load_layered(args.config.as_deref())?;
    let connection = args
        .connection
        .or(file_config.connection.string)
        .ok_or_else(|| {
            CliError::Config(
                "no connection string supplied (use --connection or sqlback.toml)".to_string(),
            )
        })?;

    let props = parse(&connection);
    let result = validate(&props);

    output::section("Extracted Properties");
    output::kv("Server", &props.server);
    output::kv("Database", &props.database_name);
    output::kv("User Id", &props.user_id);
    output::kv("Password", &mask(&props.password));
    output::kv("Integrated Security", &props.integrated_security);
    output::kv("Connect Timeout", &props.connect_timeout);
    if !props.application_name.is_empty() {
        output::kv("Application Name", &props.application_name);
    }
    output::newline();

    if !result.success {
        output::error("Connection string is invalid:");
        for message in &result.messages {
            output::list_item(message);
        }
        return Err(CliError::Validation(format!(
            "found {} validation errors",
            result.messages.len()
        )));
    }

    success("Connection string is valid.");

    if args.probe {
        let config =
            MssqlConfig::from_properties(&props).map_err(|e| CliError::Config(e.to_string()))?;
        let executor = MssqlExecutor::new(config);
        output::info("Probing server...");
        executor.ping().await?;
        success("Server is reachable.");
    }

    Ok(())
}

/// Never echo the password back to the terminal.
fn mask(password: &str) -> String {
    if password.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_hides_content_and_length() {
        assert_eq!(mask(""), "");
        assert_eq!(mask("a"), "********");
        assert_eq!(mask("a longer password"), "********");
    }
}
