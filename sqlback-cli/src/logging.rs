//! Logging initialisation.
//!
//! Controlled by environment variables:
//!
//! - `SQLBACK_LOG=debug|info|warn|error|trace` (or any env-filter
//!   directive) - set the log level, default `warn`
//! - `SQLBACK_LOG_FORMAT=pretty|compact` - set the output format

use std::env;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialise the tracing subscriber. Call once at startup; subsequent
/// calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SQLBACK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        let format = env::var("SQLBACK_LOG_FORMAT").unwrap_or_default();

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false);

        match format.to_lowercase().as_str() {
            "pretty" => builder.pretty().init(),
            "compact" => builder.compact().init(),
            _ => builder.init(),
        }
    });
}
