//! SQL Server connection configuration.

use std::time::Duration;

use sqlback_core::parser::LIVE_CONNECT_TIMEOUT_SECS;
use sqlback_core::properties::ConnectionProperties;
use tiberius::{AuthMethod, Config};

use crate::error::{MssqlError, MssqlResult};

/// Default connect timeout when the connection string carries none.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;

/// SQL Server connection configuration.
///
/// Derived from parsed [`ConnectionProperties`]; the live connection uses
/// the short rewritten timeout while the user-requested timeout applies to
/// the backup command, not the connection.
#[derive(Debug, Clone)]
pub struct MssqlConfig {
    /// Server host.
    pub host: String,
    /// Server port (default: 1433).
    pub port: u16,
    /// Instance name (for named instances).
    pub instance_name: Option<String>,
    /// Database name.
    pub database: String,
    /// Username for SQL Server authentication.
    pub username: Option<String>,
    /// Password for SQL Server authentication.
    pub password: Option<String>,
    /// Use Windows Authentication (Integrated Security).
    pub windows_auth: bool,
    /// Application name (shown in sys.dm_exec_sessions).
    pub application_name: Option<String>,
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,
    /// Trust the server certificate (default: true).
    pub trust_cert: bool,
}

impl Default for MssqlConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 1433,
            instance_name: None,
            database: String::new(),
            username: None,
            password: None,
            windows_auth: false,
            application_name: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            trust_cert: true,
        }
    }
}

impl MssqlConfig {
    /// Build a configuration from parsed connection properties.
    ///
    /// The server field may carry `host\instance` or `host,port` suffixes.
    pub fn from_properties(props: &ConnectionProperties) -> MssqlResult<Self> {
        let mut config = Self::default();

        let server = props.server.trim();
        if server.is_empty() {
            return Err(MssqlError::config("server is required"));
        }
        if let Some((host, instance)) = server.split_once('\\') {
            config.host = host.to_string();
            config.instance_name = Some(instance.to_string());
        } else if let Some((host, port)) = server.split_once(',') {
            config.host = host.to_string();
            config.port = port.trim().parse().unwrap_or(1433);
        } else {
            config.host = server.to_string();
        }

        if props.database_name.trim().is_empty() {
            return Err(MssqlError::config("database name is required"));
        }
        config.database = props.database_name.trim().to_string();

        config.windows_auth = props.uses_integrated_security();
        if !config.windows_auth {
            if !props.user_id.is_empty() {
                config.username = Some(props.user_id.clone());
            }
            if !props.password.is_empty() {
                config.password = Some(props.password.clone());
            }
        }

        if !props.application_name.is_empty() {
            config.application_name = Some(props.application_name.clone());
        }

        // Mirror of the stored-string rewrite: when a timeout was supplied
        // the connection itself uses the short live value.
        if !props.connect_timeout.trim().is_empty() {
            config.connect_timeout = Duration::from_secs(u64::from(LIVE_CONNECT_TIMEOUT_SECS));
        }

        Ok(config)
    }

    /// Convert to a Tiberius [`Config`].
    pub fn to_tiberius_config(&self) -> MssqlResult<Config> {
        let mut config = Config::new();

        config.host(&self.host);
        config.port(self.port);
        config.database(&self.database);

        if let Some(ref instance) = self.instance_name {
            config.instance_name(instance);
        }

        if let Some(ref app_name) = self.application_name {
            config.application_name(app_name);
        }

        if self.windows_auth {
            #[cfg(windows)]
            {
                config.authentication(AuthMethod::Integrated);
            }
            #[cfg(not(windows))]
            {
                return Err(MssqlError::config(
                    "Windows Authentication is only supported on Windows",
                ));
            }
        } else if let (Some(user), Some(pass)) = (&self.username, &self.password) {
            config.authentication(AuthMethod::sql_server(user, pass));
        } else {
            return Err(MssqlError::config(
                "either username/password or Windows Authentication is required",
            ));
        }

        if self.trust_cert {
            config.trust_cert();
        }

        Ok(config)
    }
}
