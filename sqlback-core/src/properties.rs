//! Parsed connection-string properties.

/// The structured form of a SQL Server connection string.
///
/// Built incrementally by the parser: every field starts empty and is
/// assigned at most once, from the first segment that matches it. After
/// validation the record is treated as read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionProperties {
    /// The original connection string, with the connect-timeout token
    /// rewritten to the short live-connection value when one was supplied.
    pub connection_string: String,
    /// Server host, optionally carrying an instance (`host\instance`) or
    /// port (`host,port`) suffix.
    pub server: String,
    /// Database to back up.
    pub database_name: String,
    /// Requested timeout in seconds, still in string form. This value is
    /// carried into the backup command timeout, not the connection.
    pub connect_timeout: String,
    /// Application name (shown in sys.dm_exec_sessions).
    pub application_name: String,
    /// One of "true", "false" or "sspi" (any casing), or empty.
    pub integrated_security: String,
    /// Username for SQL Server authentication.
    pub user_id: String,
    /// Password for SQL Server authentication.
    pub password: String,
}

impl ConnectionProperties {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when integrated security was requested ("true" or "sspi").
    pub fn uses_integrated_security(&self) -> bool {
        matches!(
            self.integrated_security.trim().to_ascii_lowercase().as_str(),
            "true" | "sspi"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_empty() {
        let props = ConnectionProperties::new();
        assert_eq!(props, ConnectionProperties::default());
        assert!(props.server.is_empty());
        assert!(props.connection_string.is_empty());
    }

    #[test]
    fn test_uses_integrated_security() {
        let mut props = ConnectionProperties::new();
        assert!(!props.uses_integrated_security());

        props.integrated_security = "SSPI".to_string();
        assert!(props.uses_integrated_security());

        props.integrated_security = "true".to_string();
        assert!(props.uses_integrated_security());

        props.integrated_security = "false".to_string();
        assert!(!props.uses_integrated_security());
    }
}
