//! CLI configuration handling.

use serde::Deserialize;
use std::path::Path;

use crate::error::CliResult;

/// Default config file name (lives in the working directory)
pub const CONFIG_FILE_NAME: &str = "sqlback.toml";

/// sqlback CLI configuration. Command-line flags take precedence over
/// every value here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Connection configuration
    pub connection: ConnectionConfig,

    /// Backup configuration
    pub backup: BackupConfig,
}

/// Connection configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// SQL Server connection string
    pub string: Option<String>,
}

/// Backup configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Destination directory on the server, with trailing separator
    pub dir: Option<String>,

    /// Command timeout in seconds; 0 uses the default of 3600
    pub timeout_secs: u32,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicitly named config file, or `sqlback.toml` from the
    /// working directory when present, or defaults.
    pub fn load_layered(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [connection]
            string = "Server=localhost;Database=mydb;User Id=sa;Password=p;"

            [backup]
            dir = 'D:\Backups\'
            timeout_secs = 120
            "#,
        )
        .unwrap();

        assert!(config.connection.string.unwrap().starts_with("Server="));
        assert_eq!(config.backup.dir.unwrap(), r"D:\Backups\");
        assert_eq!(config.backup.timeout_secs, 120);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.connection.string.is_none());
        assert!(config.backup.dir.is_none());
        assert_eq!(config.backup.timeout_secs, 0);
    }

    #[test]
    fn test_load_layered_with_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backup]\ntimeout_secs = 45").unwrap();

        let config = Config::load_layered(Some(file.path())).unwrap();
        assert_eq!(config.backup.timeout_secs, 45);
    }

    #[test]
    fn test_load_layered_missing_explicit_path_fails() {
        assert!(Config::load_layered(Some(Path::new("/does/not/exist.toml"))).is_err());
    }
}
