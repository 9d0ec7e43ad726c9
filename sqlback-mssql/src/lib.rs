//! # sqlback-mssql
//!
//! SQL Server backup executor for sqlback, built on `tiberius`.
//!
//! This crate provides:
//! - Mapping of parsed connection properties to a tiberius configuration
//! - A connection factory seam so the network layer is injectable
//! - The [`executor::MssqlExecutor`] implementation of the core
//!   `BackupExecutor` trait: remote path provisioning via
//!   `xp_create_subdir` and the `BACKUP DATABASE` statement, with per-call
//!   connections and a command timeout
//!
//! ## Example
//!
//! ```rust,ignore
//! use sqlback_core::prelude::*;
//! use sqlback_mssql::{MssqlConfig, MssqlExecutor};
//!
//! let props = parse("Server=localhost;Database=mydb;User Id=sa;Password=pass;");
//! let config = MssqlConfig::from_properties(&props)?;
//! let orchestrator = BackupOrchestrator::new(MssqlExecutor::new(config));
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod factory;

pub use config::MssqlConfig;
pub use error::{MssqlError, MssqlResult};
pub use executor::MssqlExecutor;
pub use factory::{ConnectionFactory, MssqlClient, TcpConnectionFactory};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::MssqlConfig;
    pub use crate::error::{MssqlError, MssqlResult};
    pub use crate::executor::MssqlExecutor;
    pub use crate::factory::{ConnectionFactory, TcpConnectionFactory};
}
