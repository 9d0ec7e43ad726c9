//! # sqlback-core
//!
//! Connection-string parsing, validation and backup orchestration for
//! SQL Server, independent of any driver.
//!
//! This crate provides:
//! - A rule-driven connection-string parser tolerant of aliases,
//!   duplicate keys and malformed segments
//! - Aggregate validation of the parsed properties
//! - Deterministic backup parameter generation (file name, destination,
//!   description, command timeout)
//! - A backup orchestrator with path-fallback and cooperative
//!   cancellation, generic over the [`executor::BackupExecutor`] seam
//!
//! ## Example
//!
//! ```rust,ignore
//! use sqlback_core::prelude::*;
//!
//! let props = parser::parse("Server=localhost;Database=mydb;User Id=sa;Password=pass;Connect Timeout=30;");
//! let options = BackupOptions {
//!     backup_dir: r"D:\Backups\".to_string(),
//!     timeout_secs: 30,
//! };
//! let orchestrator = BackupOrchestrator::new(executor);
//! let outcome = orchestrator.run(&props, &options, &SystemClock).await;
//! for message in &outcome.messages {
//!     println!("{message}");
//! }
//! ```

pub mod backup;
pub mod clock;
pub mod executor;
pub mod orchestrator;
pub mod parser;
pub mod properties;
pub mod result;
pub mod rules;
pub mod validate;

pub use backup::{BackupOptions, BackupProperties, DEFAULT_COMMAND_TIMEOUT_SECS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use executor::{BackupExecutor, ExecutorError};
pub use orchestrator::{BackupOrchestrator, MSG_CANCELLED, MSG_PATH_FALLBACK, Stage};
pub use properties::ConnectionProperties;
pub use result::OperationResult;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backup::{BackupOptions, BackupProperties};
    pub use crate::clock::{Clock, SystemClock};
    pub use crate::executor::{BackupExecutor, ExecutorError};
    pub use crate::orchestrator::BackupOrchestrator;
    pub use crate::parser::parse;
    pub use crate::properties::ConnectionProperties;
    pub use crate::result::OperationResult;
    pub use crate::validate::validate;
}
