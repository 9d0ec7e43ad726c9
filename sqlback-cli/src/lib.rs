//! sqlback CLI - command-line interface for SQL Server backups.
//!
//! This crate wires the core parsing/orchestration pipeline and the
//! tiberius executor into `backup` and `validate` commands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
