#![warn(missing_docs)]
//! Command-line tools for piecewise-linear cost curves.
//!
//! The binary is a thin shell around [`commands`], which operate on generic
//! readers and writers so they can be driven from files, stdio, or memory.

mod cli;
pub use cli::{BoundFlag, Cli, Commands, ExportFormat, IOArgs, SchemaKind, write_to};

/// The operations behind each subcommand.
pub mod commands;

mod config;
pub use config::AppConfig;
