//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
