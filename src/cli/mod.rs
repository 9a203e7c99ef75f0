//! CLI command handlers
//!
//! Each subcommand is implemented in its own module.

pub mod bridge;
pub mod config;
pub mod helpers;
pub mod instructions;
pub mod schemas;
pub mod serve;
