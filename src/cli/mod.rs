//! Command-line interface for muster.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros and the subcommand implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Subcommand implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, EnvArgs, InitArgs, ListArgs, RunArgs};
pub use commands::{CliCommand, CommandDispatcher, CommandResult};
