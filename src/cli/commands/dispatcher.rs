//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`CliCommand`] trait for implementing subcommands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Trait for subcommand implementations.
pub trait CliCommand {
    /// Execute the subcommand.
    ///
    /// Expected failures (missing manifest, undefined names, failing
    /// commands) are reported on stderr here and become a non-zero
    /// [`CommandResult`]; only unexpected errors propagate as `Err`.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of subcommand execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the subcommand succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI subcommands to their implementations.
pub struct CommandDispatcher {
    start_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at the given directory.
    pub fn new(start_dir: PathBuf) -> Self {
        Self { start_dir }
    }

    /// Get the directory manifest discovery starts from.
    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    /// Dispatch and execute a subcommand.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        let config_override = cli.config.as_deref();

        match &cli.command {
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(&self.start_dir, config_override, args.clone());
                cmd.execute()
            }
            Commands::Env(args) => {
                let cmd = super::env::EnvCommand::new(&self.start_dir, config_override, args.clone());
                cmd.execute()
            }
            Commands::List(args) => {
                let cmd =
                    super::list::ListCommand::new(&self.start_dir, config_override, args.clone());
                cmd.execute()
            }
            Commands::Init(args) => {
                let cmd = super::init::InitCommand::new(&self.start_dir, args.clone());
                cmd.execute()
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.start_dir(), Path::new("/test"));
    }
}
