//! CLI subcommand implementations.
//!
//! Each subcommand implements the [`CliCommand`] trait, which provides a
//! uniform interface for executing and reporting results. Subcommands are
//! routed via [`CommandDispatcher`].

pub mod completions;
pub mod dispatcher;
pub mod env;
pub mod init;
pub mod list;
pub mod run;

pub use dispatcher::{CliCommand, CommandDispatcher, CommandResult};

use crate::error::MusterError;
use console::style;

/// Print an error on stderr, styled when the terminal supports it.
pub(crate) fn report(err: &MusterError) {
    eprintln!("{} {}", style("error:").red().bold(), err);
}

/// Exit code for manifest load failures, as opposed to dispatch failures.
pub(crate) const LOAD_FAILURE: i32 = 2;
