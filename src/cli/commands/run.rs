//! Run command implementation.
//!
//! `muster run <name> [args...]` resolves the manifest, looks up the
//! named command, and executes it with the trailing arguments forwarded.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{resolve_manifest_path, Manifest};
use crate::error::{MusterError, Result};

use super::dispatcher::{CliCommand, CommandResult};
use super::{report, LOAD_FAILURE};

/// The run command implementation.
pub struct RunCommand {
    start_dir: PathBuf,
    config_override: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(start_dir: &Path, config_override: Option<&Path>, args: RunArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }

    fn load(&self) -> Result<Manifest> {
        let path = resolve_manifest_path(&self.start_dir, self.config_override.as_deref())?;
        Manifest::load(&path)
    }
}

impl CliCommand for RunCommand {
    fn execute(&self) -> Result<CommandResult> {
        let manifest = match self.load() {
            Ok(m) => m,
            Err(e) => {
                report(&e);
                return Ok(CommandResult::failure(LOAD_FAILURE));
            }
        };

        let mut invocation = Vec::with_capacity(1 + self.args.args.len());
        invocation.push(self.args.name.clone());
        invocation.extend(self.args.args.iter().cloned());

        match manifest.execute(&invocation) {
            Ok(()) => Ok(CommandResult::success()),
            Err(e @ (MusterError::CommandNotDefined { .. } | MusterError::CommandFailed { .. })) => {
                report(&e);
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
