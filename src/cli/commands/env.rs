//! Env command implementation.
//!
//! `muster env <name>` prints the named environment's export script on
//! stdout, meant for `eval "$(muster env <name>)"`.

use std::path::{Path, PathBuf};

use crate::cli::args::EnvArgs;
use crate::config::{resolve_manifest_path, Manifest};
use crate::error::{MusterError, Result};

use super::dispatcher::{CliCommand, CommandResult};
use super::{report, LOAD_FAILURE};

/// The env command implementation.
pub struct EnvCommand {
    start_dir: PathBuf,
    config_override: Option<PathBuf>,
    args: EnvArgs,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(start_dir: &Path, config_override: Option<&Path>, args: EnvArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl CliCommand for EnvCommand {
    fn execute(&self) -> Result<CommandResult> {
        let manifest = match resolve_manifest_path(&self.start_dir, self.config_override.as_deref())
            .and_then(|path| Manifest::load(&path))
        {
            Ok(m) => m,
            Err(e) => {
                report(&e);
                return Ok(CommandResult::failure(LOAD_FAILURE));
            }
        };

        match manifest.set(&self.args.name) {
            Ok(()) => Ok(CommandResult::success()),
            Err(
                e @ (MusterError::EnvironmentNotDefined { .. }
                | MusterError::ActivationFailed { .. }),
            ) => {
                report(&e);
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
