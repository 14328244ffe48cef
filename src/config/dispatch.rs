//! Manifest dispatch: lookup → dispatch → report.
//!
//! The two operations share one trivial shape: look the name up in the
//! matching map, report "not defined" on a miss, otherwise invoke the
//! entry and wrap its failure with the invocation context. Errors are
//! returned to the caller; nothing here prints, logs, or exits.

use crate::config::loader;
use crate::config::schema::Manifest;
use crate::error::{MusterError, Result};
use std::path::Path;

impl Manifest {
    /// Load the manifest at `path`.
    ///
    /// Pure read-and-parse; see [`loader::load_manifest`] for the error
    /// taxonomy.
    pub fn load(path: &Path) -> Result<Self> {
        loader::load_manifest(path)
    }

    /// Execute the command named by `args[0]`, forwarding `args[1..]`.
    ///
    /// Empty `args` fails fast with [`MusterError::EmptyInvocation`]
    /// rather than being left as a caller precondition.
    ///
    /// Failures from the command itself are wrapped with the full
    /// original invocation (args joined with spaces) so the report names
    /// what the user actually typed.
    pub fn execute(&self, args: &[String]) -> Result<()> {
        let Some((name, rest)) = args.split_first() else {
            return Err(MusterError::EmptyInvocation);
        };

        let Some(command) = self.commands.get(name) else {
            return Err(MusterError::CommandNotDefined { name: name.clone() });
        };

        tracing::debug!(command = %name, args = ?rest, "dispatching command");
        command
            .execute(name, rest)
            .map_err(|e| MusterError::CommandFailed {
                invocation: args.join(" "),
                message: e.to_string(),
            })
    }

    /// Activate the environment named `name`.
    ///
    /// Failures from the environment itself are wrapped with its name.
    pub fn set(&self, name: &str) -> Result<()> {
        let Some(environment) = self.env.get(name) else {
            return Err(MusterError::EnvironmentNotDefined {
                name: name.to_string(),
            });
        };

        tracing::debug!(environment = %name, "activating environment");
        environment
            .set()
            .map_err(|e| MusterError::ActivationFailed {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}
