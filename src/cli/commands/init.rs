//! Init command implementation.
//!
//! `muster init` writes a starter `muster.yml` into the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;

use crate::cli::args::InitArgs;
use crate::error::Result;

use super::dispatcher::{CliCommand, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    start_dir: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(start_dir: &Path, args: InitArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            args,
        }
    }

    fn manifest_path(&self) -> PathBuf {
        self.start_dir.join("muster.yml")
    }

    /// Starter manifest content, named after the containing directory.
    fn starter_manifest(&self) -> String {
        let project_name = self
            .start_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("my-project");

        format!(
            "# Muster manifest for {project_name}\n\
             #\n\
             # Commands take three shapes:\n\
             #   a string        — one shell command, trailing args appended\n\
             #   a list          — commands run in order, stopping on failure\n\
             #   a mapping       — nested subcommands, selected by the next arg\n\
             #\n\
             # Activate an environment with: eval \"$(muster env dev)\"\n\
             \n\
             name: {project_name}\n\
             \n\
             commands:\n\
             \x20 hello: echo hello from muster\n\
             \n\
             env:\n\
             \x20 dev:\n\
             \x20   EXAMPLE_VAR: example-value\n"
        )
    }
}

impl CliCommand for InitCommand {
    fn execute(&self) -> Result<CommandResult> {
        let path = self.manifest_path();

        if path.exists() && !self.args.force {
            eprintln!(
                "{} Configuration already exists at {} (use --force to overwrite)",
                style("error:").red().bold(),
                path.display()
            );
            return Ok(CommandResult::failure(1));
        }

        fs::write(&path, self.starter_manifest())?;
        println!("Created {}", path.display());

        Ok(CommandResult::success())
    }
}
