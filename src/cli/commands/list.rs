//! List command implementation.
//!
//! `muster list` shows the commands and environments the manifest defines.

use std::path::{Path, PathBuf};

use console::style;

use crate::cli::args::ListArgs;
use crate::config::{resolve_manifest_path, CommandSpec, Manifest};
use crate::error::Result;

use super::dispatcher::{CliCommand, CommandResult};
use super::{report, LOAD_FAILURE};

/// The list command implementation.
pub struct ListCommand {
    start_dir: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(start_dir: &Path, config_override: Option<&Path>, args: ListArgs) -> Self {
        Self {
            start_dir: start_dir.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl CliCommand for ListCommand {
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

        if self.args.json {
            println!("{}", render_json(&manifest)?);
        } else {
            print!("{}", render_human(&manifest));
        }

        Ok(CommandResult::success())
    }
}

/// JSON listing: project name plus sorted command/environment names.
fn render_json(manifest: &Manifest) -> Result<String> {
    let value = serde_json::json!({
        "name": manifest.name,
        "commands": sorted_keys(manifest.commands.keys()),
        "env": sorted_keys(manifest.env.keys()),
    });
    Ok(serde_json::to_string_pretty(&value).map_err(anyhow::Error::from)?)
}

fn render_human(manifest: &Manifest) -> String {
    let mut out = String::new();

    if let Some(name) = &manifest.name {
        out.push_str(&format!("{}\n\n", style(name).bold()));
    }

    out.push_str(&format!("  {}\n", style("Commands:").bold()));
    for name in sorted_keys(manifest.commands.keys()) {
        let detail = summarize(&manifest.commands[&name]);
        out.push_str(&format!(
            "    {} {}\n",
            style(&name).cyan(),
            style(detail).dim()
        ));
    }

    out.push_str(&format!("\n  {}\n", style("Environments:").bold()));
    for name in sorted_keys(manifest.env.keys()) {
        let count = manifest.env[&name].vars.len();
        out.push_str(&format!(
            "    {} {}\n",
            style(&name).cyan(),
            style(format!("({} variables)", count)).dim()
        ));
    }

    out
}

/// One-line description of a command's shape.
fn summarize(spec: &CommandSpec) -> String {
    match spec {
        CommandSpec::Line(line) => format!("— {}", line),
        CommandSpec::Sequence(entries) => format!("({} steps)", entries.len()),
        CommandSpec::Group(subs) => {
            format!("(subcommands: {})", sorted_keys(subs.keys()).join(", "))
        }
    }
}

fn sorted_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut names: Vec<String> = keys.cloned().collect();
    names.sort_unstable();
    names
}
