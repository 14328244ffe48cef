//! Command execution.
//!
//! Runs a [`CommandSpec`] through the system shell. Plain lines get the
//! trailing arguments appended (shell-quoted); sequences run in order and
//! stop at the first failure; groups consume the first argument to select
//! a subcommand and recurse with the rest.

use crate::config::schema::CommandSpec;
use crate::error::{MusterError, Result};
use std::process::{Command, Stdio};

impl CommandSpec {
    /// Execute this command with the given trailing arguments.
    ///
    /// `name` is the command's manifest key, extended with the selector
    /// path (`deploy staging`) as groups are descended, and only used in
    /// error messages.
    pub fn execute(&self, name: &str, args: &[String]) -> Result<()> {
        match self {
            CommandSpec::Line(line) => run_line(line, args),
            CommandSpec::Sequence(entries) => {
                for entry in entries {
                    entry.execute(name, args)?;
                }
                Ok(())
            }
            CommandSpec::Group(subcommands) => {
                let Some((selector, rest)) = args.split_first() else {
                    return Err(MusterError::MissingSubcommand {
                        path: name.to_string(),
                        available: available_names(subcommands),
                    });
                };
                let path = format!("{} {}", name, selector);
                match subcommands.get(selector) {
                    Some(sub) => sub.execute(&path, rest),
                    None => Err(MusterError::MissingSubcommand {
                        path: name.to_string(),
                        available: available_names(subcommands),
                    }),
                }
            }
        }
    }
}

/// Sorted, comma-separated subcommand names for error messages.
fn available_names(subcommands: &std::collections::HashMap<String, CommandSpec>) -> String {
    let mut names: Vec<&str> = subcommands.keys().map(String::as_str).collect();
    names.sort_unstable();
    names.join(", ")
}

/// Run a single shell line with `args` appended, stdio inherited.
fn run_line(line: &str, args: &[String]) -> Result<()> {
    let command = compose_line(line, args);
    tracing::debug!(%command, "running shell command");

    let status = Command::new(detect_shell())
        .arg(shell_flag())
        .arg(&command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| MusterError::CommandFailed {
            invocation: command.clone(),
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(MusterError::CommandExited {
            command,
            code: status.code(),
        })
    }
}

/// Append trailing arguments to a command line, each shell-quoted.
fn compose_line(line: &str, args: &[String]) -> String {
    if args.is_empty() {
        return line.to_string();
    }
    let mut command = line.to_string();
    for arg in args {
        command.push(' ');
        command.push_str(&shell_quote(arg));
    }
    command
}

/// Single-quote a string for POSIX shells unless it is already a plain word.
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | '='));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

/// Detect the shell to run commands through.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Flag that makes the shell run a command string.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
