//! Environment activation.
//!
//! An environment is a flat map of variable names to values. A child
//! process cannot mutate its parent shell, so activation renders `export`
//! assignments on stdout for the caller to eval:
//!
//! ```sh
//! eval "$(muster env staging)"
//! ```

use crate::config::schema::EnvironmentSpec;
use crate::error::{MusterError, Result};
use crate::runner::shell_quote;
use std::io::Write;

impl EnvironmentSpec {
    /// Activate this environment by writing export lines to stdout.
    pub fn set(&self) -> Result<()> {
        let script = self.render()?;
        std::io::stdout()
            .write_all(script.as_bytes())
            .map_err(MusterError::Io)
    }

    /// Render the export script, one `export NAME='value'` line per
    /// variable, sorted by name.
    ///
    /// Fails on the first variable whose name is not a valid POSIX
    /// identifier; emitting it would produce a script the shell rejects.
    pub fn render(&self) -> Result<String> {
        let mut script = String::new();
        for (name, value) in &self.vars {
            if !is_identifier(name) {
                return Err(MusterError::InvalidVariableName { name: name.clone() });
            }
            script.push_str("export ");
            script.push_str(name);
            script.push('=');
            script.push_str(&shell_quote(value));
            script.push('\n');
        }
        Ok(script)
    }
}

/// Valid POSIX shell identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
