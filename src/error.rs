//! Error types for muster operations.
//!
//! This module defines [`MusterError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MusterError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MusterError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! Every variant here is terminal for the single requested operation only:
//! the core returns it to the caller, and only `main` turns it into an exit
//! code.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for muster operations.
#[derive(Debug, Error)]
pub enum MusterError {
    /// Manifest file not found at the expected location.
    #[error("No configuration found at {path}. Create a muster.yml first (try `muster init`)")]
    ConfigNotFound { path: PathBuf },

    /// Manifest file exists but could not be read.
    #[error("Unable to read configuration at {path}: {message}")]
    ConfigUnreadable { path: PathBuf, message: String },

    /// Manifest file read fine but has an invalid structure.
    #[error("Invalid file structure in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Requested command name has no entry in the manifest.
    #[error("Command '{name}' is not defined")]
    CommandNotDefined { name: String },

    /// Requested environment name has no entry in the manifest.
    #[error("Environment '{name}' is not defined")]
    EnvironmentNotDefined { name: String },

    /// A dispatched command failed; `invocation` is the full original
    /// command line as given.
    #[error("Command '{invocation}' failed: {message}")]
    CommandFailed { invocation: String, message: String },

    /// A shell command ran and exited non-zero (None if killed by signal).
    #[error("Command exited with code {code:?}: {command}")]
    CommandExited { command: String, code: Option<i32> },

    /// A command group was invoked without (or with an unknown) subcommand.
    #[error("Command '{path}' requires a subcommand (one of: {available})")]
    MissingSubcommand { path: String, available: String },

    /// Environment activation failed.
    #[error("Environment '{name}' failed: {message}")]
    ActivationFailed { name: String, message: String },

    /// An environment variable name that no POSIX shell would accept.
    #[error("Invalid environment variable name '{name}'")]
    InvalidVariableName { name: String },

    /// Dispatch was called with no command name at all.
    #[error("No command name given")]
    EmptyInvocation,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for muster operations.
pub type Result<T> = std::result::Result<T, MusterError>;
