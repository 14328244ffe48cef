//! Muster - YAML-driven command and environment dispatcher.
//!
//! Muster reads a declarative `muster.yml` describing named commands and
//! named environments, and runs exactly one named unit per invocation:
//! `muster run build -v` executes the `build` command with `-v` forwarded,
//! `muster env staging` emits the `staging` environment's export script.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest loading, parsing, and dispatch
//! - [`environment`] - Environment activation (export rendering)
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use muster::config::parse_manifest;
//! use std::path::Path;
//!
//! let manifest = parse_manifest(
//!     "commands:\n  build: cargo build",
//!     Path::new("muster.yml"),
//! ).unwrap();
//! assert!(manifest.commands.contains_key("build"));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod runner;

pub use error::{MusterError, Result};
