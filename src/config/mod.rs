//! Manifest loading, parsing, and dispatch.
//!
//! This module owns everything about `muster.yml`:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - The lookup-and-invoke operations in [`dispatch`]
//!
//! # Example
//!
//! ```
//! use muster::config::Manifest;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("muster.yml");
//! fs::write(&path, "commands:\n  noop: \"true\"").unwrap();
//!
//! let manifest = Manifest::load(&path).unwrap();
//! manifest.execute(&["noop".to_string()]).unwrap();
//! ```

pub mod dispatch;
pub mod loader;
pub mod schema;

pub use loader::{find_manifest, load_manifest, parse_manifest, resolve_manifest_path};
pub use schema::{CommandSpec, EnvironmentSpec, Manifest};
