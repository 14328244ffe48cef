//! Manifest schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `muster.yml` file format:
//!
//! ```yaml
//! name: my-project
//! commands:
//!   build: cargo build
//!   deploy:
//!     staging: ./deploy.sh staging
//!     production: ./deploy.sh production
//!   release:
//!     - cargo test
//!     - cargo publish
//! env:
//!   dev:
//!     DATABASE_URL: postgres://localhost/dev
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Root structure of a parsed `muster.yml`.
///
/// Immutable after a successful load; all dispatch operations take `&self`.
/// Missing `commands`/`env` sections deserialize to empty maps, so lookups
/// on a bare manifest are misses, never panics. Duplicate YAML keys follow
/// serde_yaml's last-write-wins mapping semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Display name for the project (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Invocable commands, keyed by name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub commands: HashMap<String, CommandSpec>,

    /// Named environments, keyed by name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, EnvironmentSpec>,
}

/// A command definition.
///
/// Commands take one of three YAML shapes, distinguished structurally:
/// a plain string runs through the shell, a list runs its entries in
/// order, and a mapping nests subcommands selected by the first trailing
/// argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandSpec {
    /// A single shell command line.
    Line(String),

    /// Commands executed in order, stopping at the first failure.
    Sequence(Vec<CommandSpec>),

    /// Nested subcommands, keyed by selector.
    Group(HashMap<String, CommandSpec>),
}

/// A named environment: variable name → value.
///
/// BTreeMap keeps activation output deterministic (sorted by key).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentSpec {
    pub vars: BTreeMap<String, String>,
}
