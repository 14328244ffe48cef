//! Manifest discovery and loading.
//!
//! This module handles finding and loading the `muster.yml` manifest and
//! turning it into a typed [`Manifest`] — or a descriptive error, never a
//! partially populated instance.

use crate::config::schema::Manifest;
use crate::error::{MusterError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Manifest file names checked during discovery, in priority order.
const MANIFEST_NAMES: [&str; 2] = ["muster.yml", "muster.yaml"];

/// Find the manifest by walking up from `start`.
///
/// Checks each ancestor directory for `muster.yml`, then `muster.yaml`.
/// The first hit wins. Returns `None` when no ancestor carries a manifest.
pub fn find_manifest(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in MANIFEST_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load and parse the manifest at `path`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist (the message points
/// the user at `muster init` — a first-run affordance, not a generic I/O
/// error). Returns `ConfigUnreadable` for any other access fault, and
/// `ConfigParse` if the YAML structure is invalid.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        let path = absolutize(path);
        if e.kind() == ErrorKind::NotFound {
            MusterError::ConfigNotFound { path }
        } else {
            MusterError::ConfigUnreadable {
                path,
                message: e.to_string(),
            }
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse YAML content into a [`Manifest`].
///
/// `source_path` is only used for error reporting.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    serde_yaml::from_str(content).map_err(|e| MusterError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the manifest path for a run: an explicit `--config` override,
/// or discovery from the current directory.
///
/// With no override and no discoverable manifest, reports `ConfigNotFound`
/// against `<start>/muster.yml` so the message names a concrete location.
pub fn resolve_manifest_path(start: &Path, config_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_override {
        return Ok(path.to_path_buf());
    }

    find_manifest(start).ok_or_else(|| MusterError::ConfigNotFound {
        path: absolutize(&start.join(MANIFEST_NAMES[0])),
    })
}

/// Absolute form of `path` when resolvable, the path as given otherwise.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
