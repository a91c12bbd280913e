// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers to stamp a release version into the integration `manifest.json`.

mod error;

use std::fs::{read_to_string, write};
use std::path::Path;

use log::debug;
use serde_json::Value;

pub use crate::error::{Error, Result};

/// Integration manifest location, relative to the repository root.
pub const MANIFEST_PATH: &str = "./custom_components/inpost_air/manifest.json";

/// Manifest key holding the release version.
pub const VERSION_KEY: &str = "version";

/// Outcome of a successful [`update_manifest`] call
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Update {
    /// Value of `version` before the update, or None if the key was absent
    pub previous: Option<Value>,
    /// Version string written to the manifest
    pub current: String,
}

/// Return `manifest` with its `version` entry set to `version`, or None if the root is not an
/// object.
///
/// With the `preserve_order` feature of `serde_json` an existing `version` entry keeps its
/// position and a missing one is appended after all other keys.
#[must_use]
pub fn with_version(manifest: Value, version: &str) -> Option<Value> {
    let Value::Object(mut obj) = manifest else {
        return None;
    };
    obj.insert(VERSION_KEY.to_owned(), Value::String(version.to_owned()));
    Some(Value::Object(obj))
}

/// Pretty-print a manifest with 2-space indentation and no trailing newline.
///
/// Numbers are written back with the exact text they were parsed from (`arbitrary_precision`).
#[must_use]
pub fn render(manifest: &Value) -> String {
    format!("{manifest:#}")
}

/// Override the `version` field of the manifest at `path` with the given version.
///
/// The version is stored verbatim as a JSON string. Every other entry keeps its value and
/// position. The file is rewritten in place and never created: a missing manifest is reported
/// as [`Error::Read`], and content that fails to parse leaves the file untouched.
pub fn update_manifest(path: &Path, version: &str) -> Result<Update> {
    debug!("reading {}", path.display());
    let content = read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;

    let manifest: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_owned(),
        source,
    })?;
    let previous = manifest.get(VERSION_KEY).cloned();

    let manifest = with_version(manifest, version).ok_or_else(|| Error::NotAnObject {
        path: path.to_owned(),
    })?;
    let new_content = render(&manifest);

    debug!("writing {} bytes to {}", new_content.len(), path.display());
    write(path, new_content).map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })?;

    Ok(Update {
        previous,
        current: version.to_owned(),
    })
}
