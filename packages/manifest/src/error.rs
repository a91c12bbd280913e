// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type returned by manifest operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure while updating a manifest file
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Manifest is missing or could not be read
    #[error("failed to read {}", .path.display())]
    Read {
        /// Manifest location
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Manifest could not be written back
    #[error("failed to write {}", .path.display())]
    Write {
        /// Manifest location
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },

    /// Manifest content is not valid JSON
    #[error("failed to parse {}", .path.display())]
    Parse {
        /// Manifest location
        path: PathBuf,
        /// Underlying JSON syntax error
        source: serde_json::Error,
    },

    /// Manifest is valid JSON but its root is not an object
    #[error("{} does not contain a JSON object", .path.display())]
    NotAnObject {
        /// Manifest location
        path: PathBuf,
    },
}

impl Error {
    /// Whether the error comes from the filesystem
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }

    /// Whether the error comes from malformed manifest content
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnObject { .. })
    }
}
