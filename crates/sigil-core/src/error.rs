//! Error types for sigil.
//!
//! Catalog problems and target read failures are kept apart so callers can
//! report them differently. A window that lies beyond the end of a file is
//! not an error and never appears here; see [`crate::io::window`].

use std::io;

use thiserror::Error;

/// Failure to load or validate a signature catalog.
///
/// Any single bad entry fails the whole load.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("signature catalog not found: {path}")]
    NotFound { path: String },

    /// The catalog file exists but could not be read.
    #[error("failed to read signature catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A signature entry has an empty `type_name`.
    #[error("signature #{index} has an empty type_name")]
    EmptyTypeName { index: usize },

    /// The `magic_value` field is not valid hex.
    #[error("invalid magic_value for '{type_name}': {source}")]
    InvalidHex {
        type_name: String,
        #[source]
        source: hex::FromHexError,
    },

    /// The decoded pattern has no bytes.
    #[error("signature '{type_name}' has an empty magic pattern")]
    EmptyPattern { type_name: String },

    /// Declared `match_length` disagrees with the decoded pattern.
    #[error(
        "invalid signature for '{type_name}': match_length ({declared}) does not match magic_bytes length ({actual})"
    )]
    LengthMismatch {
        type_name: String,
        declared: usize,
        actual: usize,
    },

    /// `confidence_weight` is outside (0, 1].
    #[error("signature '{type_name}' has confidence_weight {weight}, expected a value in (0, 1]")]
    InvalidWeight { type_name: String, weight: f64 },

    /// The pattern exceeds the configured maximum window size.
    #[error("signature '{type_name}' pattern is {len} bytes, limit is {max}")]
    PatternTooLong {
        type_name: String,
        len: usize,
        max: usize,
    },
}

/// Failure to read bytes from an inspection target.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The target file does not exist.
    #[error("file does not exist: {path}")]
    NotFound { path: String },

    /// The target could not be opened, seeked or read.
    #[error("error reading file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A window with zero length was requested.
    #[error("invalid window request: offset {offset}, length {len}")]
    InvalidWindow { offset: u64, len: usize },
}

impl ReadError {
    /// Classify an `io::Error` raised while touching `path`.
    pub(crate) fn from_io(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ReadError::NotFound {
                path: path.to_string(),
            }
        } else {
            ReadError::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

/// Failure of the end-to-end inspection pipeline.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to inspect file: {0}")]
    Read(#[from] ReadError),
}
