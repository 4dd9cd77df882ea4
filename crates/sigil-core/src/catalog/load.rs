//! Signature catalog loading and validation.
//!
//! The catalog is a JSON document with a top-level `signatures` list.
//! Each entry is decoded into a [`RawSignature`] by serde and then checked
//! against the invariants the matcher relies on:
//!
//! - `type_name` is non-empty
//! - `magic_value` is hex and decodes to at least one byte
//! - `match_length` equals the decoded byte count
//! - `confidence_weight` lies in (0, 1]
//! - the pattern fits within `InspectConfig::max_pattern_len`
//!
//! One bad entry fails the whole load. The matcher never sees a signature
//! that has not passed through here.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::catalog::model::{Signature, SignatureCatalog};
use crate::config::InspectConfig;
use crate::error::CatalogError;

#[derive(Debug, Deserialize)]
struct RawCatalog {
    signatures: Vec<RawSignature>,
}

/// A catalog entry exactly as it appears in the document.
#[derive(Debug, Deserialize)]
struct RawSignature {
    type_name: String,
    category: String,
    magic_value: String,
    offset: u64,
    match_length: usize,
    confidence_weight: f64,
    #[serde(default)]
    allowed_extensions: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    revision: Option<u32>,
}

/// Load and validate a catalog file.
pub fn load_catalog(path: &Path, config: &InspectConfig) -> Result<SignatureCatalog, CatalogError> {
    let path_str = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path_str.clone(),
            }
        } else {
            CatalogError::Io {
                path: path_str.clone(),
                source,
            }
        }
    })?;

    let signatures = parse_signatures(&text, config)?;
    info!(path = %path_str, count = signatures.len(), "signature catalog loaded");

    Ok(SignatureCatalog::new(Some(path_str), signatures))
}

/// Parse and validate a catalog document held in memory.
pub fn parse_catalog(json: &str, config: &InspectConfig) -> Result<SignatureCatalog, CatalogError> {
    Ok(SignatureCatalog::new(None, parse_signatures(json, config)?))
}

fn parse_signatures(json: &str, config: &InspectConfig) -> Result<Vec<Signature>, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(json)?;

    raw.signatures
        .into_iter()
        .enumerate()
        .map(|(index, entry)| validate(index, entry, config))
        .collect()
}

fn validate(index: usize, raw: RawSignature, config: &InspectConfig) -> Result<Signature, CatalogError> {
    if raw.type_name.trim().is_empty() {
        return Err(CatalogError::EmptyTypeName { index });
    }

    let compact: String = raw
        .magic_value
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let magic_bytes = hex::decode(&compact).map_err(|source| CatalogError::InvalidHex {
        type_name: raw.type_name.clone(),
        source,
    })?;

    if magic_bytes.is_empty() {
        return Err(CatalogError::EmptyPattern {
            type_name: raw.type_name,
        });
    }

    if magic_bytes.len() != raw.match_length {
        return Err(CatalogError::LengthMismatch {
            type_name: raw.type_name,
            declared: raw.match_length,
            actual: magic_bytes.len(),
        });
    }

    // Written as a negated range test so NaN is rejected as well.
    if !(raw.confidence_weight > 0.0 && raw.confidence_weight <= 1.0) {
        return Err(CatalogError::InvalidWeight {
            type_name: raw.type_name,
            weight: raw.confidence_weight,
        });
    }

    if magic_bytes.len() > config.max_pattern_len {
        return Err(CatalogError::PatternTooLong {
            type_name: raw.type_name,
            len: magic_bytes.len(),
            max: config.max_pattern_len,
        });
    }

    debug!(
        type_name = %raw.type_name,
        offset = raw.offset,
        len = magic_bytes.len(),
        "signature accepted"
    );

    Ok(Signature {
        type_name: raw.type_name,
        category: raw.category,
        magic_bytes,
        offset: raw.offset,
        confidence_weight: raw.confidence_weight,
        allowed_extensions: raw
            .allowed_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect(),
        description: raw.description,
        revision: raw.revision,
    })
}

/// Canonical extension form: trimmed, lower-cased, with a leading dot.
///
/// Returns an empty string for blank input.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
