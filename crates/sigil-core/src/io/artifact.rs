use sha2::{Digest, Sha256};
use std::{fs::File, io, path::Path};

use crate::error::ReadError;
use crate::report::model::{ArtifactHash, ArtifactInfo};

/// Content identity of an inspection target.
///
/// Depends only on the file bytes; filesystem metadata is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFingerprint {
    pub size_bytes: u64,

    /// Hash algorithm used for fingerprinting.
    pub hash_alg: String,

    /// Hex-encoded digest of the file bytes.
    pub hash_hex: String,
}

impl ArtifactFingerprint {
    /// Convert into report-facing artifact metadata.
    pub fn into_artifact(self, path: Option<String>) -> ArtifactInfo {
        ArtifactInfo {
            path,
            size_bytes: self.size_bytes,
            hash: Some(ArtifactHash {
                algorithm: self.hash_alg,
                value: self.hash_hex,
            }),
        }
    }
}

/// Stream a file through SHA-256 without loading it into memory.
pub fn fingerprint(path: &Path) -> Result<ArtifactFingerprint, ReadError> {
    let display = path.display().to_string();

    let mut file = File::open(path).map_err(|e| ReadError::from_io(&display, e))?;
    let mut hasher = Sha256::new();
    let size_bytes = io::copy(&mut file, &mut hasher).map_err(|e| ReadError::from_io(&display, e))?;

    Ok(ArtifactFingerprint {
        size_bytes,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(hasher.finalize()),
    })
}

/// Fingerprint an in-memory buffer.
pub fn fingerprint_bytes(bytes: &[u8]) -> ArtifactFingerprint {
    ArtifactFingerprint {
        size_bytes: bytes.len() as u64,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(Sha256::digest(bytes)),
    }
}
