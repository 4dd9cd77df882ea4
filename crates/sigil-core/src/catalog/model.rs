/// One known file-type fingerprint.
///
/// Built once by [`crate::catalog::load`] and never mutated afterwards.
/// `magic_bytes.len()` is the match length; the loader guarantees it agrees
/// with the length declared in the catalog document.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    pub type_name: String,
    pub category: String,
    pub magic_bytes: Vec<u8>,
    pub offset: u64,
    pub confidence_weight: f64,

    /// Lower-cased extensions including the leading dot. Empty means the
    /// signature places no constraint on the extension.
    pub allowed_extensions: Vec<String>,
    pub description: String,

    /// Informational only.
    pub revision: Option<u32>,
}

impl Signature {
    pub fn match_length(&self) -> usize {
        self.magic_bytes.len()
    }
}

/// A validated, immutable list of signatures.
///
/// Order is significant: it is the order of assessments in every verdict
/// and the tie-break order for best-candidate selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureCatalog {
    /// Where the catalog was loaded from, if anywhere.
    pub source: Option<String>,
    signatures: Vec<Signature>,
}

impl SignatureCatalog {
    pub fn new(source: Option<String>, signatures: Vec<Signature>) -> Self {
        Self { source, signatures }
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
