/// Default upper bound for a single magic pattern (64 KiB).
pub const DEFAULT_MAX_PATTERN_LEN: usize = 64 * 1024;

/// Inspection-time configuration.
///
/// These knobs bound resource usage and select optional report content.
/// They never change how a match is scored or how risk is classified.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Largest `match_length` accepted when loading a catalog.
    pub max_pattern_len: usize,

    /// Whether to compute a SHA-256 fingerprint of the target for the report.
    pub hash_artifact: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
            hash_artifact: true,
        }
    }
}
