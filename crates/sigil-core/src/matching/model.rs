use std::fmt;

use crate::catalog::model::Signature;

/// Why an assessment came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// The target was too short to supply the signature's window.
    Unreadable,
    Exact,
    /// `matched` leading bytes agreed before the first difference.
    Partial { matched: usize, total: usize },
    NoMatch,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Unreadable => f.write_str("Unable to read required bytes"),
            MatchReason::Exact => f.write_str("Exact magic number match"),
            MatchReason::Partial { matched, total } => {
                write!(f, "Partial magic match ({matched}/{total} bytes)")
            }
            MatchReason::NoMatch => f.write_str("No matching bytes detected"),
        }
    }
}

/// Outcome of testing one target against one signature.
///
/// Borrows the signature from the catalog for the lifetime of the verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchAssessment<'a> {
    pub signature: &'a Signature,
    pub full_match: bool,
    pub partial_match: bool,
    pub confidence_score: f64,
    pub reason: MatchReason,
}

impl<'a> MatchAssessment<'a> {
    pub fn unreadable(signature: &'a Signature) -> Self {
        Self {
            signature,
            full_match: false,
            partial_match: false,
            confidence_score: 0.0,
            reason: MatchReason::Unreadable,
        }
    }
}
