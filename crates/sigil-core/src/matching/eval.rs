//! Match evaluation for one target against a signature catalog.
//!
//! Each signature is scored independently:
//!
//!   - window unavailable        → 0.0, `Unreadable`
//!   - bytes identical           → `confidence_weight`, `Exact`
//!   - k leading bytes agree     → round(k / len * weight, 3), `Partial`
//!   - first byte differs        → 0.0, `NoMatch`
//!
//! Partial matching counts only the contiguous prefix; agreement after the
//! first differing byte is ignored.
//!
//! A read failure aborts the whole evaluation. Callers get either every
//! assessment, in catalog order, or the error.

use tracing::debug;

use crate::catalog::model::Signature;
use crate::error::ReadError;
use crate::io::window::WindowSource;
use crate::matching::model::{MatchAssessment, MatchReason};
use crate::util::deterministic::round3;

/// Number of leading bytes that agree before the first difference.
pub fn prefix_match_len(observed: &[u8], expected: &[u8]) -> usize {
    observed
        .iter()
        .zip(expected)
        .take_while(|(o, e)| o == e)
        .count()
}

/// Score observed window bytes against a signature.
pub fn assess<'a>(signature: &'a Signature, observed: &[u8]) -> MatchAssessment<'a> {
    let total = signature.match_length();

    if observed == signature.magic_bytes.as_slice() {
        return MatchAssessment {
            signature,
            full_match: true,
            partial_match: false,
            confidence_score: signature.confidence_weight,
            reason: MatchReason::Exact,
        };
    }

    let matched = prefix_match_len(observed, &signature.magic_bytes);
    if matched == 0 {
        return MatchAssessment {
            signature,
            full_match: false,
            partial_match: false,
            confidence_score: 0.0,
            reason: MatchReason::NoMatch,
        };
    }

    let ratio = matched as f64 / total as f64;
    MatchAssessment {
        signature,
        full_match: false,
        partial_match: true,
        confidence_score: round3(ratio * signature.confidence_weight),
        reason: MatchReason::Partial { matched, total },
    }
}

/// Read the signature's window from `source` and score it.
pub fn evaluate_signature<'a, W>(
    source: &W,
    signature: &'a Signature,
) -> Result<MatchAssessment<'a>, ReadError>
where
    W: WindowSource + ?Sized,
{
    let assessment = match source.read_window(signature.offset, signature.match_length())? {
        Some(observed) => assess(signature, &observed),
        None => MatchAssessment::unreadable(signature),
    };

    debug!(
        target_file = source.identity(),
        signature = %signature.type_name,
        score = assessment.confidence_score,
        reason = %assessment.reason,
        "signature evaluated"
    );

    Ok(assessment)
}

/// Evaluate every signature against `source`, preserving catalog order.
///
/// With the `parallel` feature the signatures are scored concurrently. The
/// result is identical to sequential evaluation, including which error is
/// reported when several windows fail.
pub fn evaluate<'a, W>(
    source: &W,
    signatures: &'a [Signature],
) -> Result<Vec<MatchAssessment<'a>>, ReadError>
where
    W: WindowSource + ?Sized,
{
    #[cfg(feature = "parallel")]
    let outcomes: Vec<Result<MatchAssessment<'a>, ReadError>> = {
        use rayon::prelude::*;
        signatures
            .par_iter()
            .map(|sig| evaluate_signature(source, sig))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Result<MatchAssessment<'a>, ReadError>> = signatures
        .iter()
        .map(|sig| evaluate_signature(source, sig))
        .collect();

    outcomes.into_iter().collect()
}
