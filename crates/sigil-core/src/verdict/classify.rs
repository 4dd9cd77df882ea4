//! Verdict derivation for one inspected file.
//!
//! This module reduces a list of match assessments to a single verdict.
//!
//! Responsibilities:
//! - Select the best candidate (`verdict::select`)
//! - Detect extension masquerading (`verdict::extension`)
//! - Apply the risk policy
//! - Compose the human-readable summary
//!
//! Non-responsibilities:
//! - Reading target bytes or scoring signatures (handled in `matching`)
//! - Rendering output (handled in `report`)
//!
//! The risk policy is based on match strength only, evaluated top to
//! bottom with the first matching row winning:
//!
//!   - No best candidate                  → UNKNOWN
//!   - Full match and extension mismatch  → HIGH
//!   - Full match                         → MEDIUM
//!   - Partial match                      → LOW
//!   - Otherwise                          → UNKNOWN
//!
//! Confidence values never move a file between levels on their own.

use tracing::info;

use crate::matching::model::MatchAssessment;
use crate::verdict::extension::is_extension_mismatch;
use crate::verdict::model::{InspectionVerdict, RiskLevel};
use crate::verdict::select::select_best;

pub const NOTE_PARTIAL: &str = "Partial signature match detected";
pub const NOTE_EXTENSION_MISMATCH: &str = "File extension does not match detected file type";
pub const SUMMARY_VERIFIED: &str = "File signature verified";
pub const SUMMARY_NO_MATCH: &str = "No file signature match";

/// Map a best candidate and mismatch flag to a risk level.
pub fn determine_risk(best: Option<&MatchAssessment<'_>>, extension_mismatch: bool) -> RiskLevel {
    match best {
        None => RiskLevel::Unknown,
        Some(m) if m.full_match && extension_mismatch => RiskLevel::High,
        Some(m) if m.full_match => RiskLevel::Medium,
        Some(m) if m.partial_match => RiskLevel::Low,
        Some(_) => RiskLevel::Unknown,
    }
}

/// Build the summary line for a verdict.
pub fn compose_summary(best: Option<&MatchAssessment<'_>>, extension_mismatch: bool) -> String {
    let Some(best) = best else {
        return SUMMARY_NO_MATCH.to_string();
    };

    let mut notes = Vec::new();
    if best.partial_match {
        notes.push(NOTE_PARTIAL);
    }
    if extension_mismatch {
        notes.push(NOTE_EXTENSION_MISMATCH);
    }

    if notes.is_empty() {
        SUMMARY_VERIFIED.to_string()
    } else {
        notes.join("; ")
    }
}

/// Derive the final verdict for one file.
///
/// Total over its inputs: never fails and performs no I/O.
pub fn derive_verdict<'a>(
    file_path: &str,
    observed_extension: &str,
    assessments: Vec<MatchAssessment<'a>>,
) -> InspectionVerdict<'a> {
    let best_idx = select_best(&assessments);
    let best = best_idx.map(|idx| &assessments[idx]);

    let extension_mismatch = best
        .map(|m| is_extension_mismatch(m.signature, observed_extension))
        .unwrap_or(false);

    let risk_level = determine_risk(best, extension_mismatch);
    let summary = compose_summary(best, extension_mismatch);

    let detected_type = best.map(|m| m.signature.type_name.clone());
    let detected_category = best.map(|m| m.signature.category.clone());
    let confidence = best.map(|m| m.confidence_score).unwrap_or(0.0);

    info!(
        file = file_path,
        detected = detected_type.as_deref().unwrap_or("none"),
        confidence,
        risk = %risk_level,
        extension_mismatch,
        "verdict derived"
    );

    InspectionVerdict {
        file_path: file_path.to_string(),
        observed_extension: observed_extension.to_string(),
        assessments,
        best: best_idx,
        detected_type,
        detected_category,
        confidence,
        extension_mismatch,
        risk_level,
        summary,
    }
}
