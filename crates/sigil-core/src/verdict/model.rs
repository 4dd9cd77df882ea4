use std::fmt;

use serde::{Deserialize, Serialize};

use crate::matching::model::MatchAssessment;

/// Coarse suspicion level of an inspection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "UNKNOWN",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final result of inspecting one target.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionVerdict<'a> {
    pub file_path: String,
    pub observed_extension: String,

    /// Every assessment, in catalog order.
    pub assessments: Vec<MatchAssessment<'a>>,

    /// Index into `assessments` of the selected candidate.
    pub best: Option<usize>,

    pub detected_type: Option<String>,
    pub detected_category: Option<String>,
    pub confidence: f64,
    pub extension_mismatch: bool,
    pub risk_level: RiskLevel,
    pub summary: String,
}

impl<'a> InspectionVerdict<'a> {
    pub fn best_match(&self) -> Option<&MatchAssessment<'a>> {
        self.best.and_then(|idx| self.assessments.get(idx))
    }
}
