use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::catalog::model::SignatureCatalog;
use crate::matching::model::MatchAssessment;
use crate::verdict::model::{InspectionVerdict, RiskLevel};

/// Top-level sigil report.
///
/// This is the stable JSON contract. It must remain deterministic for
/// identical targets and catalogs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    pub artifact: ArtifactInfo,
    pub catalog: CatalogInfo,
    pub file_path: String,
    pub observed_extension: String,
    pub detected_type: Option<String>,
    pub detected_category: Option<String>,
    pub confidence: f64,
    pub extension_mismatch: bool,
    pub risk_level: RiskLevel,
    pub summary: String,

    /// Per-signature results in catalog order.
    pub matches: Vec<MatchInfo>,
}

impl Report {
    /// Assemble a report from a verdict and its surrounding metadata.
    pub fn new(
        tool: ToolInfo,
        artifact: ArtifactInfo,
        catalog: CatalogInfo,
        verdict: InspectionVerdict<'_>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            artifact,
            catalog,
            matches: verdict.assessments.iter().map(MatchInfo::from).collect(),
            file_path: verdict.file_path,
            observed_extension: verdict.observed_extension,
            detected_type: verdict.detected_type,
            detected_category: verdict.detected_category,
            confidence: verdict.confidence,
            extension_mismatch: verdict.extension_mismatch,
            risk_level: verdict.risk_level,
            summary: verdict.summary,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            name: crate::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Target metadata bound to this report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub path: Option<String>,
    pub size_bytes: u64,

    /// Absent when fingerprinting was disabled.
    pub hash: Option<ArtifactHash>,
}

/// Cryptographic target fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHash {
    pub algorithm: String,
    pub value: String,
}

/// Signature catalog metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogInfo {
    pub source: Option<String>,
    pub signature_count: usize,
}

impl From<&SignatureCatalog> for CatalogInfo {
    fn from(catalog: &SignatureCatalog) -> Self {
        Self {
            source: catalog.source.clone(),
            signature_count: catalog.len(),
        }
    }
}

/// One per-signature result as it appears in report output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchInfo {
    pub type_name: String,
    pub category: String,
    pub offset: u64,
    pub full_match: bool,
    pub partial_match: bool,
    pub confidence_score: f64,
    pub reason: String,
    pub description: String,
}

impl From<&MatchAssessment<'_>> for MatchInfo {
    fn from(m: &MatchAssessment<'_>) -> Self {
        Self {
            type_name: m.signature.type_name.clone(),
            category: m.signature.category.clone(),
            offset: m.signature.offset,
            full_match: m.full_match,
            partial_match: m.partial_match,
            confidence_score: m.confidence_score,
            reason: m.reason.to_string(),
            description: m.signature.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Signature;
    use crate::matching::eval::assess;
    use crate::verdict::classify::derive_verdict;

    fn zip() -> Signature {
        Signature {
            type_name: "ZIP".into(),
            category: "archive".into(),
            magic_bytes: vec![0x50, 0x4B, 0x03, 0x04],
            offset: 0,
            confidence_weight: 1.0,
            allowed_extensions: vec![".zip".into()],
            description: "PKZIP local file header".into(),
            revision: Some(1),
        }
    }

    fn artifact() -> ArtifactInfo {
        ArtifactInfo {
            path: Some("payload.exe".into()),
            size_bytes: 4,
            hash: None,
        }
    }

    #[test]
    fn report_carries_verdict_and_matches() {
        let s = zip();
        let verdict = derive_verdict("payload.exe", ".exe", vec![assess(&s, &[0x50, 0x4B, 0x03, 0x04])]);

        let report = Report::new(
            ToolInfo::default(),
            artifact(),
            CatalogInfo {
                source: Some("catalog.json".into()),
                signature_count: 1,
            },
            verdict,
        );

        assert_eq!(report.schema_version, SCHEMA_VERSION);
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.detected_type.as_deref(), Some("ZIP"));
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].reason, "Exact magic number match");
        assert_eq!(report.matches[0].description, "PKZIP local file header");
    }

    #[test]
    fn report_serializes_contract_keys() {
        let s = zip();
        let verdict = derive_verdict("a.zip", ".zip", vec![assess(&s, &[0x50, 0x4B, 0x00, 0x00])]);
        let report = Report::new(ToolInfo::default(), artifact(), CatalogInfo::default(), verdict);

        let value = serde_json::to_value(&report).unwrap();
        for key in [
            "schema_version",
            "tool",
            "artifact",
            "catalog",
            "file_path",
            "observed_extension",
            "risk_level",
            "summary",
            "matches",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["risk_level"], "LOW");
        assert_eq!(value["matches"][0]["confidence_score"], 0.5);
        assert_eq!(value["matches"][0]["partial_match"], true);
        assert_eq!(value["matches"][0]["reason"], "Partial magic match (2/4 bytes)");
    }

    #[test]
    fn catalog_info_from_catalog() {
        let catalog = SignatureCatalog::new(Some("sigs.json".into()), vec![zip(), zip()]);
        let info = CatalogInfo::from(&catalog);
        assert_eq!(info.source.as_deref(), Some("sigs.json"));
        assert_eq!(info.signature_count, 2);
    }
}
