use crate::report::model::Report;

/// Plain-text rendering of a report.
///
/// Only signatures that contributed some confidence are listed.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("=== File Inspection Report ===\n");
    out.push_str(&format!("File: {}\n", report.file_path));
    out.push_str(&format!("Observed Extension: {}\n", display_ext(&report.observed_extension)));
    out.push_str(&format!(
        "Detected Type: {}\n",
        report.detected_type.as_deref().unwrap_or("none")
    ));
    out.push_str(&format!("Risk Level: {}\n", report.risk_level));
    out.push_str(&format!("Summary: {}\n", report.summary));

    let positive: Vec<_> = report
        .matches
        .iter()
        .filter(|m| m.confidence_score > 0.0)
        .collect();

    if !positive.is_empty() {
        out.push('\n');
    }
    for m in positive {
        out.push_str(&format!("- {}\n", m.type_name));
        out.push_str(&format!("  Confidence: {:?}\n", m.confidence_score));
        out.push_str(&format!("  Reason: {}\n", m.reason));
    }
    out
}

fn display_ext(ext: &str) -> &str {
    if ext.is_empty() { "(none)" } else { ext }
}
