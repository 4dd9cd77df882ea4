use crate::matching::model::MatchAssessment;
use crate::util::deterministic::first_max_by_key;

/// Pick the best candidate among `assessments`.
///
/// Full matches are preferred over everything else. Within the preferred
/// group the highest confidence wins, ties going to the earlier catalog
/// entry. A candidate with zero confidence is not a candidate at all, so
/// an empty list and an all-zero list both yield `None`.
pub fn select_best(assessments: &[MatchAssessment<'_>]) -> Option<usize> {
    let has_full = assessments.iter().any(|a| a.full_match);

    let candidates: Vec<(usize, &MatchAssessment<'_>)> = assessments
        .iter()
        .enumerate()
        .filter(|(_, a)| !has_full || a.full_match)
        .collect();

    let pick = first_max_by_key(candidates.iter(), |(_, a)| a.confidence_score)?;
    let (idx, best) = candidates[pick];

    (best.confidence_score > 0.0).then_some(idx)
}
