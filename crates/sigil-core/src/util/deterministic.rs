//! Deterministic numeric and ordering helpers.
//!
//! Identical inputs must always produce identical reports, so scoring and
//! candidate selection go through these helpers rather than ad hoc float
//! handling at each call site.

/// Round `value` to three decimal places.
///
/// Confidence scores are reported at this precision.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Index of the first element with the greatest key.
///
/// Later elements must be strictly greater to displace an earlier one, so
/// ties resolve to input order. Returns `None` for an empty iterator.
pub fn first_max_by_key<T, I>(items: I, key: impl Fn(&T) -> f64) -> Option<usize>
where
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, item) in items.into_iter().enumerate() {
        let k = key(&item);
        match best {
            Some((_, current)) if k <= current => {}
            _ => best = Some((idx, k)),
        }
    }
    best.map(|(idx, _)| idx)
}
