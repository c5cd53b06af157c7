// src/stats/rank.rs
use super::frequency::{Bucket, FrequencyTable};

/// Highest posterior first; equal posteriors stay in bucket order.
pub fn rank(table: FrequencyTable) -> FrequencyTable {
    let mut rows = table.into_rows();
    rows.sort_by(|a, b| b.post_p.total_cmp(&a.post_p).then(a.cap.cmp(&b.cap)));
    FrequencyTable::from_rows(rows)
}

/// The dashboard's shortlist: ranked rows at or above `threshold`, at most `top_k`.
pub fn suggest(ranked: &FrequencyTable, threshold: f64, top_k: usize) -> Vec<Bucket> {
    ranked
        .iter()
        .filter(|b| b.post_p >= threshold)
        .take(top_k)
        .copied()
        .collect()
}
