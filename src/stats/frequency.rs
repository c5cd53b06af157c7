// src/stats/frequency.rs
use serde::Serialize;

use crate::config::consts::BUCKETS;
use crate::model::{CrawlResult, DayRecord, Tail};

/// One row of the 100-bucket table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bucket {
    pub cap: Tail,
    pub count: u64,
    pub freq: f64,
    pub post_p: f64,
}

impl Bucket {
    pub fn new(cap: Tail, count: u64) -> Self {
        Self { cap, count, freq: 0.0, post_p: 0.0 }
    }
}

/// Always 100 rows; order is bucket order until ranked.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyTable {
    rows: Vec<Bucket>,
}

impl FrequencyTable {
    /// `counts[i]` is the count for tail `i`.
    pub fn from_counts(counts: &[u64; BUCKETS]) -> Self {
        let rows = Tail::all().map(|t| Bucket::new(t, counts[t.index()])).collect();
        Self { rows }
    }

    pub(crate) fn from_rows(rows: Vec<Bucket>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Bucket] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Bucket] {
        &mut self.rows
    }

    pub fn into_rows(self) -> Vec<Bucket> {
        self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.rows.iter()
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().map(|b| b.count).sum()
    }
}

/// Counts plus the two totals the rest of the analysis needs.
#[derive(Clone, Debug, PartialEq)]
pub struct Tally {
    pub table: FrequencyTable,
    /// N, every tail of every day
    pub total: u64,
    pub days: usize,
}

pub(crate) fn tally_days(days: &[DayRecord]) -> ([u64; BUCKETS], u64) {
    let mut counts = [0u64; BUCKETS];
    let mut total = 0u64;
    for tail in days.iter().flat_map(|d| d.tails()) {
        counts[tail.index()] += 1;
        total += 1;
    }
    (counts, total)
}

pub fn counts_from_days(result: &CrawlResult) -> Tally {
    let (counts, total) = tally_days(result.days());
    Tally { table: FrequencyTable::from_counts(&counts), total, days: result.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(key: &str, vals: &[u8]) -> DayRecord {
        DayRecord::new(key, vals.iter().filter_map(|&v| Tail::new(v)).collect())
    }

    #[test]
    fn counts_sum_to_n_and_cover_all_buckets() {
        let res: CrawlResult = [day("a", &[1, 1, 7, 99]), day("b", &[7, 0])].into_iter().collect();
        let t = counts_from_days(&res);
        assert_eq!(t.total, 6);
        assert_eq!(t.days, 2);
        assert_eq!(t.table.rows().len(), 100);
        assert_eq!(t.table.total(), t.total);
        assert_eq!(t.table.rows()[7].count, 2);
        assert_eq!(t.table.rows()[50].count, 0);
    }

    #[test]
    fn empty_crawl() {
        let t = counts_from_days(&CrawlResult::new());
        assert_eq!((t.total, t.days), (0, 0));
        assert!(t.table.iter().all(|b| b.count == 0));
    }
}
