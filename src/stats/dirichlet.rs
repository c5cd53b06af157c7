// src/stats/dirichlet.rs
use crate::config::consts::BUCKETS;

use super::frequency::FrequencyTable;

/// Symmetric Dirichlet posterior mean: `alpha0` pseudo-counts spread evenly
/// over the 100 buckets. Sums to 1 for any `alpha0 > 0`.
pub fn posterior(count: u64, n: u64, alpha0: f64) -> f64 {
    (count as f64 + alpha0 / BUCKETS as f64) / (n as f64 + alpha0)
}

/// Fill in `freq` (count / max(N, 1)) and `post_p` for every row.
pub fn dirichlet_smoothing(mut table: FrequencyTable, n: u64, alpha0: f64) -> FrequencyTable {
    let denom = n.max(1) as f64;
    for b in table.rows_mut() {
        b.freq = b.count as f64 / denom;
        b.post_p = posterior(b.count, n, alpha0);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(cap: usize, count: u64, rest: u64) -> FrequencyTable {
        let mut counts = [rest; BUCKETS];
        counts[cap] = count;
        FrequencyTable::from_counts(&counts)
    }

    #[test]
    fn worked_example() {
        // 50 hits out of 5000, alpha0 = 200
        let rest = (5000 - 50) / 99;
        let t = dirichlet_smoothing(table_with(7, 50, rest), 5000, 200.0);
        let b = t.rows()[7];
        assert!((b.freq - 0.01).abs() < 1e-12);
        assert!((b.post_p - 52.0 / 5200.0).abs() < 1e-12);
    }

    #[test]
    fn posteriors_sum_to_one() {
        for (n, alpha0) in [(0u64, 0.5), (0, 200.0), (27, 1.0), (1620, 200.0), (2430, 1000.0)] {
            let mut counts = [0u64; BUCKETS];
            for i in 0..n {
                counts[(i * 37 % 100) as usize] += 1;
            }
            let t = dirichlet_smoothing(FrequencyTable::from_counts(&counts), n, alpha0);
            let sum: f64 = t.iter().map(|b| b.post_p).sum();
            assert!((sum - 1.0).abs() < 1e-9, "n={n} alpha0={alpha0} sum={sum}");
        }
    }

    #[test]
    fn zero_n_is_uniform() {
        let t = dirichlet_smoothing(FrequencyTable::from_counts(&[0; BUCKETS]), 0, 200.0);
        assert!(t.iter().all(|b| b.freq == 0.0 && (b.post_p - 0.01).abs() < 1e-15));
    }
}
