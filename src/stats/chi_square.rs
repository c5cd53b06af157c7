// src/stats/chi_square.rs
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::config::consts::{BUCKETS, CHI_SQUARE_DOF, SIGNIFICANCE_LEVEL};

use super::frequency::FrequencyTable;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoodnessOfFit {
    pub statistic: f64,
    pub p_value: f64,
}

impl GoodnessOfFit {
    /// Counts deviate from uniform at the 5% level.
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// Pearson's test against 1% per bucket, 99 degrees of freedom.
/// With no observations the result is `(0.0, 1.0)`.
pub fn chi_square_test(table: &FrequencyTable, n: u64) -> GoodnessOfFit {
    if n == 0 {
        return GoodnessOfFit { statistic: 0.0, p_value: 1.0 };
    }
    let expected = n as f64 / BUCKETS as f64;
    let statistic: f64 = table
        .iter()
        .map(|b| {
            let d = b.count as f64 - expected;
            d * d / expected
        })
        .sum();
    // upper tail
    let p_value = ChiSquared::new(CHI_SQUARE_DOF).map_or(1.0, |dist| dist.sf(statistic));
    GoodnessOfFit { statistic, p_value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_is_degenerate() {
        let t = FrequencyTable::from_counts(&[0; BUCKETS]);
        assert_eq!(chi_square_test(&t, 0), GoodnessOfFit { statistic: 0.0, p_value: 1.0 });
    }

    #[test]
    fn perfectly_uniform() {
        let t = FrequencyTable::from_counts(&[20; BUCKETS]);
        let g = chi_square_test(&t, 2000);
        assert_eq!(g.statistic, 0.0);
        assert!((g.p_value - 1.0).abs() < 1e-12);
        assert!(!g.is_significant());
    }

    #[test]
    fn skewed_counts_are_significant() {
        let mut counts = [10u64; BUCKETS];
        counts[0] = 200;
        let n: u64 = counts.iter().sum();
        let g = chi_square_test(&FrequencyTable::from_counts(&counts), n);
        assert!(g.statistic > 1000.0);
        assert!(g.p_value < 1e-6);
        assert!(g.is_significant());
    }

    #[test]
    fn statistic_near_dof_is_not_significant() {
        // half the buckets 10 over, half 10 under: statistic 100 on 99 dof
        let counts: [u64; BUCKETS] = std::array::from_fn(|i| if i % 2 == 0 { 110 } else { 90 });
        let g = chi_square_test(&FrequencyTable::from_counts(&counts), 10_000);
        assert!((g.statistic - 100.0).abs() < 1e-9);
        assert!(g.p_value > 0.40 && g.p_value < 0.50, "p = {}", g.p_value);
    }
}
