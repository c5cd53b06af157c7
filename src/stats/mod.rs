// src/stats/mod.rs
mod chi_square;
mod dirichlet;
mod frequency;
mod rank;
mod window;

pub use chi_square::{GoodnessOfFit, chi_square_test};
pub use dirichlet::{dirichlet_smoothing, posterior};
pub use frequency::{Bucket, FrequencyTable, Tally, counts_from_days};
pub use rank::{rank, suggest};
pub use window::{EvaluatedBucket, Judgement, WindowStats, evaluate_numbers};

use crate::model::CrawlResult;

/// Everything one dashboard run shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub days: usize,
    pub total: u64,
    pub alpha0: f64,
    /// Bucket order
    pub full: FrequencyTable,
    pub ranked: FrequencyTable,
    pub fit: GoodnessOfFit,
    pub evaluated: Vec<EvaluatedBucket>,
}

impl Analysis {
    pub fn suggestions(&self, threshold: f64, top_k: usize) -> Vec<Bucket> {
        suggest(&self.ranked, threshold, top_k)
    }
}

/// Count → smooth → test → rank → evaluate.
pub fn analyze(result: &CrawlResult, alpha0: f64) -> Analysis {
    let Tally { table, total, days } = counts_from_days(result);
    let full = dirichlet_smoothing(table, total, alpha0);
    let fit = chi_square_test(&full, total);
    let ranked = rank(full.clone());
    let evaluated = evaluate_numbers(result, &ranked, alpha0);
    logf!(
        "analyze: {days} days, N={total}, chi2={:.2}, p={:.6}",
        fit.statistic,
        fit.p_value
    );
    Analysis { days, total, alpha0, full, ranked, fit, evaluated }
}
