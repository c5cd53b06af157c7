// src/parse/normalize.rs
use crate::config::consts::{MAX_TAILS_PER_DAY, MIN_TAILS_PER_DAY};
use crate::model::Tail;

/// A day that came out too short to be a real drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejected {
    pub kept: usize,
}

/// Digit tokens only, first 27 kept, fewer than 20 rejects the day.
pub fn normalize_day<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Tail>, Rejected> {
    let tails: Vec<Tail> = raw
        .iter()
        .filter_map(|t| Tail::from_digits(t.as_ref()))
        .take(MAX_TAILS_PER_DAY)
        .collect();
    if tails.len() < MIN_TAILS_PER_DAY {
        return Err(Rejected { kept: tails.len() });
    }
    Ok(tails)
}
