// src/stats/window.rs
//! Short- vs long-window comparison per bucket.
//!
//! A window of k days is the first k day-records of the crawl, i.e. the k most
//! recent drawings the page listed. Gaps in the page (holidays, outages) make a
//! window span more calendar days than its name.

use std::fmt;

use serde::Serialize;

use crate::config::consts::{BUCKETS, HOT_WEEK_HITS, STRONG_POSTERIOR, WEAK_POSTERIOR, WINDOWS};
use crate::model::{CrawlResult, Tail};

use super::dirichlet::posterior;
use super::frequency::{Bucket, FrequencyTable, tally_days};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WindowStats {
    pub hits_1d: u64,
    pub hits_7d: u64,
    pub hits_30d: u64,
    pub hits_90d: u64,
    pub post_7d: f64,
    pub post_30d: f64,
    pub post_90d: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Judgement {
    FallingHard,
    HotShortWeakBase,
    GoodBaseCooled,
    AwaitingActivation,
    Neutral,
}

impl Judgement {
    pub const ALL: [Judgement; 5] = [
        Judgement::FallingHard,
        Judgement::HotShortWeakBase,
        Judgement::GoodBaseCooled,
        Judgement::AwaitingActivation,
        Judgement::Neutral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Judgement::FallingHard => "Falling hard, short and long term",
            Judgement::HotShortWeakBase => "Hot short-term, weak long-term base",
            Judgement::GoodBaseCooled => "Good base, cooled this week",
            Judgement::AwaitingActivation => "Awaiting activation, strong long-term",
            Judgement::Neutral => "Neutral",
        }
    }

    /// First matching rule wins.
    pub fn judge(w: &WindowStats) -> Self {
        if w.hits_1d > 0 && w.hits_7d >= HOT_WEEK_HITS && w.post_90d >= STRONG_POSTERIOR {
            Judgement::FallingHard
        } else if w.hits_7d >= HOT_WEEK_HITS && w.post_90d < WEAK_POSTERIOR {
            Judgement::HotShortWeakBase
        } else if w.hits_7d == 0 && w.post_30d >= STRONG_POSTERIOR && w.post_90d >= STRONG_POSTERIOR {
            Judgement::GoodBaseCooled
        } else if w.hits_30d == 0 && w.post_90d >= STRONG_POSTERIOR {
            Judgement::AwaitingActivation
        } else {
            Judgement::Neutral
        }
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Judgement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluatedBucket {
    pub bucket: Bucket,
    pub window: WindowStats,
    pub judgement: Judgement,
}

impl EvaluatedBucket {
    pub fn cap(&self) -> Tail {
        self.bucket.cap
    }
}

struct WindowCounts {
    counts: [u64; BUCKETS],
    total: u64,
}

fn window_counts(result: &CrawlResult, k: usize) -> WindowCounts {
    let (counts, total) = tally_days(result.latest(k));
    WindowCounts { counts, total }
}

/// Window hits and posteriors for every bucket, judged, in `ranked` order.
pub fn evaluate_numbers(result: &CrawlResult, ranked: &FrequencyTable, alpha0: f64) -> Vec<EvaluatedBucket> {
    let [w1, w7, w30, w90] = WINDOWS.map(|k| window_counts(result, k));
    let post = |w: &WindowCounts, i: usize| posterior(w.counts[i], w.total, alpha0);

    ranked
        .iter()
        .map(|b| {
            let i = b.cap.index();
            let window = WindowStats {
                hits_1d: w1.counts[i],
                hits_7d: w7.counts[i],
                hits_30d: w30.counts[i],
                hits_90d: w90.counts[i],
                post_7d: post(&w7, i),
                post_30d: post(&w30, i),
                post_90d: post(&w90, i),
            };
            EvaluatedBucket { bucket: *b, window, judgement: Judgement::judge(&window) }
        })
        .collect()
}
