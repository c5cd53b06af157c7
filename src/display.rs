// src/display.rs
// Terminal tables for the CLI.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::{
    model::CrawlResult,
    stats::{Bucket, EvaluatedBucket, GoodnessOfFit},
};

fn table<const N: usize>(header: [&str; N]) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    t
}

/// Day count, pair count and a peek at the first two days.
pub fn crawl_summary(days: &CrawlResult) {
    println!("Days collected: {}; total pairs: {}", days.len(), days.total_pairs());
    for day in days.latest(2) {
        let head: Vec<String> = day.tails().iter().take(10).map(|t| t.to_string()).collect();
        println!("{} [{}] …", day.key(), head.join(", "));
    }
}

pub fn fit_summary(days: Option<usize>, total: u64, fit: &GoodnessOfFit) {
    if let Some(d) = days {
        println!("Days collected : {d}");
    }
    println!("Total pairs    : {total}");
    println!("Chi-square     : {:.2}", fit.statistic);
    println!(
        "p-value        : {:.6} ({})",
        fit.p_value,
        if fit.is_significant() { "significant deviation from uniform" } else { "close to random" }
    );
}

pub fn buckets(rows: &[Bucket]) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }
    let mut t = table(["Pair", "Count", "Frequency", "Posterior"]);
    for b in rows {
        t.add_row(cells![b.cap, b.count, format!("{:.4}", b.freq), format!("{:.6}", b.post_p)]);
    }
    println!("{t}");
}

pub fn evaluation(rows: &[EvaluatedBucket]) {
    let mut t = table(["Pair", "Posterior", "1d", "7d", "30d", "90d", "Post 7d", "Post 30d", "Post 90d", "Judgement"]);
    for e in rows {
        let w = &e.window;
        t.add_row(cells![
            e.bucket.cap,
            format!("{:.6}", e.bucket.post_p),
            w.hits_1d,
            w.hits_7d,
            w.hits_30d,
            w.hits_90d,
            format!("{:.6}", w.post_7d),
            format!("{:.6}", w.post_30d),
            format!("{:.6}", w.post_90d),
            e.judgement,
        ]);
    }
    println!("{t}");
}
