// tests/common/mod.rs
// Synthetic result pages shaped like the live site.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// Prize layout of one drawing: (label, how many numbers, digits each).
const PRIZES: [(&str, usize, usize); 8] = [
    ("G.ĐB", 1, 5),
    ("G.1", 1, 5),
    ("G.2", 2, 5),
    ("G.3", 6, 5),
    ("G.4", 4, 4),
    ("G.5", 6, 4),
    ("G.6", 3, 3),
    ("G.7", 4, 2),
];

fn prize_numbers(seed: u64) -> Vec<(usize, u64)> {
    let mut out = Vec::new();
    let mut k = 0u64;
    for &(_, n, digits) in &PRIZES {
        for _ in 0..n {
            k += 1;
            let v = (seed * 7_919 + k * 104_729 + k * k * 13) % 10u64.pow(digits as u32);
            out.push((digits, v));
        }
    }
    out
}

/// The 27 tails a result table built from `seed` must yield, in page order.
pub fn expected_tails(seed: u64) -> Vec<String> {
    prize_numbers(seed).into_iter().map(|(_, v)| format!("{:02}", v % 100)).collect()
}

/// One drawing as a full result table under a dated heading.
pub fn result_day(date: &str, seed: u64) -> String {
    let nums = prize_numbers(seed);
    let mut it = nums.iter();
    let mut rows = String::from("<tr><th colspan=\"2\">12LG-15LG-3LG</th></tr>");
    for &(label, n, _) in &PRIZES {
        let cells: Vec<String> = it
            .by_ref()
            .take(n)
            .map(|&(digits, v)| format!("{v:0digits$}"))
            .collect();
        rows.push_str(&format!(
            "<tr><td class=\"prize\">{label}</td><td><span>{}</span></td></tr>\n",
            cells.join("</span> - <span>")
        ));
    }
    format!(
        "<div class=\"block\"><h2 class=\"title\"><a href=\"/xsmb\">XSMB</a> ngày {date}</h2>\n\
         <table class=\"table-result\">{rows}</table></div>\n"
    )
}

/// A page-native "Đầu / Loto" table with the given tails spread over head rows.
pub fn loto_day(date: Option<&str>, tails: &[&str]) -> String {
    let mut rows = String::from("<tr><th>Đầu</th><th>Loto</th></tr>");
    for chunk in tails.chunks(3) {
        let head = chunk[0].chars().next().unwrap_or('0');
        rows.push_str(&format!("<tr><td>{head}</td><td>{}</td></tr>", chunk.join(", ")));
    }
    let heading = date.map(|d| format!("<h3>Loto miền Bắc {d}</h3>")).unwrap_or_default();
    format!("<div class=\"loto\">{heading}<table class=\"table-loto\">{rows}</table></div>\n")
}

/// Menu-ish table with a few numbers, must be ignored.
pub fn nav_table() -> String {
    "<table class=\"nav\"><tr><td><a href=\"/xsmb-30-ngay.html\">30 ngày</a></td>\
     <td><a href=\"/xsmb-60-ngay.html\">60 ngày</a></td></tr></table>\n"
        .to_string()
}

pub fn page(body: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>XSMB 60 ngày</title>\
         <script>var cfg = {{ rows: '<table><tr><td>99</td></tr></table>' }};</script></head>\
         <body>{}</body></html>",
        body.concat()
    )
}

pub fn tails_of(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{:02}", (i * 17) % 100)).collect()
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("xsmb_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
