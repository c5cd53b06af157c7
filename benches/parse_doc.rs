// benches/parse_doc.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use xsmb_loto::{Crawler, analyze};

// Saved page if present, otherwise a synthetic 90-day page.
fn load_sample() -> String {
    std::fs::read_to_string(".ignore/page_samples/xsmb_90.html").unwrap_or_else(|_| synthetic_page(90))
}

fn synthetic_page(days: u64) -> String {
    let mut body = String::new();
    for d in 0..days {
        let cells: String = (0..27)
            .map(|k| format!("<td><span>{:05}</span></td>", (d * 7_919 + k * 104_729) % 100_000))
            .collect();
        body.push_str(&format!(
            "<div class=\"block\"><h2>XSMB ngày {:02}-{:02}-2025</h2>\
             <table class=\"table-result\"><tr><td>G.ĐB</td>{cells}</tr></table></div>\n",
            d % 28 + 1,
            d / 28 + 1,
        ));
    }
    format!("<html><head><script>var x = '<table></table>';</script></head><body>{body}</body></html>")
}

fn bench_parse(c: &mut Criterion) {
    let doc = load_sample();
    let crawler = Crawler::new();

    c.bench_function("parse_doc_90", |b| {
        b.iter(|| {
            let res = crawler.parse_doc(black_box(&doc), 90, None);
            black_box(res.len())
        })
    });

    let res = crawler.parse_doc(&doc, 90, None);
    c.bench_function("analyze_90", |b| {
        b.iter(|| {
            let a = analyze(black_box(&res), 200.0);
            black_box(a.fit.p_value)
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
