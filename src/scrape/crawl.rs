// src/scrape/crawl.rs
use crate::{
    config::{FetchConfig, Window},
    core::{Fetch, HttpFetcher},
    error::Result,
    model::{CrawlResult, DayRecord},
    parse::{DayKeyResolver, Document, Patterns, TableKind, classify, extract_pairs, normalize_day},
    progress::Progress,
};

/// Owns the compiled patterns; one instance can parse any number of pages.
#[derive(Clone, Debug, Default)]
pub struct Crawler {
    patterns: Patterns,
}

impl Crawler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every table in page order and keep the days that survive
    /// classification and normalization, stopping at `max_days`.
    pub fn parse_doc(
        &self,
        html: &str,
        max_days: usize,
        mut progress: Option<&mut dyn Progress>,
    ) -> CrawlResult {
        let doc = Document::parse(html);
        let tables = doc.tables();
        let mut keys = DayKeyResolver::new();
        let mut out = CrawlResult::new();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(max_days.min(tables.len()));
        }
        logd!("crawl: {} tables on page", tables.len());

        for (idx, table) in tables.iter().enumerate() {
            if out.len() >= max_days {
                break;
            }
            let kind = classify(table, &self.patterns);
            if kind == TableKind::Unrelated {
                continue;
            }
            let raw = extract_pairs(table, kind, &self.patterns);
            if raw.is_empty() {
                continue;
            }
            let tails = match normalize_day(&raw) {
                Ok(t) => t,
                Err(rej) => {
                    logd!("crawl: table {idx} ({kind:?}) dropped, {} tails", rej.kept);
                    continue;
                }
            };

            let key = keys.resolve(&doc, table, &self.patterns);
            logd!("crawl: table {idx} ({kind:?}) → {key} [{}]", tails.len());
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&key);
            }
            out.push(DayRecord::new(key, tails));
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        out
    }
}

/// Parse an already fetched page with a fresh [`Crawler`].
pub fn parse_doc(html: &str, max_days: usize) -> CrawlResult {
    Crawler::new().parse_doc(html, max_days, None)
}

/// Fetch the page for `window` (env-aware defaults) and parse it.
pub fn crawl(window: Window, max_days: usize) -> Result<CrawlResult> {
    let cfg = FetchConfig::from_env();
    let fetcher = HttpFetcher::new(&cfg)?;
    crawl_with(&fetcher, &cfg, window, max_days, None)
}

pub fn crawl_with(
    fetcher: &dyn Fetch,
    cfg: &FetchConfig,
    window: Window,
    max_days: usize,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlResult> {
    let url = cfg.url_for(window);
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {url}…"));
    }
    logf!("crawl: GET {url}");

    let html = match fetcher.get(url) {
        Ok(h) => h,
        Err(e) => {
            loge!("crawl: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };
    logf!("crawl: {} bytes from {url}", html.len());

    let res = Crawler::new().parse_doc(&html, max_days, progress);
    logf!("crawl: {} days, {} pairs", res.len(), res.total_pairs());
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;

    fn result_table(date: &str, tails: usize) -> String {
        let cells: String = (0..tails).map(|i| format!("<td>{:05}</td>", 10_000 + i)).collect();
        format!("<h2>XSMB {date}</h2><table><tr><td>G.ĐB</td>{cells}</tr></table>")
    }

    struct Canned {
        body: String,
        hits: RefCell<Vec<String>>,
    }

    impl Fetch for Canned {
        fn get(&self, url: &str) -> Result<String> {
            self.hits.borrow_mut().push(s!(url));
            Ok(self.body.clone())
        }
    }

    struct Down;

    impl Fetch for Down {
        fn get(&self, url: &str) -> Result<String> {
            Err(Error::Status { url: s!(url), status: reqwest::StatusCode::BAD_GATEWAY })
        }
    }

    #[test]
    fn max_days_stops_early() {
        let page: String = (1..=5).map(|d| result_table(&format!("0{d}/05/2025"), 27)).collect();
        let res = parse_doc(&page, 3);
        let keys: Vec<&str> = res.iter().map(|d| d.key()).collect();
        assert_eq!(keys, ["01/05/2025", "02/05/2025", "03/05/2025"]);
        assert!(parse_doc(&page, 0).is_empty());
    }

    #[test]
    fn short_day_is_skipped_without_using_a_key() {
        let page = format!("{}{}", result_table("01/05/2025", 15), result_table("01/05/2025", 25));
        let res = parse_doc(&page, 60);
        assert_eq!(res.len(), 1);
        assert_eq!(res.days()[0].key(), "01/05/2025");
        assert_eq!(res.days()[0].tails().len(), 25);
    }

    #[test]
    fn crawl_with_uses_window_url() {
        let fetcher = Canned { body: result_table("01/05/2025", 27), hits: RefCell::default() };
        let cfg = FetchConfig::default();
        let res = crawl_with(&fetcher, &cfg, Window::Days90, 90, None).unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(fetcher.hits.borrow().as_slice(), [cfg.url_90.clone()]);
    }

    #[test]
    fn fetch_failure_propagates() {
        let err = crawl_with(&Down, &FetchConfig::default(), Window::Days60, 60, None).unwrap_err();
        assert!(matches!(err, Error::Status { .. }));
    }
}
