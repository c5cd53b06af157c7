// src/parse/day_key.rs
use std::collections::HashSet;

use super::document::Document;
use super::patterns::Patterns;
use super::table::Table;

/// Hands out a unique key per admitted day.
#[derive(Debug, Default)]
pub struct DayKeyResolver {
    synthetic: usize,
    seen: HashSet<String>,
}

impl DayKeyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Date text nearest above the table, else `day_NN`; repeats get `#2`, `#3`, ...
    pub fn resolve(&mut self, doc: &Document<'_>, table: &Table<'_>, patterns: &Patterns) -> String {
        let found = doc
            .text_before(table.offset())
            .find_map(|text| patterns.first_date(&text).map(String::from));
        self.assign(found)
    }

    pub fn assign(&mut self, found: Option<String>) -> String {
        let base = found.unwrap_or_else(|| {
            self.synthetic += 1;
            format!("day_{:02}", self.synthetic)
        });
        let mut key = base.clone();
        let mut suffix = 1;
        while self.seen.contains(&key) {
            suffix += 1;
            key = format!("{base}#{suffix}");
        }
        self.seen.insert(key.clone());
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_date_gets_suffix() {
        let mut r = DayKeyResolver::new();
        assert_eq!(r.assign(Some(s!("12/05/2025"))), "12/05/2025");
        assert_eq!(r.assign(Some(s!("12/05/2025"))), "12/05/2025#2");
        assert_eq!(r.assign(Some(s!("12/05/2025"))), "12/05/2025#3");
    }

    #[test]
    fn synthetic_counter_only_moves_when_no_date() {
        let mut r = DayKeyResolver::new();
        assert_eq!(r.assign(None), "day_01");
        assert_eq!(r.assign(Some(s!("2025-05-12"))), "2025-05-12");
        assert_eq!(r.assign(None), "day_02");
    }

    #[test]
    fn resolves_from_heading_above() {
        let html = "<h2>XSMB 11/05/2025</h2><p>Bảng loto</p><table><tr><td>1</td></tr></table>";
        let doc = Document::parse(html);
        let table = doc.tables()[0];
        let mut r = DayKeyResolver::new();
        assert_eq!(r.resolve(&doc, &table, &Patterns::new()), "11/05/2025");
    }
}
