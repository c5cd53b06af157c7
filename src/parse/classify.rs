// src/parse/classify.rs
use crate::config::consts::RESULT_TABLE_MIN_NUMBERS;

use super::patterns::Patterns;
use super::table::Table;

/// Prize labels that only show up in a full results table (lowercased).
const PRIZE_MARKERS: [&str; 4] = ["g.đb", "g.db", "giải đặc biệt", "g.1"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// Page-native breakdown: header row has "Đầu" and "Loto" columns.
    Loto,
    /// A full drawing, tails have to be cut from the prize numbers.
    Result,
    Unrelated,
}

pub fn classify(table: &Table<'_>, patterns: &Patterns) -> TableKind {
    if is_loto(table) {
        return TableKind::Loto;
    }
    let text = table.text().to_lowercase();
    if PRIZE_MARKERS.iter().any(|m| text.contains(m))
        || patterns.numbers(&text).count() >= RESULT_TABLE_MIN_NUMBERS
    {
        return TableKind::Result;
    }
    TableKind::Unrelated
}

fn is_loto(table: &Table<'_>) -> bool {
    let Some(head) = table.first_row() else { return false };
    let labels: Vec<String> = head.cells.iter().map(|c| c.to_lowercase()).collect();
    labels.iter().any(|t| t.contains("đầu")) && labels.iter().any(|t| t.contains("loto"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::fold_case;

    fn kind(html: &str) -> TableKind {
        let lc = fold_case(html);
        classify(&Table::new(html, &lc, 0), &Patterns::new())
    }

    #[test]
    fn loto_header() {
        assert_eq!(kind("<table><tr><th>ĐẦU</th><th>LOTO</th></tr></table>"), TableKind::Loto);
        // "Đầu" must be in the first row
        assert_eq!(kind("<table><tr><td>x</td></tr><tr><td>Đầu</td><td>Loto</td></tr></table>"), TableKind::Unrelated);
    }

    #[test]
    fn prize_marker_or_many_numbers() {
        assert_eq!(kind("<table><tr><td>G.ĐB</td><td>12345</td></tr></table>"), TableKind::Result);
        let many: String = (10..30).map(|n| format!("<td>{n}</td>")).collect();
        assert_eq!(kind(&format!("<table><tr>{many}</tr></table>")), TableKind::Result);
        let few: String = (10..29).map(|n| format!("<td>{n}</td>")).collect();
        assert_eq!(kind(&format!("<table><tr>{few}</tr></table>")), TableKind::Unrelated);
    }
}
