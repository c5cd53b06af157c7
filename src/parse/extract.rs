// src/parse/extract.rs
use super::classify::TableKind;
use super::patterns::Patterns;
use super::table::Table;

/// Raw tail tokens of one table, page order, duplicates kept.
pub fn extract_pairs(table: &Table<'_>, kind: TableKind, patterns: &Patterns) -> Vec<String> {
    match kind {
        TableKind::Loto => from_loto(table, patterns),
        TableKind::Result => from_results(table, patterns),
        TableKind::Unrelated => Vec::new(),
    }
}

// Tail list sits in the last column of every body row.
fn from_loto(table: &Table<'_>, patterns: &Patterns) -> Vec<String> {
    table
        .rows()
        .iter()
        .skip(1)
        .filter(|row| row.cells.len() >= 2)
        .filter_map(|row| row.last_text())
        .flat_map(|text| patterns.tails(text).map(String::from).collect::<Vec<_>>())
        .collect()
}

// Last two digits of every prize number in a data cell.
fn from_results(table: &Table<'_>, patterns: &Patterns) -> Vec<String> {
    let mut out = Vec::new();
    for cell in table.data_cells() {
        for num in patterns.numbers(&cell) {
            out.push(s!(&num[num.len() - 2..]));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::fold_case;

    fn pairs(html: &str, kind: TableKind) -> Vec<String> {
        let lc = fold_case(html);
        extract_pairs(&Table::new(html, &lc, 0), kind, &Patterns::new())
    }

    #[test]
    fn loto_uses_last_column_after_header() {
        let html = "<table><tr><th>Đầu</th><th>Loto</th></tr>\
                    <tr><td>0</td><td>01, 05, 05</td></tr>\
                    <tr><td>lone 99</td></tr>\
                    <tr><td>1</td><td>12; 19</td></tr></table>";
        assert_eq!(pairs(html, TableKind::Loto), ["01", "05", "05", "12", "19"]);
    }

    #[test]
    fn results_cut_last_two_digits_from_td_only() {
        let html = "<table><tr><th>12LG</th><td>G.ĐB</td><td>12345</td></tr>\
                    <tr><td>G.7</td><td>07 - 91 - 3</td></tr></table>";
        assert_eq!(pairs(html, TableKind::Result), ["45", "07", "91"]);
    }

    #[test]
    fn unrelated_is_empty() {
        assert!(pairs("<table><tr><td>12 34</td></tr></table>", TableKind::Unrelated).is_empty());
    }
}
