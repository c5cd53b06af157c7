// src/parse/table.rs
use crate::core::html::{elements, elements_any, text_of};

/// Visible text of each `<td>`/`<th>`, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn last_text(&self) -> Option<&str> {
        self.cells.last().map(String::as_str)
    }
}

/// One `<table>` element; `html` and `lc` are the same slice, original and folded.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    html: &'a str,
    lc: &'a str,
    offset: usize,
}

impl<'a> Table<'a> {
    pub fn new(html: &'a str, lc: &'a str, offset: usize) -> Self {
        Self { html, lc, offset }
    }

    /// Byte offset of the opener within the page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn text(&self) -> String {
        text_of(self.html)
    }

    pub fn rows(&self) -> Vec<Row> {
        elements(self.lc, "tr")
            .into_iter()
            .map(|(s, e)| Row { cells: self.cells(s, e) })
            .collect()
    }

    pub fn first_row(&self) -> Option<Row> {
        let (s, e) = elements(self.lc, "tr").into_iter().next()?;
        Some(Row { cells: self.cells(s, e) })
    }

    /// Text of every `<td>`; `<th>` labels are left out.
    pub fn data_cells(&self) -> Vec<String> {
        elements(self.lc, "td")
            .into_iter()
            .map(|(s, e)| text_of(&self.html[s..e]))
            .collect()
    }

    fn cells(&self, s: usize, e: usize) -> Vec<String> {
        let (html, lc) = (&self.html[s..e], &self.lc[s..e]);
        elements_any(lc, &["td", "th"])
            .into_iter()
            .map(|(cs, ce)| text_of(&html[cs..ce]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::fold_case;

    #[test]
    fn rows_and_cells() {
        let html = "<table><TR><TH>Đầu</TH><th>Loto</th></TR><tr><td>0</td><td>01, 05</td></tr></table>";
        let lc = fold_case(html);
        let t = Table::new(html, &lc, 0);
        let rows = t.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, ["Đầu", "Loto"]);
        assert_eq!(rows[1].last_text(), Some("01, 05"));
        assert_eq!(t.data_cells(), ["0", "01, 05"]);
        assert_eq!(t.first_row(), Some(rows[0].clone()));
    }
}
