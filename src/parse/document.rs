// src/parse/document.rs
use crate::core::html::{element_span, elements, fold_case, mask_raw_text, openers_any, text_of};

use super::table::Table;

/// Elements whose text may carry the date of the table that follows them.
const ANCHORS: [&str; 7] = ["h1", "h2", "h3", "h4", "h5", "p", "div"];

/// A fetched page, folded once for tag scanning.
pub struct Document<'a> {
    html: &'a str,
    lc: String,
    anchors: Vec<(usize, usize)>,
}

impl<'a> Document<'a> {
    pub fn parse(html: &'a str) -> Self {
        let mut lc = fold_case(html);
        mask_raw_text(&mut lc);
        let anchors = openers_any(&lc, &ANCHORS);
        Self { html, lc, anchors }
    }

    /// Every table, nested ones included, in document order.
    pub fn tables(&self) -> Vec<Table<'_>> {
        elements(&self.lc, "table")
            .into_iter()
            .map(|(s, e)| Table::new(&self.html[s..e], &self.lc[s..e], s))
            .collect()
    }

    /// Text of each anchor element opening before `pos`, nearest first.
    /// An element still open at `pos` (an ancestor) contributes only the part before it.
    pub fn text_before(&self, pos: usize) -> impl Iterator<Item = String> + '_ {
        let pos = pos.min(self.lc.len());
        let upto = self.anchors.partition_point(|&(start, _)| start < pos);
        let lc = &self.lc[..pos];
        self.anchors[..upto].iter().rev().map(move |&(start, idx)| {
            let (s, e) = element_span(lc, ANCHORS[idx], start);
            text_of(&self.html[s..e])
        })
    }
}
