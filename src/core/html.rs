// src/core/html.rs
//! Tag scanning over case-folded HTML.
//!
//! Every function takes the folded text (see [`fold_case`]) and returns byte
//! offsets, which are valid against the original document as well.

use super::sanitize::normalize_ws;
use super::vischars::VisChars;

pub use super::sanitize::fold_case;

#[inline]
fn ends_tag_name(b: Option<&u8>) -> Option<bool> {
    b.map(|b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
}

fn find_tag(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut at = from;
    loop {
        let start = at + lc.get(at..)?.find(pat)?;
        // `<td` must not match `<tdata`
        if ends_tag_name(lc.as_bytes().get(start + pat.len()))? {
            return Some(start);
        }
        at = start + pat.len();
    }
}

/// Next `<name ...>` opener at or after `from`.
pub fn find_open_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    find_tag(lc, &format!("<{name}"), from)
}

/// Next `</name>` closer at or after `from`.
pub fn find_close_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    find_tag(lc, &format!("</{name}"), from)
}

/// Offset just past the `>` of the tag starting at `start` (or end of input).
pub fn tag_end(lc: &str, start: usize) -> usize {
    lc.get(start..)
        .and_then(|t| t.find('>'))
        .map_or(lc.len(), |i| start + i + 1)
}

/// Span of the element whose opener sits at `start`, closer included.
/// Nested elements of the same name are balanced; an unclosed element runs
/// to the end of the input.
pub fn element_span(lc: &str, name: &str, start: usize) -> (usize, usize) {
    let mut depth = 1usize;
    let mut at = tag_end(lc, start);
    loop {
        let open = find_open_tag(lc, name, at);
        let close = find_close_tag(lc, name, at);
        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                at = tag_end(lc, o);
            }
            (_, Some(c)) => {
                depth -= 1;
                at = tag_end(lc, c);
                if depth == 0 {
                    return (start, at);
                }
            }
            (_, None) => return (start, lc.len()),
        }
    }
}

/// All `name` elements in opener order, nested ones included.
pub fn elements(lc: &str, name: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut at = 0;
    while let Some(start) = find_open_tag(lc, name, at) {
        out.push(element_span(lc, name, start));
        at = tag_end(lc, start);
    }
    out
}

/// Like [`elements`] over several names, merged back into document order.
pub fn elements_any(lc: &str, names: &[&str]) -> Vec<(usize, usize)> {
    let mut out: Vec<(usize, usize)> = names.iter().flat_map(|n| elements(lc, n)).collect();
    out.sort_unstable_by_key(|&(start, _)| start);
    out
}

/// Opener offsets for several names, ascending.
pub fn openers_any(lc: &str, names: &[&str]) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (idx, name) in names.iter().enumerate() {
        let mut at = 0;
        while let Some(start) = find_open_tag(lc, name, at) {
            out.push((start, idx));
            at = tag_end(lc, start);
        }
    }
    out.sort_unstable();
    out
}

/// Blank out comments and `<script>`/`<style>` elements so nothing inside them
/// is taken for markup. Length and offsets are unchanged.
pub fn mask_raw_text(lc: &mut String) {
    const RAW: [(&str, &str); 3] = [("<!--", "-->"), ("<script", "</script>"), ("<style", "</style>")];
    let mut at = 0;
    loop {
        let next = RAW
            .iter()
            .filter_map(|&(open, close)| lc[at..].find(open).map(|i| (at + i, open, close)))
            .min_by_key(|&(i, _, _)| i);
        let Some((start, open, close)) = next else { break };
        let body = start + open.len();
        let end = lc[body..].find(close).map_or(lc.len(), |i| body + i + close.len());
        lc.replace_range(start..end, &" ".repeat(end - start));
        at = end;
    }
}

/// Visible text of a fragment, whitespace-collapsed and trimmed.
pub fn text_of(html: &str) -> String {
    let raw: String = VisChars::new(html).collect();
    normalize_ws(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_needs_name_boundary() {
        let lc = "<tbody><tr><td>1</td></tr>";
        assert_eq!(find_open_tag(lc, "t", 0), None);
        assert_eq!(find_open_tag(lc, "tr", 0), Some(7));
        assert_eq!(find_open_tag(lc, "td", 0), Some(11));
    }

    #[test]
    fn nested_tables_balance() {
        let lc = "<table><tr><td><table><tr><td>x</td></tr></table></td></tr></table>tail";
        let spans = elements(lc, "table");
        assert_eq!(spans.len(), 2);
        assert_eq!(&lc[spans[0].0..spans[0].1], &lc[..lc.len() - 4]);
        assert!(lc[spans[1].0..spans[1].1].starts_with("<table><tr><td>x"));
    }

    #[test]
    fn unclosed_runs_to_end() {
        let lc = "<div>a<div>b</div>";
        assert_eq!(element_span(lc, "div", 0), (0, lc.len()));
    }

    #[test]
    fn mixed_names_keep_document_order() {
        let lc = "<tr><th>a</th><td>b</td><th>c</th></tr>";
        let cells: Vec<_> = elements_any(lc, &["td", "th"]).iter().map(|&(s, e)| text_of(&lc[s..e])).collect();
        assert_eq!(cells, ["a", "b", "c"]);
    }

    #[test]
    fn masked_script_hides_tables() {
        let mut lc = fold_case("<script>x='<table>'</script><!-- <table> --><table>ả</table>");
        let len = lc.len();
        mask_raw_text(&mut lc);
        assert_eq!(lc.len(), len);
        assert_eq!(elements(&lc, "table").len(), 1);
        assert!(lc.trim_start().starts_with("<table>"));
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(text_of("<h2> Kết quả <b>ngày</b> 12-05-2025 </h2>"), "Kết quả ngày 12-05-2025");
    }
}
