// src/core/vischars.rs
// Visible-text character iterator over an HTML fragment.
// Tags become a single separator, <script>/<style> bodies and comments are dropped,
// entities are decoded, runs of whitespace collapse to one ' '.

use super::sanitize::decode_entity;

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
    pending: Option<char>,
}

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len(), pending: None } }

    #[inline]
    fn starts_with_ci(&self, at: usize, pat: &[u8]) -> bool {
        self.b.get(at..at + pat.len()).is_some_and(|w| w.eq_ignore_ascii_case(pat))
    }

    #[inline]
    fn skip_until_ci(&mut self, pat: &[u8]) {
        while self.i < self.n && !self.starts_with_ci(self.i, pat) {
            self.i += 1;
        }
        self.i = (self.i + pat.len()).min(self.n);
    }

    #[inline]
    fn skip_tag(&mut self) {
        // called when current byte is '<'
        if self.starts_with_ci(self.i, b"<!--") {
            self.i += 4;
            self.skip_until_ci(b"-->");
            return;
        }
        let raw_body: Option<&'static [u8]> = if self.starts_with_ci(self.i, b"<script") {
            Some(b"</script>")
        } else if self.starts_with_ci(self.i, b"<style") {
            Some(b"</style>")
        } else {
            None
        };

        self.i += 1;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => { self.i += 1; break; }
                _ => {}
            }
            self.i += 1;
        }
        if let Some(close) = raw_body {
            self.skip_until_ci(close);
        }
    }

    #[inline]
    fn entity(&mut self) -> char {
        // called when current byte is '&'; bare '&' is kept as-is
        let start = self.i + 1;
        let mut j = start;
        if self.b.get(j) == Some(&b'#') { j += 1; }
        while j < self.n && j - start < 12 && self.b[j].is_ascii_alphanumeric() {
            j += 1;
        }
        if j < self.n && self.b[j] == b';' && j > start {
            self.i = j + 1;
            return decode_entity(&self.s[start..j]).unwrap_or(' ');
        }
        self.i += 1;
        '&'
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s.get(self.i..)?.chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl Iterator for VisChars<'_> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(ch) = self.pending.take() {
            return Some(ch);
        }
        let mut saw_space = false;
        while self.i < self.n {
            let ch = match self.b[self.i] {
                b'<' => { self.skip_tag(); saw_space = true; continue; }
                b'&' => self.entity(),
                _ => match self.next_char() { Some(c) => c, None => break },
            };
            if ch.is_whitespace() {
                saw_space = true;
                continue;
            }
            // collapse everything skipped so far into one separator
            if saw_space {
                self.pending = Some(ch);
                return Some(' ');
            }
            return Some(ch);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vis(s: &str) -> String { VisChars::new(s).collect() }

    #[test]
    fn tags_separate_cells() {
        assert_eq!(vis("<td>12</td><td>34</td>"), " 12 34");
    }

    #[test]
    fn script_and_comments_dropped() {
        assert_eq!(vis("a<script>var x = '<td>99</td>';</script>b<!-- 77 -->c"), "a b c");
    }

    #[test]
    fn entities_decode() {
        assert_eq!(vis("Gi&#7843;i&nbsp;&amp; R&D"), "Giải & R&D");
    }
}
