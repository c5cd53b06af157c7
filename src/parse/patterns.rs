// src/parse/patterns.rs
use regex::Regex;

/// Compiled once per crawler, reused for every table.
#[derive(Clone, Debug)]
pub struct Patterns {
    /// Standalone two-digit token (loto cells)
    pub tail: Regex,
    /// Standalone 2..=5 digit prize number
    pub number: Regex,
    /// `DD-MM-YYYY`-ish or `YYYY-MM-DD`-ish, `-` or `/`
    pub date: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            tail: Regex::new(r"\b[0-9]{2}\b").expect("tail pattern"),
            number: Regex::new(r"\b[0-9]{2,5}\b").expect("number pattern"),
            date: Regex::new(r"[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{2,4}|[0-9]{4}[-/][0-9]{1,2}[-/][0-9]{1,2}")
                .expect("date pattern"),
        }
    }

    pub fn tails<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.tail.find_iter(text).map(|m| m.as_str())
    }

    pub fn numbers<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.number.find_iter(text).map(|m| m.as_str())
    }

    /// First date-looking substring, if any.
    pub fn first_date<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.date.find(text).map(|m| m.as_str())
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_respect_word_boundaries() {
        let p = Patterns::new();
        assert_eq!(p.tails("0: 01, 05 123 9").collect::<Vec<_>>(), ["01", "05"]);
        assert_eq!(p.numbers("G.1 45678 12 7 123456").collect::<Vec<_>>(), ["45678", "12"]);
    }

    #[test]
    fn dates_both_orders() {
        let p = Patterns::new();
        assert_eq!(p.first_date("XSMB thứ 2 ngày 12/05/2025"), Some("12/05/2025"));
        assert_eq!(p.first_date("Kết quả 2025-5-12"), Some("2025-5-12"));
        assert_eq!(p.first_date("Loto miền Bắc"), None);
    }
}
