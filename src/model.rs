// src/model.rs
//! Value types shared by the crawler and the statistics.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::config::consts::BUCKETS;

/// A two-digit loto tail, `00`..=`99`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tail(u8);

impl Tail {
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < BUCKETS).then_some(Self(value))
    }

    /// Token of ASCII digits to a tail: shorter tokens are zero-padded,
    /// longer ones keep their last two digits.
    pub fn from_digits(token: &str) -> Option<Self> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let b = token.as_bytes();
        let tens = if b.len() >= 2 { b[b.len() - 2] - b'0' } else { 0 };
        let ones = b[b.len() - 1] - b'0';
        Some(Self(tens * 10 + ones))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// 00, 01, .., 99
    pub fn all() -> impl Iterator<Item = Tail> {
        (0..BUCKETS as u8).map(Tail)
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for Tail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Uploaded `cap` values: `"7"`, `"07"` and `" 07 "` all mean tail 07.
impl FromStr for Tail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() || t.len() > 2 || !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("cap {s:?} is not a number between 00 and 99"));
        }
        Tail::from_digits(t).ok_or_else(|| format!("cap {s:?} is not a number between 00 and 99"))
    }
}

/// One admitted drawing day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRecord {
    key: String,
    tails: Vec<Tail>,
}

impl DayRecord {
    /// Only the crawler builds records, after the day has passed the 20..=27
    /// tail check.
    pub(crate) fn new(key: impl Into<String>, tails: Vec<Tail>) -> Self {
        Self { key: key.into(), tails }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn tails(&self) -> &[Tail] {
        &self.tails
    }
}

/// Day records in page order; the page lists the most recent day first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrawlResult {
    days: Vec<DayRecord>,
}

impl CrawlResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: DayRecord) {
        self.days.push(day);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.days.iter().any(|d| d.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&[Tail]> {
        self.days.iter().find(|d| d.key == key).map(|d| d.tails())
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// The first `k` records, or all of them when fewer exist.
    pub fn latest(&self, k: usize) -> &[DayRecord] {
        &self.days[..k.min(self.days.len())]
    }

    pub fn total_pairs(&self) -> usize {
        self.days.iter().map(|d| d.tails.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayRecord> {
        self.days.iter()
    }
}

impl FromIterator<DayRecord> for CrawlResult {
    fn from_iter<I: IntoIterator<Item = DayRecord>>(iter: I) -> Self {
        Self { days: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CrawlResult {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
