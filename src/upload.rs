// src/upload.rs
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::consts::BUCKETS;
use crate::error::{Error, Result};
use crate::export::BOM;
use crate::model::Tail;
use crate::stats::{FrequencyTable, GoodnessOfFit, chi_square_test, dirichlet_smoothing, rank};

const REQUIRED: [&str; 2] = ["cap", "count"];

/// Counts from a user CSV with `cap` and `count` columns (any order, extra
/// columns ignored). Repeated caps add up; caps never mentioned count 0.
pub fn parse_counts<R: Read>(mut reader: R) -> Result<FrequencyTable> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    let bytes = raw.strip_prefix(BOM).unwrap_or(&raw);

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers: HashMap<String, usize> = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_ascii_lowercase(), i))
        .collect();
    let missing: Vec<&'static str> = REQUIRED.into_iter().filter(|c| !headers.contains_key(*c)).collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }
    let (cap_col, count_col) = (headers["cap"], headers["count"]);

    let mut counts = [0u64; BUCKETS];
    for rec in rdr.records() {
        let rec = rec?;
        let row = rec.position().map_or(0, |p| p.line() as usize);
        let field = |i: usize| rec.get(i).unwrap_or("");

        let cap: Tail = field(cap_col)
            .parse()
            .map_err(|reason| Error::InvalidRow { row, reason })?;
        let count: u64 = field(count_col).parse().map_err(|_| Error::InvalidRow {
            row,
            reason: format!("count {:?} is not a non-negative whole number", field(count_col)),
        })?;
        counts[cap.index()] += count;
    }
    Ok(FrequencyTable::from_counts(&counts))
}

pub fn load_counts(path: &Path) -> Result<FrequencyTable> {
    let table = parse_counts(File::open(path)?)?;
    logf!("upload: {} (N={})", path.display(), table.total());
    Ok(table)
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadAnalysis {
    pub total: u64,
    pub alpha0: f64,
    pub fit: GoodnessOfFit,
    pub ranked: FrequencyTable,
}

/// Smooth with the upload's own `alpha0`, test, rank.
pub fn analyze_upload(table: FrequencyTable, alpha0: f64) -> UploadAnalysis {
    let total = table.total();
    let smoothed = dirichlet_smoothing(table, total, alpha0);
    let fit = chi_square_test(&smoothed, total);
    UploadAnalysis { total, alpha0, fit, ranked: rank(smoothed) }
}
