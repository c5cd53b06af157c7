// src/store.rs
// Read back CSV files from the data directory for the quick view.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::export::BOM;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse CSV text with a header row; a leading BOM is ignored.
pub fn parse_dataset(bytes: &[u8], limit: Option<usize>) -> Result<DataSet> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for rec in rdr.records() {
        if limit.is_some_and(|n| rows.len() >= n) {
            break;
        }
        rows.push(rec?.iter().map(String::from).collect());
    }
    Ok(DataSet { headers, rows })
}

pub fn load_dataset(path: &Path) -> Result<DataSet> {
    parse_dataset(&fs::read(path)?, None)
}

/// First `n` rows only. `Ok(None)` when the file does not exist yet.
pub fn load_preview(path: &Path, n: usize) -> Result<Option<DataSet>> {
    if !path.is_file() {
        return Ok(None);
    }
    let ds = parse_dataset(&fs::read(path)?, Some(n))?;
    logd!("store: {} rows from {}", ds.rows.len(), path.display());
    Ok(Some(ds))
}
