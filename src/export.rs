// src/export.rs
//! CSV output of an analysis run.
//!
//! Files start with a UTF-8 byte-order mark so spreadsheet tools open them
//! as UTF-8.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{ExportKind, ExportOptions};
use crate::error::{Error, Result};
use crate::model::Tail;
use crate::stats::{Analysis, Bucket, EvaluatedBucket, Judgement};

pub const BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Serialize)]
struct EvaluationRow {
    cap: Tail,
    count: u64,
    freq: f64,
    post_p: f64,
    hits_1d: u64,
    hits_7d: u64,
    hits_30d: u64,
    hits_90d: u64,
    post_7d: f64,
    post_30d: f64,
    post_90d: f64,
    judgement: Judgement,
}

impl From<&EvaluatedBucket> for EvaluationRow {
    fn from(e: &EvaluatedBucket) -> Self {
        let (b, w) = (&e.bucket, &e.window);
        Self {
            cap: b.cap,
            count: b.count,
            freq: b.freq,
            post_p: b.post_p,
            hits_1d: w.hits_1d,
            hits_7d: w.hits_7d,
            hits_30d: w.hits_30d,
            hits_90d: w.hits_90d,
            post_7d: w.post_7d,
            post_30d: w.post_30d,
            post_90d: w.post_90d,
            judgement: e.judgement,
        }
    }
}

fn write_records<W: Write, T: Serialize>(mut w: W, rows: impl IntoIterator<Item = T>) -> Result<W> {
    w.write_all(BOM)?;
    let mut csv = csv::Writer::from_writer(w);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    csv.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// `cap,count,freq,post_p`
pub fn write_buckets<W: Write>(w: W, rows: &[Bucket]) -> Result<W> {
    write_records(w, rows)
}

/// Bucket columns, then window hits/posteriors and the judgement label.
pub fn write_evaluation<W: Write>(w: W, rows: &[EvaluatedBucket]) -> Result<W> {
    write_records(w, rows.iter().map(EvaluationRow::from))
}

/// File contents for one export, BOM included.
pub fn export_bytes(analysis: &Analysis, kind: ExportKind) -> Result<Vec<u8>> {
    match kind {
        ExportKind::Ranked => write_buckets(Vec::new(), analysis.ranked.rows()),
        ExportKind::Full => write_buckets(Vec::new(), analysis.full.rows()),
        ExportKind::Evaluated => write_evaluation(Vec::new(), &analysis.evaluated),
    }
}

/// Write one export to an explicit path, creating parent directories.
pub fn export_to(analysis: &Analysis, kind: ExportKind, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, export_bytes(analysis, kind)?)?;
    logf!("export: {} → {}", kind.label(), path.display());
    Ok(())
}

/// All three exports into the configured directory.
pub fn export_analysis(analysis: &Analysis, opts: &ExportOptions) -> Result<Vec<PathBuf>> {
    ExportKind::ALL
        .iter()
        .map(|&kind| {
            let path = opts.path_for(kind);
            export_to(analysis, kind, &path).map(|_| path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CrawlResult, DayRecord};
    use crate::stats::analyze;

    fn analysis() -> Analysis {
        let res: CrawlResult = (0..8)
            .map(|d| {
                let tails = (0..27).filter_map(|i| Tail::new(((d * 3 + i * 11) % 100) as u8)).collect();
                DayRecord::new(format!("day_{:02}", d + 1), tails)
            })
            .collect();
        analyze(&res, 200.0)
    }

    #[test]
    fn bucket_export_has_bom_header_and_padded_caps() {
        let a = analysis();
        let bytes = export_bytes(&a, ExportKind::Full).unwrap();
        assert!(bytes.starts_with(BOM));
        let text = String::from_utf8(bytes[BOM.len()..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("cap,count,freq,post_p"));
        assert!(lines.next().is_some_and(|l| l.starts_with("00,")));
        assert_eq!(text.lines().count(), 101);
    }

    #[test]
    fn evaluation_export_carries_labels() {
        let a = analysis();
        let bytes = export_bytes(&a, ExportKind::Evaluated).unwrap();
        let text = String::from_utf8_lossy(&bytes[BOM.len()..]).into_owned();
        let header = text.lines().next().unwrap_or_default();
        assert_eq!(
            header,
            "cap,count,freq,post_p,hits_1d,hits_7d,hits_30d,hits_90d,post_7d,post_30d,post_90d,judgement"
        );
        let first_label = a.evaluated[0].judgement.label();
        assert!(text.lines().nth(1).is_some_and(|l| l.contains(first_label)));
    }
}
