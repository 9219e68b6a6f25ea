// ============================================================
// Layer 4 — Record Writers
// ============================================================
// Three RecordSink implementations, one per output format:
//
//   JsonArrayWriter → the processed dreams, one pretty JSON
//                     array with two-space indentation
//   JsonLinesWriter → one compact JSON object per line; the
//                     format the external annotator reads
//   CsvWriter       → header row from the record's field
//                     names, one row per record
//
// All three create missing parent directories and overwrite
// the target file. Non-ASCII text is written verbatim.
//
// Reference: Rust Book §12 (I/O and File Handling)
//            serde_json / csv crate documentation

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::traits::RecordSink;

/// Open `path` for writing, creating its parent directory.
fn create_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    Ok(BufWriter::new(file))
}

// ─── JsonArrayWriter ──────────────────────────────────────────────────────────
pub struct JsonArrayWriter {
    path: PathBuf,
}

impl JsonArrayWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Serialize> RecordSink<T> for JsonArrayWriter {
    fn write_all(&self, records: &[T]) -> Result<()> {
        let mut out = create_file(&self.path)?;
        serde_json::to_writer_pretty(&mut out, records)
            .with_context(|| format!("Cannot serialise records to '{}'", self.path.display()))?;
        writeln!(out)?;
        out.flush()?;

        tracing::info!("Wrote {} records to '{}'", records.len(), self.path.display());
        Ok(())
    }
}

// ─── JsonLinesWriter ──────────────────────────────────────────────────────────
pub struct JsonLinesWriter {
    path: PathBuf,
}

impl JsonLinesWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Serialize> RecordSink<T> for JsonLinesWriter {
    fn write_all(&self, records: &[T]) -> Result<()> {
        let mut out = create_file(&self.path)?;
        for record in records {
            serde_json::to_writer(&mut out, record)
                .with_context(|| format!("Cannot serialise record to '{}'", self.path.display()))?;
            writeln!(out)?;
        }
        out.flush()?;

        tracing::info!("Wrote {} lines to '{}'", records.len(), self.path.display());
        Ok(())
    }
}

// ─── CsvWriter ────────────────────────────────────────────────────────────────
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T: Serialize> RecordSink<T> for CsvWriter {
    fn write_all(&self, records: &[T]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(create_file(&self.path)?);
        for record in records {
            writer
                .serialize(record)
                .with_context(|| format!("Cannot write CSV row to '{}'", self.path.display()))?;
        }
        writer.flush()?;

        tracing::info!("Wrote {} rows to '{}'", records.len(), self.path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dream::Dream;
    use crate::domain::record::{PatternRow, PatternType};
    use tempfile::tempdir;

    #[test]
    fn test_json_array_is_pretty_and_unescaped() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("nested/out.json");

        JsonArrayWriter::new(&path)
            .write_all(&[Dream::new(0, "Un rêve étrange")])
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\": 0,"));
        assert!(written.contains("Un rêve étrange"));
    }

    #[test]
    fn test_json_lines_one_object_per_line() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("dreams.jsonl");

        JsonLinesWriter::new(&path)
            .write_all(&[Dream::new(0, "one"), Dream::new(1, "two")])
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, vec![r#"{"id":0,"text":"one"}"#, r#"{"id":1,"text":"two"}"#]);
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("patterns.csv");

        let rows = vec![PatternRow {
            dream_id:     4,
            pattern_type: PatternType::AdjNoun,
            text:         "big, red ball".to_string(),
            start_pos:    2,
            end_pos:      15,
        }];
        CsvWriter::new(&path).write_all(&rows).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "dream_id,pattern_type,text,start_pos,end_pos\n4,adj_noun,\"big, red ball\",2,15\n"
        );
    }

    #[test]
    fn test_empty_json_array() {
        let dir  = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        let none: Vec<Dream> = Vec::new();
        JsonArrayWriter::new(&path).write_all(&none).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }
}
