// ============================================================
// Layer 4 — Dream Loaders
// ============================================================
// Loads dream narratives from a CSV export using the csv crate.
//
// Expected CSV shape:
//   A header row, with one column holding the narrative
//   (by default "dream"). Any other columns are ignored.
//   Narratives can span several lines inside quotes, which
//   is why this goes through a real CSV reader rather than
//   splitting on newlines.
//
//   id,date,dream
//   1,1948-02-10,"I was walking down a long hallway..."
//   2,1948-02-14,"  "                       ← blank, skipped
//
// Each narrative is trimmed; empty ones are dropped before
// numbering, so ids are contiguous over the kept dreams.
//
// Also here: reading back a processed JSON array for export.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs::File, io::BufReader, path::PathBuf};

use crate::domain::dream::Dream;
use crate::domain::record::ProcessedDream;
use crate::domain::traits::DreamSource;

/// Loads dreams from one column of a CSV file.
/// Implements the DreamSource trait from Layer 3.
pub struct CsvDreamLoader {
    /// Path to the CSV file
    path: PathBuf,

    /// Header name of the narrative column
    column: String,
}

impl CsvDreamLoader {
    /// Create a new CsvDreamLoader reading the given column
    pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self {
            path:   path.into(),
            column: column.into(),
        }
    }
}

impl DreamSource for CsvDreamLoader {
    fn load_all(&self) -> Result<Vec<Dream>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open CSV '{}'", self.path.display()))?;

        // Locate the narrative column by header name
        let column = reader
            .headers()
            .with_context(|| format!("Cannot read CSV header of '{}'", self.path.display()))?
            .iter()
            .position(|h| h.trim() == self.column)
            .with_context(|| {
                format!("Column '{}' not found in '{}'", self.column, self.path.display())
            })?;

        let mut dreams  = Vec::new();
        let mut skipped = 0usize;

        for (row, record) in reader.records().enumerate() {
            // Row numbers are 1-based and count the header
            let record = record.with_context(|| {
                format!("Malformed CSV row {} in '{}'", row + 2, self.path.display())
            })?;

            let text = record.get(column).unwrap_or("").trim();
            if text.is_empty() {
                skipped += 1;
                continue;
            }

            dreams.push(Dream::new(dreams.len(), text));
        }

        tracing::info!(
            "Loaded {} dreams from '{}' ({} blank rows skipped)",
            dreams.len(),
            self.path.display(),
            skipped
        );
        Ok(dreams)
    }
}

/// Read a JSON array of processed dreams written by `process`.
pub fn load_processed(path: impl Into<PathBuf>) -> Result<Vec<ProcessedDream>> {
    let path = path.into();
    let file = File::open(&path)
        .with_context(|| format!("Cannot open processed dreams '{}'", path.display()))?;

    let dreams: Vec<ProcessedDream> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot parse processed dreams '{}'", path.display()))?;

    tracing::info!("Loaded {} processed dreams from '{}'", dreams.len(), path.display());
    Ok(dreams)
}
