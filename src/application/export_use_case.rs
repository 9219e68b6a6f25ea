// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Flattens processed dreams into rows for bulk loading:
//
//   Step 1: Read the processed JSON array   (Layer 4 - data)
//   Step 2: One row per phrase match        → patterns CSV
//   Step 3: One row per visible range       → ranges CSV (optional)
//   Step 4: One row per dream (id, text)    → dreams CSV (optional)
//
// Row order follows the records, then the fixed phrase list
// order (adj_noun, verb_noun, prep, adverb_verb, temporal,
// compound, emotional), then each list's own order.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{loader::load_processed, writer::CsvWriter};
use crate::domain::record::{DreamRow, PatternRow, ProcessedDream, RangeRow};
use crate::domain::traits::RecordSink;

// ─── Export Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub input:        String,
    pub patterns_csv: String,
    pub ranges_csv:   Option<String>,
    pub dreams_csv:   Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input:        "data/processed_dreams.json".to_string(),
            patterns_csv: "data/patterns.csv".to_string(),
            ranges_csv:   None,
            dreams_csv:   None,
        }
    }
}

/// Rows written by one export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportCounts {
    pub patterns: usize,
    pub ranges:   usize,
    pub dreams:   usize,
}

/// Every phrase of every record as a flat row
pub fn flatten_patterns(records: &[ProcessedDream]) -> Vec<PatternRow> {
    records
        .iter()
        .flat_map(|record| {
            record.phrase_lists().into_iter().flat_map(move |(kind, list)| {
                list.iter().map(move |m| PatternRow {
                    dream_id:     record.id,
                    pattern_type: kind,
                    text:         m.text.clone(),
                    start_pos:    m.start,
                    end_pos:      m.end,
                })
            })
        })
        .collect()
}

/// Every visible range of every record as a flat row
pub fn flatten_ranges(records: &[ProcessedDream]) -> Vec<RangeRow> {
    records
        .iter()
        .flat_map(|record| {
            record.visible_ranges.iter().map(move |&(start, end)| RangeRow {
                dream_id:  record.id,
                start_pos: start,
                end_pos:   end,
            })
        })
        .collect()
}

/// Every record's id and text as a flat row
pub fn flatten_dreams(records: &[ProcessedDream]) -> Vec<DreamRow> {
    records
        .iter()
        .map(|record| DreamRow {
            id:   record.id,
            text: record.text.clone(),
        })
        .collect()
}

// ─── ExportUseCase ────────────────────────────────────────────────────────────
pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Write the CSV files and return how many rows went to each
    pub fn execute(&self) -> Result<ExportCounts> {
        let cfg = &self.config;

        // ── Step 1: Read processed dreams ─────────────────────────────────────
        let records = load_processed(&cfg.input)?;

        // ── Step 2: Pattern rows ──────────────────────────────────────────────
        let patterns = flatten_patterns(&records);
        CsvWriter::new(&cfg.patterns_csv).write_all(&patterns)?;

        // ── Step 3: Range rows ────────────────────────────────────────────────
        let mut counts = ExportCounts { patterns: patterns.len(), ..Default::default() };
        if let Some(path) = &cfg.ranges_csv {
            let rows = flatten_ranges(&records);
            CsvWriter::new(path).write_all(&rows)?;
            counts.ranges = rows.len();
        }

        // ── Step 4: Dream rows ────────────────────────────────────────────────
        if let Some(path) = &cfg.dreams_csv {
            let rows = flatten_dreams(&records);
            CsvWriter::new(path).write_all(&rows)?;
            counts.dreams = rows.len();
        }

        tracing::info!(
            "Exported {} pattern rows, {} range rows and {} dream rows from {} dreams",
            counts.patterns,
            counts.ranges,
            counts.dreams,
            records.len()
        );
        Ok(counts)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::writer::JsonArrayWriter;
    use crate::domain::record::PatternType;
    use crate::domain::span::PhraseMatch;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> Vec<ProcessedDream> {
        vec![
            ProcessedDream {
                id:               0,
                text:             "Then I saw a red ball.".to_string(),
                visible_ranges:   vec![(13, 21)],
                adj_noun_pairs:   vec![PhraseMatch::new("red ball", 13, 21)],
                temporal_phrases: vec![PhraseMatch::new("Then", 0, 4)],
                ..Default::default()
            },
            ProcessedDream {
                id:              1,
                text:            "Nothing.".to_string(),
                visible_ranges:  vec![(0, 8)],
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_flatten_patterns_in_list_order() {
        let rows = flatten_patterns(&sample());
        let kinds: Vec<PatternType> = rows.iter().map(|r| r.pattern_type).collect();
        assert_eq!(kinds, vec![PatternType::AdjNoun, PatternType::Temporal]);
        assert_eq!(rows[1].text, "Then");
        assert_eq!((rows[1].start_pos, rows[1].end_pos), (0, 4));
    }

    #[test]
    fn test_flatten_ranges_keeps_dream_ids() {
        let rows = flatten_ranges(&sample());
        let ids: Vec<usize> = rows.iter().map(|r| r.dream_id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_export_writes_both_csvs() {
        let dir   = tempdir().unwrap();
        let input = dir.path().join("processed.json");
        JsonArrayWriter::new(&input).write_all(&sample()).unwrap();

        let config = ExportConfig {
            input:        input.display().to_string(),
            patterns_csv: dir.path().join("patterns.csv").display().to_string(),
            ranges_csv:   Some(dir.path().join("ranges.csv").display().to_string()),
            dreams_csv:   None,
        };
        let counts = ExportUseCase::new(config).execute().unwrap();
        assert_eq!(counts, ExportCounts { patterns: 2, ranges: 2, dreams: 0 });
        assert!(!dir.path().join("dreams.csv").exists());

        let csv = fs::read_to_string(dir.path().join("ranges.csv")).unwrap();
        assert_eq!(csv, "dream_id,start_pos,end_pos\n0,13,21\n1,0,8\n");
    }

    #[test]
    fn test_export_writes_dreams_table() {
        let dir   = tempdir().unwrap();
        let input = dir.path().join("processed.json");
        JsonArrayWriter::new(&input).write_all(&sample()).unwrap();

        let config = ExportConfig {
            input:        input.display().to_string(),
            patterns_csv: dir.path().join("patterns.csv").display().to_string(),
            dreams_csv:   Some(dir.path().join("dreams.csv").display().to_string()),
            ..Default::default()
        };
        let counts = ExportUseCase::new(config).execute().unwrap();
        assert_eq!(counts.dreams, 2);

        // Every dream_id in the patterns file has a row in the dreams file
        let dreams = fs::read_to_string(dir.path().join("dreams.csv")).unwrap();
        assert_eq!(dreams, "id,text\n0,Then I saw a red ball.\n1,Nothing.\n");
        let ids: Vec<usize> = flatten_dreams(&sample()).iter().map(|d| d.id).collect();
        assert!(flatten_patterns(&sample()).iter().all(|p| ids.contains(&p.dream_id)));
    }
}
