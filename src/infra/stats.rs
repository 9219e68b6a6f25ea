// ============================================================
// Layer 6 — Run Statistics Logger
// ============================================================
// Records one row of extraction counts per `process` run.
//
// Counts recorded per run:
//   - dreams:         documents processed
//   - visible_ranges: merged highlight ranges across all dreams
//   - one column per phrase list, summed across all dreams
//
// Output file: <stats_dir>/stats.csv
//
// Example CSV output:
//   dreams,visible_ranges,adj_noun,verb_noun,prep,adverb_verb,temporal,compound,emotional
//   1200,8421,3310,2954,4102,611,1875,990,402
//   1200,8421,3310,2954,4102,611,1875,990,402
//
// Rows are appended, so repeated runs over the same corpus
// should produce identical rows; a changed row after a
// lexicon edit shows what the edit moved.
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
};

use crate::domain::record::{PatternType, ProcessedDream};

/// Totals for one run over a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub dreams:         usize,
    pub visible_ranges: usize,
    pub adj_noun:       usize,
    pub verb_noun:      usize,
    pub prep:           usize,
    pub adverb_verb:    usize,
    pub temporal:       usize,
    pub compound:       usize,
    pub emotional:      usize,
}

impl RunStats {
    /// Sum the counts of every output channel over `records`
    pub fn from_records(records: &[ProcessedDream]) -> Self {
        let mut stats = Self { dreams: records.len(), ..Default::default() };

        for record in records {
            stats.visible_ranges += record.visible_ranges.len();
            for (kind, list) in record.phrase_lists() {
                *stats.counter(kind) += list.len();
            }
        }
        stats
    }

    fn counter(&mut self, kind: PatternType) -> &mut usize {
        match kind {
            PatternType::AdjNoun    => &mut self.adj_noun,
            PatternType::VerbNoun   => &mut self.verb_noun,
            PatternType::Prep       => &mut self.prep,
            PatternType::AdverbVerb => &mut self.adverb_verb,
            PatternType::Temporal   => &mut self.temporal,
            PatternType::Compound   => &mut self.compound,
            PatternType::Emotional  => &mut self.emotional,
        }
    }

    /// Total phrase matches across all seven lists
    pub fn phrases(&self) -> usize {
        self.adj_noun
            + self.verb_noun
            + self.prep
            + self.adverb_verb
            + self.temporal
            + self.compound
            + self.emotional
    }
}

/// Appends run statistics to a CSV file.
pub struct StatsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl StatsLogger {
    /// Create a new StatsLogger, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create stats directory '{}'", dir.display()))?;

        Ok(Self { csv_path: dir.join("stats.csv") })
    }

    /// Append one row. The header is written only when the
    /// file does not exist yet.
    pub fn log(&self, stats: &RunStats) -> Result<()> {
        let is_new = !self.csv_path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer.serialize(stats)?;
        writer.flush()?;

        tracing::debug!(
            "Logged run stats: {} dreams, {} ranges, {} phrases",
            stats.dreams,
            stats.visible_ranges,
            stats.phrases(),
        );
        Ok(())
    }

    /// Return the path to the stats CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
