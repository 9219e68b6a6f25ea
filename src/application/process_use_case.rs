// ============================================================
// Layer 2 — ProcessUseCase
// ============================================================
// Runs pattern extraction over an annotated corpus:
//
//   Step 1: Load + validate annotations   (Layer 4 - data)
//   Step 2: Extract patterns per dream    (Layer 5 - patterns)
//   Step 3: Write processed JSON array    (Layer 4 - data)
//   Step 4: Append run statistics         (Layer 6 - infra)
//
// Documents are processed one after another. The extractor
// is built once and shared by every document.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{annotation::AnnotationLoader, writer::JsonArrayWriter};
use crate::domain::record::ProcessedDream;
use crate::domain::traits::{AnnotatedSource, RecordSink};
use crate::infra::stats::{RunStats, StatsLogger};
use crate::patterns::extractor::PatternExtractor;

/// Progress is logged after this many documents
const PROGRESS_EVERY: usize = 100;

// ─── Process Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    pub annotations:  String,
    pub output:       String,
    pub skip_invalid: bool,
    pub stats_dir:    Option<String>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            annotations:  "data/annotated.jsonl".to_string(),
            output:       "data/processed_dreams.json".to_string(),
            skip_invalid: false,
            stats_dir:    None,
        }
    }
}

// ─── ProcessUseCase ───────────────────────────────────────────────────────────
pub struct ProcessUseCase {
    config:    ProcessConfig,
    extractor: PatternExtractor,
}

impl ProcessUseCase {
    pub fn new(config: ProcessConfig) -> Self {
        let extractor = PatternExtractor::new();
        tracing::debug!("Extractor rules: {:?}", extractor.categories());

        Self { config, extractor }
    }

    /// Execute the full pipeline and return the records written
    pub fn execute(&self) -> Result<Vec<ProcessedDream>> {
        let cfg = &self.config;

        // ── Step 1: Load annotated documents ──────────────────────────────────
        tracing::info!("Loading annotations from '{}'", cfg.annotations);
        let dreams = AnnotationLoader::new(&cfg.annotations)
            .skip_invalid(cfg.skip_invalid)
            .load_all()?;

        // ── Step 2: Extract ───────────────────────────────────────────────────
        let total = dreams.len();
        let mut records = Vec::with_capacity(total);

        for (done, dream) in dreams.into_iter().enumerate() {
            let record = self
                .extractor
                .extract(&dream.document)
                .into_record(dream.id, dream.document.text());
            tracing::debug!(
                "Dream {}: {} visible ranges, {} phrases",
                record.id,
                record.visible_ranges.len(),
                record.phrase_count()
            );
            records.push(record);

            if (done + 1) % PROGRESS_EVERY == 0 {
                tracing::info!("Processed {}/{} dreams", done + 1, total);
            }
        }

        // ── Step 3: Write output ──────────────────────────────────────────────
        JsonArrayWriter::new(&cfg.output).write_all(&records)?;

        // ── Step 4: Run statistics ────────────────────────────────────────────
        let stats = RunStats::from_records(&records);
        tracing::info!(
            "Extracted {} visible ranges and {} phrases from {} dreams",
            stats.visible_ranges,
            stats.phrases(),
            stats.dreams
        );
        if let Some(dir) = &cfg.stats_dir {
            let logger = StatsLogger::new(dir)?;
            logger.log(&stats)?;
            tracing::info!("Appended run stats to '{}'", logger.csv_path().display());
        }

        Ok(records)
    }
}
