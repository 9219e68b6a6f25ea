// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Turns the raw dreams CSV into the JSONL the external
// annotator consumes:
//
//   Step 1: Load and trim dream texts    (Layer 4 - data)
//   Step 2: Write {"id", "text"} lines   (Layer 4 - data)
//
// Trimming happens here, before annotation, so that every
// character offset the annotator produces already refers to
// the final stored text.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{loader::CsvDreamLoader, writer::JsonLinesWriter};
use crate::domain::dream::Dream;
use crate::domain::traits::{DreamSource, RecordSink};

// ─── Prepare Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input_csv:    String,
    pub output_jsonl: String,
    pub column:       String,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input_csv:    "data/dreams.csv".to_string(),
            output_jsonl: "data/dreams.jsonl".to_string(),
            column:       "dream".to_string(),
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Run the preparation step and return the dreams written.
    pub fn execute(&self) -> Result<Vec<Dream>> {
        let cfg = &self.config;

        // ── Step 1: Load dream texts ──────────────────────────────────────────
        tracing::info!("Reading column '{}' from '{}'", cfg.column, cfg.input_csv);
        let dreams = CsvDreamLoader::new(&cfg.input_csv, &cfg.column).load_all()?;

        if dreams.is_empty() {
            tracing::warn!("No non-empty dreams found in '{}'", cfg.input_csv);
        }

        // ── Step 2: Write annotator input ─────────────────────────────────────
        JsonLinesWriter::new(&cfg.output_jsonl).write_all(&dreams)?;

        Ok(dreams)
    }
}
