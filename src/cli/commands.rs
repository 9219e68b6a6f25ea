// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands, in pipeline order:
// `prepare`, `process` and `export`, and all their flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → bool, Option, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::{
    export_use_case::ExportConfig,
    prepare_use_case::PrepareConfig,
    process_use_case::ProcessConfig,
};

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a dreams CSV into JSONL input for the annotator
    Prepare(PrepareArgs),

    /// Extract patterns from annotated JSONL
    Process(ProcessArgs),

    /// Flatten processed dreams into CSV rows for bulk loading
    Export(ExportArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// CSV file with one dream per row
    #[arg(long, default_value = "data/dreams.csv")]
    pub input: String,

    /// Where to write the annotator input
    #[arg(long, default_value = "data/dreams.jsonl")]
    pub output: String,

    /// Header of the column holding the dream text
    #[arg(long, default_value = "dream")]
    pub column: String,
}

impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            input_csv:    a.input,
            output_jsonl: a.output,
            column:       a.column,
        }
    }
}

/// All arguments for the `process` command.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Annotated documents, one JSON object per line
    #[arg(long, default_value = "data/annotated.jsonl")]
    pub annotations: String,

    /// Where to write the processed dreams JSON array
    #[arg(long, default_value = "data/processed_dreams.json")]
    pub output: String,

    /// Log and drop documents that fail validation instead of
    /// aborting the run
    #[arg(long)]
    pub skip_invalid: bool,

    /// Append per-run counts to <DIR>/stats.csv
    #[arg(long, value_name = "DIR")]
    pub stats_dir: Option<String>,
}

/// Convert CLI ProcessArgs into the application-layer ProcessConfig.
/// The application layer never sees clap types.
impl From<ProcessArgs> for ProcessConfig {
    fn from(a: ProcessArgs) -> Self {
        ProcessConfig {
            annotations:  a.annotations,
            output:       a.output,
            skip_invalid: a.skip_invalid,
            stats_dir:    a.stats_dir,
        }
    }
}

/// All arguments for the `export` command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Processed dreams JSON array written by `process`
    #[arg(long, default_value = "data/processed_dreams.json")]
    pub input: String,

    /// Where to write one row per phrase match
    #[arg(long, default_value = "data/patterns.csv")]
    pub patterns: String,

    /// Also write one row per visible range to this file
    #[arg(long)]
    pub ranges: Option<String>,

    /// Also write one (id, text) row per dream to this file
    #[arg(long)]
    pub dreams: Option<String>,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            input:        a.input,
            patterns_csv: a.patterns,
            ranges_csv:   a.ranges,
            dreams_csv:   a.dreams,
        }
    }
}
