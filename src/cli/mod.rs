// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported, run in this order:
//   1. `prepare` — dreams CSV → JSONL for the annotator
//   2. `process` — annotated JSONL → processed dreams JSON
//   3. `export`  — processed dreams JSON → CSV rows
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, PrepareArgs, ProcessArgs};

/// The main CLI struct. clap generates the parser from the
/// fields via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "dream-patterns",
    version = "0.1.0",
    about = "Extract linguistic highlight patterns from annotated dream narratives."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Process(args) => Self::run_process(args),
            Commands::Export(args)  => Self::run_export(args),
        }
    }

    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        let output = args.output.clone();
        let dreams = PrepareUseCase::new(args.into()).execute()?;

        println!("Wrote {} dreams to {}", dreams.len(), output);
        Ok(())
    }

    fn run_process(args: ProcessArgs) -> Result<()> {
        use crate::application::process_use_case::ProcessUseCase;

        tracing::info!("Processing annotations in: {}", args.annotations);

        let output  = args.output.clone();
        let records = ProcessUseCase::new(args.into()).execute()?;

        println!("Processed {} dreams into {}", records.len(), output);
        Ok(())
    }

    fn run_export(args: ExportArgs) -> Result<()> {
        use crate::application::export_use_case::ExportUseCase;

        let counts = ExportUseCase::new(args.into()).execute()?;

        println!(
            "Exported {} pattern rows, {} range rows and {} dream rows",
            counts.patterns, counts.ranges, counts.dreams
        );
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_flags_parse() {
        let cli = Cli::try_parse_from([
            "dream-patterns", "process",
            "--annotations", "in.jsonl",
            "--skip-invalid",
            "--stats-dir", "runs",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.annotations, "in.jsonl");
                assert_eq!(args.output, "data/processed_dreams.json");
                assert!(args.skip_invalid);
                assert_eq!(args.stats_dir.as_deref(), Some("runs"));
            }
            other => panic!("expected process, got {other:?}"),
        }
    }

    #[test]
    fn test_export_ranges_are_opt_in() {
        let cli = Cli::try_parse_from(["dream-patterns", "export"]).unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert!(args.ranges.is_none());
                assert!(args.dreams.is_none());
            }
            other => panic!("expected export, got {other:?}"),
        }
    }
}
