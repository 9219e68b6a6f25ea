// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any business
// layer:
//
//   stats.rs — Run statistics logging
//              Appends one row of per-channel counts
//              (dreams, visible ranges, each phrase list)
//              to a CSV file after every `process` run.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Per-run extraction counts CSV logger
pub mod stats;
