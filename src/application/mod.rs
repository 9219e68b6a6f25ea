// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers, one use case per
// CLI command:
//
//   prepare  → dreams CSV to annotator input
//   process  → annotated JSONL to processed dreams
//   export   → processed dreams to flat CSV rows
//
// Rules for this layer:
//   - No pattern logic here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file formats here (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Raw dreams to annotator input
pub mod prepare_use_case;

// Annotated documents to extracted patterns
pub mod process_use_case;

// Extracted patterns to bulk-load CSV
pub mod export_use_case;
