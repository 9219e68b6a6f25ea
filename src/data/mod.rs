// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything that touches files. The pipeline flows in this
// order, with the annotator running outside this program:
//
//   dreams.csv
//       │
//       ▼
//   CsvDreamLoader    → trims texts, drops blanks, numbers them
//       │
//       ▼
//   JsonLinesWriter   → {"id", "text"} per line
//       │
//       ▼
//   (external annotator: tokens, POS, lemmas, deps, entities)
//       │
//       ▼
//   AnnotationLoader  → validates each line into an AnnotatedDocument
//       │
//       ▼
//   (Layer 5: PatternExtractor)
//       │
//       ▼
//   JsonArrayWriter   → processed dreams as one JSON array
//       │
//       ▼
//   CsvWriter         → flat pattern / range rows for bulk loading
//
// Reference: Rust Book §12 (I/O and File Handling)
//            Rust Book §13 (Iterators and Closures)

/// Reads annotated documents from JSONL
pub mod annotation;

/// Reads raw dreams from CSV and processed dreams from JSON
pub mod loader;

/// JSON, JSONL and CSV record writers
pub mod writer;
