// ============================================================
// Layer 5 — Pattern Extraction (the core)
// ============================================================
// Everything that turns an annotated document into patterns.
// No I/O, no logging beyond trace output, no state carried
// between documents.
//
// What's in this layer:
//
//   lexicon.rs    — fixed vocabularies (emotional, sensory,
//                   physical-state, negation, temporal,
//                   copular verbs) as process-wide statics
//
//   lexical.rs    — token / sentence / entity rules whose
//                   spans feed the visible ranges
//
//   phrases.rs    — dependency-based phrase rules, one
//                   phrase list each
//
//   merge.rs      — the interval-union sweep that folds
//                   visible spans into the covering ranges
//
//   extractor.rs  — the ordered rule list and the routing
//                   of spans into ranges and phrase lists
//
// Flow for one document:
//
//   AnnotatedDocument
//       │
//       ▼
//   Rule::scan × 14      → Vec<Span> per rule
//       │
//       ├── visible categories ──► merge_ranges ──► visible_ranges
//       │
//       └── phrase categories ───► PhraseMatch lists (unmerged)

/// Closed vocabularies used by the rules
pub mod lexicon;

/// Single-token, sentence and entity rules
pub mod lexical;

/// Dependency-based phrase rules
pub mod phrases;

/// Interval merging for visible ranges
pub mod merge;

/// Rule orchestration and output routing
pub mod extractor;
