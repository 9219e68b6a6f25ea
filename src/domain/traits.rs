// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams between layers. Each trait has one job and the
// application layer only ever talks to the trait:
//
//   DreamSource      → where raw dream texts come from
//   AnnotatedSource  → where annotated documents come from
//   RecordSink       → where serialisable records go
//   Rule             → one pattern family over one document
//
// Rule is the important one. The extractor is nothing more
// than an ordered list of Rule objects; adding a category
// means adding a type that implements Rule, without
// touching any existing rule.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Using Trait Objects)

use anyhow::Result;

use crate::domain::document::AnnotatedDocument;
use crate::domain::dream::{AnnotatedDream, Dream};
use crate::domain::span::{Category, Span};

// ─── DreamSource ──────────────────────────────────────────────────────────────
/// Any component that can load raw dream narratives.
///
/// Implementations:
///   - CsvDreamLoader → a CSV file with a `dream` column
pub trait DreamSource {
    fn load_all(&self) -> Result<Vec<Dream>>;
}

// ─── AnnotatedSource ──────────────────────────────────────────────────────────
/// Any component that can load annotated, validated documents.
///
/// Implementations:
///   - AnnotationLoader → JSONL in the annotation wire format
pub trait AnnotatedSource {
    fn load_all(&self) -> Result<Vec<AnnotatedDream>>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Any component that can persist a batch of records.
///
/// Implementations:
///   - JsonArrayWriter → one pretty-printed JSON array
///   - JsonLinesWriter → one JSON object per line
///   - CsvWriter       → CSV with a header row
pub trait RecordSink<T> {
    fn write_all(&self, records: &[T]) -> Result<()>;
}

// ─── Rule ─────────────────────────────────────────────────────────────────────
/// One stateless pattern rule.
///
/// `scan` walks the document once and returns every span of
/// this rule's category. Spans may overlap each other and
/// spans from other rules; merging happens later.
pub trait Rule: Send + Sync {
    fn category(&self) -> Category;

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span>;
}
