// ============================================================
// Layer 3 — Dream Domain Types
// ============================================================
// A dream enters the system twice:
//
//   1. As plain text read from the CSV (Dream). This is what
//      gets handed to the external annotation pipeline.
//   2. As an annotated document coming back from that
//      pipeline (AnnotatedDream), ready for extraction.
//
// The id is a caller-assigned sequence number: the position
// of the dream in the input, starting at 0. It survives the
// round trip through the annotator so the processed record
// can be matched back to its source row.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::document::AnnotatedDocument;

/// A raw dream narrative, trimmed, before annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dream {
    /// Sequence number assigned at ingestion
    pub id: usize,

    /// The narrative, with surrounding whitespace removed
    pub text: String,
}

impl Dream {
    /// Create a new Dream. Uses impl Into<String> so callers
    /// can pass &str or String.
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// An annotated dream, validated and ready for extraction.
#[derive(Debug, Clone)]
pub struct AnnotatedDream {
    pub id:       usize,
    pub document: AnnotatedDocument,
}
