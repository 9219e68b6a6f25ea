// ============================================================
// Layer 3 — Annotation Contract Errors
// ============================================================
// The extractor trusts the annotated document completely:
// offsets are sliced, heads are dereferenced, sentences are
// mapped onto token ranges. So every structural guarantee
// is checked once, when the AnnotatedDocument is built,
// and a violation becomes one of these typed errors.
//
// Empty text is NOT an error — a document with no tokens
// is perfectly valid and simply produces no patterns.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)
//            thiserror crate documentation

use thiserror::Error;

/// A document that does not satisfy the annotation contract.
/// All offsets are character offsets into the document text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("token {index} has start {start} after end {end}")]
    InvertedToken { index: usize, start: usize, end: usize },

    #[error("token {index} ends at {end}, past the text length {len}")]
    TokenOutOfBounds { index: usize, end: usize, len: usize },

    #[error("token {index} starts at {start}, before the previous token at {previous}")]
    TokensOutOfOrder { index: usize, start: usize, previous: usize },

    #[error("token at position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },

    #[error("token {index} text {found:?} does not match the source text {expected:?}")]
    TextMismatch { index: usize, expected: String, found: String },

    #[error("token {index} points at head {head}, but the document has {count} tokens")]
    DanglingHead { index: usize, head: usize, count: usize },

    #[error("{kind} span [{start}, {end}) is invalid for text length {len}")]
    InvalidSpan { kind: &'static str, start: usize, end: usize, len: usize },
}
