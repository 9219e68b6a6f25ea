// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that define what the
// system talks about: dreams, annotated documents, spans
// and the records we write out.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap, NO CSV, NO knowledge of the wire formats
//   - Only plain data types, validation and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The annotated document consumed by the extractor
pub mod document;

// Raw and annotated dreams with their sequence ids
pub mod dream;

// Annotation contract violations
pub mod error;

// The serialised per-dream result and export rows
pub mod record;

// Category-tagged spans and phrase matches
pub mod span;

// Core abstractions (traits) that other layers implement
pub mod traits;
