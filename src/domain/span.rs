// ============================================================
// Layer 3 — Span Domain Types
// ============================================================
// A pattern is a SPAN of the dream text: a half-open
// character interval [start, end) tagged with what kind of
// pattern it is.
//
// Example:
//   Text:  "The red ball rolled."
//   Span:  [4, 12) AdjectiveNoun  → "red ball"
//
// Spans come in two flavours downstream:
//   - "visible" categories are merged into the ranges that
//     stay uncovered in the blackout-poetry view
//   - phrase categories keep their literal text and are
//     never merged (PhraseMatch)
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// A merged visible interval, serialised as `[start, end]`.
pub type VisibleRange = (usize, usize);

// ─── Category ─────────────────────────────────────────────────────────────────
/// Every kind of pattern the extractor can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AdjacentAdjectiveNoun,
    EmotionalWord,
    SensoryWord,
    NamedEntity,
    ProperNoun,
    ShortDeclarativeSentence,
    Negation,
    PhysicalState,
    VerbObject,
    PrepositionalPhrase,
    AdverbVerb,
    Temporal,
    CompoundNoun,
    EmotionalCopula,
}

impl Category {
    /// Categories whose spans are folded into the visible ranges
    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            Self::AdjacentAdjectiveNoun
                | Self::EmotionalWord
                | Self::SensoryWord
                | Self::NamedEntity
                | Self::ProperNoun
                | Self::ShortDeclarativeSentence
                | Self::Negation
                | Self::PhysicalState
        )
    }

    /// Categories published as their own phrase list.
    /// Adjective–noun pairs are both visible and a phrase list.
    pub fn is_phrase(&self) -> bool {
        matches!(
            self,
            Self::AdjacentAdjectiveNoun
                | Self::VerbObject
                | Self::PrepositionalPhrase
                | Self::AdverbVerb
                | Self::Temporal
                | Self::CompoundNoun
                | Self::EmotionalCopula
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdjacentAdjectiveNoun    => "adjacent-adjective-noun",
            Self::EmotionalWord            => "emotional-word",
            Self::SensoryWord              => "sensory-word",
            Self::NamedEntity              => "named-entity",
            Self::ProperNoun               => "proper-noun",
            Self::ShortDeclarativeSentence => "short-declarative-sentence",
            Self::Negation                 => "negation",
            Self::PhysicalState            => "physical-state",
            Self::VerbObject               => "verb-object",
            Self::PrepositionalPhrase      => "prepositional-phrase",
            Self::AdverbVerb               => "adverb-verb",
            Self::Temporal                 => "temporal",
            Self::CompoundNoun             => "compound-noun",
            Self::EmotionalCopula          => "emotional-copula",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Span ─────────────────────────────────────────────────────────────────────
/// A category-tagged character interval [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start:    usize,
    pub end:      usize,
    pub category: Category,
}

impl Span {
    /// Create a span. An inverted interval is a rule defect,
    /// so debug and test builds panic on it.
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        debug_assert!(start <= end, "{category} span has start {start} > end {end}");
        Self { start, end, category }
    }

    /// Clamp both ends to a text of `len` characters
    pub fn clamped(self, len: usize) -> Self {
        let end   = self.end.min(len);
        let start = self.start.min(end);
        Self { start, end, category: self.category }
    }

    pub fn range(&self) -> VisibleRange {
        (self.start, self.end)
    }
}

// ─── Phrase Match ─────────────────────────────────────────────────────────────
/// A phrase pattern with its literal (trimmed) text.
/// Serialised as `{"text", "start", "end"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub text:  String,
    pub start: usize,
    pub end:   usize,
}

impl PhraseMatch {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self { text: text.into(), start, end }
    }
}
