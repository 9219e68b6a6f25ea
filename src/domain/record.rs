// ============================================================
// Layer 3 — Output Records
// ============================================================
// ProcessedDream is the unit every downstream consumer reads:
// the JSON array written by `process` is a Vec of these.
//
//   {
//     "id": 0,
//     "text": "...",
//     "visible_ranges": [[4, 12], [20, 26]],
//     "adj_noun_pairs": [{"text": "red ball", "start": 4, "end": 12}],
//     "verb_noun_pairs": [...],
//     ...
//   }
//
// DreamRow, PatternRow and RangeRow are the flat shapes a
// bulk loader wants: one row per dream, per phrase and per
// visible range, the last two keyed by dream id.

use serde::{Deserialize, Serialize};

use crate::domain::span::{PhraseMatch, VisibleRange};

/// The per-dream extraction result, serialised verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDream {
    pub id:                     usize,
    pub text:                   String,
    pub visible_ranges:         Vec<VisibleRange>,
    pub adj_noun_pairs:         Vec<PhraseMatch>,
    pub verb_noun_pairs:        Vec<PhraseMatch>,
    pub prep_phrases:           Vec<PhraseMatch>,
    pub adverb_verb_pairs:      Vec<PhraseMatch>,
    pub temporal_phrases:       Vec<PhraseMatch>,
    pub compound_nouns:         Vec<PhraseMatch>,
    pub emotional_verb_phrases: Vec<PhraseMatch>,
}

impl ProcessedDream {
    /// The seven phrase lists paired with their export type,
    /// in a fixed order.
    pub fn phrase_lists(&self) -> [(PatternType, &[PhraseMatch]); 7] {
        [
            (PatternType::AdjNoun,    self.adj_noun_pairs.as_slice()),
            (PatternType::VerbNoun,   self.verb_noun_pairs.as_slice()),
            (PatternType::Prep,       self.prep_phrases.as_slice()),
            (PatternType::AdverbVerb, self.adverb_verb_pairs.as_slice()),
            (PatternType::Temporal,   self.temporal_phrases.as_slice()),
            (PatternType::Compound,   self.compound_nouns.as_slice()),
            (PatternType::Emotional,  self.emotional_verb_phrases.as_slice()),
        ]
    }

    /// Total number of phrase matches across all seven lists
    pub fn phrase_count(&self) -> usize {
        self.phrase_lists().iter().map(|(_, list)| list.len()).sum()
    }
}

/// Short type tag used for flattened pattern rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    AdjNoun,
    VerbNoun,
    Prep,
    AdverbVerb,
    Temporal,
    Compound,
    Emotional,
}

/// One phrase, flattened for bulk loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRow {
    pub dream_id:     usize,
    pub pattern_type: PatternType,
    pub text:         String,
    pub start_pos:    usize,
    pub end_pos:      usize,
}

/// One dream, flattened for bulk loading. Pattern and range
/// rows refer to it through `dream_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamRow {
    pub id:   usize,
    pub text: String,
}

/// One visible range, flattened for bulk loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRow {
    pub dream_id:  usize,
    pub start_pos: usize,
    pub end_pos:   usize,
}
