// ============================================================
// Layer 5 — Pattern Extractor
// ============================================================
// Runs an ordered list of Rule objects over one annotated
// document and routes every span by its category:
//
//   category.is_visible() → collected, then merged once
//                           into the visible ranges
//   category.is_phrase()  → turned into a PhraseMatch with
//                           its trimmed literal text
//
// Adjective–noun pairs are both, so they land in the visible
// ranges AND in their own phrase list. Phrase lists are
// never merged; overlapping phrases are kept as-is.
//
// Every span is clamped to the text length before use. A
// rule that produces an inverted span trips the debug
// assertion in Span::new instead of being silently fixed.
//
// The extractor holds no per-document state, so one
// instance can be shared across threads.

use std::collections::HashMap;

use crate::domain::document::AnnotatedDocument;
use crate::domain::record::ProcessedDream;
use crate::domain::span::{Category, PhraseMatch, VisibleRange};
use crate::domain::traits::Rule;
use crate::patterns::lexical::{
    AdjectiveNounRule, LexiconRule, NamedEntityRule, NegationRule, ProperNounRule, ShortSentenceRule,
};
use crate::patterns::merge::{is_merged, merge_ranges};
use crate::patterns::phrases::{
    AdverbVerbRule, CompoundNounRule, EmotionalCopulaRule, PrepositionalRule, TemporalRule,
    VerbObjectRule,
};

/// The full rule catalogue, in a fixed order.
pub fn standard_rules() -> Vec<Box<dyn Rule>> {
    vec![
        // Visible-range rules
        Box::new(AdjectiveNounRule),
        Box::new(LexiconRule::emotional()),
        Box::new(LexiconRule::sensory()),
        Box::new(NamedEntityRule),
        Box::new(ProperNounRule),
        Box::new(ShortSentenceRule::default()),
        Box::new(NegationRule),
        Box::new(LexiconRule::physical_state()),
        // Phrase rules
        Box::new(VerbObjectRule),
        Box::new(PrepositionalRule::default()),
        Box::new(AdverbVerbRule::default()),
        Box::new(TemporalRule::default()),
        Box::new(CompoundNounRule),
        Box::new(EmotionalCopulaRule::default()),
    ]
}

// ─── Extraction ───────────────────────────────────────────────────────────────
/// Everything extracted from one document.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Merged, sorted, non-overlapping visible intervals
    pub visible_ranges: Vec<VisibleRange>,

    phrases: HashMap<Category, Vec<PhraseMatch>>,
}

impl Extraction {
    /// The phrase list for one category, in rule scan order
    #[cfg(test)]
    pub fn phrases(&self, category: Category) -> &[PhraseMatch] {
        self.phrases.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attach the caller's id and text to produce the output record
    pub fn into_record(mut self, id: usize, text: impl Into<String>) -> ProcessedDream {
        let mut take = |category: Category| self.phrases.remove(&category).unwrap_or_default();

        ProcessedDream {
            id,
            text:                   text.into(),
            adj_noun_pairs:         take(Category::AdjacentAdjectiveNoun),
            verb_noun_pairs:        take(Category::VerbObject),
            prep_phrases:           take(Category::PrepositionalPhrase),
            adverb_verb_pairs:      take(Category::AdverbVerb),
            temporal_phrases:       take(Category::Temporal),
            compound_nouns:         take(Category::CompoundNoun),
            emotional_verb_phrases: take(Category::EmotionalCopula),
            visible_ranges:         self.visible_ranges,
        }
    }
}

// ─── PatternExtractor ─────────────────────────────────────────────────────────
pub struct PatternExtractor {
    rules: Vec<Box<dyn Rule>>,
}

impl PatternExtractor {
    /// An extractor running the standard rule catalogue
    pub fn new() -> Self {
        Self::with_rules(standard_rules())
    }

    /// An extractor running exactly `rules`, in order
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Categories this extractor emits, in rule order
    pub fn categories(&self) -> Vec<Category> {
        self.rules.iter().map(|r| r.category()).collect()
    }

    /// Run every rule over `doc`.
    pub fn extract(&self, doc: &AnnotatedDocument) -> Extraction {
        if doc.text().trim().is_empty() {
            return Extraction::default();
        }

        let len = doc.char_len();
        let mut ranges: Vec<VisibleRange> = Vec::new();
        let mut phrases: HashMap<Category, Vec<PhraseMatch>> = HashMap::new();

        for rule in &self.rules {
            let spans = rule.scan(doc);
            tracing::trace!("{}: {} spans", rule.category(), spans.len());

            for span in spans.into_iter().map(|s| s.clamped(len)) {
                if span.category.is_visible() {
                    ranges.push(span.range());
                }
                if span.category.is_phrase() {
                    let text = doc.slice(span.start, span.end).trim();
                    phrases
                        .entry(span.category)
                        .or_default()
                        .push(PhraseMatch::new(text, span.start, span.end));
                }
            }
        }

        let visible_ranges = merge_ranges(ranges);
        debug_assert!(is_merged(&visible_ranges), "merge produced {visible_ranges:?}");

        Extraction { visible_ranges, phrases }
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}
