// ============================================================
// Layer 5 — Lexical / Category Rules
// ============================================================
// Rules that look at tokens (and sentences / entities) one
// at a time, without following dependency edges. Their
// spans all feed the visible ranges:
//
//   AdjectiveNounRule     ADJ immediately followed by NOUN
//   LexiconRule           lemma in a fixed vocabulary
//                         (emotional, sensory, physical-state)
//   NamedEntityRule       entity spans, verbatim
//   ProperNounRule        PROPN tokens
//   ShortSentenceRule     3–5 word sentences ending in "."
//   NegationRule          negation words, surface or lemma
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::collections::HashSet;

use crate::domain::document::{AnnotatedDocument, AnnotatedToken, PartOfSpeech};
use crate::domain::span::{Category, Span};
use crate::domain::traits::Rule;
use crate::patterns::lexicon::{
    EMOTIONAL_WORDS, NEGATION_WORDS, PHYSICAL_STATE_WORDS, SENSORY_WORDS,
};

/// Span covering exactly one token
fn token_span(tok: &AnnotatedToken, category: Category) -> Span {
    Span::new(tok.start, tok.end, category)
}

// ─── Adjective + Noun ─────────────────────────────────────────────────────────
/// "red ball": an adjective directly followed by a noun.
pub struct AdjectiveNounRule;

impl Rule for AdjectiveNounRule {
    fn category(&self) -> Category {
        Category::AdjacentAdjectiveNoun
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.tokens()
            .iter()
            .filter(|tok| tok.pos == PartOfSpeech::Adj)
            .filter_map(|adj| {
                let noun = doc.next(adj)?;
                (noun.pos == PartOfSpeech::Noun)
                    .then(|| Span::new(adj.start, noun.end, self.category()))
            })
            .collect()
    }
}

// ─── Lexicon Membership ───────────────────────────────────────────────────────
/// Single tokens whose lemma belongs to a fixed vocabulary,
/// optionally restricted to some parts of speech.
pub struct LexiconRule {
    category: Category,
    words:    &'static HashSet<&'static str>,
    only:     Option<&'static [PartOfSpeech]>,
}

impl LexiconRule {
    pub fn emotional() -> Self {
        Self {
            category: Category::EmotionalWord,
            words:    &EMOTIONAL_WORDS,
            only:     None,
        }
    }

    pub fn sensory() -> Self {
        Self {
            category: Category::SensoryWord,
            words:    &SENSORY_WORDS,
            only:     None,
        }
    }

    /// Motion words count only when used as a verb or adjective
    /// ("falling" yes, "a falling" as a noun no).
    pub fn physical_state() -> Self {
        Self {
            category: Category::PhysicalState,
            words:    &PHYSICAL_STATE_WORDS,
            only:     Some(&[PartOfSpeech::Verb, PartOfSpeech::Adj]),
        }
    }

    fn accepts(&self, tok: &AnnotatedToken) -> bool {
        self.words.contains(tok.lemma.as_str())
            && self.only.map_or(true, |tags| tags.contains(&tok.pos))
    }
}

impl Rule for LexiconRule {
    fn category(&self) -> Category {
        self.category
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.tokens()
            .iter()
            .filter(|tok| self.accepts(tok))
            .map(|tok| token_span(tok, self.category))
            .collect()
    }
}

// ─── Named Entities ───────────────────────────────────────────────────────────
/// Entity spans exactly as the annotation pipeline drew them.
pub struct NamedEntityRule;

impl Rule for NamedEntityRule {
    fn category(&self) -> Category {
        Category::NamedEntity
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.entities()
            .iter()
            .map(|ent| Span::new(ent.start, ent.end, self.category()))
            .collect()
    }
}

// ─── Proper Nouns ─────────────────────────────────────────────────────────────
pub struct ProperNounRule;

impl Rule for ProperNounRule {
    fn category(&self) -> Category {
        Category::ProperNoun
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.tokens()
            .iter()
            .filter(|tok| tok.pos == PartOfSpeech::Propn)
            .map(|tok| token_span(tok, self.category()))
            .collect()
    }
}

// ─── Short Declarative Sentences ──────────────────────────────────────────────
/// Whole sentences that end in a period and hold between
/// `min_words` and `max_words` real words (punctuation and
/// whitespace tokens don't count).
pub struct ShortSentenceRule {
    min_words: usize,
    max_words: usize,
}

impl ShortSentenceRule {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self { min_words, max_words }
    }
}

impl Default for ShortSentenceRule {
    fn default() -> Self {
        Self::new(3, 5)
    }
}

impl Rule for ShortSentenceRule {
    fn category(&self) -> Category {
        Category::ShortDeclarativeSentence
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.sentences()
            .iter()
            .filter(|sent| doc.slice(sent.start, sent.end).trim().ends_with('.'))
            .filter(|sent| {
                let words = doc
                    .sentence_tokens(sent)
                    .iter()
                    .filter(|t| !t.is_punct() && !t.is_space())
                    .count();
                (self.min_words..=self.max_words).contains(&words)
            })
            .map(|sent| Span::new(sent.start, sent.end, self.category()))
            .collect()
    }
}

// ─── Negation ─────────────────────────────────────────────────────────────────
/// Matches on surface text as well as lemma, so contractions
/// like "n't" → "not" are caught either way.
pub struct NegationRule;

impl Rule for NegationRule {
    fn category(&self) -> Category {
        Category::Negation
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.tokens()
            .iter()
            .filter(|tok| {
                NEGATION_WORDS.contains(tok.text.to_lowercase().as_str())
                    || NEGATION_WORDS.contains(tok.lemma.as_str())
            })
            .map(|tok| token_span(tok, self.category()))
            .collect()
    }
}
