// ============================================================
// Layer 5 — Dependency Phrase Rules
// ============================================================
// Multi-token phrases found by following dependency edges
// from an anchor token to its direct children (and, for two
// rules, grandchildren). Their spans are NOT merged into the
// visible ranges; each rule fills its own phrase list.
//
//   Rule                   Anchor              Word cap
//   ─────────────────────  ──────────────────  ────────
//   VerbObjectRule         VERB                -
//   PrepositionalRule      ADP                 5
//   AdverbVerbRule         ADV with VERB head  3
//   TemporalRule           time word / entity  4
//   CompoundNounRule       NOUN + NOUN         -
//   EmotionalCopulaRule    feel / seem / ...   4
//
// A phrase spans from its first collected token to its last
// (by ordinal), so tokens in between are included even if
// they were not collected. It survives only if the trimmed
// text is non-empty and within the word cap.
//
// Reference: Universal Dependencies relation labels
//            Rust Book §13 (Iterators and Closures)

use crate::domain::document::{AnnotatedDocument, AnnotatedToken, PartOfSpeech};
use crate::domain::span::{Category, Span};
use crate::domain::traits::Rule;
use crate::patterns::lexicon::{COPULAR_VERBS, TEMPORAL_ENTITY_TYPES, TEMPORAL_MARKERS};

/// Build a span over [start, end) if its trimmed text is
/// non-empty and has at most `max_words` words.
fn accept(
    doc:       &AnnotatedDocument,
    start:     usize,
    end:       usize,
    max_words: Option<usize>,
    category:  Category,
) -> Option<Span> {
    let phrase = doc.slice(start, end).trim();
    if phrase.is_empty() {
        return None;
    }
    if let Some(max) = max_words {
        if phrase.split_whitespace().count() > max {
            return None;
        }
    }
    Some(Span::new(start, end, category))
}

/// Span of two tokens in either order
fn pair_span(a: &AnnotatedToken, b: &AnnotatedToken) -> (usize, usize) {
    (a.start.min(b.start), a.end.max(b.end))
}

/// Sort collected tokens by ordinal and span first to last
fn collected_span(tokens: &mut [&AnnotatedToken]) -> Option<(usize, usize)> {
    tokens.sort_by_key(|t| t.index);
    let first = tokens.first()?;
    let last  = tokens.last()?;
    Some((first.start, last.end))
}

fn has_dep(tok: &AnnotatedToken, labels: &[&str]) -> bool {
    labels.contains(&tok.dep.as_str())
}

// ─── Verb + Object ────────────────────────────────────────────────────────────
/// "opened the door": a verb and each noun it takes as
/// direct or prepositional object.
pub struct VerbObjectRule;

impl Rule for VerbObjectRule {
    fn category(&self) -> Category {
        Category::VerbObject
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        let mut spans = Vec::new();

        for verb in doc.tokens().iter().filter(|t| t.pos == PartOfSpeech::Verb) {
            let objects = doc
                .children(verb)
                .filter(|c| has_dep(c, &["dobj", "pobj"]) && c.pos == PartOfSpeech::Noun);

            for object in objects {
                let (start, end) = pair_span(verb, object);
                spans.extend(accept(doc, start, end, None, self.category()));
            }
        }

        spans
    }
}

// ─── Prepositional Phrase ─────────────────────────────────────────────────────
/// "under the old bridge": a preposition, its object, and the
/// object's determiners, adjectives and compound modifiers.
pub struct PrepositionalRule {
    max_words: usize,
}

impl Default for PrepositionalRule {
    fn default() -> Self {
        Self { max_words: 5 }
    }
}

impl Rule for PrepositionalRule {
    fn category(&self) -> Category {
        Category::PrepositionalPhrase
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        let mut spans = Vec::new();

        for adp in doc.tokens().iter().filter(|t| t.pos == PartOfSpeech::Adp) {
            let mut phrase = vec![adp];

            for object in doc.children(adp).filter(|c| c.dep == "pobj") {
                phrase.push(object);
                phrase.extend(doc.children(object).filter(|g| has_dep(g, &["det", "amod", "compound"])));
            }

            if phrase.len() < 2 {
                continue;
            }
            if let Some((start, end)) = collected_span(&mut phrase) {
                spans.extend(accept(doc, start, end, Some(self.max_words), self.category()));
            }
        }

        spans
    }
}

// ─── Adverb + Verb ────────────────────────────────────────────────────────────
/// "slowly walked": an adverb whose head is a verb.
pub struct AdverbVerbRule {
    max_words: usize,
}

impl Default for AdverbVerbRule {
    fn default() -> Self {
        Self { max_words: 3 }
    }
}

impl Rule for AdverbVerbRule {
    fn category(&self) -> Category {
        Category::AdverbVerb
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.tokens()
            .iter()
            .filter(|t| t.pos == PartOfSpeech::Adv)
            .filter_map(|adv| {
                let verb = doc.head(adv);
                if verb.pos != PartOfSpeech::Verb {
                    return None;
                }
                let (start, end) = pair_span(adv, verb);
                accept(doc, start, end, Some(self.max_words), self.category())
            })
            .collect()
    }
}

// ─── Temporal Phrase ──────────────────────────────────────────────────────────
/// "that night", "two days ago", "suddenly": a time word or
/// TIME/DATE entity token with its prepositions, determiners,
/// adjectives and numbers. A bare marker is a phrase too.
pub struct TemporalRule {
    max_words: usize,
}

impl Default for TemporalRule {
    fn default() -> Self {
        Self { max_words: 4 }
    }
}

impl TemporalRule {
    fn is_anchor(tok: &AnnotatedToken) -> bool {
        TEMPORAL_MARKERS.contains(tok.lemma.as_str()) || tok.has_entity_type(TEMPORAL_ENTITY_TYPES)
    }
}

impl Rule for TemporalRule {
    fn category(&self) -> Category {
        Category::Temporal
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        let mut spans = Vec::new();

        for anchor in doc.tokens().iter().filter(|t| Self::is_anchor(t)) {
            let mut phrase = vec![anchor];
            phrase.extend(doc.children(anchor).filter(|c| has_dep(c, &["prep", "det", "amod", "nummod"])));

            if let Some((start, end)) = collected_span(&mut phrase) {
                spans.extend(accept(doc, start, end, Some(self.max_words), self.category()));
            }
        }

        spans
    }
}

// ─── Compound Noun ────────────────────────────────────────────────────────────
/// "parking lot": two nouns in a row.
pub struct CompoundNounRule;

impl Rule for CompoundNounRule {
    fn category(&self) -> Category {
        Category::CompoundNoun
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        doc.tokens()
            .iter()
            .filter(|t| t.pos == PartOfSpeech::Noun)
            .filter_map(|first| {
                let second = doc.next(first)?;
                if second.pos != PartOfSpeech::Noun {
                    return None;
                }
                accept(doc, first.start, second.end, None, self.category())
            })
            .collect()
    }
}

// ─── Emotional Copula ─────────────────────────────────────────────────────────
/// "felt very cold", "seemed not happy": a copular or
/// perception verb with its complement and the complement's
/// adverbs and negations.
pub struct EmotionalCopulaRule {
    max_words: usize,
}

impl Default for EmotionalCopulaRule {
    fn default() -> Self {
        Self { max_words: 4 }
    }
}

impl EmotionalCopulaRule {
    fn is_complement(tok: &AnnotatedToken) -> bool {
        has_dep(tok, &["acomp", "attr", "oprd"])
            || (tok.dep == "xcomp" && tok.pos == PartOfSpeech::Adj)
    }
}

impl Rule for EmotionalCopulaRule {
    fn category(&self) -> Category {
        Category::EmotionalCopula
    }

    fn scan(&self, doc: &AnnotatedDocument) -> Vec<Span> {
        let mut spans = Vec::new();

        for verb in doc.tokens().iter().filter(|t| COPULAR_VERBS.contains(t.lemma.as_str())) {
            let mut phrase = vec![verb];

            for complement in doc.children(verb).filter(|c| Self::is_complement(c)) {
                phrase.push(complement);
                phrase.extend(doc.children(complement).filter(|g| has_dep(g, &["advmod", "neg"])));
            }

            if phrase.len() < 2 {
                continue;
            }
            if let Some((start, end)) = collected_span(&mut phrase) {
                spans.extend(accept(doc, start, end, Some(self.max_words), self.category()));
            }
        }

        spans
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::DocBuilder;
    use PartOfSpeech::*;

    fn texts<'a>(doc: &'a AnnotatedDocument, spans: &[Span]) -> Vec<&'a str> {
        spans.iter().map(|s| doc.slice(s.start, s.end)).collect()
    }

    #[test]
    fn test_verb_object() {
        let doc = DocBuilder::new("She opened the door")
            .token("She",    "she",  Pron, "nsubj", 1)
            .token("opened", "open", Verb, "ROOT",  1)
            .token("the",    "the",  Det,  "det",   3)
            .token("door",   "door", Noun, "dobj",  1)
            .build();
        assert_eq!(texts(&doc, &VerbObjectRule.scan(&doc)), vec!["opened the door"]);
    }

    #[test]
    fn test_verb_object_either_order() {
        // Object before its verb (passive-ish relative clause)
        let doc = DocBuilder::new("the key I found")
            .token("the",   "the",  Det,  "det",   1)
            .token("key",   "key",  Noun, "ROOT",  1)
            .token("I",     "I",    Pron, "nsubj", 3)
            .token("found", "find", Verb, "relcl", 1)
            .build();
        assert!(VerbObjectRule.scan(&doc).is_empty());

        let doc = DocBuilder::new("key found")
            .token("key",   "key",  Noun, "dobj", 1)
            .token("found", "find", Verb, "ROOT", 1)
            .build();
        let spans = VerbObjectRule.scan(&doc);
        assert_eq!(texts(&doc, &spans), vec!["key found"]);
        assert_eq!(spans[0].range(), (0, 9));
    }

    #[test]
    fn test_verb_object_ignores_pronoun_objects() {
        let doc = DocBuilder::new("saw it")
            .token("saw", "see", Verb, "ROOT", 0)
            .token("it",  "it",  Pron, "dobj", 0)
            .build();
        assert!(VerbObjectRule.scan(&doc).is_empty());
    }

    #[test]
    fn test_prepositional_phrase() {
        let doc = DocBuilder::new("under the old stone bridge")
            .token("under",  "under",  Adp,  "ROOT",     0)
            .token("the",    "the",    Det,  "det",      4)
            .token("old",    "old",    Adj,  "amod",     4)
            .token("stone",  "stone",  Noun, "compound", 4)
            .token("bridge", "bridge", Noun, "pobj",     0)
            .build();
        assert_eq!(
            texts(&doc, &PrepositionalRule::default().scan(&doc)),
            vec!["under the old stone bridge"]
        );
    }

    #[test]
    fn test_prepositional_word_cap() {
        // Five words is allowed; six is not
        let five = DocBuilder::new("in a big dark house")
            .token("in",    "in",    Adp,  "ROOT", 0)
            .token("a",     "a",     Det,  "det",  4)
            .token("big",   "big",   Adj,  "amod", 4)
            .token("dark",  "dark",  Adj,  "amod", 4)
            .token("house", "house", Noun, "pobj", 0)
            .build();
        assert_eq!(PrepositionalRule::default().scan(&five).len(), 1);

        let six = DocBuilder::new("in a big old dark house")
            .token("in",    "in",    Adp,  "ROOT", 0)
            .token("a",     "a",     Det,  "det",  5)
            .token("big",   "big",   Adj,  "amod", 5)
            .token("old",   "old",   Adj,  "amod", 5)
            .token("dark",  "dark",  Adj,  "amod", 5)
            .token("house", "house", Noun, "pobj", 0)
            .build();
        assert!(PrepositionalRule::default().scan(&six).is_empty());
    }

    #[test]
    fn test_lone_preposition_is_not_a_phrase() {
        let doc = DocBuilder::new("looked up")
            .token("looked", "look", Verb, "ROOT", 0)
            .token("up",     "up",   Adp,  "prt",  0)
            .build();
        assert!(PrepositionalRule::default().scan(&doc).is_empty());
    }

    #[test]
    fn test_adverb_verb() {
        let doc = DocBuilder::new("He walked very slowly")
            .token("He",     "he",     Pron, "nsubj",  1)
            .token("walked", "walk",   Verb, "ROOT",   1)
            .token("very",   "very",   Adv,  "advmod", 3)
            .token("slowly", "slowly", Adv,  "advmod", 1)
            .build();
        // "very" hangs off an adverb, not a verb
        assert_eq!(texts(&doc, &AdverbVerbRule::default().scan(&doc)), vec!["walked very slowly"]);
    }

    #[test]
    fn test_adverb_verb_word_cap() {
        let doc = DocBuilder::new("Suddenly the old man ran")
            .token("Suddenly", "suddenly", Adv,  "advmod", 4)
            .token("the",      "the",      Det,  "det",    3)
            .token("old",      "old",      Adj,  "amod",   3)
            .token("man",      "man",      Noun, "nsubj",  4)
            .token("ran",      "run",      Verb, "ROOT",   4)
            .build();
        assert!(AdverbVerbRule::default().scan(&doc).is_empty());
    }

    #[test]
    fn test_temporal_phrase() {
        let doc = DocBuilder::new("That night we left")
            .token("That",  "that",  Det,  "det",      1)
            .token("night", "night", Noun, "npadvmod", 3)
            .token("we",    "we",    Pron, "nsubj",    3)
            .token("left",  "leave", Verb, "ROOT",     3)
            .build();
        assert_eq!(texts(&doc, &TemporalRule::default().scan(&doc)), vec!["That night"]);
    }

    #[test]
    fn test_temporal_single_marker_and_entity() {
        let doc = DocBuilder::new("Then at 5 pm")
            .token("Then", "then", Adv, "advmod", 1)
            .token("at",   "at",   Adp, "ROOT",   1)
            .token("5",    "5",    Num, "nummod", 3)
            .token("pm",   "pm",   Noun, "pobj",  1)
            .entity("5 pm", "TIME")
            .build();
        // "Then" alone; "5" is a TIME token with no children; "pm" takes its nummod
        assert_eq!(texts(&doc, &TemporalRule::default().scan(&doc)), vec!["Then", "5", "5 pm"]);
    }

    #[test]
    fn test_temporal_word_cap() {
        // Four words is allowed; five is not
        let four = DocBuilder::new("two long cold nights")
            .token("two",    "two",   Num,  "nummod", 3)
            .token("long",   "long",  Adj,  "amod",   3)
            .token("cold",   "cold",  Adj,  "amod",   3)
            .token("nights", "night", Noun, "ROOT",   3)
            .build();
        assert_eq!(texts(&four, &TemporalRule::default().scan(&four)), vec!["two long cold nights"]);

        let five = DocBuilder::new("those two long cold nights")
            .token("those",  "that",  Det,  "det",    4)
            .token("two",    "two",   Num,  "nummod", 4)
            .token("long",   "long",  Adj,  "amod",   4)
            .token("cold",   "cold",  Adj,  "amod",   4)
            .token("nights", "night", Noun, "ROOT",   4)
            .build();
        assert!(TemporalRule::default().scan(&five).is_empty());
    }

    #[test]
    fn test_compound_noun() {
        let doc = DocBuilder::new("the parking lot")
            .token("the",     "the",     Det,  "det",      2)
            .token("parking", "parking", Noun, "compound", 2)
            .token("lot",     "lot",     Noun, "ROOT",     2)
            .build();
        assert_eq!(texts(&doc, &CompoundNounRule.scan(&doc)), vec!["parking lot"]);
    }

    #[test]
    fn test_emotional_copula() {
        let doc = DocBuilder::new("I felt very cold")
            .token("I",    "I",    Pron, "nsubj",  1)
            .token("felt", "feel", Verb, "ROOT",   1)
            .token("very", "very", Adv,  "advmod", 3)
            .token("cold", "cold", Adj,  "acomp",  1)
            .build();
        assert_eq!(texts(&doc, &EmotionalCopulaRule::default().scan(&doc)), vec!["felt very cold"]);
    }

    #[test]
    fn test_emotional_copula_word_cap() {
        // Four words is allowed; five is not
        let four = DocBuilder::new("felt not very cold")
            .token("felt", "feel", Verb, "ROOT",   0)
            .token("not",  "not",  Part, "neg",    3)
            .token("very", "very", Adv,  "advmod", 3)
            .token("cold", "cold", Adj,  "acomp",  0)
            .build();
        assert_eq!(texts(&four, &EmotionalCopulaRule::default().scan(&four)), vec!["felt not very cold"]);

        let five = DocBuilder::new("felt really not very cold")
            .token("felt",   "feel",   Verb, "ROOT",   0)
            .token("really", "really", Adv,  "advmod", 4)
            .token("not",    "not",    Part, "neg",    4)
            .token("very",   "very",   Adv,  "advmod", 4)
            .token("cold",   "cold",   Adj,  "acomp",  0)
            .build();
        assert!(EmotionalCopulaRule::default().scan(&five).is_empty());
    }

    #[test]
    fn test_emotional_copula_xcomp_needs_adjective() {
        let adj = DocBuilder::new("seemed happy")
            .token("seemed", "seem",  Verb, "ROOT",  0)
            .token("happy",  "happy", Adj,  "xcomp", 0)
            .build();
        assert_eq!(EmotionalCopulaRule::default().scan(&adj).len(), 1);

        let verb = DocBuilder::new("seemed to leave")
            .token("seemed", "seem",  Verb, "ROOT",  0)
            .token("to",     "to",    Part, "aux",   2)
            .token("leave",  "leave", Verb, "xcomp", 0)
            .build();
        assert!(EmotionalCopulaRule::default().scan(&verb).is_empty());
    }
}
