// ============================================================
// Layer 3 — Annotated Document Domain Types
// ============================================================
// The output of the external annotation pipeline, as the
// pattern extractor sees it:
//
//   AnnotatedDocument
//     ├── text        the exact string that was annotated
//     ├── tokens      left-to-right, one per word/punctuation
//     ├── sentences   character span + token index range
//     ├── entities    character span + label
//     └── children    parent → children index (built here)
//
// Offsets are CHARACTER offsets, not byte offsets, because
// that is what annotation pipelines report. A Rust &str is
// indexed by bytes, so the document keeps a char → byte
// table and all slicing goes through `slice()`.
//
// Everything is validated once in `AnnotatedDocument::new`.
// After that the document is immutable and every rule can
// index tokens and heads without re-checking.
//
// Reference: Rust Book §8 (Storing UTF-8 Encoded Text with Strings)
//            Universal Dependencies POS tag set

use std::ops::Range;

use crate::domain::error::AnnotationError;

// ─── Part of Speech ───────────────────────────────────────────────────────────
/// Coarse Universal POS tag. Unknown tags collapse to `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    Space,
    X,
}

impl From<&str> for PartOfSpeech {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ADJ"   => Self::Adj,
            "ADP"   => Self::Adp,
            "ADV"   => Self::Adv,
            "AUX"   => Self::Aux,
            "CCONJ" | "CONJ" => Self::Cconj,
            "DET"   => Self::Det,
            "INTJ"  => Self::Intj,
            "NOUN"  => Self::Noun,
            "NUM"   => Self::Num,
            "PART"  => Self::Part,
            "PRON"  => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM"   => Self::Sym,
            "VERB"  => Self::Verb,
            "SPACE" => Self::Space,
            _       => Self::X,
        }
    }
}

// ─── Annotated Token ──────────────────────────────────────────────────────────
/// One token produced by the annotation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedToken {
    /// Surface text exactly as it appears in the document
    pub text: String,

    /// Character offset of the first character
    pub start: usize,

    /// Character offset one past the last character
    pub end: usize,

    /// Canonical form, lower-cased on construction
    pub lemma: String,

    pub pos: PartOfSpeech,

    /// Dependency relation label, e.g. "dobj", "amod", "ROOT"
    pub dep: String,

    /// Ordinal of the syntactic head. A root points at itself.
    pub head: usize,

    /// Ordinal of this token within the document
    pub index: usize,

    /// Named-entity type (e.g. "DATE") or None outside any entity
    pub ent_type: Option<String>,
}

impl AnnotatedToken {
    /// Create a token. The end offset is derived from the
    /// character length of `text`.
    pub fn new(
        index: usize,
        start: usize,
        text:  impl Into<String>,
        lemma: impl Into<String>,
        pos:   PartOfSpeech,
        dep:   impl Into<String>,
        head:  usize,
    ) -> Self {
        let text  = text.into();
        let end   = start + text.chars().count();
        let lemma = lemma.into().to_lowercase();

        Self {
            text,
            start,
            end,
            lemma,
            pos,
            dep: dep.into(),
            head,
            index,
            ent_type: None,
        }
    }

    /// Attach a named-entity type. Empty labels mean "no entity".
    pub fn with_entity(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.ent_type = if label.is_empty() { None } else { Some(label) };
        self
    }

    /// True for punctuation tokens, whether the tagger said so
    /// or the token is made of nothing but punctuation characters.
    /// Symbols such as `$` or `+` are not punctuation.
    pub fn is_punct(&self) -> bool {
        self.pos == PartOfSpeech::Punct
            || (!self.text.is_empty() && self.text.chars().all(is_punct_char))
    }

    /// True for whitespace-only tokens
    pub fn is_space(&self) -> bool {
        self.pos == PartOfSpeech::Space || self.text.trim().is_empty()
    }

    /// True if this token's entity type is one of `labels`
    pub fn has_entity_type(&self, labels: &[&str]) -> bool {
        self.ent_type
            .as_deref()
            .map(|t| labels.contains(&t))
            .unwrap_or(false)
    }
}

// ─── Sentence / Entity ────────────────────────────────────────────────────────
/// A sentence: its character span plus the tokens it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub start:  usize,
    pub end:    usize,
    pub tokens: Range<usize>,
}

/// A named-entity span reported by the annotation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub start: usize,
    pub end:   usize,
    pub label: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self { start, end, label: label.into() }
    }

    /// True if the character range [start, end) lies inside this entity
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.start <= start && end <= self.end
    }
}

// ─── Annotated Document ───────────────────────────────────────────────────────
/// A validated, immutable annotated document.
#[derive(Debug, Clone)]
pub struct AnnotatedDocument {
    text:      String,
    /// Byte offset of every character, plus `text.len()` at the end
    offsets:   Vec<usize>,
    tokens:    Vec<AnnotatedToken>,
    sentences: Vec<Sentence>,
    entities:  Vec<EntitySpan>,
    /// children[i] = indices of tokens whose head is i, in order
    children:  Vec<Vec<usize>>,
}

impl AnnotatedDocument {
    /// Validate the annotation contract and build the document.
    ///
    /// `sentences` are `(start, end)` character spans; the token
    /// range of each sentence is resolved here.
    pub fn new(
        text:      impl Into<String>,
        tokens:    Vec<AnnotatedToken>,
        sentences: Vec<(usize, usize)>,
        entities:  Vec<EntitySpan>,
    ) -> Result<Self, AnnotationError> {
        let text = text.into();

        let offsets = char_offsets(&text);
        let len   = offsets.len() - 1;
        let count = tokens.len();

        // ── Tokens: ordinals, bounds, order, heads, text ─────────────────────
        let mut previous = 0usize;
        for (position, tok) in tokens.iter().enumerate() {
            if tok.index != position {
                return Err(AnnotationError::IndexMismatch { position, index: tok.index });
            }
            if tok.start > tok.end {
                return Err(AnnotationError::InvertedToken {
                    index: tok.index,
                    start: tok.start,
                    end:   tok.end,
                });
            }
            if tok.end > len {
                return Err(AnnotationError::TokenOutOfBounds { index: tok.index, end: tok.end, len });
            }
            if tok.start < previous {
                return Err(AnnotationError::TokensOutOfOrder {
                    index:    tok.index,
                    start:    tok.start,
                    previous,
                });
            }
            if tok.head >= count {
                return Err(AnnotationError::DanglingHead { index: tok.index, head: tok.head, count });
            }

            let expected = &text[offsets[tok.start]..offsets[tok.end]];
            if expected != tok.text {
                return Err(AnnotationError::TextMismatch {
                    index:    tok.index,
                    expected: expected.to_string(),
                    found:    tok.text.clone(),
                });
            }

            previous = tok.start;
        }

        // ── Sentences: bounds, then token range via binary search ────────────
        let sentences = sentences
            .into_iter()
            .map(|(start, end)| {
                check_span("sentence", start, end, len)?;
                let first = tokens.partition_point(|t| t.start < start);
                let last  = tokens.partition_point(|t| t.start < end);
                Ok(Sentence { start, end, tokens: first..last.max(first) })
            })
            .collect::<Result<Vec<_>, AnnotationError>>()?;

        for ent in &entities {
            check_span("entity", ent.start, ent.end, len)?;
        }

        // ── Children index ───────────────────────────────────────────────────
        let mut children = vec![Vec::new(); count];
        for tok in &tokens {
            if tok.head != tok.index {
                children[tok.head].push(tok.index);
            }
        }

        Ok(Self { text, offsets, tokens, sentences, entities, children })
    }

    /// The annotated text, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    /// True when the pipeline produced no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token immediately after `tok` in document order
    pub fn next(&self, tok: &AnnotatedToken) -> Option<&AnnotatedToken> {
        self.tokens.get(tok.index + 1)
    }

    /// The syntactic head of `tok` (itself for a root)
    pub fn head(&self, tok: &AnnotatedToken) -> &AnnotatedToken {
        &self.tokens[tok.head]
    }

    /// Direct dependency children of `tok`, in document order
    pub fn children<'a>(&'a self, tok: &AnnotatedToken) -> impl Iterator<Item = &'a AnnotatedToken> + 'a {
        self.children[tok.index].iter().map(move |&i| &self.tokens[i])
    }

    /// Tokens belonging to a sentence
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[AnnotatedToken] {
        &self.tokens[sentence.tokens.clone()]
    }

    /// Slice the text by character offsets. Out-of-range offsets
    /// are clamped to the text, and an inverted range is empty.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        let len   = self.char_len();
        let end   = end.min(len);
        let start = start.min(end);
        &self.text[self.offsets[start]..self.offsets[end]]
    }
}

/// Byte offset of every character of `text`, followed by
/// `text.len()`, so character range [a, b) is bytes
/// `offsets[a]..offsets[b]`.
pub fn char_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// ASCII symbols that `is_ascii_punctuation` accepts but which
/// belong to the Unicode symbol categories (Sc, Sm, Sk).
const ASCII_SYMBOLS: &str = "$+<=>^`|~";

/// Non-ASCII punctuation common in narrative text
const WIDE_PUNCTUATION: &str = "‘’‚“”„«»‹›–—―…¡¿·•†‡′″";

/// True if `c` is in one of the Unicode punctuation categories (P*)
pub fn is_punct_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_punctuation() && !ASCII_SYMBOLS.contains(c)
    } else {
        WIDE_PUNCTUATION.contains(c)
    }
}

/// Give every token without an entity type the label of the
/// entity span that contains it, if any.
pub fn assign_entity_types(tokens: &mut [AnnotatedToken], entities: &[EntitySpan]) {
    for tok in tokens.iter_mut().filter(|t| t.ent_type.is_none()) {
        tok.ent_type = entities
            .iter()
            .find(|e| e.covers(tok.start, tok.end))
            .map(|e| e.label.clone());
    }
}

fn check_span(kind: &'static str, start: usize, end: usize, len: usize) -> Result<(), AnnotationError> {
    if start > end || end > len {
        return Err(AnnotationError::InvalidSpan { kind, start, end, len });
    }
    Ok(())
}
