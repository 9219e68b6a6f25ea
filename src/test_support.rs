// Test-only helpers for building annotated documents by hand.
//
// Offsets are located by searching the text left to right, so a
// test only lists surface strings and the builder works out the
// character positions the same way an annotation pipeline would.

use crate::domain::document::{
    assign_entity_types, AnnotatedDocument, AnnotatedToken, EntitySpan, PartOfSpeech,
};

pub struct DocBuilder {
    text:      String,
    cursor:    usize,
    tokens:    Vec<AnnotatedToken>,
    sentences: Vec<(usize, usize)>,
    entities:  Vec<EntitySpan>,
}

impl DocBuilder {
    pub fn new(text: &str) -> Self {
        Self {
            text:      text.to_string(),
            cursor:    0,
            tokens:    Vec::new(),
            sentences: Vec::new(),
            entities:  Vec::new(),
        }
    }

    /// Append the next token. `head` is the ordinal of its head.
    pub fn token(mut self, surface: &str, lemma: &str, pos: PartOfSpeech, dep: &str, head: usize) -> Self {
        let found = self.text[self.cursor..]
            .find(surface)
            .unwrap_or_else(|| panic!("token {surface:?} not found after byte {}", self.cursor));
        let byte  = self.cursor + found;
        let start = self.text[..byte].chars().count();

        self.cursor = byte + surface.len();
        let index   = self.tokens.len();
        self.tokens.push(AnnotatedToken::new(index, start, surface, lemma, pos, dep, head));
        self
    }

    /// Mark the first occurrence of `surface` as an entity
    pub fn entity(mut self, surface: &str, label: &str) -> Self {
        let byte = self
            .text
            .find(surface)
            .unwrap_or_else(|| panic!("entity {surface:?} not found"));
        let start = self.text[..byte].chars().count();
        let end   = start + surface.chars().count();
        self.entities.push(EntitySpan::new(start, end, label));
        self
    }

    /// Add an explicit sentence span in character offsets
    pub fn sentence(mut self, start: usize, end: usize) -> Self {
        self.sentences.push((start, end));
        self
    }

    /// Build the document. Without explicit sentences, all
    /// tokens form a single sentence.
    pub fn build(mut self) -> AnnotatedDocument {
        if self.sentences.is_empty() {
            if let (Some(first), Some(last)) = (self.tokens.first(), self.tokens.last()) {
                self.sentences.push((first.start, last.end));
            }
        }
        assign_entity_types(&mut self.tokens, &self.entities);

        AnnotatedDocument::new(self.text, self.tokens, self.sentences, self.entities)
            .expect("test document must satisfy the annotation contract")
    }
}
