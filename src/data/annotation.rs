// ============================================================
// Layer 4 — Annotation Loader
// ============================================================
// Reads the output of the external annotation pipeline:
// one JSON document per line, in the shape spaCy produces
// with `Doc.to_json()`:
//
//   {"id": 3, "text": "I never saw the blue door again.",
//    "tokens": [{"id": 0, "start": 0, "end": 1, "pos": "PRON",
//                "lemma": "I", "dep": "nsubj", "head": 2}, ...],
//    "sents":  [{"start": 0, "end": 32}],
//    "ents":   []}
//
// Extensions over plain spaCy output:
//   - "id" on the document is optional; without it the
//     document gets its sequence number in the file
//   - "ent_type" on a token is optional; without it the
//     token inherits the label of the entity covering it
//
// Every line is turned into a validated AnnotatedDocument.
// A line that breaks the annotation contract is fatal by
// default. With skip_invalid it is logged and dropped, the
// same way the document loader skips one unreadable file
// instead of aborting the whole corpus.
//
// Reference: serde / serde_json documentation
//            spaCy Doc.to_json() format

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use crate::domain::document::{
    assign_entity_types, char_offsets, AnnotatedDocument, AnnotatedToken, EntitySpan, PartOfSpeech,
};
use crate::domain::dream::AnnotatedDream;
use crate::domain::error::AnnotationError;
use crate::domain::traits::AnnotatedSource;

// ─── Wire Format ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Deserialize)]
pub struct WireDocument {
    #[serde(default)]
    pub id:     Option<usize>,
    pub text:   String,
    #[serde(default)]
    pub tokens: Vec<WireToken>,
    #[serde(default)]
    pub sents:  Vec<WireSpan>,
    #[serde(default)]
    pub ents:   Vec<WireEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireToken {
    #[serde(default)]
    pub id:       Option<usize>,
    pub start:    usize,
    pub end:      usize,
    pub pos:      String,
    #[serde(default)]
    pub lemma:    String,
    #[serde(default)]
    pub dep:      String,
    pub head:     usize,
    #[serde(default)]
    pub ent_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireSpan {
    pub start: usize,
    pub end:   usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireEntity {
    pub start: usize,
    pub end:   usize,
    #[serde(default)]
    pub label: String,
}

impl WireDocument {
    /// Convert to a validated AnnotatedDocument.
    pub fn into_document(self) -> Result<AnnotatedDocument, AnnotationError> {
        let offsets = char_offsets(&self.text);
        let len     = offsets.len() - 1;

        let entities: Vec<EntitySpan> = self
            .ents
            .into_iter()
            .map(|e| EntitySpan::new(e.start, e.end, e.label))
            .collect();

        let mut tokens = Vec::with_capacity(self.tokens.len());
        for (position, wire) in self.tokens.into_iter().enumerate() {
            let index = wire.id.unwrap_or(position);

            // Bounds first: the surface text is sliced from the document
            if wire.start > wire.end {
                return Err(AnnotationError::InvertedToken { index, start: wire.start, end: wire.end });
            }
            if wire.end > len {
                return Err(AnnotationError::TokenOutOfBounds { index, end: wire.end, len });
            }

            let surface = &self.text[offsets[wire.start]..offsets[wire.end]];
            let lemma   = if wire.lemma.is_empty() { surface } else { wire.lemma.as_str() };

            let mut token = AnnotatedToken::new(
                index,
                wire.start,
                surface,
                lemma,
                PartOfSpeech::from(wire.pos.as_str()),
                wire.dep,
                wire.head,
            );
            if let Some(label) = wire.ent_type {
                token = token.with_entity(label);
            }
            tokens.push(token);
        }

        // An empty ent_type counts as unspecified and falls back to the spans
        assign_entity_types(&mut tokens, &entities);

        let sentences = self.sents.into_iter().map(|s| (s.start, s.end)).collect();

        AnnotatedDocument::new(self.text, tokens, sentences, entities)
    }
}

// ─── AnnotationLoader ─────────────────────────────────────────────────────────
/// Loads annotated documents from a JSONL file.
/// Implements the AnnotatedSource trait from Layer 3.
pub struct AnnotationLoader {
    path:         PathBuf,
    skip_invalid: bool,
}

impl AnnotationLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), skip_invalid: false }
    }

    /// Log and drop documents that break the annotation contract
    /// instead of failing the whole load.
    pub fn skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

impl AnnotatedSource for AnnotationLoader {
    fn load_all(&self) -> Result<Vec<AnnotatedDream>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open annotations '{}'", self.path.display()))?;

        let mut dreams   = Vec::new();
        let mut sequence = 0usize;
        let mut skipped  = 0usize;

        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.with_context(|| {
                format!("Cannot read line {} of '{}'", line_no + 1, self.path.display())
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let id = sequence;
            sequence += 1;

            match parse_line(&line) {
                Ok((explicit_id, document)) => {
                    if document.is_empty() && !document.text().trim().is_empty() {
                        tracing::warn!(
                            "Line {} of '{}' has text but no tokens; it will yield no patterns",
                            line_no + 1,
                            self.path.display()
                        );
                    }
                    dreams.push(AnnotatedDream { id: explicit_id.unwrap_or(id), document });
                }
                Err(e) if self.skip_invalid => {
                    tracing::warn!("Skipping line {} of '{}': {:#}", line_no + 1, self.path.display(), e);
                    skipped += 1;
                }
                Err(e) => {
                    return Err(e.context(format!(
                        "Invalid annotation on line {} of '{}'",
                        line_no + 1,
                        self.path.display()
                    )));
                }
            }
        }

        tracing::info!(
            "Loaded {} annotated documents from '{}' ({} skipped)",
            dreams.len(),
            self.path.display(),
            skipped
        );
        Ok(dreams)
    }
}

/// Parse and validate one JSONL line
fn parse_line(line: &str) -> Result<(Option<usize>, AnnotatedDocument)> {
    let wire: WireDocument = serde_json::from_str(line).context("Malformed annotation JSON")?;
    let id       = wire.id;
    let document = wire.into_document()?;
    Ok((id, document))
}
