//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the language model is the one dynamic seam and is
//! passed in as `&dyn LanguageModel`.

use crate::error::Result;
use crate::nlp::cleaner::TextCleaner;
use crate::nlp::model::LanguageModel;
use crate::phrase::chunker::{chunk_text, ChunkerConfig, NounChunker};
use crate::types::PrepConfig;

// ============================================================================
// Cleaner: regex normalization (stage 1)
// ============================================================================

/// Text normalization stage.
///
/// # Contract
///
/// - **Input**: raw document text.
/// - **Output**: lowercase ASCII letters separated by single spaces, or the
///   empty string.
/// - **Total**: never fails; anything it cannot keep is dropped.
pub trait Cleaner {
    fn clean(&self, text: &str) -> String;
}

impl Cleaner for TextCleaner {
    #[inline]
    fn clean(&self, text: &str) -> String {
        TextCleaner::clean(self, text)
    }
}

// ============================================================================
// Lemmatizer: POS-aware base forms (stage 2)
// ============================================================================

/// Lemmatization stage.
///
/// # Contract
///
/// - **Input**: cleaned text.
/// - **Output**: one lemma per model token, in order, joined by single spaces.
/// - **Errors**: whatever the model reports, e.g. text above its
///   `max_length`.
pub trait Lemmatizer {
    fn lemmatize(&self, text: &str, model: &dyn LanguageModel) -> Result<String>;
}

/// Lemmatizer that takes each token's lemma from the model
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelLemmatizer;

impl Lemmatizer for ModelLemmatizer {
    fn lemmatize(&self, text: &str, model: &dyn LanguageModel) -> Result<String> {
        let tokens = model.parse(text)?;
        Ok(tokens
            .iter()
            .map(|t| t.lemma.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

// ============================================================================
// NounExtractor: noun phrase filter (stage 3)
// ============================================================================

/// Noun phrase extraction stage.
///
/// # Contract
///
/// - **Input**: lemmatized text.
/// - **Output**: every noun phrase in document order, each prefixed by a
///   single space; empty when there is none.
/// - Never emits more tokens than it receives.
pub trait NounExtractor {
    fn extract(&self, text: &str, model: &dyn LanguageModel) -> Result<String>;
}

/// Noun extractor backed by [`NounChunker`]
#[derive(Debug, Clone, Default)]
pub struct ChunkNounExtractor {
    chunker: NounChunker,
}

impl ChunkNounExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunker(chunker: NounChunker) -> Self {
        Self { chunker }
    }

    pub fn from_config(cfg: &PrepConfig) -> Self {
        Self::with_chunker(NounChunker::with_config(ChunkerConfig::from_config(cfg)))
    }

    pub fn chunker(&self) -> &NounChunker {
        &self.chunker
    }
}

impl NounExtractor for ChunkNounExtractor {
    fn extract(&self, text: &str, model: &dyn LanguageModel) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let tokens = model.parse(text)?;
        let mut out = String::new();
        for chunk in self.chunker.extract_chunks(&tokens) {
            out.push(' ');
            out.push_str(&chunk_text(&tokens, &chunk));
        }
        Ok(out)
    }
}
