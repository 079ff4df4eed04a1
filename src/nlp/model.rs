//! Linguistic model
//!
//! A [`LanguageModel`] turns text into tagged, lemmatized tokens. Stages take
//! the model as `&dyn LanguageModel` so a different implementation can be
//! swapped in without touching the pipeline.
//!
//! The process-wide slot ([`init_shared`], [`shared`], [`shutdown_shared`])
//! lets a binary load the model once and hand clones of the `Arc` to every
//! pipeline it builds.

use std::sync::{Arc, RwLock};

use super::lexicon::Lexicon;
use super::morphology::lemma_for;
use super::tagger;
use super::tokenizer::tokenize;
use crate::error::{PrepError, Result};
use crate::types::{PrepConfig, Token, DEFAULT_MAX_LENGTH};

/// Tokenizer, tagger and lemmatizer behind one interface
pub trait LanguageModel: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Longest input, in bytes, `parse` accepts
    fn max_length(&self) -> usize;

    /// Parse `text` into tokens in document order.
    ///
    /// Fails with [`PrepError::TextTooLong`] when `text` exceeds
    /// [`max_length`](Self::max_length); input is never truncated.
    fn parse(&self, text: &str) -> Result<Vec<Token>>;
}

/// Rule-based contextual English model
#[derive(Debug, Clone)]
pub struct EnglishModel {
    lexicon: Lexicon,
    max_length: usize,
}

impl Default for EnglishModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishModel {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::english(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn from_config(cfg: &PrepConfig) -> Self {
        Self::new().with_max_length(cfg.max_length)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl LanguageModel for EnglishModel {
    fn name(&self) -> &str {
        "english-rules"
    }

    fn max_length(&self) -> usize {
        self.max_length
    }

    fn parse(&self, text: &str) -> Result<Vec<Token>> {
        if text.len() > self.max_length {
            return Err(PrepError::TextTooLong {
                len: text.len(),
                max: self.max_length,
            });
        }

        let words = tokenize(text);
        let tags = tagger::tag(&words, &self.lexicon);

        Ok(words
            .iter()
            .zip(tags)
            .enumerate()
            .map(|(idx, (word, pos))| {
                let lower = word.text.to_lowercase();
                let lemma = lemma_for(&lower, pos, &self.lexicon);
                Token::new(
                    word.text,
                    lemma,
                    pos,
                    word.start,
                    word.end,
                    word.sentence_idx,
                    idx,
                )
            })
            .collect())
    }
}

// ─── Shared slot ───────────────────────────────────────────────────────────

static SHARED: RwLock<Option<Arc<dyn LanguageModel>>> = RwLock::new(None);

/// Install `model` as the process-wide model, replacing any previous one.
pub fn init_shared(model: Arc<dyn LanguageModel>) {
    tracing::info!(model = model.name(), max_length = model.max_length(), "model loaded");
    let mut slot = SHARED.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(model);
}

/// The process-wide model.
///
/// Fails with [`PrepError::ModelNotInitialized`] before [`init_shared`] or
/// after [`shutdown_shared`].
pub fn shared() -> Result<Arc<dyn LanguageModel>> {
    let slot = SHARED.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    slot.clone().ok_or(PrepError::ModelNotInitialized)
}

/// Release the process-wide model. Pipelines already holding a clone keep it.
pub fn shutdown_shared() {
    let mut slot = SHARED.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    if slot.take().is_some() {
        tracing::info!("model released");
    }
}
