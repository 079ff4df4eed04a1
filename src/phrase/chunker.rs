//! Noun chunk detection
//!
//! Identifies noun phrases using pattern matching on POS tags.
//! Pattern: (ADJ)* (NOUN)+, never crossing a sentence boundary.

use crate::types::{ChunkSpan, PosTag, PrepConfig, Token};

/// Configuration for noun chunk detection
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Minimum number of tokens in a chunk
    pub min_length: usize,
    /// Maximum number of tokens in a chunk
    pub max_length: usize,
    /// Whether leading adjectives belong to the chunk
    pub include_modifiers: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 5,
            include_modifiers: true,
        }
    }
}

impl ChunkerConfig {
    pub fn from_config(cfg: &PrepConfig) -> Self {
        Self {
            min_length: cfg.chunk_min_length,
            max_length: cfg.chunk_max_length,
            include_modifiers: cfg.include_modifiers,
        }
    }
}

/// Noun chunk detector
#[derive(Debug, Clone, Default)]
pub struct NounChunker {
    config: ChunkerConfig,
}

impl NounChunker {
    /// Create a new chunker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with custom config
    pub fn with_config(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Set minimum chunk length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Set maximum chunk length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Keep or drop leading adjectives
    pub fn with_modifiers(mut self, include_modifiers: bool) -> Self {
        self.config.include_modifiers = include_modifiers;
        self
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Extract noun chunks from tokens, in document order
    ///
    /// Spans index into `tokens` itself.
    pub fn extract_chunks(&self, tokens: &[Token]) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();
        let mut offset = 0;
        for sentence in tokens.chunk_by(|a, b| a.sentence_idx == b.sentence_idx) {
            self.extract_chunks_from_sentence(sentence, offset, &mut chunks);
            offset += sentence.len();
        }
        chunks
    }

    fn extract_chunks_from_sentence(
        &self,
        tokens: &[Token],
        offset: usize,
        chunks: &mut Vec<ChunkSpan>,
    ) {
        let mut i = 0;

        while i < tokens.len() {
            if let Some((span, matched_end)) = self.match_noun_phrase(tokens, i) {
                let len = span.len();
                if len >= self.config.min_length && len <= self.config.max_length {
                    chunks.push(ChunkSpan {
                        start_token: offset + span.start_token,
                        end_token: offset + span.end_token,
                    });
                    i = matched_end;
                    continue;
                }
            }
            i += 1;
        }
    }

    /// Match (ADJ)* (NOUN)+ starting at `start`.
    ///
    /// Returns the emitted span and the index just past the whole match, both
    /// local to the sentence.
    fn match_noun_phrase(&self, tokens: &[Token], start: usize) -> Option<(ChunkSpan, usize)> {
        let mut end = start;

        while end < tokens.len() && tokens[end].pos == PosTag::Adjective {
            end += 1;
        }

        let noun_start = end;
        while end < tokens.len() && tokens[end].pos.is_noun() {
            end += 1;
        }

        if end == noun_start {
            return None;
        }

        let span = ChunkSpan {
            start_token: if self.config.include_modifiers {
                start
            } else {
                noun_start
            },
            end_token: end,
        };
        Some((span, end))
    }
}

/// Extract the text for a chunk span from the tokens it was found in.
///
/// A span that does not fit `tokens` yields the empty string.
pub fn chunk_text(tokens: &[Token], chunk: &ChunkSpan) -> String {
    tokens
        .get(chunk.start_token..chunk.end_token)
        .unwrap_or_default()
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
