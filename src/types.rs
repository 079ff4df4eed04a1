//! Core types shared across the pipeline
//!
//! Tokens and tags produced by the language model, chunk spans produced by
//! the noun chunker, and the resolved runtime configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};
use crate::pipeline::spec::PrepSpec;
use crate::pipeline::validation::ValidationEngine;

/// Default ceiling on the number of bytes the model will parse in one call.
pub const DEFAULT_MAX_LENGTH: usize = 6_000_000;

/// Coarse part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Particle,
    Numeral,
}

impl PosTag {
    /// Whether this tag heads a noun phrase
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun)
    }
}

/// A parsed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text as it appears in the input
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    /// Part-of-speech tag inferred in context
    pub pos: PosTag,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Index of the sentence containing this token
    pub sentence_idx: usize,
    /// Index of this token in the document
    pub token_idx: usize,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PosTag,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            start,
            end,
            sentence_idx,
            token_idx,
        }
    }
}

/// A noun chunk as a half-open range of positions in the token slice it was
/// found in. Independent of the tokens' own `token_idx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    pub start_token: usize,
    pub end_token: usize,
}

impl ChunkSpan {
    pub fn len(&self) -> usize {
        self.end_token - self.start_token
    }

    pub fn is_empty(&self) -> bool {
        self.start_token == self.end_token
    }
}

/// Resolved runtime configuration.
///
/// Built directly, via [`Default`], or from a validated [`PrepSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepConfig {
    /// Maximum bytes the model parses per call
    pub max_length: usize,
    /// `stop-words` language code; `None` selects the bundled English list
    pub stopword_language: Option<String>,
    /// Words added to the stopword list
    pub extra_stopwords: Vec<String>,
    /// Words removed from the stopword list
    pub removed_stopwords: Vec<String>,
    /// Minimum noun chunk length in tokens
    pub chunk_min_length: usize,
    /// Maximum noun chunk length in tokens
    pub chunk_max_length: usize,
    /// Keep adjective modifiers inside noun chunks
    pub include_modifiers: bool,
    /// Process input files in filename order
    pub sort_inputs: bool,
    /// Worker threads; `None` or `Some(1)` runs sequentially
    pub workers: Option<usize>,
    /// Only load files with this extension; `None` loads every regular file
    pub extension: Option<String>,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            stopword_language: None,
            extra_stopwords: Vec::new(),
            removed_stopwords: Vec::new(),
            chunk_min_length: 1,
            chunk_max_length: 5,
            include_modifiers: true,
            sort_inputs: true,
            workers: None,
            extension: Some("txt".to_string()),
        }
    }
}

impl PrepConfig {
    /// Validate a spec and resolve it into a runtime config.
    ///
    /// Every error diagnostic is reported at once; warnings are logged.
    pub fn from_spec(spec: &PrepSpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        for warning in report.warnings() {
            tracing::warn!(%warning, "pipeline spec warning");
        }
        if report.has_errors() {
            let lines: Vec<String> = report.errors().map(|e| e.to_string()).collect();
            return Err(PrepError::InvalidSpec(lines.join("\n")));
        }

        let defaults = Self::default();
        Ok(Self {
            max_length: spec.model.max_length.unwrap_or(defaults.max_length),
            stopword_language: spec.stopwords.language.clone(),
            extra_stopwords: spec.stopwords.extra.clone(),
            removed_stopwords: spec.stopwords.remove.clone(),
            chunk_min_length: spec.chunker.min_length.unwrap_or(defaults.chunk_min_length),
            chunk_max_length: spec.chunker.max_length.unwrap_or(defaults.chunk_max_length),
            include_modifiers: spec
                .chunker
                .include_modifiers
                .unwrap_or(defaults.include_modifiers),
            sort_inputs: spec.runtime.sort_inputs.unwrap_or(defaults.sort_inputs),
            workers: spec.runtime.workers,
            extension: match &spec.runtime.extension {
                Some(ext) if ext.is_empty() || ext == "*" => None,
                Some(ext) => Some(ext.trim_start_matches('.').to_string()),
                None => defaults.extension,
            },
        })
    }

    /// Parse a JSON spec and resolve it.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: PrepSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = PrepConfig::default();
        assert_eq!(cfg.max_length, DEFAULT_MAX_LENGTH);
        assert!(cfg.sort_inputs);
        assert_eq!(cfg.extension.as_deref(), Some("txt"));
        assert!(cfg.stopword_language.is_none());
    }

    #[test]
    fn test_from_minimal_json_matches_default() {
        let cfg = PrepConfig::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(cfg, PrepConfig::default());
    }

    #[test]
    fn test_from_json_overrides() {
        let cfg = PrepConfig::from_json(
            r#"{
                "v": 1,
                "model": { "max_length": 60000000 },
                "stopwords": { "language": "de", "extra": ["foo"] },
                "chunker": { "include_modifiers": false },
                "runtime": { "sort_inputs": false, "workers": 4, "extension": ".md" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.max_length, 60_000_000);
        assert_eq!(cfg.stopword_language.as_deref(), Some("de"));
        assert_eq!(cfg.extra_stopwords, vec!["foo".to_string()]);
        assert!(!cfg.include_modifiers);
        assert!(!cfg.sort_inputs);
        assert_eq!(cfg.workers, Some(4));
        assert_eq!(cfg.extension.as_deref(), Some("md"));
    }

    #[test]
    fn test_wildcard_extension_loads_everything() {
        let cfg = PrepConfig::from_json(r#"{ "v": 1, "runtime": { "extension": "*" } }"#).unwrap();
        assert!(cfg.extension.is_none());
    }

    #[test]
    fn test_invalid_spec_reports_all_errors() {
        let err = PrepConfig::from_json(
            r#"{ "v": 1, "model": { "max_length": 0 }, "runtime": { "workers": 0 } }"#,
        )
        .unwrap_err();
        match err {
            PrepError::InvalidSpec(msg) => {
                assert!(msg.contains("max_length"));
                assert!(msg.contains("workers"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = PrepConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PrepError::Json(_)));
    }

    #[test]
    fn test_pos_tag_classes() {
        assert!(PosTag::Noun.is_noun());
        assert!(!PosTag::Verb.is_noun());
    }
}
