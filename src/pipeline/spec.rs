//! Pipeline specification types.
//!
//! A [`PrepSpec`] describes the model limits, stopword list, chunker shape
//! and runtime options of a preparation run. These types are the input to the
//! [`super::validation::ValidationEngine`] and are resolved into a
//! [`PrepConfig`](crate::types::PrepConfig).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "model": { "max_length": 6000000 },
//!   "stopwords": { "language": null, "extra": [], "remove": [] },
//!   "chunker": { "min_length": 1, "max_length": 5, "include_modifiers": true },
//!   "runtime": { "sort_inputs": true, "workers": null, "extension": "txt" },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level preparation specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub model: ModelSpec,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    #[serde(default)]
    pub chunker: ChunkerSpec,

    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Language model limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Maximum number of bytes parsed per call. Longer texts fail.
    #[serde(default)]
    pub max_length: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Stopword list selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    /// Language code for the `stop-words` crate. Omit for the bundled English list.
    ///
    /// Stopwords are removed after the cleaner has dropped every non-ASCII
    /// letter, so entries with diacritics never match. Lists with no ASCII
    /// entry at all (`ru`, `ar`) fail validation.
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub extra: Vec<String>,

    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Noun chunk shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkerSpec {
    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub max_length: Option<usize>,

    /// Keep adjectives preceding the head nouns.
    #[serde(default)]
    pub include_modifiers: Option<bool>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Corpus-level execution options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Process files in filename order rather than directory-listing order.
    #[serde(default)]
    pub sort_inputs: Option<bool>,

    /// Number of worker threads. Omit or set to 1 for sequential execution.
    #[serde(default)]
    pub workers: Option<usize>,

    /// Input file extension filter. `"*"` or `""` accepts every file.
    #[serde(default)]
    pub extension: Option<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
