//! # rapid-lda-prep
//!
//! Turns a directory of plain-text documents into noun-only, lemmatized
//! documents suitable as topic-model (LDA) input.
//!
//! Each document passes through three stages:
//!
//! 1. **Clean**: lowercase, strip digits, punctuation, short tokens and
//!    stopwords.
//! 2. **Lemmatize**: replace each word with its base form, using the part of
//!    speech inferred in context.
//! 3. **Extract**: keep only noun phrases.
//!
//! ```no_run
//! use std::path::Path;
//! use rapid_lda_prep::{prepare_corpus, PrepConfig};
//!
//! let report = prepare_corpus(Path::new("corpus"), Path::new("nouns"), &PrepConfig::default())?;
//! println!("{} documents written", report.written.len());
//! # Ok::<(), rapid_lda_prep::PrepError>(())
//! ```

use std::path::Path;
use std::sync::Arc;

pub mod corpus;
pub mod error;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod types;

pub use corpus::{CorpusRunner, RunReport};
pub use error::{PrepError, Result};
pub use nlp::model::{EnglishModel, LanguageModel};
pub use pipeline::artifacts::Document;
pub use pipeline::runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use pipeline::spec::PrepSpec;
pub use types::{PosTag, PrepConfig, Token};

/// Run the standard pipeline over `input` into `output` with a fresh
/// [`EnglishModel`].
pub fn prepare_corpus(input: &Path, output: &Path, cfg: &PrepConfig) -> Result<RunReport> {
    let model: Arc<dyn LanguageModel> = Arc::new(EnglishModel::from_config(cfg));
    CorpusRunner::standard(model, cfg).run(input, output)
}
