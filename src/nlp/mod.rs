//! Natural Language Processing components
//!
//! Text cleaning, stopword filtering, tokenization, and the rule-based
//! English model (lexicon, morphology, contextual tagger).

pub mod cleaner;
pub mod lexicon;
pub mod model;
pub mod morphology;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
