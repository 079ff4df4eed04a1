//! Phrase extraction components
//!
//! Noun chunk detection over tagged tokens.

pub mod chunker;
