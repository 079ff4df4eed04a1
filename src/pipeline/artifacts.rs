//! Pipeline artifacts.
//!
//! A [`Document`] carries one input file through the stages. Each stage
//! fills in its own field, so an observer or a failed run can see how far the
//! document got.

/// One input document and the text produced by each stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// File name, reused verbatim for the output file
    pub name: String,
    /// Lowercased input text
    pub raw: String,
    pub cleaned: Option<String>,
    pub lemmatized: Option<String>,
    pub nouns: Option<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            ..Self::default()
        }
    }

    /// Whether every stage has run
    pub fn is_complete(&self) -> bool {
        self.nouns.is_some()
    }

    /// Text to write out; empty until the last stage has run
    pub fn output(&self) -> &str {
        self.nouns.as_deref().unwrap_or("")
    }

    /// Whether the final output has no noun at all
    pub fn is_empty_output(&self) -> bool {
        self.output().trim().is_empty()
    }
}
