//! Stopword filtering
//!
//! The default list is a fixed English set bundled with the crate, so cleaned
//! output does not drift with upstream list updates. Other languages come from
//! the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::PrepConfig;

/// Fixed English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The bundled English list. Matching is case-sensitive since the
    /// cleaner only ever sees lowercase text.
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOPWORDS).with_case_sensitive(true)
    }

    /// Create a new stopword filter for the given language from the
    /// `stop-words` crate
    ///
    /// Unknown languages fall back to the bundled English list.
    pub fn new(language: &str) -> Self {
        match Self::language(language) {
            Some(lang) => Self {
                stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
                case_sensitive: false,
            },
            None => Self::english(),
        }
    }

    /// Build the filter described by a resolved config
    pub fn from_config(cfg: &PrepConfig) -> Self {
        let mut filter = match cfg.stopword_language.as_deref() {
            Some(lang) => Self::new(lang),
            None => Self::english(),
        };
        for word in &cfg.extra_stopwords {
            filter.stopwords.insert(word.to_lowercase());
        }
        for word in &cfg.removed_stopwords {
            filter.stopwords.remove(&word.to_lowercase());
        }
        filter
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Drop every whitespace-separated token that is a stopword
    pub fn filter_text(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.is_stopword(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Whether `language` names a list this filter can load
    pub fn supports_language(language: &str) -> bool {
        Self::language(language).is_some()
    }

    /// Whether any word of `language`'s list can match cleaned text.
    ///
    /// The cleaner keeps ASCII letters only, so Cyrillic and Arabic lists
    /// never match, and Latin-script entries with diacritics are dead.
    pub fn matches_cleaned_text(language: &str) -> bool {
        Self::language(language).is_some_and(|lang| {
            get(lang)
                .iter()
                .any(|w| w.bytes().all(|b| b.is_ascii_lowercase()))
        })
    }

    fn language(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("are"));
        assert!(filter.is_stopword("in"));
        assert!(!filter.is_stopword("plants"));
        assert!(!filter.is_stopword("rapidly"));
        assert_eq!(filter.len(), ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn test_non_latin_lists_cannot_match_cleaned_text() {
        assert!(StopwordFilter::matches_cleaned_text("en"));
        assert!(StopwordFilter::matches_cleaned_text("german"));
        assert!(!StopwordFilter::matches_cleaned_text("ru"));
        assert!(!StopwordFilter::matches_cleaned_text("arabic"));
        assert!(!StopwordFilter::matches_cleaned_text("klingon"));
    }

    #[test]
    fn test_bundled_list_is_case_sensitive() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_iso_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert!(!StopwordFilter::supports_language("klingon"));
        let filter = StopwordFilter::new("klingon");
        assert_eq!(filter.len(), ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn test_from_config_applies_overrides() {
        let cfg = PrepConfig {
            extra_stopwords: vec!["Figure".to_string()],
            removed_stopwords: vec!["not".to_string()],
            ..PrepConfig::default()
        };
        let filter = StopwordFilter::from_config(&cfg);

        assert!(filter.is_stopword("figure"));
        assert!(!filter.is_stopword("not"));
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_filter_text_whole_words_only() {
        let filter = StopwordFilter::english();

        assert_eq!(filter.filter_text("the theory of everything"), "theory everything");
        assert_eq!(filter.filter_text("the and of"), "");
        assert_eq!(filter.filter_text(""), "");
    }
}
