//! Sentence and word segmentation
//!
//! Uses Unicode text segmentation (UAX #29) for both sentence and word
//! boundaries. Punctuation and whitespace never become tokens.

use unicode_segmentation::UnicodeSegmentation;

/// A word located in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    pub sentence_idx: usize,
}

/// Split `text` into words, numbering sentences from zero.
///
/// Sentences without any word do not consume an index.
pub fn tokenize(text: &str) -> Vec<WordSpan<'_>> {
    let mut words = Vec::new();
    let mut sentence_idx = 0;

    for (sent_offset, sentence) in text.split_sentence_bound_indices() {
        let before = words.len();
        for (word_offset, word) in sentence.unicode_word_indices() {
            let start = sent_offset + word_offset;
            words.push(WordSpan {
                text: word,
                start,
                end: start + word.len(),
                sentence_idx,
            });
        }
        if words.len() > before {
            sentence_idx += 1;
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_words() {
        let words = tokenize("plants growing rapidly");
        let texts: Vec<_> = words.iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["plants", "growing", "rapidly"]);
        assert!(words.iter().all(|w| w.sentence_idx == 0));
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "the quick  fox";
        for w in tokenize(text) {
            assert_eq!(&text[w.start..w.end], w.text);
        }
    }

    #[test]
    fn test_sentence_indices() {
        let words = tokenize("Dogs bark. Cats sleep! Birds sing?");
        let idx: Vec<_> = words.iter().map(|w| w.sentence_idx).collect();
        assert_eq!(idx, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_punctuation_is_dropped() {
        let words = tokenize("... !!! ,,,");
        assert!(words.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_multibyte_offsets() {
        let text = "café résumé";
        let words = tokenize(text);
        assert_eq!(words.len(), 2);
        assert_eq!(&text[words[1].start..words[1].end], "résumé");
    }
}
