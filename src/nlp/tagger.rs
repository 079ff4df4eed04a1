//! Contextual part-of-speech tagging
//!
//! Two passes per sentence. The lexical pass gives every word a reading from
//! the lexicon and its suffix. The contextual pass resolves ambiguous readings
//! (noun/verb, participle/adjective/gerund) from the resolved tag on the left
//! and the reading on the right.

use super::lexicon::Lexicon;
use super::morphology::{adjective_base, is_base_verb, known_verb_form, VerbForm};
use super::tokenizer::WordSpan;
use crate::types::PosTag;

/// Context-free interpretation of a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Unambiguous tag
    Fixed(PosTag),
    /// Bare base form of a known verb, also readable as a noun
    BaseVerb,
    /// Inflected verb form
    Inflected(VerbForm),
    /// Anything else; nouns are the open class
    OpenNoun,
}

impl Reading {
    fn is_nominal(&self) -> bool {
        matches!(self, Reading::OpenNoun | Reading::Fixed(PosTag::Noun))
    }
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "less", "ical", "ic", "al",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ify"];

/// Lexical reading of a lowercase word
pub fn read(word: &str, lex: &Lexicon) -> Reading {
    if word.chars().all(|c| c.is_numeric()) {
        return Reading::Fixed(PosTag::Numeral);
    }
    if let Some(tag) = lex.closed_class(word) {
        return Reading::Fixed(tag);
    }
    if lex.is_noun_exception(word) {
        return Reading::OpenNoun;
    }
    if lex.is_adverb(word) {
        return Reading::Fixed(PosTag::Adverb);
    }
    if adjective_base(word, lex).is_some() {
        return Reading::Fixed(PosTag::Adjective);
    }
    if is_base_verb(word, lex) {
        return Reading::BaseVerb;
    }
    if let Some((_, form)) = known_verb_form(word, lex) {
        return Reading::Inflected(form);
    }

    let len = word.len();
    if len > 4 && word.ends_with("ly") {
        return Reading::Fixed(PosTag::Adverb);
    }
    if len > 5 && word.ends_with("ing") {
        return Reading::Inflected(VerbForm::PresentParticiple);
    }
    if len > 4 && word.ends_with("ed") {
        return Reading::Inflected(VerbForm::Past);
    }
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return Reading::Fixed(PosTag::Adjective);
    }
    if len > 4 && VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return Reading::BaseVerb;
    }
    Reading::OpenNoun
}

/// Resolve a reading given the tag on the left and the reading on the right
pub fn resolve(reading: Reading, prev: Option<PosTag>, next: Option<Reading>) -> PosTag {
    let next_is_nominal = next.is_some_and(|r| r.is_nominal());

    match reading {
        Reading::Fixed(tag) => tag,
        Reading::OpenNoun => {
            if prev == Some(PosTag::Noun) && next == Some(Reading::Fixed(PosTag::Adverb)) {
                PosTag::Verb
            } else {
                PosTag::Noun
            }
        }
        Reading::BaseVerb => match prev {
            Some(
                PosTag::Noun
                | PosTag::Pronoun
                | PosTag::Adverb
                | PosTag::Particle
                | PosTag::Auxiliary,
            ) => PosTag::Verb,
            _ => PosTag::Noun,
        },
        Reading::Inflected(VerbForm::ThirdPerson) => match prev {
            Some(PosTag::Noun | PosTag::Pronoun) => PosTag::Verb,
            _ => PosTag::Noun,
        },
        // A participle with a subject or auxiliary on its left is the clause
        // verb; it only modifies a noun from an attributive slot.
        Reading::Inflected(form @ (VerbForm::PresentParticiple | VerbForm::Past)) => match prev {
            Some(PosTag::Noun | PosTag::Pronoun | PosTag::Auxiliary) => PosTag::Verb,
            None | Some(PosTag::Determiner | PosTag::Adjective | PosTag::Preposition)
                if next_is_nominal =>
            {
                PosTag::Adjective
            }
            Some(PosTag::Determiner | PosTag::Adjective | PosTag::Preposition)
                if form == VerbForm::PresentParticiple =>
            {
                PosTag::Noun
            }
            _ => PosTag::Verb,
        },
    }
}

/// Tag every word. `words` must be in document order.
pub fn tag(words: &[WordSpan<'_>], lex: &Lexicon) -> Vec<PosTag> {
    let lowered: Vec<String> = words.iter().map(|w| w.text.to_lowercase()).collect();
    let readings: Vec<Reading> = lowered.iter().map(|w| read(w, lex)).collect();

    let mut tags: Vec<PosTag> = Vec::with_capacity(words.len());
    for (i, reading) in readings.iter().enumerate() {
        let sentence = words[i].sentence_idx;
        let prev = (i > 0 && words[i - 1].sentence_idx == sentence).then(|| tags[i - 1]);
        let next = readings
            .get(i + 1)
            .filter(|_| words[i + 1].sentence_idx == sentence)
            .copied();
        tags.push(resolve(*reading, prev, next));
    }
    tags
}
