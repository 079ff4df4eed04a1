//! Inflectional morphology for English lemmatization
//!
//! Base forms are derived per tag: irregular tables first, then suffix rules
//! anchored on the lexicon where possible, then blind suffix rules.

use super::lexicon::Lexicon;
use crate::types::PosTag;

/// Which inflection a verb form carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbForm {
    /// `-s` / `-es`
    ThirdPerson,
    /// `-ing`
    PresentParticiple,
    /// `-ed` and irregular past forms
    Past,
}

/// Lemma of `word` (lowercase) read as `pos`
pub fn lemma_for(word: &str, pos: PosTag, lex: &Lexicon) -> String {
    let lemma = match pos {
        PosTag::Noun => noun_lemma(word, lex),
        PosTag::Verb => verb_lemma(word, lex),
        PosTag::Adjective => adjective_base(word, lex).unwrap_or_else(|| word.to_string()),
        PosTag::Auxiliary => auxiliary_lemma(word).to_string(),
        _ => word.to_string(),
    };
    if lemma.is_empty() {
        word.to_string()
    } else {
        lemma
    }
}

/// Singular form of a noun
pub fn noun_lemma(word: &str, lex: &Lexicon) -> String {
    if let Some(base) = lex.irregular_noun(word).or_else(|| lex.es_plural(word)) {
        return base.to_string();
    }
    if word.len() <= 3
        || lex.is_invariant_noun(word)
        || lex.is_s_noun(word)
        || lex.is_noun_exception(word)
    {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return format!("{stem}y");
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") || word.ends_with("ics")
    {
        return word.to_string();
    }
    for suffix in ["sses", "ches", "shes", "xes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Base form of a verb
pub fn verb_lemma(word: &str, lex: &Lexicon) -> String {
    if lex.is_verb(word) {
        return word.to_string();
    }
    if let Some((base, _)) = known_verb_form(word, lex) {
        return base;
    }
    if lex.closed_class(word) == Some(PosTag::Auxiliary) {
        return auxiliary_lemma(word).to_string();
    }

    if let Some(stem) = word.strip_suffix("ing").filter(|s| is_stem(s)) {
        return restore_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("ied").filter(|s| is_stem(s)) {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ed").filter(|s| is_stem(s)) {
        return restore_stem(stem);
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|s| is_stem(s)) {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if !word.ends_with("ss") {
        if let Some(stem) = word.strip_suffix('s').filter(|s| is_stem(s)) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Recognize an inflected form of a verb the lexicon knows
///
/// Returns the base form and the inflection. Bare base forms are not
/// matched here; see [`is_base_verb`].
pub fn known_verb_form(word: &str, lex: &Lexicon) -> Option<(String, VerbForm)> {
    if let Some(base) = lex.irregular_verb(word) {
        let form = if word.ends_with('s') {
            VerbForm::ThirdPerson
        } else {
            VerbForm::Past
        };
        return Some((base.to_string(), form));
    }

    if let Some(stem) = word.strip_suffix("ing").filter(|s| is_stem(s)) {
        return anchored_stem(stem, lex).map(|b| (b, VerbForm::PresentParticiple));
    }
    if let Some(stem) = word.strip_suffix("ied").filter(|s| is_stem(s)) {
        let base = format!("{stem}y");
        return lex.is_verb(&base).then_some((base, VerbForm::Past));
    }
    if let Some(stem) = word.strip_suffix("ed").filter(|s| is_stem(s)) {
        return anchored_stem(stem, lex).map(|b| (b, VerbForm::Past));
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|s| is_stem(s)) {
        let base = format!("{stem}y");
        return lex.is_verb(&base).then_some((base, VerbForm::ThirdPerson));
    }
    if let Some(stem) = word.strip_suffix("es").filter(|s| is_stem(s)) {
        if lex.is_verb(stem) {
            return Some((stem.to_string(), VerbForm::ThirdPerson));
        }
    }
    if let Some(stem) = word.strip_suffix('s').filter(|s| is_stem(s)) {
        if lex.is_verb(stem) {
            return Some((stem.to_string(), VerbForm::ThirdPerson));
        }
    }
    None
}

/// Whether `word` is the bare base form of a known verb
pub fn is_base_verb(word: &str, lex: &Lexicon) -> bool {
    lex.is_verb(word)
}

/// Base form of a comparative, superlative or plain adjective, if the
/// lexicon knows it
pub fn adjective_base(word: &str, lex: &Lexicon) -> Option<String> {
    if lex.is_adjective(word) {
        return Some(word.to_string());
    }
    if let Some(base) = lex.irregular_adjective(word) {
        return Some(base.to_string());
    }
    let stem = word
        .strip_suffix("est")
        .or_else(|| word.strip_suffix("er"))
        .filter(|s| is_stem(s))?;

    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    if let Some(y_stem) = stem.strip_suffix('i') {
        candidates.push(format!("{y_stem}y"));
    }
    if let Some(single) = undouble(stem) {
        candidates.push(single);
    }
    candidates.into_iter().find(|c| lex.is_adjective(c))
}

/// Find the lexicon verb a stripped stem belongs to
fn anchored_stem(stem: &str, lex: &Lexicon) -> Option<String> {
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    if let Some(single) = undouble(stem) {
        candidates.push(single);
    }
    if let Some(prefix) = stem.strip_suffix('y') {
        candidates.push(format!("{prefix}ie"));
    }
    candidates.into_iter().find(|c| lex.is_verb(c))
}

/// Guess a base form for a stem the lexicon does not know
fn restore_stem(stem: &str) -> String {
    if let Some(single) = undouble(stem) {
        return single;
    }
    if needs_silent_e(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// `stopp` -> `stop`; `l`, `s` and `z` doublings are kept (`sell`, `miss`)
fn undouble(stem: &str) -> Option<String> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 3 {
        return None;
    }
    let last = bytes[n - 1];
    if last == bytes[n - 2] && is_consonant(last) && !matches!(last, b'l' | b's' | b'z') {
        Some(stem[..n - 1].to_string())
    } else {
        None
    }
}

fn needs_silent_e(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 2 {
        return false;
    }
    let last = bytes[n - 1];
    let prev = bytes[n - 2];
    match last {
        b'v' | b'c' | b'u' => true,
        // releas, rais, clos, caus; not focus, bless
        b's' => {
            matches!(prev, b'a' | b'e' | b'i' | b'o')
                || (prev == b'u' && n >= 3 && !is_consonant(bytes[n - 3]))
        }
        b'z' => prev == b'i' || prev == b'y',
        b't' => prev == b'a' && n >= 3 && is_consonant(bytes[n - 3]),
        b'l' => is_consonant(prev) && prev != b'l',
        _ => false,
    }
}

/// A plausible stem has at least two letters and a vowel (`br` from
/// `bring` is not a stem)
fn is_stem(stem: &str) -> bool {
    stem.len() >= 2 && stem.bytes().any(|b| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y'))
}

fn is_consonant(b: u8) -> bool {
    b.is_ascii_alphabetic() && !matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn auxiliary_lemma(word: &str) -> &str {
    match word {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" => "be",
        "has" | "had" | "having" => "have",
        "does" | "did" => "do",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::english()
    }

    #[test]
    fn test_noun_plurals() {
        let lex = lex();
        assert_eq!(noun_lemma("plants", &lex), "plant");
        assert_eq!(noun_lemma("studies", &lex), "study");
        assert_eq!(noun_lemma("boxes", &lex), "box");
        assert_eq!(noun_lemma("matches", &lex), "match");
        assert_eq!(noun_lemma("processes", &lex), "process");
        assert_eq!(noun_lemma("houses", &lex), "house");
        assert_eq!(noun_lemma("children", &lex), "child");
        assert_eq!(noun_lemma("leaves", &lex), "leaf");
        assert_eq!(noun_lemma("movies", &lex), "movie");
        assert_eq!(noun_lemma("cookies", &lex), "cookie");
        assert_eq!(noun_lemma("calories", &lex), "calorie");
        assert_eq!(noun_lemma("headaches", &lex), "headache");
        assert_eq!(noun_lemma("niches", &lex), "niche");
        assert_eq!(noun_lemma("caches", &lex), "cache");
        assert_eq!(noun_lemma("avalanches", &lex), "avalanche");
        assert_eq!(noun_lemma("buses", &lex), "bus");
        assert_eq!(noun_lemma("viruses", &lex), "virus");
        assert_eq!(noun_lemma("atlas", &lex), "atlas");
    }

    #[test]
    fn test_noun_invariants() {
        let lex = lex();
        assert_eq!(noun_lemma("series", &lex), "series");
        assert_eq!(noun_lemma("analysis", &lex), "analysis");
        assert_eq!(noun_lemma("status", &lex), "status");
        assert_eq!(noun_lemma("glass", &lex), "glass");
        assert_eq!(noun_lemma("gas", &lex), "gas");
        assert_eq!(noun_lemma("plant", &lex), "plant");
    }

    #[test]
    fn test_known_verb_forms() {
        let lex = lex();
        assert_eq!(
            known_verb_form("growing", &lex),
            Some(("grow".to_string(), VerbForm::PresentParticiple))
        );
        assert_eq!(
            known_verb_form("making", &lex),
            Some(("make".to_string(), VerbForm::PresentParticiple))
        );
        assert_eq!(
            known_verb_form("stopped", &lex),
            Some(("stop".to_string(), VerbForm::Past))
        );
        assert_eq!(
            known_verb_form("studied", &lex),
            Some(("study".to_string(), VerbForm::Past))
        );
        assert_eq!(
            known_verb_form("changes", &lex),
            Some(("change".to_string(), VerbForm::ThirdPerson))
        );
        assert_eq!(
            known_verb_form("watches", &lex),
            Some(("watch".to_string(), VerbForm::ThirdPerson))
        );
        assert_eq!(
            known_verb_form("grew", &lex),
            Some(("grow".to_string(), VerbForm::Past))
        );
        assert_eq!(
            known_verb_form("lying", &lex),
            Some(("lie".to_string(), VerbForm::PresentParticiple))
        );
        assert_eq!(known_verb_form("plants", &lex), None);
    }

    #[test]
    fn test_verb_lemma_for_unknown_verbs() {
        let lex = lex();
        assert_eq!(verb_lemma("sprouting", &lex), "sprout");
        assert_eq!(verb_lemma("shipped", &lex), "ship");
        assert_eq!(verb_lemma("emphasizing", &lex), "emphasize");
        assert_eq!(verb_lemma("handled", &lex), "handle");
        assert_eq!(verb_lemma("modeled", &lex), "model");
        assert_eq!(verb_lemma("carries", &lex), "carry");
        assert_eq!(verb_lemma("sprouts", &lex), "sprout");
        assert_eq!(verb_lemma("was", &lex), "be");
        assert_eq!(verb_lemma("bring", &lex), "bring");
        assert_eq!(verb_lemma("swing", &lex), "swing");
        assert_eq!(verb_lemma("released", &lex), "release");
        assert_eq!(verb_lemma("increased", &lex), "increase");
        assert_eq!(verb_lemma("purchased", &lex), "purchase");
        assert_eq!(verb_lemma("paused", &lex), "pause");
        assert_eq!(verb_lemma("revised", &lex), "revise");
        assert_eq!(verb_lemma("closing", &lex), "close");
        assert_eq!(verb_lemma("blessed", &lex), "bless");
        assert_eq!(verb_lemma("focused", &lex), "focus");
    }

    #[test]
    fn test_adjective_base() {
        let lex = lex();
        assert_eq!(adjective_base("larger", &lex).as_deref(), Some("large"));
        assert_eq!(adjective_base("biggest", &lex).as_deref(), Some("big"));
        assert_eq!(adjective_base("easier", &lex).as_deref(), Some("easy"));
        assert_eq!(adjective_base("better", &lex).as_deref(), Some("good"));
        assert_eq!(adjective_base("rapid", &lex).as_deref(), Some("rapid"));
        assert_eq!(adjective_base("water", &lex), None);
    }

    #[test]
    fn test_lemma_for_dispatches_on_tag() {
        let lex = lex();
        assert_eq!(lemma_for("plants", PosTag::Noun, &lex), "plant");
        assert_eq!(lemma_for("growing", PosTag::Verb, &lex), "grow");
        assert_eq!(lemma_for("rapidly", PosTag::Adverb, &lex), "rapidly");
        assert_eq!(lemma_for("faster", PosTag::Adjective, &lex), "fast");
        assert_eq!(lemma_for("the", PosTag::Determiner, &lex), "the");
        assert_eq!(lemma_for("were", PosTag::Auxiliary, &lex), "be");
    }
}
