//! English word lists backing the rule-based model
//!
//! Closed-class words carry a fixed tag. Open-class lists only cover words
//! whose tag or base form cannot be derived from suffix rules.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "another", "such", "all", "both", "either", "neither", "which", "what", "whose", "my",
    "your", "his", "her", "its", "our", "their",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "yourselves", "himself", "herself", "itself", "ourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "someone", "anyone", "everyone", "nobody",
    "somebody", "anybody", "everybody", "something", "anything", "everything", "nothing",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out", "off",
    "over", "under", "within", "without", "across", "among", "around", "toward", "towards",
    "upon", "via", "per", "despite", "than", "near", "behind", "beyond", "throughout", "onto",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "because", "although", "though", "while", "if", "unless",
    "whether", "since", "until", "whereas",
];

const PARTICLES: &[&str] = &["to", "not", "n't"];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "often", "never", "always", "here", "there", "now", "then", "again",
    "soon", "still", "already", "just", "quite", "rather", "almost", "even", "ever", "perhaps",
    "well", "much", "once", "twice", "seldom", "thus", "hence", "however", "therefore",
    "moreover", "furthermore", "instead", "indeed", "meanwhile", "so", "how", "why", "when",
    "where", "today", "tomorrow", "yesterday", "ago", "away", "together", "afterwards",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "large", "high", "low", "long", "short",
    "great", "little", "young", "important", "different", "early", "late", "able", "free",
    "full", "real", "strong", "weak", "major", "minor", "possible", "whole", "clear", "recent",
    "certain", "human", "similar", "significant", "specific", "main", "key", "common", "current",
    "simple", "complex", "available", "final", "green", "red", "blue", "white", "black",
    "rapid", "quick", "slow", "fast", "hot", "cold", "warm", "cool", "dry", "wet", "easy",
    "hard", "open", "wide", "deep", "various", "several", "many", "few", "other", "same", "own",
    "next", "last", "first", "second", "third", "true", "false", "poor", "rich", "safe",
    "fresh", "dark", "light", "heavy", "clean", "dirty", "nice", "fine", "huge", "tiny",
    "likely", "daily", "weekly", "monthly", "yearly", "friendly", "lonely", "lovely", "only",
    "ugly", "costly", "elderly", "broad", "narrow", "rare", "severe", "urban",
    "rural", "solar", "due", "prior", "overall", "sustainable",
];

/// Base forms of verbs that are also plausible nouns or that inflect
/// irregularly enough to need an anchor for suffix stripping.
const VERBS: &[&str] = &[
    "accept", "achieve", "add", "affect", "agree", "allow", "appear", "apply", "argue", "arrive",
    "ask", "become", "begin", "believe", "belong", "bring", "build", "buy", "call", "carry",
    "cause", "change", "choose", "claim", "come", "compare", "consider", "contain", "continue",
    "create", "cut", "decide", "decline", "define", "describe", "develop", "die", "drive", "eat",
    "enable", "encourage", "ensure", "establish", "examine", "exist", "expand", "expect",
    "explain", "fall", "feel", "find", "follow", "forget", "generate", "get", "give", "go",
    "grow", "happen", "hear", "help", "hold", "identify", "imagine", "improve", "include",
    "increase", "indicate", "introduce", "involve", "keep", "know", "lead", "learn", "leave",
    "let", "lie", "like", "live", "look", "lose", "love", "maintain", "make", "mean", "meet",
    "move", "need", "observe", "obtain", "occur", "offer", "pay", "perform", "play", "prefer",
    "prepare", "prevent", "produce", "protect", "provide", "publish", "pull", "push", "put",
    "raise", "reach", "read", "receive", "reduce", "refer", "reflect", "relate", "remain",
    "remember", "remove", "replace", "represent", "require", "rise", "run", "say", "see",
    "seem", "sell", "send", "serve", "set", "shift", "show", "sit", "speak", "spend", "stand",
    "start", "stay", "stop", "suggest", "support", "take", "talk", "teach", "tell", "tend",
    "think", "throw", "try", "turn", "understand", "use", "vary", "wait", "walk", "want",
    "watch", "win", "work", "write", "yield", "emerge", "solve", "study", "plan", "ship",
    "drop", "admit", "transfer", "measure", "analyze", "analyse", "arise", "seek", "catch",
    "fight", "deal", "harvest", "design", "release", "purchase",
];

/// Words whose suffix suggests another class but which are nouns.
const NOUN_EXCEPTIONS: &[&str] = &[
    // -ly
    "family", "supply", "assembly", "reply", "ally", "belly", "bully", "butterfly", "jelly",
    "rally", "anomaly", "monopoly", "italy", "july", "lily",
    // -ing
    "thing", "king", "ring", "spring", "string", "wing", "morning", "evening", "building",
    "meeting", "ceiling", "funding", "training", "sibling", "earning", "beginning", "setting",
    "housing", "clothing", "painting", "feeling", "finding", "warning", "learning",
    "processing", "computing", "engineering", "marketing", "banking", "manufacturing",
    "accounting", "mining", "shipping", "trading", "pricing", "spending", "lending", "timing",
    "planning", "programming", "modeling", "modelling", "testing", "reasoning",
    "understanding", "writing", "reading", "swimming", "offering", "opening", "rating",
    "ranking", "spelling", "wedding", "pudding", "heading",
    // -ed
    "speed", "breed", "greed", "creed", "steed", "hundred", "kindred", "seed",
    // -ive, -al, -ic, -able, -ful, -ous
    "objective", "initiative", "executive", "representative", "alternative", "incentive",
    "archive", "motive", "detective", "narrative", "derivative", "perspective", "directive",
    "animal", "capital", "signal", "journal", "material", "hospital", "interval", "proposal",
    "approval", "arrival", "rival", "individual", "potential", "total", "festival",
    "terminal", "crystal", "metal", "petal", "pedal", "canal", "portal", "mineral", "manual",
    "principal", "criminal", "official", "chemical", "professional", "rental", "removal",
    "survival", "trial", "dial", "vial", "meal", "seal", "goal", "coal", "oval",
    "topic", "music", "logic", "clinic", "traffic", "republic", "mechanic", "fabric",
    "graphic", "epidemic", "pandemic", "critic", "tactic", "panic", "arithmetic", "rhetoric",
    "table", "cable", "fable", "vegetable", "variable", "timetable", "receivable", "payable",
    "handful", "spoonful", "mouthful",
];

/// Nouns that do not change between singular and plural.
const INVARIANT_NOUNS: &[&str] = &[
    "series", "species", "news", "means", "data", "media", "lens", "gas", "physics",
    "economics", "mathematics", "statistics", "politics", "ethics", "sheep", "fish", "deer",
    "aircraft", "corps", "chaos", "bias", "analysis", "basis", "crisis", "thesis", "diagnosis",
    "status", "virus", "focus", "census", "bonus", "consensus", "process", "success", "class",
];

/// Singulars ending in `-ie`, whose `-ies` plural is not a `-y` noun.
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "calorie", "pie", "tie", "zombie", "rookie", "hippie", "selfie",
    "brownie", "prairie", "smoothie", "goalie", "genie", "sortie", "freebie", "newbie",
    "auntie", "birdie", "hoodie", "veggie", "foodie", "collie", "pixie", "magpie", "necktie",
    "menagerie", "rotisserie", "lingerie", "walkie", "talkie", "eyrie", "coterie", "reverie",
];

/// Singulars ending in `-che`, whose `-ches` plural only drops the `s`.
const CHE_NOUNS: &[&str] = &[
    "ache", "headache", "toothache", "backache", "earache", "stomachache", "heartache",
    "niche", "cache", "avalanche", "moustache", "mustache", "cliche", "quiche", "psyche",
    "creche", "attache", "microfiche", "tranche", "douche", "brioche", "cloche", "pastiche",
    "gouache", "panache",
];

/// Singulars ending in `-s` that pluralize with `-es`.
const S_NOUNS: &[&str] = &[
    "bus", "gas", "lens", "bias", "atlas", "canvas", "iris", "alias", "campus", "bonus",
    "virus", "census", "status", "focus", "circus", "chorus", "corpus", "genus", "walrus",
    "octopus", "apparatus", "cactus", "plus", "thesaurus", "syllabus", "prospectus", "nexus",
    "sinus", "fetus", "abacus", "onus", "surplus", "minus", "consensus", "hippopotamus",
    "fungus", "stimulus", "radius", "asparagus", "citrus", "hummus", "mucus", "papyrus",
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"), ("people", "person"), ("men", "man"), ("women", "woman"),
    ("mice", "mouse"), ("feet", "foot"), ("teeth", "tooth"), ("geese", "goose"),
    ("analyses", "analysis"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
    ("indices", "index"), ("matrices", "matrix"), ("theses", "thesis"), ("crises", "crisis"),
    ("hypotheses", "hypothesis"), ("bases", "basis"), ("diagnoses", "diagnosis"),
    ("lives", "life"), ("wives", "wife"), ("knives", "knife"), ("leaves", "leaf"),
    ("halves", "half"), ("shelves", "shelf"), ("wolves", "wolf"), ("selves", "self"),
    ("thieves", "thief"), ("loaves", "loaf"), ("calves", "calf"), ("potatoes", "potato"),
    ("tomatoes", "tomato"), ("heroes", "hero"), ("echoes", "echo"), ("oxen", "ox"),
    ("fungi", "fungus"), ("cacti", "cactus"), ("nuclei", "nucleus"), ("stimuli", "stimulus"),
    ("alumni", "alumnus"), ("appendices", "appendix"),
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("went", "go"), ("gone", "go"), ("goes", "go"), ("grew", "grow"), ("grown", "grow"),
    ("made", "make"), ("took", "take"), ("taken", "take"), ("ran", "run"), ("saw", "see"),
    ("seen", "see"), ("gave", "give"), ("given", "give"), ("found", "find"), ("got", "get"),
    ("gotten", "get"), ("began", "begin"), ("begun", "begin"), ("built", "build"),
    ("brought", "bring"), ("thought", "think"), ("bought", "buy"), ("taught", "teach"),
    ("came", "come"), ("became", "become"), ("left", "leave"), ("kept", "keep"),
    ("held", "hold"), ("led", "lead"), ("met", "meet"), ("paid", "pay"), ("said", "say"),
    ("sold", "sell"), ("told", "tell"), ("wrote", "write"), ("written", "write"),
    ("spoke", "speak"), ("spoken", "speak"), ("chose", "choose"), ("chosen", "choose"),
    ("fell", "fall"), ("fallen", "fall"), ("rose", "rise"), ("risen", "rise"),
    ("knew", "know"), ("known", "know"), ("drove", "drive"), ("driven", "drive"),
    ("ate", "eat"), ("eaten", "eat"), ("stood", "stand"), ("understood", "understand"),
    ("sent", "send"), ("spent", "spend"), ("lost", "lose"), ("meant", "mean"),
    ("felt", "feel"), ("won", "win"), ("sat", "sit"), ("threw", "throw"), ("thrown", "throw"),
    ("forgot", "forget"), ("forgotten", "forget"), ("heard", "hear"), ("lay", "lie"),
    ("lain", "lie"), ("arose", "arise"), ("arisen", "arise"), ("sought", "seek"),
    ("caught", "catch"), ("fought", "fight"), ("shown", "show"), ("dealt", "deal"),
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("more", "many"), ("most", "many"), ("less", "little"), ("least", "little"),
    ("further", "far"), ("furthest", "far"), ("farther", "far"), ("farthest", "far"),
];

/// Lookup tables for the English model
#[derive(Debug, Clone)]
pub struct Lexicon {
    closed: FxHashMap<&'static str, PosTag>,
    adverbs: FxHashSet<&'static str>,
    adjectives: FxHashSet<&'static str>,
    verbs: FxHashSet<&'static str>,
    noun_exceptions: FxHashSet<&'static str>,
    invariant_nouns: FxHashSet<&'static str>,
    irregular_nouns: FxHashMap<&'static str, &'static str>,
    /// `-es` plurals of the `-ie`, `-che` and `-s` singulars
    es_plurals: FxHashMap<String, &'static str>,
    s_nouns: FxHashSet<&'static str>,
    irregular_verbs: FxHashMap<&'static str, &'static str>,
    irregular_adjectives: FxHashMap<&'static str, &'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    pub fn english() -> Self {
        let mut closed = FxHashMap::default();
        // Later groups win for words listed twice ("that" stays a determiner,
        // "is" an auxiliary).
        let groups: [(&[&str], PosTag); 6] = [
            (PRONOUNS, PosTag::Pronoun),
            (DETERMINERS, PosTag::Determiner),
            (PREPOSITIONS, PosTag::Preposition),
            (CONJUNCTIONS, PosTag::Conjunction),
            (PARTICLES, PosTag::Particle),
            (AUXILIARIES, PosTag::Auxiliary),
        ];
        for (words, tag) in groups {
            for &w in words {
                closed.insert(w, tag);
            }
        }

        let mut es_plurals = FxHashMap::default();
        for &w in IE_NOUNS.iter().chain(CHE_NOUNS) {
            es_plurals.insert(format!("{w}s"), w);
        }
        for &w in S_NOUNS {
            es_plurals.insert(format!("{w}es"), w);
        }

        Self {
            closed,
            adverbs: ADVERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            verbs: VERBS.iter().copied().collect(),
            noun_exceptions: NOUN_EXCEPTIONS.iter().copied().collect(),
            invariant_nouns: INVARIANT_NOUNS.iter().copied().collect(),
            irregular_nouns: IRREGULAR_NOUNS.iter().copied().collect(),
            es_plurals,
            s_nouns: S_NOUNS.iter().copied().collect(),
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            irregular_adjectives: IRREGULAR_ADJECTIVES.iter().copied().collect(),
        }
    }

    /// Tag of a closed-class word
    pub fn closed_class(&self, word: &str) -> Option<PosTag> {
        self.closed.get(word).copied()
    }

    pub fn is_adverb(&self, word: &str) -> bool {
        self.adverbs.contains(word)
    }

    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(word)
    }

    pub fn is_verb(&self, word: &str) -> bool {
        self.verbs.contains(word)
    }

    pub fn is_noun_exception(&self, word: &str) -> bool {
        self.noun_exceptions.contains(word)
    }

    pub fn is_invariant_noun(&self, word: &str) -> bool {
        self.invariant_nouns.contains(word)
    }

    pub fn irregular_noun(&self, word: &str) -> Option<&'static str> {
        self.irregular_nouns.get(word).copied()
    }

    /// Singular of an `-es` plural the suffix rules would get wrong
    /// (`movies`, `headaches`, `buses`)
    pub fn es_plural(&self, word: &str) -> Option<&'static str> {
        self.es_plurals.get(word).copied()
    }

    /// Singular noun that ends in `-s` (`bus`, `atlas`)
    pub fn is_s_noun(&self, word: &str) -> bool {
        self.s_nouns.contains(word)
    }

    pub fn irregular_verb(&self, word: &str) -> Option<&'static str> {
        self.irregular_verbs.get(word).copied()
    }

    pub fn irregular_adjective(&self, word: &str) -> Option<&'static str> {
        self.irregular_adjectives.get(word).copied()
    }
}
