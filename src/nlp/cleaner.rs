//! Rule-based text cleaning
//!
//! The cleaner is an ordered list of named rules, each a pure
//! `&str -> String` transformation. Order matters: later rules assume the
//! normalization done by earlier ones (e.g. `short_tokens` only sees ASCII
//! letters once `non_alphanumeric` has run).
//!
//! Output contains only `[a-z]` tokens of length ≥ 3 separated by single
//! spaces, and cleaning is idempotent.

use regex::Regex;

use super::stopwords::StopwordFilter;

/// What a single rule does to the text
#[derive(Debug, Clone)]
pub enum RuleAction {
    /// Unicode lowercase
    Lowercase,
    /// Replace every regex match
    Replace { pattern: Regex, with: &'static str },
    /// Replace every occurrence of a literal
    Literal {
        from: &'static str,
        to: &'static str,
    },
    /// Drop whole-word stopwords
    Stopwords(StopwordFilter),
    /// Trim and collapse whitespace
    Squash,
}

/// A named cleaning rule
#[derive(Debug, Clone)]
pub struct CleaningRule {
    name: &'static str,
    action: RuleAction,
}

impl CleaningRule {
    pub fn new(name: &'static str, action: RuleAction) -> Self {
        Self { name, action }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule alone
    pub fn apply(&self, text: &str) -> String {
        match &self.action {
            RuleAction::Lowercase => text.to_lowercase(),
            RuleAction::Replace { pattern, with } => pattern.replace_all(text, *with).into_owned(),
            RuleAction::Literal { from, to } => text.replace(*from, to),
            RuleAction::Stopwords(filter) => filter.filter_text(text),
            RuleAction::Squash => text.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }
}

fn replace(name: &'static str, pattern: &str, with: &'static str) -> CleaningRule {
    let pattern = Regex::new(pattern).expect("built-in cleaning pattern is valid");
    CleaningRule::new(name, RuleAction::Replace { pattern, with })
}

/// Names of the built-in rules, in application order
pub const RULE_ORDER: &[&str] = &[
    "lowercase",
    "non_word",
    "whitespace",
    "standalone_numbers",
    "embedded_digits",
    "e_acute",
    "non_alphanumeric",
    "short_tokens",
    "stopwords",
    "trim",
];

/// Ordered rule pipeline
#[derive(Debug, Clone)]
pub struct TextCleaner {
    rules: Vec<CleaningRule>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl TextCleaner {
    /// Build the standard rule sequence around a stopword filter
    pub fn new(stopwords: StopwordFilter) -> Self {
        let rules = vec![
            CleaningRule::new("lowercase", RuleAction::Lowercase),
            replace("non_word", r"\W+|\s{2,}", " "),
            replace("whitespace", r"\s+", " "),
            replace("standalone_numbers", r"\b\d+\b", ""),
            replace("embedded_digits", r"\d+", ""),
            CleaningRule::new("e_acute", RuleAction::Literal { from: "é", to: "e" }),
            replace("non_alphanumeric", r"[^a-zA-Z0-9]+", " "),
            replace("short_tokens", r"\b\w{1,2}\b", ""),
            CleaningRule::new("stopwords", RuleAction::Stopwords(stopwords)),
            CleaningRule::new("trim", RuleAction::Squash),
        ];
        Self { rules }
    }

    /// The rules in application order
    pub fn rules(&self) -> &[CleaningRule] {
        &self.rules
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&CleaningRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Run every rule in order
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}
