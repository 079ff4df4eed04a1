//! Validation engine for preparation specs.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`PrepSpec`](super::spec::PrepSpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rapid_lda_prep::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::PipelineSpecError;
use super::spec::*;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::PrepConfig;

/// The only spec version this crate understands.
pub const SPEC_VERSION: u32 = 1;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding: an error or warning attached to a
/// [`PipelineSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: PipelineSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: PipelineSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &PipelineSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`PrepSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"chunker_bounds"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`PrepSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(PositiveLimitsRule));
        engine.add_rule(Box::new(ChunkerBoundsRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &PrepSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            PipelineSpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. Limits must be positive when set ────────────────────────────────────

struct PositiveLimitsRule;

impl ValidationRule for PositiveLimitsRule {
    fn name(&self) -> &str {
        "positive_limits"
    }

    fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        let checks: &[(&str, Option<usize>, &str)] = &[
            (
                "/model/max_length",
                spec.model.max_length,
                "Remove max_length to use the default of 6000000",
            ),
            (
                "/runtime/workers",
                spec.runtime.workers,
                "Remove workers to run sequentially",
            ),
        ];

        for &(path, value, hint) in checks {
            if value == Some(0) {
                let field = path.rsplit('/').next().unwrap_or(path);
                out.push(ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::LimitExceeded,
                        path,
                        format!("{field} must be greater than 0"),
                    )
                    .with_hint(hint),
                ));
            }
        }

        out
    }
}

// ─── 3. Chunk length bounds ─────────────────────────────────────────────────

struct ChunkerBoundsRule;

impl ValidationRule for ChunkerBoundsRule {
    fn name(&self) -> &str {
        "chunker_bounds"
    }

    fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        if spec.chunker.min_length == Some(0) {
            out.push(ValidationDiagnostic::error(
                PipelineSpecError::new(
                    ErrorCode::LimitExceeded,
                    "/chunker/min_length",
                    "min_length must be at least 1",
                )
                .with_hint("A noun chunk always contains at least one noun"),
            ));
        }

        if spec.chunker.max_length == Some(0) {
            out.push(ValidationDiagnostic::error(PipelineSpecError::new(
                ErrorCode::LimitExceeded,
                "/chunker/max_length",
                "max_length must be at least 1",
            )));
        }

        let defaults = PrepConfig::default();
        let min = spec.chunker.min_length.unwrap_or(defaults.chunk_min_length);
        let max = spec.chunker.max_length.unwrap_or(defaults.chunk_max_length);
        if min > 0 && max > 0 && min > max {
            out.push(ValidationDiagnostic::error(
                PipelineSpecError::new(
                    ErrorCode::InvalidCombo,
                    "/chunker",
                    format!("min_length ({min}) is greater than max_length ({max})"),
                )
                .with_hint("Swap the values or widen max_length"),
            ));
        }

        out
    }
}

// ─── 4. Stopword language must exist ────────────────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic> {
        match spec.stopwords.language.as_deref() {
            Some(lang) if !StopwordFilter::supports_language(lang) => {
                vec![ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::UnknownValue,
                        "/stopwords/language",
                        format!("no stopword list for language \"{lang}\""),
                    )
                    .with_hint("Use an ISO 639-1 code such as en, de, fr, or omit the field"),
                )]
            }
            Some(lang) if !StopwordFilter::matches_cleaned_text(lang) => {
                vec![ValidationDiagnostic::error(
                    PipelineSpecError::new(
                        ErrorCode::InvalidCombo,
                        "/stopwords/language",
                        format!(
                            "stopword list \"{lang}\" has no ASCII words, and cleaned text \
                             keeps ASCII letters only"
                        ),
                    )
                    .with_hint("Use a Latin-script language or list stopwords under /stopwords/extra"),
                )]
            }
            _ => vec![],
        }
    }
}

// ─── 5. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    PipelineSpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic> {
        let sections: [(&str, &HashMap<String, serde_json::Value>); 5] = [
            ("", &spec.unknown_fields),
            ("/model", &spec.model.unknown_fields),
            ("/stopwords", &spec.stopwords.unknown_fields),
            ("/chunker", &spec.chunker.unknown_fields),
            ("/runtime", &spec.runtime.unknown_fields),
        ];
        sections
            .iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a PrepSpec from JSON.
    fn spec(json: &str) -> PrepSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_spec_is_valid() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "model": { "max_length": 6000000 },
                "stopwords": { "language": "en", "extra": ["figure"] },
                "chunker": { "min_length": 1, "max_length": 4 },
                "runtime": { "workers": 2, "sort_inputs": true }
            }"#,
        ));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    // ─── Rule: version ──────────────────────────────────────────────────

    #[test]
    fn test_future_version_fails() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errs[0].path, "/v");
    }

    // ─── Rule: positive_limits ──────────────────────────────────────────

    #[test]
    fn test_zero_max_length_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "model": { "max_length": 0 } }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::LimitExceeded);
        assert_eq!(errs[0].path, "/model/max_length");
        assert!(errs[0].message.starts_with("max_length"));
    }

    #[test]
    fn test_zero_workers_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "runtime": { "workers": 0 } }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "/runtime/workers");
    }

    // ─── Rule: chunker_bounds ───────────────────────────────────────────

    #[test]
    fn test_zero_min_length_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "chunker": { "min_length": 0 } }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "/chunker/min_length");
    }

    #[test]
    fn test_inverted_bounds_fail() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "chunker": { "min_length": 4, "max_length": 2 } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::InvalidCombo);
    }

    #[test]
    fn test_min_length_above_default_max_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "chunker": { "min_length": 6 } }"#));
        assert_eq!(report.errors().count(), 1);
    }

    // ─── Rule: stopword_language ────────────────────────────────────────

    #[test]
    fn test_unknown_stopword_language_fails() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "stopwords": { "language": "klingon" } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnknownValue);
    }

    #[test]
    fn test_non_latin_stopword_language_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "stopwords": { "language": "ru" } }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::InvalidCombo);
        assert_eq!(errs[0].path, "/stopwords/language");
    }

    #[test]
    fn test_known_stopword_language_passes() {
        let report = engine().validate(&spec(r#"{ "v": 1, "stopwords": { "language": "german" } }"#));
        assert!(report.is_valid());
    }

    // ─── Rule: unknown_fields ───────────────────────────────────────────

    #[test]
    fn test_unknown_fields_warn_when_not_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "bogus": true, "runtime": { "threads": 2 } }"#,
        ));
        assert!(report.is_valid());
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 2);
        assert!(warns.iter().any(|w| w.path == "/bogus"));
        assert!(warns.iter().any(|w| w.path == "/runtime/threads"));
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "chunker": { "pattern": "NP" } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnknownField);
        assert_eq!(errs[0].path, "/chunker/pattern");
    }

    // ─── Engine ─────────────────────────────────────────────────────────

    #[test]
    fn test_collects_all_errors_without_short_circuit() {
        let report = engine().validate(&spec(
            r#"{
                "v": 3,
                "model": { "max_length": 0 },
                "chunker": { "min_length": 0 },
                "stopwords": { "language": "xx" }
            }"#,
        ));
        assert_eq!(report.errors().count(), 4);
    }

    #[test]
    fn test_custom_rule_is_applied() {
        struct RequireExtension;

        impl ValidationRule for RequireExtension {
            fn name(&self) -> &str {
                "require_extension"
            }

            fn validate(&self, spec: &PrepSpec) -> Vec<ValidationDiagnostic> {
                if spec.runtime.extension.is_none() {
                    vec![ValidationDiagnostic::warning(PipelineSpecError::new(
                        ErrorCode::InvalidCombo,
                        "/runtime/extension",
                        "no extension filter",
                    ))]
                } else {
                    vec![]
                }
            }
        }

        let mut engine = ValidationEngine::new();
        engine.add_rule(Box::new(RequireExtension));
        assert_eq!(engine.rule_names(), vec!["require_extension"]);

        let report = engine.validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = engine().validate(&spec(r#"{ "v": 1, "runtime": { "workers": 0 } }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diag = &json["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "limit_exceeded");
        assert_eq!(diag["path"], "/runtime/workers");
    }
}
