//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of pipeline stages
//! plus the shared language model. Calling [`Pipeline::run`] executes them in
//! order, filling in the [`Document`] and notifying a [`PipelineObserver`] at
//! each boundary.
//!
//! # Factory methods
//!
//! Use [`Pipeline::standard()`] to build the default clean → lemmatize →
//! extract pipeline from a resolved [`PrepConfig`], or [`PipelineBuilder`] to
//! swap individual stages.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::nlp::cleaner::TextCleaner;
use crate::nlp::model::LanguageModel;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::Document;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReportBuilder, STAGE_CLEAN, STAGE_EXTRACT,
    STAGE_LEMMATIZE,
};
use crate::pipeline::traits::{
    ChunkNounExtractor, Cleaner, Lemmatizer, ModelLemmatizer, NounExtractor,
};
use crate::types::PrepConfig;

/// Enter a tracing span for a pipeline stage. The span closes at the end of
/// the enclosing block.
macro_rules! trace_stage {
    ($name:expr, $doc:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name, document = %$doc)
            .entered();
    };
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `C` | [`Cleaner`] | [`TextCleaner`] |
/// | `L` | [`Lemmatizer`] | [`ModelLemmatizer`] |
/// | `N` | [`NounExtractor`] | [`ChunkNounExtractor`] |
#[derive(Clone)]
pub struct Pipeline<C, L, N> {
    pub cleaner: C,
    pub lemmatizer: L,
    pub extractor: N,
    model: Arc<dyn LanguageModel>,
}

impl<C: fmt::Debug, L: fmt::Debug, N: fmt::Debug> fmt::Debug for Pipeline<C, L, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("cleaner", &self.cleaner)
            .field("lemmatizer", &self.lemmatizer)
            .field("extractor", &self.extractor)
            .field("model", &self.model.name())
            .finish()
    }
}

/// Type alias for the default pipeline.
pub type StandardPipeline = Pipeline<TextCleaner, ModelLemmatizer, ChunkNounExtractor>;

impl StandardPipeline {
    /// Build the default pipeline around `model`.
    ///
    /// Stopwords and chunker bounds come from `cfg`; the model's own
    /// `max_length` is left as configured by whoever built it.
    pub fn standard(model: Arc<dyn LanguageModel>, cfg: &PrepConfig) -> Self {
        PipelineBuilder::new()
            .cleaner(TextCleaner::new(StopwordFilter::from_config(cfg)))
            .extractor(ChunkNounExtractor::from_config(cfg))
            .build(model)
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<C, L, N> Pipeline<C, L, N>
where
    C: Cleaner,
    L: Lemmatizer,
    N: NounExtractor,
{
    pub fn model(&self) -> &Arc<dyn LanguageModel> {
        &self.model
    }

    /// Run every stage over `doc`.
    ///
    /// Stages run in order:
    /// 1. Clean (`raw` → `cleaned`)
    /// 2. Lemmatize (`cleaned` → `lemmatized`)
    /// 3. Extract nouns (`lemmatized` → `nouns`)
    ///
    /// On error the fields of the stages that finished stay filled in.
    pub fn run(&self, doc: &mut Document, observer: &mut impl PipelineObserver) -> Result<()> {
        let cleaned = {
            trace_stage!(STAGE_CLEAN, doc.name);
            observer.on_stage_start(STAGE_CLEAN);
            let clock = StageClock::start();
            let cleaned = self.cleaner.clean(&doc.raw);
            let report = StageReportBuilder::new(clock.elapsed())
                .tokens_in(word_count(&doc.raw))
                .tokens_out(word_count(&cleaned))
                .build();
            observer.on_stage_end(STAGE_CLEAN, &report);
            cleaned
        };

        let lemmatized = {
            trace_stage!(STAGE_LEMMATIZE, doc.name);
            observer.on_stage_start(STAGE_LEMMATIZE);
            let clock = StageClock::start();
            let result = self.lemmatizer.lemmatize(&cleaned, self.model.as_ref());
            let tokens_in = word_count(&cleaned);
            doc.cleaned = Some(cleaned);
            let lemmatized = result?;
            let report = StageReportBuilder::new(clock.elapsed())
                .tokens_in(tokens_in)
                .tokens_out(word_count(&lemmatized))
                .build();
            observer.on_stage_end(STAGE_LEMMATIZE, &report);
            lemmatized
        };

        let nouns = {
            trace_stage!(STAGE_EXTRACT, doc.name);
            observer.on_stage_start(STAGE_EXTRACT);
            let clock = StageClock::start();
            let result = self.extractor.extract(&lemmatized, self.model.as_ref());
            let tokens_in = word_count(&lemmatized);
            doc.lemmatized = Some(lemmatized);
            let nouns = result?;
            let report = StageReportBuilder::new(clock.elapsed())
                .tokens_in(tokens_in)
                .tokens_out(word_count(&nouns))
                .build();
            observer.on_stage_end(STAGE_EXTRACT, &report);
            nouns
        };

        doc.nouns = Some(nouns);
        observer.on_document(doc);
        Ok(())
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the default stages and allows overriding each one; the model
/// is supplied last.
///
/// ```
/// # use std::sync::Arc;
/// # use rapid_lda_prep::nlp::model::EnglishModel;
/// # use rapid_lda_prep::phrase::chunker::NounChunker;
/// # use rapid_lda_prep::pipeline::runner::PipelineBuilder;
/// # use rapid_lda_prep::pipeline::traits::ChunkNounExtractor;
/// let pipeline = PipelineBuilder::new()
///     .extractor(ChunkNounExtractor::with_chunker(
///         NounChunker::new().with_modifiers(false),
///     ))
///     .build(Arc::new(EnglishModel::new()));
/// ```
pub struct PipelineBuilder<C = TextCleaner, L = ModelLemmatizer, N = ChunkNounExtractor> {
    cleaner: C,
    lemmatizer: L,
    extractor: N,
}

impl PipelineBuilder {
    /// Start building from the default stages.
    pub fn new() -> Self {
        PipelineBuilder {
            cleaner: TextCleaner::default(),
            lemmatizer: ModelLemmatizer,
            extractor: ChunkNounExtractor::default(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, L, N> PipelineBuilder<C, L, N> {
    /// Override the cleaner stage.
    pub fn cleaner<T: Cleaner>(self, cleaner: T) -> PipelineBuilder<T, L, N> {
        PipelineBuilder {
            cleaner,
            lemmatizer: self.lemmatizer,
            extractor: self.extractor,
        }
    }

    /// Override the lemmatizer stage.
    pub fn lemmatizer<T: Lemmatizer>(self, lemmatizer: T) -> PipelineBuilder<C, T, N> {
        PipelineBuilder {
            cleaner: self.cleaner,
            lemmatizer,
            extractor: self.extractor,
        }
    }

    /// Override the noun extractor stage.
    pub fn extractor<T: NounExtractor>(self, extractor: T) -> PipelineBuilder<C, L, T> {
        PipelineBuilder {
            cleaner: self.cleaner,
            lemmatizer: self.lemmatizer,
            extractor,
        }
    }

    /// Consume the builder and produce a [`Pipeline`] around `model`.
    pub fn build(self, model: Arc<dyn LanguageModel>) -> Pipeline<C, L, N> {
        Pipeline {
            cleaner: self.cleaner,
            lemmatizer: self.lemmatizer,
            extractor: self.extractor,
            model,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrepError;
    use crate::nlp::model::EnglishModel;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver, TracingObserver, STAGES};
    use crate::types::PosTag;

    fn english() -> Arc<dyn LanguageModel> {
        Arc::new(EnglishModel::new())
    }

    fn scenario() -> Document {
        Document::new("scenario.txt", "the plants are growing rapidly in 2021.")
    }

    #[test]
    fn test_standard_pipeline_scenario() {
        let pipeline = StandardPipeline::standard(english(), &PrepConfig::default());
        let mut doc = scenario();

        pipeline.run(&mut doc, &mut NoopObserver).unwrap();

        assert_eq!(doc.cleaned.as_deref(), Some("plants growing rapidly"));
        assert_eq!(doc.lemmatized.as_deref(), Some("plant grow rapidly"));
        assert_eq!(doc.nouns.as_deref(), Some(" plant"));
    }

    #[test]
    fn test_pipeline_output_has_no_verbs() {
        let model = english();
        let pipeline = StandardPipeline::standard(model.clone(), &PrepConfig::default());
        let cases = [
            ("Farmers harvested the crops.", " farmer crop"),
            ("Engineers designed bridges.", " engineer bridge"),
            ("Farmers are growing crops.", " farmer crop"),
            (
                "Researchers studied the effects of climate on crops in Africa.",
                " researcher effect climate crop africa",
            ),
            (
                "The company released new products that customers buy quickly.",
                " company new product customer",
            ),
        ];

        for (raw, expected) in cases {
            let mut doc = Document::new("a.txt", raw.to_lowercase());
            pipeline.run(&mut doc, &mut NoopObserver).unwrap();
            assert_eq!(doc.output(), expected, "input {raw:?}");

            // No lemma the model tagged as a verb in the cleaned text survives.
            let cleaned = doc.cleaned.as_deref().unwrap();
            let verbs: Vec<String> = model
                .parse(cleaned)
                .unwrap()
                .into_iter()
                .filter(|t| t.pos == PosTag::Verb)
                .map(|t| t.lemma)
                .collect();
            assert!(!verbs.is_empty(), "input {raw:?}");
            for word in doc.output().split_whitespace() {
                assert!(!verbs.iter().any(|v| v == word), "{word:?} in {raw:?}");
            }
        }
    }

    #[test]
    fn test_pipeline_builder_default_matches_standard() {
        let built = PipelineBuilder::new().build(english());
        let standard = StandardPipeline::standard(english(), &PrepConfig::default());

        let mut a = scenario();
        let mut b = scenario();
        built.run(&mut a, &mut NoopObserver).unwrap();
        standard.run(&mut b, &mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pipeline_run_with_timing_observer() {
        let pipeline = StandardPipeline::standard(english(), &PrepConfig::default());
        let mut doc = scenario();
        let mut obs = StageTimingObserver::new();

        pipeline.run(&mut doc, &mut obs).unwrap();

        let stage_names: Vec<&str> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(stage_names, STAGES);

        let (_, clean) = &obs.reports()[0];
        assert_eq!(clean.tokens_in(), Some(7));
        assert_eq!(clean.tokens_out(), Some(3));
        let (_, extract) = &obs.reports()[2];
        assert_eq!(extract.tokens_in(), Some(3));
        assert_eq!(extract.tokens_out(), Some(1));
    }

    #[test]
    fn test_pipeline_run_with_tracing_observer() {
        let pipeline = StandardPipeline::standard(english(), &PrepConfig::default());
        let mut doc = scenario();
        pipeline.run(&mut doc, &mut TracingObserver).unwrap();
        assert!(doc.is_complete());
    }

    #[test]
    fn test_pipeline_run_empty_input() {
        let pipeline = StandardPipeline::standard(english(), &PrepConfig::default());
        let mut doc = Document::new("empty.txt", "");

        pipeline.run(&mut doc, &mut NoopObserver).unwrap();

        assert_eq!(doc.cleaned.as_deref(), Some(""));
        assert_eq!(doc.lemmatized.as_deref(), Some(""));
        assert_eq!(doc.output(), "");
        assert!(doc.is_empty_output());
    }

    #[test]
    fn test_pipeline_run_numbers_and_punctuation_only() {
        let pipeline = StandardPipeline::standard(english(), &PrepConfig::default());
        let mut doc = Document::new("noise.txt", "123 !!! 456");

        pipeline.run(&mut doc, &mut NoopObserver).unwrap();

        assert_eq!(doc.cleaned.as_deref(), Some(""));
        assert_eq!(doc.output(), "");
    }

    #[test]
    fn test_pipeline_text_too_long_keeps_cleaned_text() {
        let model: Arc<dyn LanguageModel> = Arc::new(EnglishModel::new().with_max_length(4));
        let pipeline = StandardPipeline::standard(model, &PrepConfig::default());
        let mut doc = scenario();

        let err = pipeline.run(&mut doc, &mut NoopObserver).unwrap_err();

        assert!(matches!(err, PrepError::TextTooLong { max: 4, .. }));
        assert_eq!(doc.cleaned.as_deref(), Some("plants growing rapidly"));
        assert!(doc.lemmatized.is_none());
        assert!(!doc.is_complete());
    }

    #[test]
    fn test_pipeline_with_custom_cleaner() {
        struct Verbatim;

        impl Cleaner for Verbatim {
            fn clean(&self, text: &str) -> String {
                text.to_string()
            }
        }

        let pipeline = PipelineBuilder::new().cleaner(Verbatim).build(english());
        let mut doc = Document::new("a.txt", "soil moisture");
        pipeline.run(&mut doc, &mut NoopObserver).unwrap();
        assert_eq!(doc.output(), " soil moisture");
    }

    #[test]
    fn test_pipeline_uses_configured_stopwords() {
        let cfg = PrepConfig {
            extra_stopwords: vec!["plants".to_string()],
            ..PrepConfig::default()
        };
        let pipeline = StandardPipeline::standard(english(), &cfg);
        let mut doc = scenario();
        pipeline.run(&mut doc, &mut NoopObserver).unwrap();
        assert_eq!(doc.cleaned.as_deref(), Some("growing rapidly"));
    }

    #[test]
    fn test_pipeline_debug_names_model() {
        let pipeline = StandardPipeline::standard(english(), &PrepConfig::default());
        assert!(format!("{pipeline:?}").contains("english-rules"));
    }
}
