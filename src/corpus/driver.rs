//! Corpus run: load every input file, run the pipeline, write the result.
//!
//! One failing document never stops the batch. Its error is recorded in the
//! [`RunReport`] and no output file is written for it. Only problems with the
//! input or output directory abort the run.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use super::loader::CorpusLoader;
use super::writer::CorpusWriter;
use crate::error::{PrepError, Result};
use crate::nlp::cleaner::TextCleaner;
use crate::nlp::model::LanguageModel;
use crate::pipeline::artifacts::Document;
use crate::pipeline::observer::TracingObserver;
use crate::pipeline::runner::{Pipeline, StandardPipeline};
use crate::pipeline::traits::{
    ChunkNounExtractor, Cleaner, Lemmatizer, ModelLemmatizer, NounExtractor,
};
use crate::types::PrepConfig;

// ─── Report ────────────────────────────────────────────────────────────────

/// A document that produced no output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub name: String,
    pub error: String,
}

/// Outcome of a whole run, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Every document whose output file was written
    pub written: Vec<String>,
    /// Written documents whose output has no noun; a subset of `written`
    pub empty: Vec<String>,
    pub failures: Vec<DocumentFailure>,
}

impl RunReport {
    /// Whether every document was written
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Documents attempted
    pub fn processed(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Written { name, empty } => {
                if empty {
                    self.empty.push(name.clone());
                }
                self.written.push(name);
            }
            Outcome::Failed { name, error } => self.failures.push(DocumentFailure {
                name,
                error: error.to_string(),
            }),
        }
    }

    fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut report = RunReport::default();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }
}

enum Outcome {
    Written { name: String, empty: bool },
    Failed { name: String, error: PrepError },
}

// ─── Runner ────────────────────────────────────────────────────────────────

/// Runs a [`Pipeline`] over every file of an input directory
#[derive(Debug, Clone)]
pub struct CorpusRunner<C = TextCleaner, L = ModelLemmatizer, N = ChunkNounExtractor> {
    pipeline: Pipeline<C, L, N>,
    workers: Option<usize>,
    extension: Option<String>,
    sort_inputs: bool,
}

impl CorpusRunner {
    /// Standard pipeline around `model`, with loader and worker settings
    /// taken from `cfg`
    pub fn standard(model: Arc<dyn LanguageModel>, cfg: &PrepConfig) -> Self {
        CorpusRunner::new(StandardPipeline::standard(model, cfg))
            .with_workers(cfg.workers)
            .with_extension(cfg.extension.as_deref())
            .with_sorting(cfg.sort_inputs)
    }
}

impl<C, L, N> CorpusRunner<C, L, N>
where
    C: Cleaner + Sync,
    L: Lemmatizer + Sync,
    N: NounExtractor + Sync,
{
    /// Sequential runner over `*.txt` files in filename order
    pub fn new(pipeline: Pipeline<C, L, N>) -> Self {
        Self {
            pipeline,
            workers: None,
            extension: Some("txt".to_string()),
            sort_inputs: true,
        }
    }

    /// Worker threads; `None` or `Some(1)` processes documents one at a time
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_extension(mut self, extension: Option<&str>) -> Self {
        self.extension = extension.map(str::to_string);
        self
    }

    pub fn with_sorting(mut self, sort_inputs: bool) -> Self {
        self.sort_inputs = sort_inputs;
        self
    }

    pub fn pipeline(&self) -> &Pipeline<C, L, N> {
        &self.pipeline
    }

    /// Process every input file of `input` into `output`.
    ///
    /// Fails only when `input` cannot be listed, `output` cannot be created
    /// or the worker pool cannot start.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunReport> {
        let files = CorpusLoader::new(input)
            .with_extension(self.extension.as_deref())
            .with_sorting(self.sort_inputs)
            .list()?;
        let writer = CorpusWriter::create(output)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            files = files.len(),
            workers = self.workers.unwrap_or(1),
            model = self.pipeline.model().name(),
            "starting run"
        );

        let outcomes: Vec<Outcome> = match self.workers {
            Some(n) if n > 1 => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| PrepError::WorkerPool(e.to_string()))?;
                pool.install(|| files.par_iter().map(|p| self.process(p, &writer)).collect())
            }
            _ => files.iter().map(|p| self.process(p, &writer)).collect(),
        };
        let report = RunReport::from_outcomes(outcomes);

        tracing::info!(
            written = report.written.len(),
            empty = report.empty.len(),
            failed = report.failures.len(),
            "run finished"
        );
        Ok(report)
    }

    fn process(&self, path: &Path, writer: &CorpusWriter) -> Outcome {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        match self.process_file(path, &name, writer) {
            Ok(doc) => {
                let empty = doc.is_empty_output();
                if empty {
                    tracing::warn!(document = %name, "no nouns found; wrote empty output");
                } else {
                    tracing::debug!(document = %name, "wrote output");
                }
                Outcome::Written { name, empty }
            }
            Err(error) => {
                tracing::warn!(document = %name, %error, "document failed");
                Outcome::Failed { name, error }
            }
        }
    }

    fn process_file(&self, path: &Path, name: &str, writer: &CorpusWriter) -> Result<Document> {
        let raw = CorpusLoader::load(path)?;
        let mut doc = Document::new(name, raw);
        self.pipeline.run(&mut doc, &mut TracingObserver)?;
        writer.write(path.file_name().unwrap_or_default(), doc.output())?;
        Ok(doc)
    }
}
