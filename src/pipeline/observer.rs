//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! text for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::Document;

pub const STAGE_CLEAN: &str = "clean";
pub const STAGE_LEMMATIZE: &str = "lemmatize";
pub const STAGE_EXTRACT: &str = "extract";

/// Every stage name, in execution order
pub const STAGES: [&str; 3] = [STAGE_CLEAN, STAGE_LEMMATIZE, STAGE_EXTRACT];

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    tokens_in: Option<usize>,
    tokens_out: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whitespace-separated tokens the stage received
    pub fn tokens_in(&self) -> Option<usize> {
        self.tokens_in
    }

    /// Whitespace-separated tokens the stage produced
    pub fn tokens_out(&self) -> Option<usize> {
        self.tokens_out
    }
}

/// Builder for reports with optional counters
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn tokens_in(mut self, n: usize) -> Self {
        self.report.tokens_in = Some(n);
        self
    }

    pub fn tokens_out(mut self, n: usize) -> Self {
        self.report.tokens_out = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Callbacks at stage boundaries. Every method defaults to a no-op.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called once after the last stage with the finished document
    fn on_document(&mut self, _doc: &Document) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Collects the report of every stage it sees
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

/// Emits a `debug` event per stage and per finished document
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed().as_micros() as u64,
            tokens_in = report.tokens_in(),
            tokens_out = report.tokens_out(),
            "stage finished"
        );
    }

    fn on_document(&mut self, doc: &Document) {
        tracing::debug!(
            document = %doc.name,
            nouns = doc.output().split_whitespace().count(),
            "document processed"
        );
    }
}
