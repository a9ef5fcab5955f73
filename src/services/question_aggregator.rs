use std::{sync::Arc, time::Duration};

use serde::Serialize;

use crate::{
    errors::AppError,
    models::domain::Question,
    services::{model_service::QuestionGenerator, text_chunker::chunk_document},
};

/// Delay inserted between consecutive chunk requests to stay under the
/// completion endpoint's rate limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingPolicy {
    pub delay: Duration,
    pub skip_when_target_met: bool,
}

impl PacingPolicy {
    pub fn none() -> Self {
        Self {
            delay: Duration::ZERO,
            skip_when_target_met: true,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
            skip_when_target_met: true,
        }
    }
}

impl Default for PacingPolicy {
    fn default() -> Self {
        Self::from_millis(1000)
    }
}

/// Running count of collected vs. still-needed questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationBudget {
    total_needed: usize,
    collected: usize,
}

impl GenerationBudget {
    pub fn new(total_needed: usize) -> Self {
        Self {
            total_needed,
            collected: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.total_needed - self.collected
    }

    pub fn is_met(&self) -> bool {
        self.collected >= self.total_needed
    }

    pub fn collected(&self) -> usize {
        self.collected
    }

    /// Caps at `total_needed`; overshoot is trimmed later.
    pub fn record(&mut self, generated: usize) {
        self.collected = (self.collected + generated).min(self.total_needed);
    }
}

/// What happened to each chunk during aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkReport {
    pub chunks_total: usize,
    pub chunks_processed: usize,
    pub chunks_failed: usize,
    pub chunks_skipped: usize,
    pub failed_chunks: Vec<ChunkFailure>,
}

impl ChunkReport {
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed_chunks.iter().map(|failure| failure.index).collect()
    }

    pub fn last_failure(&self) -> Option<&ChunkFailure> {
        self.failed_chunks.last()
    }
}

/// A chunk whose generation failed. `index` is 1-based; `error` is the
/// stable error code of the underlying `AppError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkFailure {
    pub index: usize,
    pub error: String,
    pub details: String,
}

impl ChunkFailure {
    fn new(index: usize, err: &AppError) -> Self {
        Self {
            index,
            error: err.error_code().to_string(),
            details: err.details().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
    pub report: ChunkReport,
}

pub struct QuestionAggregator {
    generator: Arc<dyn QuestionGenerator>,
    pacing: PacingPolicy,
}

impl QuestionAggregator {
    pub fn new(generator: Arc<dyn QuestionGenerator>, pacing: PacingPolicy) -> Self {
        Self { generator, pacing }
    }

    /// Walks chunks left to right, asking each for whatever is still missing.
    /// Per-chunk failures are logged and skipped; this never returns an error.
    pub async fn build_quiz_questions(
        &self,
        full_text: &str,
        total_questions_needed: usize,
        chunk_size: usize,
    ) -> QuestionSet {
        let chunks = chunk_document(full_text, chunk_size);
        log::info!(
            "Split text into {} chunk(s); target is {} questions",
            chunks.len(),
            total_questions_needed
        );

        let mut budget = GenerationBudget::new(total_questions_needed);
        let mut questions: Vec<Question> = Vec::new();
        let mut report = ChunkReport {
            chunks_total: chunks.len(),
            ..ChunkReport::default()
        };

        for (position, chunk) in chunks.iter().enumerate() {
            if budget.is_met() {
                report.chunks_skipped = chunks.len() - position;
                log::info!(
                    "Target reached with {} questions; skipping remaining {} chunk(s)",
                    questions.len(),
                    report.chunks_skipped
                );
                break;
            }

            let still_needed = budget.remaining();
            log::info!(
                "Processing chunk {} of {} ({} characters, {} questions still needed)",
                chunk.index,
                chunks.len(),
                chunk.char_len(),
                still_needed
            );

            report.chunks_processed += 1;
            match self.generator.generate(&chunk.text, still_needed).await {
                Ok(generated) => {
                    log::info!(
                        "Chunk {} produced {} questions",
                        chunk.index,
                        generated.len()
                    );
                    budget.record(generated.len());
                    questions.extend(generated);
                }
                Err(err) => {
                    log::warn!("Chunk {} failed: {}", chunk.index, err);
                    report.failed_chunks.push(ChunkFailure::new(chunk.index, &err));
                }
            }

            let is_last = position + 1 == chunks.len();
            let skip_pause = budget.is_met() && self.pacing.skip_when_target_met;
            if !is_last && !skip_pause && !self.pacing.delay.is_zero() {
                tokio::time::sleep(self.pacing.delay).await;
            }
        }

        report.chunks_failed = report.failed_chunks.len();
        if report.chunks_failed > 0 {
            log::warn!("Chunks that failed: {:?}", report.failed_indices());
        }
        let generated_total = questions.len();
        questions.truncate(total_questions_needed);

        log::info!(
            "Generated {} questions in total, returning {} of {} requested ({} of {} chunks failed)",
            generated_total,
            questions.len(),
            total_questions_needed,
            report.chunks_failed,
            report.chunks_total
        );

        QuestionSet { questions, report }
    }
}
