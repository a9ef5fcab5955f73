use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{
        request::{GenerateQuestionsRequest, LevelConfig},
        response::GenerateQuestionsResponse,
    },
    services::question_aggregator::QuestionAggregator,
};

/// Ingest entrypoint: validates the request, runs the chunked generation
/// pipeline and decides what an empty result means.
pub struct QuizGenerationService {
    aggregator: QuestionAggregator,
    chunk_size: usize,
}

impl QuizGenerationService {
    pub fn new(aggregator: QuestionAggregator, chunk_size: usize) -> Self {
        Self {
            aggregator,
            chunk_size: chunk_size.max(1),
        }
    }

    pub async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> AppResult<GenerateQuestionsResponse> {
        request.validate()?;
        self.generate_from_text(&request.document_text, request.levels)
            .await
    }

    pub async fn generate_from_text(
        &self,
        document_text: &str,
        levels: LevelConfig,
    ) -> AppResult<GenerateQuestionsResponse> {
        levels.validate()?;
        if document_text.trim().is_empty() {
            return Err(AppError::ValidationError(
                "No text could be extracted from the document; it appears to be empty or contains no readable text"
                    .to_string(),
            ));
        }

        let total_needed = levels.total_questions_needed();
        let text_length = document_text.chars().count();
        log::info!(
            "Question generation requested: {} levels x {} per level = {} questions from {} characters",
            levels.num_levels,
            levels.questions_per_level,
            total_needed,
            text_length
        );

        let set = self
            .aggregator
            .build_quiz_questions(document_text, total_needed, self.chunk_size)
            .await;

        if set.questions.is_empty() {
            let mut message = format!(
                "No questions could be generated ({} of {} chunk(s) failed)",
                set.report.chunks_failed, set.report.chunks_total
            );
            if let Some(failure) = set.report.last_failure() {
                message.push_str(&format!(
                    "; last error {}: {}",
                    failure.error, failure.details
                ));
            }
            return Err(AppError::GenerationFailed(message));
        }

        let total_questions = set.questions.len();
        let message = if total_questions < total_needed {
            format!(
                "Generated {} of {} requested questions",
                total_questions, total_needed
            )
        } else {
            "Questions generated successfully".to_string()
        };

        Ok(GenerateQuestionsResponse {
            success: true,
            message,
            config: levels.into(),
            questions: set.questions,
            total_questions,
            text_length,
            chunks: set.report,
            file_info: None,
        })
    }
}
