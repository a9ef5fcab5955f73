use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, Quiz, QuizSummary, RoomCode},
    repositories::QuizRepository,
    services::question_validator::check_question,
};

pub const MAX_CODE_ATTEMPTS: usize = 100;

pub type RoomCodeSource = Arc<dyn Fn() -> RoomCode + Send + Sync>;

/// Hands out room codes for finished quizzes and looks them up again.
pub struct RoomRegistry {
    repository: Arc<dyn QuizRepository>,
    code_source: RoomCodeSource,
}

impl RoomRegistry {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self::with_code_source(repository, Arc::new(RoomCode::random))
    }

    pub fn with_code_source(repository: Arc<dyn QuizRepository>, code_source: RoomCodeSource) -> Self {
        Self {
            repository,
            code_source,
        }
    }

    pub async fn register(
        &self,
        questions: Vec<Question>,
        num_levels: u32,
        questions_per_level: u32,
    ) -> AppResult<RoomCode> {
        if questions.is_empty() {
            return Err(AppError::ValidationError(
                "Quiz must contain at least one question".to_string(),
            ));
        }
        if num_levels == 0 || questions_per_level == 0 {
            return Err(AppError::ValidationError(
                "numLevels and questionsPerLevel must be positive".to_string(),
            ));
        }
        for (i, question) in questions.iter().enumerate() {
            check_question(i + 1, question)
                .map_err(|defect| AppError::ValidationError(defect.to_string()))?;
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = (self.code_source)();
            let quiz = Quiz::new(code.clone(), questions.clone(), num_levels, questions_per_level);

            if self.repository.insert_if_absent(quiz).await? {
                log::info!(
                    "Quiz saved under room code {} ({} questions, {} levels x {} per level)",
                    code,
                    questions.len(),
                    num_levels,
                    questions_per_level
                );
                return Ok(code);
            }

            log::debug!("Room code {} already taken (attempt {})", code, attempt);
        }

        Err(AppError::CodeSpaceExhausted(format!(
            "Unable to generate unique room code after {} attempts",
            MAX_CODE_ATTEMPTS
        )))
    }

    pub async fn get(&self, room_code: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_code(room_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No quiz found with room code: {}", room_code))
            })
    }

    pub async fn list(&self) -> AppResult<Vec<QuizSummary>> {
        self.repository.list_summaries().await
    }
}
