use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, QuizSummary},
        dto::{
            request::{SaveQuizRequest, DEFAULT_QUESTIONS_PER_LEVEL},
            response::SaveQuizResponse,
        },
    },
    services::{question_validator::validate_question, room_registry::RoomRegistry},
};

/// Save/fetch/list entrypoints over the room registry.
pub struct QuizService {
    registry: Arc<RoomRegistry>,
}

impl QuizService {
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self { registry }
    }

    pub async fn save_quiz(&self, request: SaveQuizRequest) -> AppResult<SaveQuizResponse> {
        request.validate()?;

        let questions = request
            .questions
            .iter()
            .enumerate()
            .map(|(i, candidate)| validate_question(i + 1, candidate))
            .collect::<Result<Vec<Question>, _>>()
            .map_err(|defect| AppError::ValidationError(defect.to_string()))?;

        let questions_per_level = request
            .questions_per_level
            .unwrap_or(DEFAULT_QUESTIONS_PER_LEVEL);
        let num_levels = request
            .num_levels
            .unwrap_or_else(|| default_num_levels(questions.len()));
        let total_questions = questions.len();

        let room_code = self
            .registry
            .register(questions, num_levels, questions_per_level)
            .await?;

        Ok(SaveQuizResponse {
            success: true,
            room_code,
            message: format!("Quiz saved successfully with {} questions", total_questions),
            total_questions,
        })
    }

    pub async fn get_quiz(&self, room_code: &str) -> AppResult<Quiz> {
        self.registry.get(room_code).await
    }

    pub async fn list_quizzes(&self) -> AppResult<Vec<QuizSummary>> {
        self.registry.list().await
    }
}

/// One level per three questions, rounded up.
fn default_num_levels(question_count: usize) -> u32 {
    let levels = question_count.div_ceil(DEFAULT_QUESTIONS_PER_LEVEL as usize).max(1);
    u32::try_from(levels).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repositories::InMemoryQuizRepository, test_utils::fixtures::sample_questions};
    use serde_json::{json, Value};

    fn service() -> QuizService {
        QuizService::new(Arc::new(RoomRegistry::new(Arc::new(
            InMemoryQuizRepository::new(),
        ))))
    }

    fn as_values(questions: &[Question]) -> Vec<Value> {
        questions
            .iter()
            .map(|q| serde_json::to_value(q).expect("serialize"))
            .collect()
    }

    fn save_request(questions: Vec<Value>) -> SaveQuizRequest {
        SaveQuizRequest {
            questions,
            num_levels: None,
            questions_per_level: None,
        }
    }

    #[test]
    fn default_levels_round_up() {
        assert_eq!(default_num_levels(1), 1);
        assert_eq!(default_num_levels(3), 1);
        assert_eq!(default_num_levels(4), 2);
        assert_eq!(default_num_levels(15), 5);
    }

    #[tokio::test]
    async fn save_then_get_round_trips_questions() {
        let service = service();
        let questions = sample_questions("saved", 4);

        let response = service
            .save_quiz(save_request(as_values(&questions)))
            .await
            .expect("save");
        let quiz = service.get_quiz(response.room_code.as_str()).await.expect("get");

        assert!(response.success);
        assert_eq!(response.total_questions, 4);
        assert_eq!(quiz.questions, questions);
        assert_eq!(quiz.num_levels, 2);
        assert_eq!(quiz.questions_per_level, 3);
    }

    #[tokio::test]
    async fn explicit_levels_are_kept() {
        let service = service();
        let response = service
            .save_quiz(SaveQuizRequest {
                questions: as_values(&sample_questions("lv", 2)),
                num_levels: Some(2),
                questions_per_level: Some(1),
            })
            .await
            .expect("save");

        let quiz = service.get_quiz(response.room_code.as_str()).await.expect("get");
        assert_eq!((quiz.num_levels, quiz.questions_per_level), (2, 1));
    }

    #[tokio::test]
    async fn malformed_question_is_rejected_with_its_index() {
        let service = service();
        let mut values = as_values(&sample_questions("ok", 2));
        values.push(json!({ "question": "Third?", "options": ["a", "b"], "correctAnswer": "a" }));

        match service.save_quiz(save_request(values)).await {
            Err(AppError::ValidationError(message)) => {
                assert_eq!(message, "Question 3 must have exactly 4 options")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(service.list_quizzes().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn empty_question_list_is_rejected() {
        let result = service().save_quiz(save_request(vec![])).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn list_reports_saved_quizzes() {
        let service = service();
        service
            .save_quiz(save_request(as_values(&sample_questions("one", 1))))
            .await
            .expect("save");
        service
            .save_quiz(save_request(as_values(&sample_questions("two", 2))))
            .await
            .expect("save");

        let totals: Vec<usize> = service
            .list_quizzes()
            .await
            .expect("list")
            .iter()
            .map(|s| s.total_questions)
            .collect();
        assert_eq!(totals, vec![1, 2]);
    }
}
