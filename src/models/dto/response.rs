use serde::Serialize;

use crate::{
    models::{
        domain::{Question, Quiz, QuizSummary, RoomCode},
        dto::request::LevelConfig,
    },
    services::question_aggregator::ChunkReport,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigDto {
    pub num_levels: u32,
    pub questions_per_level: u32,
    pub total_questions_needed: usize,
}

impl From<LevelConfig> for GenerationConfigDto {
    fn from(levels: LevelConfig) -> Self {
        GenerationConfigDto {
            num_levels: levels.num_levels,
            questions_per_level: levels.questions_per_level,
            total_questions_needed: levels.total_questions_needed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsResponse {
    pub success: bool,
    pub message: String,
    pub config: GenerationConfigDto,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub text_length: usize,
    pub chunks: ChunkReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_info: Option<FileInfo>,
}

/// Describes the uploaded file on `/api/upload` responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub original_name: String,
    pub size: usize,
    pub mimetype: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuizResponse {
    pub success: bool,
    pub room_code: RoomCode,
    pub message: String,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub success: bool,
    pub room_code: RoomCode,
    pub quiz: Quiz,
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        QuizResponse {
            success: true,
            room_code: quiz.room_code.clone(),
            quiz,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizListResponse {
    pub success: bool,
    pub total_quizzes: usize,
    pub quizzes: Vec<QuizSummary>,
}

impl From<Vec<QuizSummary>> for QuizListResponse {
    fn from(quizzes: Vec<QuizSummary>) -> Self {
        QuizListResponse {
            success: true,
            total_quizzes: quizzes.len(),
            quizzes,
        }
    }
}
