use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Question, RoomCode};

/// A saved quiz. Built once by the room registry and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub room_code: RoomCode,
    pub questions: Vec<Question>,
    pub num_levels: u32,
    pub questions_per_level: u32,
    pub created_at: DateTime<Utc>,
    pub total_questions: usize,
}

impl Quiz {
    pub fn new(
        room_code: RoomCode,
        questions: Vec<Question>,
        num_levels: u32,
        questions_per_level: u32,
    ) -> Self {
        let total_questions = questions.len();
        Quiz {
            room_code,
            questions,
            num_levels,
            questions_per_level,
            created_at: Utc::now(),
            total_questions,
        }
    }

    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            room_code: self.room_code.clone(),
            total_questions: self.total_questions,
            created_at: self.created_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub room_code: RoomCode,
    pub total_questions: usize,
    pub created_at: DateTime<Utc>,
}
