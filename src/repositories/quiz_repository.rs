use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, QuizSummary, RoomCode},
};

/// Storage behind the room registry. Swap the in-memory table for a durable
/// store by implementing this trait.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Stores `quiz` only if its room code is free. The check and the insert
    /// happen under one lock; returns `false` on collision.
    async fn insert_if_absent(&self, quiz: Quiz) -> AppResult<bool>;
    async fn find_by_code(&self, room_code: &str) -> AppResult<Option<Quiz>>;
    /// Insertion order.
    async fn list_summaries(&self) -> AppResult<Vec<QuizSummary>>;
}

#[derive(Default)]
struct QuizTable {
    by_code: HashMap<RoomCode, Quiz>,
    insertion_order: Vec<RoomCode>,
}

/// Process-lifetime table; everything is lost on restart.
#[derive(Default)]
pub struct InMemoryQuizRepository {
    table: RwLock<QuizTable>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn insert_if_absent(&self, quiz: Quiz) -> AppResult<bool> {
        let mut table = self.table.write().await;
        if table.by_code.contains_key(&quiz.room_code) {
            return Ok(false);
        }

        table.insertion_order.push(quiz.room_code.clone());
        table.by_code.insert(quiz.room_code.clone(), quiz);
        Ok(true)
    }

    async fn find_by_code(&self, room_code: &str) -> AppResult<Option<Quiz>> {
        let Some(code) = RoomCode::parse(room_code) else {
            return Ok(None);
        };
        let table = self.table.read().await;
        Ok(table.by_code.get(&code).cloned())
    }

    async fn list_summaries(&self) -> AppResult<Vec<QuizSummary>> {
        let table = self.table.read().await;
        Ok(table
            .insertion_order
            .iter()
            .filter_map(|code| table.by_code.get(code))
            .map(Quiz::summary)
            .collect())
    }
}
