pub mod quiz_repository;

pub use quiz_repository::{InMemoryQuizRepository, QuizRepository};
