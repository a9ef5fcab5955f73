use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{InMemoryQuizRepository, QuizRepository},
    services::{
        model_service::{ChatCompletionGenerator, QuestionGenerator},
        question_aggregator::{PacingPolicy, QuestionAggregator},
        quiz_generation_service::QuizGenerationService,
        quiz_service::QuizService,
        room_registry::RoomRegistry,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<QuizGenerationService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(ChatCompletionGenerator::new(&config)?);
        let repository = Arc::new(InMemoryQuizRepository::new());
        Ok(Self::with_components(config, generator, repository))
    }

    /// Wires the services around an arbitrary generator and quiz store.
    pub fn with_components(
        config: Config,
        generator: Arc<dyn QuestionGenerator>,
        repository: Arc<dyn QuizRepository>,
    ) -> Self {
        let aggregator =
            QuestionAggregator::new(generator, PacingPolicy::from_millis(config.chunk_pacing_ms));
        let generation_service = Arc::new(QuizGenerationService::new(aggregator, config.chunk_size));

        let registry = Arc::new(RoomRegistry::new(repository));
        let quiz_service = Arc::new(QuizService::new(registry));

        Self {
            generation_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}
