use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::Config,
    constants::quiz_prompt::{mcq_system_prompt, mcq_user_prompt},
    errors::{AppError, AppResult},
    models::{
        domain::Question,
        dto::completion::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
    },
    services::response_parser::parse_questions,
};

const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Turns one document chunk into validated questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        document_chunk: &str,
        questions_to_generate: usize,
    ) -> AppResult<Vec<Question>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
            temperature: config.llm_temperature,
        }
    }
}

/// Generator backed by an OpenAI-compatible chat completion endpoint.
/// One request per call, no retries.
pub struct ChatCompletionGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    settings: CompletionSettings,
}

impl ChatCompletionGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(
            client,
            &config.llm_api_base_url,
            config.llm_api_key.clone(),
            CompletionSettings::from_config(config),
        ))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        api_key: SecretString,
        settings: CompletionSettings,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            settings,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(
        &self,
        document_chunk: &str,
        questions_to_generate: usize,
    ) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(mcq_system_prompt(questions_to_generate)),
                ChatMessage::user(mcq_user_prompt(questions_to_generate, document_chunk)),
            ],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            stream: false,
        }
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> AppResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Completion endpoint returned {}", status);
            return Err(AppError::upstream_status(status.as_u16(), body));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::MalformedResponse(format!("Completion body could not be decoded: {}", e))
        })?;

        completion.into_primary_text()
    }
}

#[async_trait]
impl QuestionGenerator for ChatCompletionGenerator {
    async fn generate(
        &self,
        document_chunk: &str,
        questions_to_generate: usize,
    ) -> AppResult<Vec<Question>> {
        log::info!(
            "Generating {} questions from {} characters of document text",
            questions_to_generate,
            document_chunk.chars().count()
        );

        let request = self.build_request(document_chunk, questions_to_generate);
        let raw = self.complete(&request).await?;

        let preview: String = raw.chars().take(RESPONSE_PREVIEW_CHARS).collect();
        log::debug!("Raw model response: {}...", preview);

        let questions = parse_questions(&raw)?;
        log::info!("Successfully generated {} questions", questions.len());
        Ok(questions)
    }
}
