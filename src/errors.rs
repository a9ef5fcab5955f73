use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The model answered, but nothing usable could be pulled out of the text.
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// Non-2xx status or transport failure talking to the completion endpoint.
    #[error("Upstream error: {details}")]
    UpstreamError {
        status: Option<u16>,
        details: String,
    },

    #[error("Question generation failed: {0}")]
    GenerationFailed(String),

    #[error("Room code space exhausted: {0}")]
    CodeSpaceExhausted(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        AppError::UpstreamError {
            status: Some(status),
            details: format!("{} - {}", status, body.into()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::UpstreamError { .. } => "UPSTREAM_ERROR",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::CodeSpaceExhausted(_) => "CODE_SPACE_EXHAUSTED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// The human-readable message without the variant prefix.
    pub fn details(&self) -> &str {
        match self {
            AppError::NotFound(message)
            | AppError::ValidationError(message)
            | AppError::MalformedResponse(message)
            | AppError::GenerationFailed(message)
            | AppError::CodeSpaceExhausted(message)
            | AppError::InternalError(message) => message,
            AppError::UpstreamError { details, .. } => details,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::CodeSpaceExhausted(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_code().to_string(),
            details: self.details().to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamError {
            status: err.status().map(|s| s.as_u16()),
            details: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
