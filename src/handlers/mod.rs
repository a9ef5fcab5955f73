pub mod generation_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    web, HttpRequest,
};

use crate::errors::AppError;

pub use generation_handler::{generate_questions, upload_document, UploadLimit};
pub use health_handler::health_check;
pub use quiz_handler::{get_quiz, list_quizzes, save_quiz};

/// Registers every route plus body limits. Shared by `main` and tests.
pub fn configure(max_upload_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(max_upload_bytes)
                .error_handler(json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::Data::new(UploadLimit(max_upload_bytes)))
        .service(health_check)
        .service(generate_questions)
        .service(upload_document)
        .service(save_quiz)
        .service(get_quiz)
        .service(list_quizzes);
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid query string: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, ResponseError};

    #[actix_web::test]
    async fn oversized_json_is_a_validation_error() {
        let req = actix_web::test::TestRequest::default().to_http_request();

        let err = json_error_handler(
            JsonPayloadError::Overflow { limit: 16 },
            &req,
        );

        let response = err.as_response_error().error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body");
        let body: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert!(body["details"]
            .as_str()
            .is_some_and(|d| d.starts_with("Invalid request body")));
    }
}
