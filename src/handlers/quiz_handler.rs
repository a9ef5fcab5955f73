use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::SaveQuizRequest,
        response::{QuizListResponse, QuizResponse},
    },
};

#[post("/api/quiz")]
pub async fn save_quiz(
    state: web::Data<AppState>,
    request: web::Json<SaveQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.save_quiz(request.into_inner()).await?;
    log::info!("Saved quiz {}", response.room_code);
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/quiz/{room_code}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    room_code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&room_code).await?;
    Ok(HttpResponse::Ok().json(QuizResponse::from(quiz)))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let summaries = state.quiz_service.list_quizzes().await?;
    Ok(HttpResponse::Ok().json(QuizListResponse::from(summaries)))
}
