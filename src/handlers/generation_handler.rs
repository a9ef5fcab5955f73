use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{post, web, HttpResponse};
use futures::StreamExt;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{GenerateQuestionsRequest, LevelConfig},
        response::FileInfo,
    },
    services::document_extractor::{extract_text, DocumentKind},
};

#[post("/api/generate")]
pub async fn generate_questions(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .generation_service
        .generate_questions(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Byte cap for a single uploaded document.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);

const LEVEL_FIELD_LIMIT: usize = 32;

struct UploadedDocument {
    file_name: String,
    kind: DocumentKind,
    contents: Vec<u8>,
}

/// Multipart form with a `document` file (.txt or .pdf). Levels come from the
/// `numLevels`/`questionsPerLevel` form fields, falling back to the query string.
#[post("/api/upload")]
pub async fn upload_document(
    state: web::Data<AppState>,
    limit: web::Data<UploadLimit>,
    defaults: web::Query<LevelConfig>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut levels = defaults.into_inner();
    let mut document = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(multipart_error)?;
        let (name, file_name) = match field.content_disposition() {
            Some(disposition) => (
                disposition.get_name().map(str::to_string),
                disposition.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        match name.as_deref() {
            Some("document") => {
                let file_name = file_name.ok_or_else(|| {
                    AppError::ValidationError("The document field must be a file".to_string())
                })?;
                let kind = DocumentKind::from_file_name(&file_name)?;
                let contents = read_field(&mut field, limit.0).await?;
                document = Some(UploadedDocument {
                    file_name,
                    kind,
                    contents,
                });
            }
            Some("numLevels") => {
                if let Some(value) = read_level(&mut field, "numLevels").await? {
                    levels.num_levels = value;
                }
            }
            Some("questionsPerLevel") => {
                if let Some(value) = read_level(&mut field, "questionsPerLevel").await? {
                    levels.questions_per_level = value;
                }
            }
            _ => {
                read_field(&mut field, limit.0).await?;
            }
        }
    }

    let document =
        document.ok_or_else(|| AppError::ValidationError("No file uploaded".to_string()))?;
    log::info!(
        "Received upload {} ({}, {} bytes)",
        document.file_name,
        document.kind.mime_type(),
        document.contents.len()
    );

    let text = extract_text(document.kind, &document.contents)?;
    let mut response = state
        .generation_service
        .generate_from_text(&text, levels)
        .await?;
    response.file_info = Some(FileInfo {
        original_name: document.file_name,
        size: document.contents.len(),
        mimetype: document.kind.mime_type().to_string(),
    });
    Ok(HttpResponse::Ok().json(response))
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, AppError> {
    let mut contents = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(multipart_error)?;
        if contents.len() + chunk.len() > limit {
            return Err(AppError::ValidationError(format!(
                "Upload exceeds the {} byte limit",
                limit
            )));
        }
        contents.extend_from_slice(&chunk);
    }
    Ok(contents)
}

/// Blank values keep the default.
async fn read_level(field: &mut Field, name: &str) -> Result<Option<u32>, AppError> {
    let raw = read_field(field, LEVEL_FIELD_LIMIT).await?;
    let value = String::from_utf8_lossy(&raw);
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| {
        AppError::ValidationError(format!("{} must be a positive integer", name))
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::ValidationError(format!("Invalid multipart upload: {}", err))
}
