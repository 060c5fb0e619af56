//! Axum route handlers for content sources: direct creation, file upload,
//! URL import, and owner-scoped CRUD.

use std::str::FromStr;

use aws_sdk_s3::primitives::ByteStream;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::credits::ledger::deduct_credits;
use crate::errors::AppError;
use crate::generation::text::count_words;
use crate::models::content::{ContentSourceRow, ContentType};
use crate::models::credits::Operation;
use crate::sources::import::fetch_page;
use crate::sources::store::{self, NewSource};
use crate::state::AppState;

const DEFAULT_TITLE: &str = "Untitled Content";

#[derive(Debug, Deserialize)]
pub struct CreateSourceRequest {
    pub title: Option<String>,
    pub content_type: Option<String>,
    pub source_content: String,
    pub source_url: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSourceRequest {
    pub title: Option<String>,
    pub source_content: Option<String>,
    pub metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ImportUrlRequest {
    pub url: String,
}

/// POST /api/v1/sources
///
/// Direct creation from pasted text (or a caller-prepared payload). Text
/// sources get server-computed word/character counts in their metadata.
pub async fn handle_create_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateSourceRequest>,
) -> Result<Json<ContentSourceRow>, AppError> {
    let content_type = match &request.content_type {
        Some(raw) => ContentType::from_str(raw).map_err(AppError::Validation)?,
        None => ContentType::Text,
    };

    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut metadata = request.metadata.unwrap_or_else(|| json!({}));
    if content_type == ContentType::Text {
        if let Some(map) = metadata.as_object_mut() {
            map.insert(
                "word_count".to_string(),
                json!(count_words(&request.source_content)),
            );
            map.insert(
                "character_count".to_string(),
                json!(request.source_content.chars().count()),
            );
        }
    }

    deduct_credits(
        &state.db,
        user_id,
        Operation::Upload,
        Some(format!("Uploaded '{title}'")),
    )
    .await?;

    let source = store::insert_source(
        &state.db,
        user_id,
        NewSource {
            title,
            content_type: content_type.as_str().to_string(),
            source_content: request.source_content,
            source_url: request.source_url,
            file_url: None,
            metadata,
        },
    )
    .await?;

    Ok(Json(source))
}

/// POST /api/v1/sources/upload (multipart)
///
/// Accepts a single `file` field. Only UTF-8 text payloads are parsed into
/// source content; binary extraction (PDF/DOC) is out of scope. The original
/// bytes are retained in S3 and recorded as `file_url` provenance.
pub async fn handle_upload_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ContentSourceRow>, AppError> {
    let mut file: Option<(String, String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .unwrap_or("upload.txt")
            .to_string();
        let file_type = field
            .content_type()
            .unwrap_or("text/plain")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        file = Some((filename, file_type, data));
    }

    let Some((filename, file_type, data)) = file else {
        return Err(AppError::Validation(
            "Multipart payload must contain a 'file' field".to_string(),
        ));
    };

    let content = std::str::from_utf8(&data)
        .map_err(|_| {
            AppError::Validation(
                "Only UTF-8 text files are supported; binary extraction is not available"
                    .to_string(),
            )
        })?
        .to_string();

    let title = title_from_filename(&filename);
    deduct_credits(
        &state.db,
        user_id,
        Operation::Upload,
        Some(format!("Uploaded '{title}'")),
    )
    .await?;

    let s3_key = format!("sources/{}/{}/{}", user_id, Uuid::new_v4(), filename);
    state
        .s3
        .put_object()
        .bucket(&state.config.s3_bucket)
        .key(&s3_key)
        .body(ByteStream::from(data.to_vec()))
        .content_type(&file_type)
        .send()
        .await
        .map_err(|e| AppError::S3(format!("Upload failed: {e}")))?;

    info!(
        "Stored uploaded source at s3://{}/{}",
        state.config.s3_bucket, s3_key
    );

    let metadata = json!({
        "original_filename": filename,
        "file_size": data.len(),
        "file_type": file_type,
        "word_count": count_words(&content),
        "imported_at": Utc::now().to_rfc3339(),
    });

    let source = store::insert_source(
        &state.db,
        user_id,
        NewSource {
            title,
            content_type: ContentType::Text.as_str().to_string(),
            source_content: content,
            source_url: None,
            file_url: Some(s3_key),
            metadata,
        },
    )
    .await?;

    Ok(Json(source))
}

/// POST /api/v1/sources/import
///
/// Server-side fetch of a URL into a source record.
pub async fn handle_import_url(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<ImportUrlRequest>,
) -> Result<Json<ContentSourceRow>, AppError> {
    let page = fetch_page(&state.http, &request.url).await?;

    let title = page
        .title
        .unwrap_or_else(|| format!("Imported from {}", page.platform));
    let metadata = json!({
        "platform": page.platform,
        "imported_at": Utc::now().to_rfc3339(),
        "word_count": count_words(&page.text),
    });

    deduct_credits(
        &state.db,
        user_id,
        Operation::Upload,
        Some(format!("Imported '{title}'")),
    )
    .await?;

    let source = store::insert_source(
        &state.db,
        user_id,
        NewSource {
            title,
            content_type: ContentType::Url.as_str().to_string(),
            source_content: page.text,
            source_url: Some(request.url),
            file_url: None,
            metadata,
        },
    )
    .await?;

    Ok(Json(source))
}

/// GET /api/v1/sources
pub async fn handle_list_sources(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ContentSourceRow>>, AppError> {
    let sources = store::list_sources(&state.db, user_id).await?;
    Ok(Json(sources))
}

/// GET /api/v1/sources/:id
pub async fn handle_get_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(source_id): Path<Uuid>,
) -> Result<Json<ContentSourceRow>, AppError> {
    let source = store::get_owned_source(&state.db, user_id, source_id).await?;
    Ok(Json(source))
}

/// PATCH /api/v1/sources/:id
pub async fn handle_update_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(source_id): Path<Uuid>,
    Json(request): Json<UpdateSourceRequest>,
) -> Result<Json<ContentSourceRow>, AppError> {
    let source = store::update_source(
        &state.db,
        user_id,
        source_id,
        request.title,
        request.source_content,
        request.metadata,
    )
    .await?;
    Ok(Json(source))
}

/// DELETE /api/v1/sources/:id
pub async fn handle_delete_source(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(source_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    store::delete_source(&state.db, user_id, source_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Filename minus its last extension; the bare name when there is none.
fn title_from_filename(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => filename.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_filename_strips_extension() {
        assert_eq!(title_from_filename("launch-notes.txt"), "launch-notes");
        assert_eq!(title_from_filename("archive.tar.gz"), "archive.tar");
        assert_eq!(title_from_filename("README"), "README");
        assert_eq!(title_from_filename(".env"), ".env");
    }

    #[test]
    fn test_create_request_accepts_minimal_payload() {
        let request: CreateSourceRequest =
            serde_json::from_str(r#"{"source_content": "Hello world."}"#).unwrap();
        assert!(request.title.is_none());
        assert!(request.content_type.is_none());
        assert_eq!(request.source_content, "Hello world.");
    }
}
