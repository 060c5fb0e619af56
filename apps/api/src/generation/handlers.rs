//! Axum route handlers for the generation API.

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::catalog::{self, Platform};
use crate::errors::AppError;
use crate::generation::pipeline::{generate_content, regenerate_content, GenerateParams};
use crate::generation::strategy::GenerationMode;
use crate::generation::transformer::PlatformSelection;
use crate::models::content::{ContentStatus, GeneratedContentRow};
use crate::models::voice::Tone;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub source_id: Uuid,
    pub selections: Vec<PlatformSelection>,
    pub brand_voice_id: Option<Uuid>,
    pub tone: Option<Tone>,
    pub mode: Option<GenerationMode>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub outputs: Vec<GeneratedContentRow>,
}

#[derive(Debug, Deserialize)]
pub struct ListGeneratedQuery {
    pub source_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGeneratedRequest {
    pub generated_text: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlatformEntry {
    pub key: Platform,
    pub name: &'static str,
    pub icon: &'static str,
    pub formats: &'static [&'static str],
    pub character_limit: Option<usize>,
    pub color: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/platforms
///
/// The static catalog, for pickers and client-side format validation.
pub async fn handle_list_platforms() -> Json<Vec<PlatformEntry>> {
    let entries = Platform::ALL
        .into_iter()
        .map(|platform| {
            let config = catalog::config(platform);
            PlatformEntry {
                key: platform,
                name: config.name,
                icon: config.icon,
                formats: config.formats,
                character_limit: config.character_limit,
                color: config.color,
            }
        })
        .collect();
    Json(entries)
}

/// POST /api/v1/generate
///
/// Full pipeline: catalog validation → source + voice load → credit
/// deduction → fan-out transform → persist. Outputs come back in the
/// requested selection order.
pub async fn handle_generate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let outputs = generate_content(
        &state.db,
        user_id,
        GenerateParams {
            source_id: request.source_id,
            selections: request.selections,
            brand_voice_id: request.brand_voice_id,
            tone: request.tone,
            mode: request.mode.unwrap_or_default(),
        },
    )
    .await?;

    Ok(Json(GenerateResponse { outputs }))
}

/// POST /api/v1/generated/:id/regenerate
pub async fn handle_regenerate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(generated_id): Path<Uuid>,
) -> Result<Json<GeneratedContentRow>, AppError> {
    let row = regenerate_content(&state.db, user_id, generated_id).await?;
    Ok(Json(row))
}

/// GET /api/v1/generated?source_id=
pub async fn handle_list_generated(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<ListGeneratedQuery>,
) -> Result<Json<Vec<GeneratedContentRow>>, AppError> {
    let rows: Vec<GeneratedContentRow> = match query.source_id {
        Some(source_id) => {
            sqlx::query_as(
                "SELECT * FROM generated_content \
                 WHERE user_id = $1 AND source_id = $2 ORDER BY created_at DESC",
            )
            .bind(user_id)
            .bind(source_id)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT * FROM generated_content WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(user_id)
            .fetch_all(&state.db)
            .await?
        }
    };
    Ok(Json(rows))
}

/// PATCH /api/v1/generated/:id
///
/// Edits to the text or the draft/edited/exported status.
pub async fn handle_update_generated(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(generated_id): Path<Uuid>,
    Json(request): Json<UpdateGeneratedRequest>,
) -> Result<Json<GeneratedContentRow>, AppError> {
    if let Some(status) = &request.status {
        ContentStatus::from_str(status).map_err(AppError::Validation)?;
    }

    let row: Option<GeneratedContentRow> = sqlx::query_as(
        r#"
        UPDATE generated_content
        SET generated_text = COALESCE($3, generated_text),
            status = COALESCE($4, status),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(generated_id)
    .bind(user_id)
    .bind(&request.generated_text)
    .bind(&request.status)
    .fetch_optional(&state.db)
    .await?;

    let row =
        row.ok_or_else(|| AppError::NotFound("Generated content not found".to_string()))?;
    Ok(Json(row))
}

/// DELETE /api/v1/generated/:id
pub async fn handle_delete_generated(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(generated_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM generated_content WHERE id = $1 AND user_id = $2")
        .bind(generated_id)
        .bind(user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(
            "Generated content not found".to_string(),
        ));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_deserialization() {
        let json = serde_json::json!({
            "source_id": Uuid::new_v4(),
            "selections": [
                {"platform": "twitter", "format": "thread"},
                {"platform": "linkedin", "format": "post"}
            ],
            "tone": "casual",
            "mode": "template"
        });
        let request: GenerateRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.selections.len(), 2);
        assert_eq!(request.selections[0].platform, Platform::Twitter);
        assert_eq!(request.tone, Some(Tone::Casual));
        assert_eq!(request.mode, Some(GenerationMode::Template));
        assert!(request.brand_voice_id.is_none());
    }

    #[test]
    fn test_generate_request_rejects_unknown_platform() {
        let json = serde_json::json!({
            "source_id": Uuid::new_v4(),
            "selections": [{"platform": "myspace", "format": "post"}]
        });
        assert!(serde_json::from_value::<GenerateRequest>(json).is_err());
    }

    #[tokio::test]
    async fn test_platform_listing_covers_catalog() {
        let Json(entries) = handle_list_platforms().await;
        assert_eq!(entries.len(), Platform::ALL.len());
        let twitter = entries.iter().find(|e| e.key == Platform::Twitter).unwrap();
        assert_eq!(twitter.character_limit, Some(280));
        assert_eq!(twitter.formats[0], "thread");
    }
}
