//! Axum route handlers for brand voice profiles.

use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::voice::{BrandVoiceRow, Tone};
use crate::state::AppState;
use crate::voices::store::{self, NewVoice, VoiceChanges};

#[derive(Debug, Deserialize)]
pub struct CreateVoiceRequest {
    pub name: String,
    pub tone: String,
    pub style_guide: Option<String>,
    pub target_audience: Option<String>,
    #[serde(default)]
    pub example_texts: Vec<String>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVoiceRequest {
    pub name: Option<String>,
    pub tone: Option<String>,
    pub style_guide: Option<String>,
    pub target_audience: Option<String>,
    pub example_texts: Option<Vec<String>>,
    pub is_default: Option<bool>,
}

fn validate_tone(tone: &str) -> Result<(), AppError> {
    Tone::from_str(tone).map(|_| ()).map_err(AppError::Validation)
}

/// POST /api/v1/voices
pub async fn handle_create_voice(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateVoiceRequest>,
) -> Result<Json<BrandVoiceRow>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    validate_tone(&request.tone)?;

    let voice = store::create_voice(
        &state.db,
        user_id,
        NewVoice {
            name: request.name,
            tone: request.tone,
            style_guide: request.style_guide,
            target_audience: request.target_audience,
            example_texts: request.example_texts,
            is_default: request.is_default,
        },
    )
    .await?;

    Ok(Json(voice))
}

/// GET /api/v1/voices
pub async fn handle_list_voices(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<BrandVoiceRow>>, AppError> {
    let voices = store::list_voices(&state.db, user_id).await?;
    Ok(Json(voices))
}

/// GET /api/v1/voices/default
pub async fn handle_get_default_voice(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<BrandVoiceRow>, AppError> {
    let voice = store::get_default_voice(&state.db, user_id).await?;
    Ok(Json(voice))
}

/// GET /api/v1/voices/:id
pub async fn handle_get_voice(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(voice_id): Path<Uuid>,
) -> Result<Json<BrandVoiceRow>, AppError> {
    let voice = store::get_owned_voice(&state.db, user_id, voice_id).await?;
    Ok(Json(voice))
}

/// PATCH /api/v1/voices/:id
pub async fn handle_update_voice(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(voice_id): Path<Uuid>,
    Json(request): Json<UpdateVoiceRequest>,
) -> Result<Json<BrandVoiceRow>, AppError> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
    }
    if let Some(tone) = &request.tone {
        validate_tone(tone)?;
    }

    let voice = store::update_voice(
        &state.db,
        user_id,
        voice_id,
        VoiceChanges {
            name: request.name,
            tone: request.tone,
            style_guide: request.style_guide,
            target_audience: request.target_audience,
            example_texts: request.example_texts,
            is_default: request.is_default,
        },
    )
    .await?;

    Ok(Json(voice))
}

/// DELETE /api/v1/voices/:id
pub async fn handle_delete_voice(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(voice_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    store::delete_voice(&state.db, user_id, voice_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateVoiceRequest = serde_json::from_str(
            r#"{"name": "Acme Voice", "tone": "friendly"}"#,
        )
        .unwrap();
        assert!(request.example_texts.is_empty());
        assert!(!request.is_default);
    }

    #[test]
    fn test_tone_validation_rejects_unknown() {
        assert!(validate_tone("friendly").is_ok());
        assert!(matches!(
            validate_tone("sarcastic"),
            Err(AppError::Validation(_))
        ));
    }
}
