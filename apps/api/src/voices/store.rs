//! Brand voice persistence.
//!
//! Invariant: at most one default profile per owner. Writes that flag a
//! profile as default clear every other default inside the same transaction
//! as the insert/update, so no interleaving can observe two defaults.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::voice::BrandVoiceRow;

pub struct NewVoice {
    pub name: String,
    pub tone: String,
    pub style_guide: Option<String>,
    pub target_audience: Option<String>,
    pub example_texts: Vec<String>,
    pub is_default: bool,
}

pub struct VoiceChanges {
    pub name: Option<String>,
    pub tone: Option<String>,
    pub style_guide: Option<String>,
    pub target_audience: Option<String>,
    pub example_texts: Option<Vec<String>>,
    pub is_default: Option<bool>,
}

pub async fn get_owned_voice(
    pool: &PgPool,
    user_id: Uuid,
    voice_id: Uuid,
) -> Result<BrandVoiceRow, AppError> {
    sqlx::query_as::<_, BrandVoiceRow>(
        "SELECT * FROM brand_voice_profiles WHERE id = $1 AND user_id = $2",
    )
    .bind(voice_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Brand voice {voice_id} not found")))
}

/// Default profile first, then newest.
pub async fn list_voices(pool: &PgPool, user_id: Uuid) -> Result<Vec<BrandVoiceRow>, AppError> {
    let rows = sqlx::query_as::<_, BrandVoiceRow>(
        "SELECT * FROM brand_voice_profiles WHERE user_id = $1 \
         ORDER BY is_default DESC, created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// The flagged default, falling back to the most recently created profile.
pub async fn get_default_voice(pool: &PgPool, user_id: Uuid) -> Result<BrandVoiceRow, AppError> {
    let flagged: Option<BrandVoiceRow> = sqlx::query_as(
        "SELECT * FROM brand_voice_profiles WHERE user_id = $1 AND is_default = true",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    if let Some(voice) = flagged {
        return Ok(voice);
    }

    sqlx::query_as::<_, BrandVoiceRow>(
        "SELECT * FROM brand_voice_profiles WHERE user_id = $1 \
         ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("No brand voice profiles found".to_string()))
}

pub async fn create_voice(
    pool: &PgPool,
    user_id: Uuid,
    voice: NewVoice,
) -> Result<BrandVoiceRow, AppError> {
    let mut tx = pool.begin().await?;

    if voice.is_default {
        sqlx::query("UPDATE brand_voice_profiles SET is_default = false WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
    }

    let row: BrandVoiceRow = sqlx::query_as(
        r#"
        INSERT INTO brand_voice_profiles
            (id, user_id, name, tone, style_guide, target_audience, example_texts, is_default)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&voice.name)
    .bind(&voice.tone)
    .bind(&voice.style_guide)
    .bind(&voice.target_audience)
    .bind(&voice.example_texts)
    .bind(voice.is_default)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(row)
}

pub async fn update_voice(
    pool: &PgPool,
    user_id: Uuid,
    voice_id: Uuid,
    changes: VoiceChanges,
) -> Result<BrandVoiceRow, AppError> {
    let mut tx = pool.begin().await?;

    if changes.is_default == Some(true) {
        sqlx::query(
            "UPDATE brand_voice_profiles SET is_default = false WHERE user_id = $1 AND id <> $2",
        )
        .bind(user_id)
        .bind(voice_id)
        .execute(&mut *tx)
        .await?;
    }

    let updated: Option<BrandVoiceRow> = sqlx::query_as(
        r#"
        UPDATE brand_voice_profiles
        SET name = COALESCE($3, name),
            tone = COALESCE($4, tone),
            style_guide = COALESCE($5, style_guide),
            target_audience = COALESCE($6, target_audience),
            example_texts = COALESCE($7, example_texts),
            is_default = COALESCE($8, is_default),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(voice_id)
    .bind(user_id)
    .bind(&changes.name)
    .bind(&changes.tone)
    .bind(&changes.style_guide)
    .bind(&changes.target_audience)
    .bind(&changes.example_texts)
    .bind(changes.is_default)
    .fetch_optional(&mut *tx)
    .await?;

    let row =
        updated.ok_or_else(|| AppError::NotFound(format!("Brand voice {voice_id} not found")))?;

    tx.commit().await?;
    Ok(row)
}

pub async fn delete_voice(pool: &PgPool, user_id: Uuid, voice_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM brand_voice_profiles WHERE id = $1 AND user_id = $2")
        .bind(voice_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Brand voice {voice_id} not found"
        )));
    }
    Ok(())
}
