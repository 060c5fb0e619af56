//! Generation pipeline — orchestrates a full generation request.
//!
//! Flow: validate selections against the catalog → load source + voice →
//! deduct credits → fan out transforms → persist outputs and the history
//! record in one transaction → return the rows.

use sqlx::PgPool;
use std::str::FromStr;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::{self, Platform};
use crate::credits::ledger::deduct_credits;
use crate::errors::AppError;
use crate::generation::strategy::GenerationMode;
use crate::generation::transformer::{
    optimize_for_platform, transform_content, transform_multiple, validate_content_length,
    PlatformSelection, SharedOptions, TransformOptions, TransformResult, VoiceDescriptor,
};
use crate::models::content::GeneratedContentRow;
use crate::models::credits::Operation;
use crate::models::voice::Tone;
use crate::sources::store::get_owned_source;
use crate::voices::store::get_owned_voice;

#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub source_id: Uuid,
    pub selections: Vec<PlatformSelection>,
    pub brand_voice_id: Option<Uuid>,
    pub tone: Option<Tone>,
    pub mode: GenerationMode,
}

/// Runs the full generation pipeline for one source across N platforms.
pub async fn generate_content(
    pool: &PgPool,
    user_id: Uuid,
    params: GenerateParams,
) -> Result<Vec<GeneratedContentRow>, AppError> {
    if params.selections.is_empty() {
        return Err(AppError::Validation(
            "At least one platform must be selected".to_string(),
        ));
    }
    for selection in &params.selections {
        if !catalog::format_is_valid(selection.platform, &selection.format) {
            return Err(AppError::Validation(format!(
                "Format '{}' is not available for {}",
                selection.format, selection.platform
            )));
        }
    }

    let source = get_owned_source(pool, user_id, params.source_id).await?;

    let voice = match params.brand_voice_id {
        Some(voice_id) => Some(get_owned_voice(pool, user_id, voice_id).await?),
        None => None,
    };

    deduct_credits(
        pool,
        user_id,
        Operation::Generate,
        Some(format!(
            "Generated {} outputs from '{}'",
            params.selections.len(),
            source.title
        )),
    )
    .await?;

    let shared = SharedOptions {
        tone: params.tone,
        voice: voice.as_ref().map(VoiceDescriptor::from),
        mode: params.mode,
    };
    let results = transform_multiple(&source.source_content, &params.selections, &shared).await?;

    // All-or-nothing persistence: either every output and the history row
    // land, or none do.
    let mut tx = pool.begin().await?;
    let mut rows = Vec::with_capacity(results.len());

    for result in results {
        let row = persist_output(
            &mut tx,
            user_id,
            params.source_id,
            params.brand_voice_id,
            result,
        )
        .await?;
        rows.push(row);
    }

    sqlx::query(
        r#"
        INSERT INTO generation_history
            (id, user_id, source_id, platforms_generated, total_outputs)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(params.source_id)
    .bind(
        params
            .selections
            .iter()
            .map(|s| s.platform.as_str().to_string())
            .collect::<Vec<_>>(),
    )
    .bind(rows.len() as i32)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Generated {} outputs from source {} for user {}",
        rows.len(),
        params.source_id,
        user_id
    );

    Ok(rows)
}

/// Re-runs generation for one existing output and resets it to draft.
///
/// The voice lookup is best-effort: the referenced profile may have been
/// deleted since the original generation, in which case regeneration
/// proceeds without it.
pub async fn regenerate_content(
    pool: &PgPool,
    user_id: Uuid,
    generated_id: Uuid,
) -> Result<GeneratedContentRow, AppError> {
    let existing: GeneratedContentRow =
        sqlx::query_as("SELECT * FROM generated_content WHERE id = $1 AND user_id = $2")
            .bind(generated_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Generated content not found".to_string()))?;

    let source = get_owned_source(pool, user_id, existing.source_id).await?;

    let voice = match existing.brand_voice_id {
        Some(voice_id) => match get_owned_voice(pool, user_id, voice_id).await {
            Ok(v) => Some(v),
            Err(AppError::NotFound(_)) => None,
            Err(e) => return Err(e),
        },
        None => None,
    };

    let platform = Platform::from_str(&existing.platform)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored platform is invalid: {e}")))?;

    deduct_credits(
        pool,
        user_id,
        Operation::Regenerate,
        Some(format!(
            "Regenerated {} {} from '{}'",
            existing.platform, existing.format, source.title
        )),
    )
    .await?;

    let result = transform_content(TransformOptions {
        source_content: source.source_content,
        platform,
        format: existing.format.clone(),
        tone: None,
        voice: voice.as_ref().map(VoiceDescriptor::from),
        mode: GenerationMode::default(),
    })
    .await?;

    let metadata = serde_json::to_value(&result.metadata)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize metadata: {e}")))?;
    let text = optimize_for_platform(result.content, platform);

    let row: GeneratedContentRow = sqlx::query_as(
        r#"
        UPDATE generated_content
        SET generated_text = $3, metadata = $4, status = 'draft', updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(generated_id)
    .bind(user_id)
    .bind(&text)
    .bind(&metadata)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

async fn persist_output(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    user_id: Uuid,
    source_id: Uuid,
    brand_voice_id: Option<Uuid>,
    result: TransformResult,
) -> Result<GeneratedContentRow, AppError> {
    let platform = result.platform;
    let metadata = serde_json::to_value(&result.metadata)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize metadata: {e}")))?;
    let text = optimize_for_platform(result.content, platform);

    let check = validate_content_length(&text, platform);
    if !check.valid {
        // Canned bodies can overflow the tighter platform limits; surfaced to
        // the user as-is, flagged here for observability.
        warn!(
            "{}",
            check
                .message
                .unwrap_or_else(|| "Generated content exceeds platform limit".to_string())
        );
    }

    let row: GeneratedContentRow = sqlx::query_as(
        r#"
        INSERT INTO generated_content
            (id, user_id, source_id, brand_voice_id, platform, format,
             generated_text, status, metadata)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'draft', $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(source_id)
    .bind(brand_voice_id)
    .bind(platform.as_str())
    .bind(&result.format)
    .bind(&text)
    .bind(&metadata)
    .fetch_one(&mut **tx)
    .await?;

    Ok(row)
}
