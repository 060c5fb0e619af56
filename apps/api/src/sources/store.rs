//! Content source persistence. Every query is owner-scoped.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::content::ContentSourceRow;

pub struct NewSource {
    pub title: String,
    pub content_type: String,
    pub source_content: String,
    pub source_url: Option<String>,
    pub file_url: Option<String>,
    pub metadata: Value,
}

pub async fn get_owned_source(
    pool: &PgPool,
    user_id: Uuid,
    source_id: Uuid,
) -> Result<ContentSourceRow, AppError> {
    sqlx::query_as::<_, ContentSourceRow>(
        "SELECT * FROM content_sources WHERE id = $1 AND user_id = $2",
    )
    .bind(source_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Content source not found".to_string()))
}

pub async fn list_sources(pool: &PgPool, user_id: Uuid) -> Result<Vec<ContentSourceRow>, AppError> {
    let rows = sqlx::query_as::<_, ContentSourceRow>(
        "SELECT * FROM content_sources WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert_source(
    pool: &PgPool,
    user_id: Uuid,
    source: NewSource,
) -> Result<ContentSourceRow, AppError> {
    let row: ContentSourceRow = sqlx::query_as(
        r#"
        INSERT INTO content_sources
            (id, user_id, title, content_type, source_content, source_url, file_url, metadata)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&source.title)
    .bind(&source.content_type)
    .bind(&source.source_content)
    .bind(&source.source_url)
    .bind(&source.file_url)
    .bind(&source.metadata)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update_source(
    pool: &PgPool,
    user_id: Uuid,
    source_id: Uuid,
    title: Option<String>,
    source_content: Option<String>,
    metadata: Option<Value>,
) -> Result<ContentSourceRow, AppError> {
    sqlx::query_as::<_, ContentSourceRow>(
        r#"
        UPDATE content_sources
        SET title = COALESCE($3, title),
            source_content = COALESCE($4, source_content),
            metadata = COALESCE($5, metadata),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(source_id)
    .bind(user_id)
    .bind(&title)
    .bind(&source_content)
    .bind(&metadata)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Content source not found".to_string()))
}

pub async fn delete_source(pool: &PgPool, user_id: Uuid, source_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM content_sources WHERE id = $1 AND user_id = $2")
        .bind(source_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Content source not found".to_string()));
    }
    Ok(())
}
