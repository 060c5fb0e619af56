//! Credit ledger — balance reads and atomic deduction.
//!
//! Deduction is one conditional UPDATE: the balance check and the decrement
//! land in the same statement, so two concurrent deductions can never both
//! pass the sufficiency check. The usage-history append rides in the same
//! transaction; either both persist or neither does.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::credits::{CreditUsageRow, Operation, UserCreditsRow};

pub async fn get_user_credits(pool: &PgPool, user_id: Uuid) -> Result<UserCreditsRow, AppError> {
    sqlx::query_as::<_, UserCreditsRow>("SELECT * FROM user_credits WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Credit account not found".to_string()))
}

/// Deducts the operation's fixed cost and appends a usage-history entry.
///
/// Returns the updated balance row, or `InsufficientCredits` without any
/// state change when the balance cannot cover the cost.
pub async fn deduct_credits(
    pool: &PgPool,
    user_id: Uuid,
    operation: Operation,
    description: Option<String>,
) -> Result<UserCreditsRow, AppError> {
    let cost = operation.cost();
    let mut tx = pool.begin().await?;

    // Decrement-with-floor: succeeds only while the remaining balance covers
    // the cost, in a single statement.
    let updated: Option<UserCreditsRow> = sqlx::query_as(
        r#"
        UPDATE user_credits
        SET used_credits = used_credits + $1,
            remaining_credits = remaining_credits - $1,
            updated_at = NOW()
        WHERE user_id = $2 AND remaining_credits >= $1
        RETURNING *
        "#,
    )
    .bind(cost)
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(credits) = updated else {
        drop(tx);
        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT remaining_credits FROM user_credits WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(pool)
                .await?;

        return Err(match existing {
            Some((remaining,)) => AppError::InsufficientCredits(format!(
                "Insufficient credits: {operation} costs {cost}, {remaining} remaining"
            )),
            None => AppError::NotFound("Credit account not found".to_string()),
        });
    };

    sqlx::query(
        r#"
        INSERT INTO credit_usage_history
            (id, user_id, operation_type, credits_used, description, metadata)
        VALUES ($1, $2, $3, $4, $5, '{}'::jsonb)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(operation.as_str())
    .bind(cost)
    .bind(&description)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Deducted {} credits for {} from user {} ({} remaining)",
        cost, operation, user_id, credits.remaining_credits
    );

    Ok(credits)
}

pub async fn get_usage_history(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<CreditUsageRow>, AppError> {
    let rows = sqlx::query_as::<_, CreditUsageRow>(
        "SELECT * FROM credit_usage_history WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
