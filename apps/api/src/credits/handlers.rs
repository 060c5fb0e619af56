//! Axum route handlers for the credit ledger.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::credits::ledger;
use crate::errors::AppError;
use crate::models::credits::{CreditUsageRow, UserCreditsRow};
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/credits
pub async fn handle_get_credits(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserCreditsRow>, AppError> {
    let credits = ledger::get_user_credits(&state.db, user_id).await?;
    Ok(Json(credits))
}

/// GET /api/v1/credits/history?limit=
pub async fn handle_usage_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<CreditUsageRow>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    if limit < 1 {
        return Err(AppError::Validation("limit must be positive".to_string()));
    }
    let history = ledger::get_usage_history(&state.db, user_id, limit).await?;
    Ok(Json(history))
}
