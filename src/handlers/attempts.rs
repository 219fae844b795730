// src/handlers/attempts.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, models::attempt::AttemptsResponse, services::attempt};

/// All attempts across all sessions, most recent first. Not paginated.
pub async fn list_attempts(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let attempts = attempt::get_all_attempts(&pool).await?;

    Ok(Json(AttemptsResponse {
        status: "success".to_string(),
        attempts,
    }))
}
