// src/handlers/session.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    extractors::ValidatedJson,
    models::{
        attempt::AttemptsResponse,
        session::{EndSessionResponse, StartSessionRequest, StartSessionResponse},
    },
    services::{attempt, session},
};

/// Starts a new trivia session.
/// Admin only (`X-API-Key`).
pub async fn start_session(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<StartSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session = session::start_session(&pool, &payload.question, &payload.correct_answer).await?;

    Ok(Json(StartSessionResponse {
        status: "success".to_string(),
        session_id: session.session_id,
        message: "Trivia session started".to_string(),
        question: session.question,
    }))
}

/// Ends the active session, reveals the answer and lists who got it right.
/// Admin only (`X-API-Key`).
pub async fn end_session(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let session = session::end_session(&pool).await?;
    let successful_attempts = attempt::get_successful_attempts(&pool, &session.session_id).await?;

    Ok(Json(EndSessionResponse {
        status: "success".to_string(),
        message: "Trivia session ended".to_string(),
        correct_answer: session.correct_answer,
        successful_attempts,
    }))
}

/// Attempts recorded for one session, most recent first.
pub async fn list_session_attempts(
    State(pool): State<SqlitePool>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = attempt::get_attempts_for_session(&pool, &session_id).await?;

    Ok(Json(AttemptsResponse {
        status: "success".to_string(),
        attempts,
    }))
}
