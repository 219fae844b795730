// src/handlers/answer.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    extractors::ValidatedJson,
    models::attempt::{SubmitAnswerRequest, SubmitAnswerResponse},
    services::{answer, score},
};

/// Submits an answer to the active question.
///
/// * Records the attempt (first submission per session wins).
/// * Awards one point when correct and returns the new total.
/// * Otherwise just makes sure the participant has a score row.
pub async fn submit_answer(
    State(pool): State<SqlitePool>,
    ValidatedJson(payload): ValidatedJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = answer::submit_answer(&pool, &payload.username, &payload.answer).await?;

    let score = if outcome.is_correct {
        Some(score::increment_score(&pool, &payload.username).await?.cumulative_score)
    } else {
        score::get_or_create(&pool, &payload.username).await?;
        None
    };

    Ok(Json(SubmitAnswerResponse {
        status: "success".to_string(),
        is_correct: outcome.is_correct,
        message: outcome.message.to_string(),
        score,
    }))
}
