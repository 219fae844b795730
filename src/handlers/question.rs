// src/handlers/question.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{error::AppError, models::session::QuestionResponse, services::session};

/// Current question. The answer is hidden while the session is active and
/// shown once it has ended; every field is null if no session ever existed.
pub async fn get_question(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let view = session::get_current_question_view(&pool, false).await?;
    Ok(Json(QuestionResponse::from(view)))
}
