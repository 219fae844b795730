// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    extractors::ValidatedQuery,
    models::score::{LeaderboardQuery, LeaderboardResponse, UserStandingResponse},
    services::{leaderboard, score},
};

/// Ranked scorers, paginated by `limit` (1..=100, default 10) and `offset`.
pub async fn get_leaderboard(
    State(pool): State<SqlitePool>,
    ValidatedQuery(query): ValidatedQuery<LeaderboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let leaderboard = leaderboard::get_leaderboard(&pool, query.limit, query.offset).await?;

    Ok(Json(LeaderboardResponse {
        status: "success".to_string(),
        leaderboard,
    }))
}

/// One user's score and global rank.
pub async fn get_user_standing(
    State(pool): State<SqlitePool>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let score = score::get_score(&pool, &username).await?;
    let rank = leaderboard::get_user_rank(&pool, &username).await?;

    Ok(Json(UserStandingResponse {
        status: "success".to_string(),
        username,
        score,
        rank,
    }))
}
