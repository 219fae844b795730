// src/models/score.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'user_scores' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserScore {
    pub user_id: i64,
    pub username: String,
    pub cumulative_score: i64,
    /// Tie-breaker. Set once, on the answer that takes the score from 0 to 1.
    pub first_correct_timestamp: Option<DateTime<Utc>>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub username: String,
    pub score: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub status: String,
    pub leaderboard: Vec<LeaderboardEntry>,
}

fn default_limit() -> i64 {
    10
}

/// Query string for the leaderboard.
#[derive(Debug, Deserialize, Validate)]
pub struct LeaderboardQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100."))]
    pub limit: i64,
    #[serde(default)]
    #[validate(range(min = 0, message = "Offset must not be negative."))]
    pub offset: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserStandingResponse {
    pub status: String,
    pub username: String,
    pub score: i64,
    /// Null while the user has no correct answers.
    pub rank: Option<i64>,
}
