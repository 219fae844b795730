// src/services/leaderboard.rs

use sqlx::SqlitePool;

use crate::{error::AppError, models::score::LeaderboardEntry, services::score};

/// One page of the ranking.
///
/// Ranking order: score descending, then `first_correct_timestamp`
/// ascending; `user_id` keeps equal rows stable across pages.
/// Zero scores are excluded. Ranks are global: `offset + position + 1`.
pub async fn get_leaderboard(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> Result<Vec<LeaderboardEntry>, AppError> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT username, cumulative_score
        FROM user_scores
        WHERE cumulative_score > 0
        ORDER BY cumulative_score DESC, first_correct_timestamp ASC, user_id ASC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let leaderboard = rows
        .into_iter()
        .enumerate()
        .map(|(idx, (username, score))| LeaderboardEntry {
            rank: offset + idx as i64 + 1,
            username,
            score,
        })
        .collect();

    Ok(leaderboard)
}

/// 1 + number of users strictly ahead: a higher score, or the same score
/// with an earlier first correct answer. `None` while the user is off the board.
pub async fn get_user_rank(pool: &SqlitePool, username: &str) -> Result<Option<i64>, AppError> {
    let Some(user) = score::find(pool, username).await? else {
        return Ok(None);
    };

    if user.cumulative_score == 0 {
        return Ok(None);
    }

    let ahead: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM user_scores
        WHERE cumulative_score > ?
           OR (cumulative_score = ? AND first_correct_timestamp < ?)
        "#,
    )
    .bind(user.cumulative_score)
    .bind(user.cumulative_score)
    .bind(user.first_correct_timestamp)
    .fetch_one(pool)
    .await?;

    Ok(Some(ahead + 1))
}
