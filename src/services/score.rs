// src/services/score.rs

use sqlx::{SqliteConnection, SqlitePool};

use crate::{db, error::AppError, models::score::UserScore, utils::time::utc_now};

const SCORE_COLUMNS: &str =
    "user_id, username, cumulative_score, first_correct_timestamp, last_updated";

/// Insert-if-absent, then read back the row.
async fn ensure_row(conn: &mut SqliteConnection, username: &str) -> Result<UserScore, sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_scores (username, cumulative_score, last_updated)
        VALUES (?, 0, ?)
        ON CONFLICT(username) DO NOTHING
        "#,
    )
    .bind(username)
    .bind(utc_now())
    .execute(&mut *conn)
    .await?;

    sqlx::query_as::<_, UserScore>(&format!(
        "SELECT {SCORE_COLUMNS} FROM user_scores WHERE username = ?"
    ))
    .bind(username)
    .fetch_one(&mut *conn)
    .await
}

/// Returns the user's score row, creating it with score 0 if absent.
pub async fn get_or_create(pool: &SqlitePool, username: &str) -> Result<UserScore, AppError> {
    let mut tx = db::begin_write(pool).await?;
    let row = ensure_row(&mut tx, username).await?;
    tx.commit().await?;
    Ok(row)
}

/// Adds exactly one point.
///
/// `first_correct_timestamp` is stamped only when the score was 0 before
/// this increment; SQLite evaluates every `SET` expression against the old
/// row, so the `CASE` sees the pre-increment value.
pub async fn increment_score(pool: &SqlitePool, username: &str) -> Result<UserScore, AppError> {
    let mut tx = db::begin_write(pool).await?;

    ensure_row(&mut tx, username).await?;

    let now = utc_now();
    let updated = sqlx::query_as::<_, UserScore>(&format!(
        r#"
        UPDATE user_scores SET
            first_correct_timestamp = CASE WHEN cumulative_score = 0 THEN ? ELSE first_correct_timestamp END,
            cumulative_score = cumulative_score + 1,
            last_updated = ?
        WHERE username = ?
        RETURNING {SCORE_COLUMNS}
        "#
    ))
    .bind(now)
    .bind(now)
    .bind(username)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(username, score = updated.cumulative_score, "Score incremented");
    Ok(updated)
}

/// Current cumulative score, 0 for unknown users. Never creates a row.
pub async fn get_score(pool: &SqlitePool, username: &str) -> Result<i64, AppError> {
    let score: Option<i64> =
        sqlx::query_scalar("SELECT cumulative_score FROM user_scores WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await?;

    Ok(score.unwrap_or(0))
}

/// Reads the row without creating it.
pub async fn find(pool: &SqlitePool, username: &str) -> Result<Option<UserScore>, AppError> {
    let row = sqlx::query_as::<_, UserScore>(&format!(
        "SELECT {SCORE_COLUMNS} FROM user_scores WHERE username = ?"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
