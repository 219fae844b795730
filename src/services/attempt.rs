// src/services/attempt.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::attempt::{AttemptEntry, AttemptRecord},
};

const ATTEMPT_COLUMNS: &str =
    "attempt_id, session_id, username, submitted_answer, is_correct, submitted_at";

/// Every attempt ever recorded, most recent first.
pub async fn get_all_attempts(pool: &SqlitePool) -> Result<Vec<AttemptEntry>, AppError> {
    let records = sqlx::query_as::<_, AttemptRecord>(&format!(
        "SELECT {ATTEMPT_COLUMNS} FROM attempt_records \
         ORDER BY submitted_at DESC, attempt_id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(records.into_iter().map(AttemptEntry::from).collect())
}

/// Attempts for one session, most recent first.
pub async fn get_attempts_for_session(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<AttemptEntry>, AppError> {
    let records = sqlx::query_as::<_, AttemptRecord>(&format!(
        "SELECT {ATTEMPT_COLUMNS} FROM attempt_records WHERE session_id = ? \
         ORDER BY submitted_at DESC, attempt_id DESC"
    ))
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(records.into_iter().map(AttemptEntry::from).collect())
}

/// Distinct usernames that answered the session correctly, in the order
/// they answered.
pub async fn get_successful_attempts(
    pool: &SqlitePool,
    session_id: &str,
) -> Result<Vec<String>, AppError> {
    let usernames: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT username
        FROM attempt_records
        WHERE session_id = ? AND is_correct = 1
        GROUP BY username
        ORDER BY MIN(submitted_at) ASC, MIN(attempt_id) ASC
        "#,
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(usernames)
}
