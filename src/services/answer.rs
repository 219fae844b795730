// src/services/answer.rs

use sqlx::{SqliteConnection, SqlitePool};

use crate::{
    db,
    error::{AppError, is_unique_violation},
    models::attempt::SubmissionOutcome,
    services::session,
    utils::{normalize::answers_match, time::utc_now},
};

pub const CORRECT_MESSAGE: &str = "Correct!";
pub const INCORRECT_MESSAGE: &str = "Incorrect!";

async fn has_answered(
    conn: &mut SqliteConnection,
    session_id: &str,
    username: &str,
) -> Result<bool, sqlx::Error> {
    let existing: Option<i64> = sqlx::query_scalar(
        "SELECT attempt_id FROM attempt_records WHERE session_id = ? AND username = ? LIMIT 1",
    )
    .bind(session_id)
    .bind(username)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(existing.is_some())
}

/// Records one attempt against the ACTIVE session.
///
/// * `NoActiveSession` when nothing is open.
/// * `DuplicateAnswer` when this user already answered this session; the
///   unique index on (session_id, username) backs the check.
/// * Username and answer are stored as submitted.
///
/// Does not touch the score ledger.
pub async fn submit_answer(
    pool: &SqlitePool,
    username: &str,
    answer: &str,
) -> Result<SubmissionOutcome, AppError> {
    let mut tx = db::begin_write(pool).await?;

    let active = session::fetch_active(&mut tx)
        .await?
        .ok_or(AppError::NoActiveSession)?;

    if has_answered(&mut tx, &active.session_id, username).await? {
        return Err(AppError::DuplicateAnswer);
    }

    let is_correct = answers_match(answer, &active.correct_answer);

    sqlx::query(
        r#"
        INSERT INTO attempt_records (session_id, username, submitted_answer, is_correct, submitted_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&active.session_id)
    .bind(username)
    .bind(answer)
    .bind(is_correct)
    .bind(utc_now())
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::DuplicateAnswer
        } else {
            tracing::error!("Failed to record attempt: {:?}", e);
            AppError::from(e)
        }
    })?;

    tx.commit().await?;

    tracing::debug!(session_id = %active.session_id, username, is_correct, "Attempt recorded");

    Ok(SubmissionOutcome {
        is_correct,
        message: if is_correct {
            CORRECT_MESSAGE
        } else {
            INCORRECT_MESSAGE
        },
    })
}
