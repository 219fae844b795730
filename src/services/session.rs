// src/services/session.rs

use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::{
    db,
    error::{AppError, is_unique_violation},
    models::session::{QuestionView, SessionStatus, TriviaSession},
    utils::{normalize::normalize_answer, time::utc_now},
};

const SESSION_COLUMNS: &str = "session_id, question, correct_answer, status, started_at, ended_at";

/// Loads the ACTIVE session on an open connection or transaction.
pub(crate) async fn fetch_active(
    conn: &mut SqliteConnection,
) -> Result<Option<TriviaSession>, sqlx::Error> {
    sqlx::query_as::<_, TriviaSession>(&format!(
        "SELECT {SESSION_COLUMNS} FROM trivia_sessions WHERE status = ? LIMIT 1"
    ))
    .bind(SessionStatus::Active)
    .fetch_optional(&mut *conn)
    .await
}

/// Opens a new session.
///
/// * Fails with `ActiveSessionExists` while another session is ACTIVE.
/// * Stores the correct answer in normalized form.
/// * The partial unique index on `status` closes the race between the
///   check and the insert.
pub async fn start_session(
    pool: &SqlitePool,
    question: &str,
    correct_answer: &str,
) -> Result<TriviaSession, AppError> {
    let mut tx = db::begin_write(pool).await?;

    if fetch_active(&mut tx).await?.is_some() {
        return Err(AppError::ActiveSessionExists);
    }

    let session = TriviaSession {
        session_id: Uuid::new_v4().to_string(),
        question: question.to_string(),
        correct_answer: normalize_answer(correct_answer),
        status: SessionStatus::Active,
        started_at: utc_now(),
        ended_at: None,
    };

    sqlx::query(&format!(
        "INSERT INTO trivia_sessions ({SESSION_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?)"
    ))
    .bind(&session.session_id)
    .bind(&session.question)
    .bind(&session.correct_answer)
    .bind(session.status)
    .bind(session.started_at)
    .bind(session.ended_at)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::ActiveSessionExists
        } else {
            tracing::error!("Failed to insert session: {:?}", e);
            AppError::from(e)
        }
    })?;

    tx.commit().await?;

    tracing::info!(session_id = %session.session_id, "Trivia session started");
    Ok(session)
}

/// Returns the single ACTIVE session, if any.
pub async fn get_active_session(pool: &SqlitePool) -> Result<Option<TriviaSession>, AppError> {
    let mut conn = pool.acquire().await?;
    Ok(fetch_active(&mut conn).await?)
}

/// The question participants should currently see.
///
/// Prefers the ACTIVE session (answer shown only when `reveal_answer`).
/// Otherwise takes the row with the latest `ended_at` and, if that row is
/// ENDED, shows it with the answer always revealed. `None` when no session
/// has ever existed.
pub async fn get_current_question_view(
    pool: &SqlitePool,
    reveal_answer: bool,
) -> Result<Option<QuestionView>, AppError> {
    if let Some(active) = get_active_session(pool).await? {
        return Ok(Some(to_view(active, reveal_answer)));
    }

    let recent = sqlx::query_as::<_, TriviaSession>(&format!(
        "SELECT {SESSION_COLUMNS} FROM trivia_sessions ORDER BY ended_at DESC LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;

    Ok(match recent {
        Some(session) if session.status == SessionStatus::Ended => Some(to_view(session, true)),
        _ => None,
    })
}

fn to_view(session: TriviaSession, reveal_answer: bool) -> QuestionView {
    let is_active = session.is_active();
    QuestionView {
        correct_answer: (reveal_answer || !is_active).then_some(session.correct_answer),
        question: session.question,
        session_id: session.session_id,
        is_active,
    }
}

/// Ends the ACTIVE session. Terminal: a second call fails with `NoActiveSession`.
pub async fn end_session(pool: &SqlitePool) -> Result<TriviaSession, AppError> {
    let mut tx = db::begin_write(pool).await?;

    let active = fetch_active(&mut tx)
        .await?
        .ok_or(AppError::NoActiveSession)?;

    // The status guard makes a concurrent end lose cleanly.
    let ended = sqlx::query_as::<_, TriviaSession>(&format!(
        "UPDATE trivia_sessions SET status = ?, ended_at = ? \
         WHERE session_id = ? AND status = ? \
         RETURNING {SESSION_COLUMNS}"
    ))
    .bind(SessionStatus::Ended)
    .bind(utc_now())
    .bind(&active.session_id)
    .bind(SessionStatus::Active)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::NoActiveSession)?;

    tx.commit().await?;

    tracing::info!(session_id = %ended.session_id, "Trivia session ended");
    Ok(ended)
}
