// src/models/session.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Lifecycle of a session: created ACTIVE, ended once, never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    Active,
    Ended,
}

/// Represents the 'trivia_sessions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TriviaSession {
    pub session_id: String,

    pub question: String,

    /// Stored normalized (lowercased and trimmed).
    pub correct_answer: String,

    pub status: SessionStatus,

    pub started_at: DateTime<Utc>,

    /// Set only when the session ends.
    pub ended_at: Option<DateTime<Utc>>,
}

impl TriviaSession {
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }
}

/// What participants see of the current (or last ended) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question: String,
    pub session_id: String,
    pub is_active: bool,
    /// Revealed only on request or once the session has ended.
    pub correct_answer: Option<String>,
}

/// DTO for starting a session.
#[derive(Debug, Deserialize, Validate)]
pub struct StartSessionRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be between 1 and 500 characters."))]
    pub question: String,
    #[validate(length(min = 1, max = 200, message = "Answer must be between 1 and 200 characters."))]
    pub correct_answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub status: String,
    pub session_id: String,
    pub message: String,
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EndSessionResponse {
    pub status: String,
    pub message: String,
    pub correct_answer: String,
    pub successful_attempts: Vec<String>,
}

/// All fields are null when no session has ever existed.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub status: String,
    pub question: Option<String>,
    pub session_id: Option<String>,
    pub is_active: Option<bool>,
    pub correct_answer: Option<String>,
}

impl From<Option<QuestionView>> for QuestionResponse {
    fn from(view: Option<QuestionView>) -> Self {
        match view {
            Some(v) => Self {
                status: "success".to_string(),
                question: Some(v.question),
                session_id: Some(v.session_id),
                is_active: Some(v.is_active),
                correct_answer: v.correct_answer,
            },
            None => Self {
                status: "success".to_string(),
                ..Default::default()
            },
        }
    }
}
