// src/models/attempt.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::time::to_iso8601;

/// Represents the 'attempt_records' table in the database.
/// Immutable once written; one row per (session_id, username).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttemptRecord {
    pub attempt_id: i64,
    pub session_id: String,
    /// Original case preserved.
    pub username: String,
    /// Original case preserved.
    pub submitted_answer: String,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Public projection of an attempt for the attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptEntry {
    pub username: String,
    pub is_correct: bool,
    pub timestamp: String,
}

impl From<AttemptRecord> for AttemptEntry {
    fn from(record: AttemptRecord) -> Self {
        Self {
            timestamp: to_iso8601(&record.submitted_at),
            username: record.username,
            is_correct: record.is_correct,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttemptsResponse {
    pub status: String,
    pub attempts: Vec<AttemptEntry>,
}

/// DTO for submitting an answer.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 100, message = "Username must be between 1 and 100 characters."))]
    pub username: String,
    #[validate(length(min = 1, max = 200, message = "Answer must be between 1 and 200 characters."))]
    pub answer: String,
}

/// Result of recording an attempt, before any score is awarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub is_correct: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub status: String,
    pub is_correct: bool,
    pub message: String,
    /// Updated cumulative score, present only for a correct answer.
    pub score: Option<i64>,
}
