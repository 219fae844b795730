// tests/session_tests.rs

mod common;

use trivia_backend::{
    error::AppError,
    models::session::SessionStatus,
    services::{answer, attempt, session},
    utils::normalize::answers_match,
};

#[tokio::test]
async fn start_session_normalizes_answer_and_is_active() {
    let pool = common::test_pool().await;

    let created = session::start_session(&pool, "Capital of France?", "  Paris ")
        .await
        .expect("start failed");

    assert_eq!(created.status, SessionStatus::Active);
    assert_eq!(created.correct_answer, "paris");
    assert!(created.ended_at.is_none());

    let active = session::get_active_session(&pool)
        .await
        .unwrap()
        .expect("no active session");
    assert_eq!(active.session_id, created.session_id);
}

#[tokio::test]
async fn start_session_rejects_second_active() {
    let pool = common::test_pool().await;
    session::start_session(&pool, "2+2?", "4").await.unwrap();

    let second = session::start_session(&pool, "A different question", "other").await;
    assert!(matches!(second, Err(AppError::ActiveSessionExists)));
}

#[tokio::test]
async fn store_refuses_two_active_rows() {
    let pool = common::test_pool().await;
    session::start_session(&pool, "2+2?", "4").await.unwrap();

    let raw = sqlx::query(
        "INSERT INTO trivia_sessions (session_id, question, correct_answer, status, started_at) \
         VALUES ('raw', 'q', 'a', 'ACTIVE', '2025-01-01T00:00:00+00:00')",
    )
    .execute(&pool)
    .await;

    let err = raw.expect_err("partial unique index should reject a second ACTIVE row");
    assert!(trivia_backend::error::is_unique_violation(&err));
}

#[tokio::test]
async fn end_session_is_terminal() {
    let pool = common::test_pool().await;
    session::start_session(&pool, "2+2?", "4").await.unwrap();

    let ended = session::end_session(&pool).await.unwrap();
    assert_eq!(ended.status, SessionStatus::Ended);
    assert!(ended.ended_at.is_some());

    assert!(matches!(
        session::end_session(&pool).await,
        Err(AppError::NoActiveSession)
    ));
    assert!(session::get_active_session(&pool).await.unwrap().is_none());
}

#[tokio::test]
async fn end_without_any_session_fails() {
    let pool = common::test_pool().await;
    assert!(matches!(
        session::end_session(&pool).await,
        Err(AppError::NoActiveSession)
    ));
}

#[tokio::test]
async fn question_view_follows_lifecycle() {
    let pool = common::test_pool().await;

    assert!(session::get_current_question_view(&pool, false).await.unwrap().is_none());

    session::start_session(&pool, "First?", "One").await.unwrap();
    let view = session::get_current_question_view(&pool, false).await.unwrap().unwrap();
    assert!(view.is_active);
    assert_eq!(view.correct_answer, None);

    let revealed = session::get_current_question_view(&pool, true).await.unwrap().unwrap();
    assert_eq!(revealed.correct_answer.as_deref(), Some("one"));

    session::end_session(&pool).await.unwrap();
    let ended = session::get_current_question_view(&pool, false).await.unwrap().unwrap();
    assert!(!ended.is_active);
    assert_eq!(ended.question, "First?");
    assert_eq!(ended.correct_answer.as_deref(), Some("one"));

    // The latest ended session wins the fallback.
    session::start_session(&pool, "Second?", "Two").await.unwrap();
    session::end_session(&pool).await.unwrap();
    let latest = session::get_current_question_view(&pool, false).await.unwrap().unwrap();
    assert_eq!(latest.question, "Second?");
}

#[test]
fn answer_matching_ignores_case_and_outer_whitespace() {
    for submitted in ["Paris", " paris ", "PARIS"] {
        assert!(answers_match(submitted, "Paris"), "{submitted:?} should match");
    }
    assert!(!answers_match("Pariss", "Paris"));
    assert!(!answers_match("Pa ris", "Paris"));
}

#[tokio::test]
async fn submit_requires_active_session() {
    let pool = common::test_pool().await;
    assert!(matches!(
        answer::submit_answer(&pool, "alice", "4").await,
        Err(AppError::NoActiveSession)
    ));

    session::start_session(&pool, "2+2?", "4").await.unwrap();
    session::end_session(&pool).await.unwrap();
    assert!(matches!(
        answer::submit_answer(&pool, "alice", "4").await,
        Err(AppError::NoActiveSession)
    ));
}

#[tokio::test]
async fn first_submission_wins() {
    let pool = common::test_pool().await;
    session::start_session(&pool, "Capital of France?", "Paris").await.unwrap();

    let first = answer::submit_answer(&pool, "Alice", " PARIS ").await.unwrap();
    assert!(first.is_correct);
    assert_eq!(first.message, "Correct!");

    // Even a different answer is refused.
    assert!(matches!(
        answer::submit_answer(&pool, "Alice", "London").await,
        Err(AppError::DuplicateAnswer)
    ));

    let wrong = answer::submit_answer(&pool, "bob", "Pariss").await.unwrap();
    assert!(!wrong.is_correct);
    assert_eq!(wrong.message, "Incorrect!");

    let stored: (String, String) = sqlx::query_as(
        "SELECT username, submitted_answer FROM attempt_records WHERE username = 'Alice'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(stored, ("Alice".to_string(), " PARIS ".to_string()));
}

#[tokio::test]
async fn same_user_may_answer_each_new_session() {
    let pool = common::test_pool().await;

    session::start_session(&pool, "Q1", "a").await.unwrap();
    answer::submit_answer(&pool, "alice", "a").await.unwrap();
    let first = session::end_session(&pool).await.unwrap();

    session::start_session(&pool, "Q2", "b").await.unwrap();
    let outcome = answer::submit_answer(&pool, "alice", "x").await.unwrap();
    assert!(!outcome.is_correct);

    assert_eq!(
        attempt::get_successful_attempts(&pool, &first.session_id).await.unwrap(),
        vec!["alice".to_string()]
    );
}

#[tokio::test]
async fn attempt_log_is_most_recent_first() {
    let pool = common::test_pool().await;
    let s = session::start_session(&pool, "Q", "yes").await.unwrap();

    answer::submit_answer(&pool, "first", "yes").await.unwrap();
    answer::submit_answer(&pool, "second", "no").await.unwrap();
    answer::submit_answer(&pool, "third", "YES").await.unwrap();

    let all = attempt::get_all_attempts(&pool).await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.username.as_str()).collect();
    assert_eq!(names, ["third", "second", "first"]);
    assert!(all.iter().all(|a| a.timestamp.ends_with('Z')));

    let for_session = attempt::get_attempts_for_session(&pool, &s.session_id).await.unwrap();
    assert_eq!(for_session, all);
    assert!(attempt::get_attempts_for_session(&pool, "unknown").await.unwrap().is_empty());

    let winners = attempt::get_successful_attempts(&pool, &s.session_id).await.unwrap();
    assert_eq!(winners, vec!["first".to_string(), "third".to_string()]);
}
