// tests/common/mod.rs

#![allow(dead_code)]

use std::{net::SocketAddr, str::FromStr};

use chrono::{DateTime, Utc};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use trivia_backend::{config::Config, db, routes, state::AppState};

pub const ADMIN_KEY: &str = "test_admin_key_for_integration_tests";

/// Fresh in-memory database with migrations applied.
///
/// A single connection that never expires: an in-memory SQLite database
/// lives exactly as long as its connection.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid SQLite URL")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory SQLite");

    db::migrate(&pool).await.expect("Failed to migrate database");

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        admin_api_key: ADMIN_KEY.to_string(),
        rust_log: "error".to_string(),
        server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        db_max_connections: 1,
    }
}

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/trivia{}", self.address, path)
    }

    pub async fn start_session(&self, question: &str, answer: &str) -> reqwest::Response {
        self.client
            .post(self.url("/session/start"))
            .header("X-API-Key", ADMIN_KEY)
            .json(&serde_json::json!({ "question": question, "correct_answer": answer }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn end_session(&self) -> reqwest::Response {
        self.client
            .post(self.url("/session/end"))
            .header("X-API-Key", ADMIN_KEY)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn submit(&self, username: &str, answer: &str) -> reqwest::Response {
        self.client
            .post(self.url("/answer"))
            .json(&serde_json::json!({ "username": username, "answer": answer }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Spawns the app on a random port.
pub async fn spawn_app() -> TestApp {
    let pool = test_pool().await;

    let state = AppState {
        pool: pool.clone(),
        config: test_config(),
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address,
        pool,
        client: reqwest::Client::new(),
    }
}

/// Seeds a score row directly, bypassing the ledger.
pub async fn seed_score(
    pool: &SqlitePool,
    username: &str,
    score: i64,
    first_correct: Option<DateTime<Utc>>,
) {
    sqlx::query(
        r#"
        INSERT INTO user_scores (username, cumulative_score, first_correct_timestamp, last_updated)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(username)
    .bind(score)
    .bind(first_correct)
    .bind(Utc::now())
    .execute(pool)
    .await
    .expect("Failed to seed score");
}

/// A database file in the temp dir, removed on drop.
pub struct FileDb {
    pub pool: SqlitePool,
    path: std::path::PathBuf,
}

impl Drop for FileDb {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

/// File-backed database with several connections, so requests really
/// run side by side.
pub async fn file_db(max_connections: u32) -> FileDb {
    let path = std::env::temp_dir().join(format!("trivia_test_{}.db", uuid::Uuid::new_v4()));

    let config = Config {
        database_url: format!("sqlite://{}", path.display()),
        db_max_connections: max_connections,
        ..test_config()
    };

    let pool = db::connect(&config)
        .await
        .expect("Failed to open file-backed SQLite");
    db::migrate(&pool).await.expect("Failed to migrate database");

    FileDb { pool, path }
}
