// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

/// Default SQLite database, created on first start if missing.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://trivia.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Shared secret expected in the `X-API-Key` header for admin routes.
    pub admin_api_key: String,
    pub rust_log: String,
    pub server_addr: SocketAddr,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let admin_api_key = env::var("ADMIN_API_KEY").expect("ADMIN_API_KEY must be set");

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let server_addr = env::var("SERVER_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|n| n.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            admin_api_key,
            rust_log,
            server_addr,
            db_max_connections,
        }
    }
}
