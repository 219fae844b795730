// src/utils/auth.rs

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::{config::Config, error::AppError};

/// Header carrying the admin shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Exact match of the presented key against the configured secret.
/// A missing or empty key never matches.
pub fn verify_admin_api_key(presented: Option<&str>, expected: &str) -> Result<(), AppError> {
    match presented {
        Some(key) if !key.is_empty() && key == expected => Ok(()),
        _ => Err(AppError::InvalidApiKey),
    }
}

/// Axum Middleware: Admin Authorization.
///
/// Reads `X-API-Key` and rejects the request with 403 before the handler
/// runs when the key is missing or wrong.
pub async fn admin_middleware(
    State(config): State<Config>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = verify_admin_api_key(presented, &config.admin_api_key) {
        tracing::warn!("Rejected admin request to {}", req.uri().path());
        return Err(e);
    }

    Ok(next.run(req).await)
}
