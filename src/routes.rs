// src/routes.rs

use axum::{
    Router,
    http::{HeaderName, Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{answer, attempts, health, leaderboard, question, session},
    state::AppState,
    utils::auth::{API_KEY_HEADER, admin_middleware},
};

/// Assembles the main application router.
///
/// * Admin routes (session start/end) sit behind the `X-API-Key` check.
/// * Everything else under `/api/trivia` is public.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(API_KEY_HEADER),
        ]);

    let admin_routes = Router::new()
        .route("/session/start", post(session::start_session))
        .route("/session/end", post(session::end_session))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ));

    let public_routes = Router::new()
        .route(
            "/session/{session_id}/attempts",
            get(session::list_session_attempts),
        )
        .route("/question", get(question::get_question))
        .route("/answer", post(answer::submit_answer))
        .route("/attempts", get(attempts::list_attempts))
        .route("/leaderboard", get(leaderboard::get_leaderboard))
        .route("/leaderboard/{username}", get(leaderboard::get_user_standing));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/trivia", admin_routes.merge(public_routes))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
