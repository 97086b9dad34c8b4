// src/routes.rs

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{health, leaderboard, progress, questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Nests all sub-routers under the `/api` prefix.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (database pool + config).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let question_routes = Router::new()
        .route("/", get(questions::list_questions))
        .route("/seed", post(questions::seed_questions));

    let quiz_routes = Router::new()
        .route("/start", post(quiz::start_quiz))
        .route("/submit", post(quiz::submit_quiz));

    let api_routes = Router::new()
        .route("/", get(health::root))
        .nest("/questions", question_routes)
        .nest("/quiz", quiz_routes)
        .route("/progress/{session_id}", get(progress::get_progress))
        .route("/leaderboard", get(leaderboard::get_leaderboard));

    Router::new()
        // `nest("/api", …)` reaches the root handler at `/api` but not `/api/`
        // (axum does not match the nested `/` route against the trailing slash),
        // so route the spec's `/api/` banner path explicitly.
        .route("/api/", get(health::root))
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// All methods and headers are allowed; origins come from configuration,
/// with "*" opening the API to any origin.
fn cors_layer(configured_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if configured_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = configured_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
