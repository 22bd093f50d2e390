pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Auth API
        .route("/api/auth/register", post(auth::handle_register))
        .route("/api/auth/token", post(auth::handle_token))
        .route("/api/auth/me", get(auth::handle_me))
        // Interview API (bearer auth)
        .route("/api/interviews/start", post(interview::handle_start))
        .route("/api/interviews/qa", post(interview::handle_qa))
        .route("/api/interviews/finish", post(interview::handle_finish))
        .with_state(state)
}
