pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route(
            "/render",
            get(handlers::handle_render_file).post(handlers::handle_render_body),
        )
        .route("/validate", post(handlers::handle_validate))
        .with_state(state)
}
