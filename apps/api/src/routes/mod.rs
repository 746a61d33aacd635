pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/options", get(handlers::handle_options))
        .route("/api/v1/generations", post(handlers::handle_generate))
        .route(
            "/api/v1/generations/:id",
            get(handlers::handle_get_generation),
        )
        .route(
            "/api/v1/generations/:id/regenerate",
            post(handlers::handle_regenerate),
        )
        .route(
            "/api/v1/generations/:id/download",
            get(handlers::handle_download),
        )
        .with_state(state)
}
