use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{analyze, health};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/analyze", analyze::router())
        // The form frontend is served separately, so allow cross-origin posts
        .layer(CorsLayer::permissive())
        .with_state(state)
}
