use super::handlers;
use super::state::AppState;
use axum::{Router, routing::get};

/// Create the page router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page_html))
        .route("/page.txt", get(handlers::page_text))
        .route("/map.json", get(handlers::map_json))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
