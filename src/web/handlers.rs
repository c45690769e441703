use super::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;

/// Error body of `/map.json` when the position section failed.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

pub async fn page_html(State(state): State<AppState>) -> Html<String> {
    Html(state.dashboard.render_pass().await.to_html())
}

pub async fn page_text(State(state): State<AppState>) -> String {
    state.dashboard.render_pass().await.to_text()
}

pub async fn map_json(State(state): State<AppState>) -> Response {
    let page = state.dashboard.render_pass().await;
    match (page.map(), page.station()) {
        (Some(widget), _) => Json(widget.clone()).into_response(),
        (None, Err(e)) => (
            StatusCode::BAD_GATEWAY,
            Json(ApiError { code: e.kind(), message: e.to_string() }),
        )
            .into_response(),
        (None, Ok(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn health_check() -> &'static str { "ok" }
