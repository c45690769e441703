#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod logger;
mod config;
mod dashboard;
mod http_handler;
mod web;

use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::http_handler::http_client::HTTPClient;
use crate::web::{AppState, create_router};
use std::sync::Arc;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = DashboardConfig::from_env().unwrap_or_else(|e| fatal!("Bad configuration: {e}"));
    let client = HTTPClient::new(config.base_url(), config.request_timeout(), config.cache_ttl())
        .unwrap_or_else(|e| fatal!("Could not set up the HTTP client: {e}"));
    info!(
        "Fetching from {} (cache ttl {}s)",
        client.url(),
        client.cache_ttl().num_seconds()
    );
    let dashboard = Dashboard::new(Arc::new(client));

    let page = dashboard.render_pass().await;
    info!("Initial render pass:\n{}", page.to_text());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .unwrap_or_else(|e| fatal!("Could not bind {}: {e}", config.bind_addr()));
    match listener.local_addr() {
        Ok(addr) => info!("Serving the dashboard on http://{addr}"),
        Err(_) => info!("Serving the dashboard on http://{}", config.bind_addr()),
    }
    if let Err(e) = axum::serve(listener, create_router(AppState::new(dashboard))).await {
        fatal!("Page server stopped: {e}");
    }
}
