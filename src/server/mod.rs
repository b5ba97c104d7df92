pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::server::routes::app_router;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<AppConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

/// Run the proxy server until the process is terminated.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let socket_addr: SocketAddr = address
        .parse()
        .with_context(|| format!("invalid server address {address}"))?;

    let state = AppState::new(config);
    let app = app_router(state)
        .layer(TraceLayer::new_for_http())
        // Permissive CORS layer to allow all origins
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(socket_addr)
        .await
        .with_context(|| format!("failed to bind {socket_addr}"))?;
    info!("API started at http://{socket_addr}");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;
    Ok(())
}
