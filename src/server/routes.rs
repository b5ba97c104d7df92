use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ACTIVITY_PATH;
use crate::errors::ApiError;
use crate::server::AppState;
use crate::types::{Activity, ActivityResponse};

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/echo", post(echo))
        .route("/api/user-activity", get(user_activity))
        .fallback(handler_404)
        .with_state(state)
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    uptime_secs: u64,
    environment: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
    })
}

#[derive(Debug, Deserialize)]
struct EchoRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct EchoResponse {
    echo: String,
    received_at: String,
}

async fn echo(
    payload: Result<Json<EchoRequest>, JsonRejection>,
) -> Result<Json<EchoResponse>, ApiError> {
    // map body rejections into the same {"error": ...} shape as everything else
    let Json(req) = payload.map_err(|e| ApiError::BodyParsing(e.body_text()))?;
    if req.message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }
    Ok(Json(EchoResponse {
        echo: req.message,
        received_at: Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Deserialize)]
struct ActivityQuery {
    user: Option<String>,
}

/// Forward an activity lookup to the data API and hand back the normalized
/// record list.
async fn user_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    let user = match query.user {
        Some(user) if !user.trim().is_empty() => user,
        _ => return Err(ApiError::MissingUser),
    };

    let base_url = state
        .config
        .data_api_base_url()
        .map_err(|_| ApiError::UpstreamNotConfigured)?;
    let url = base_url
        .join(ACTIVITY_PATH)
        .map_err(|_| ApiError::UpstreamNotConfigured)?;
    debug!("Forwarding activity lookup for {user} to {url}");

    let resp = state
        .http
        .get(url)
        .query(&[
            ("user", user.as_str()),
            ("limit", &state.config.settings.page_size.to_string()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::UpstreamStatus(status));
    }

    let body: ActivityResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;
    Ok(Json(body.into_records()))
}
