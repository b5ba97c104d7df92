use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the proxy server's handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User parameter is required")]
    MissingUser,
    #[error("Message must not be empty")]
    EmptyMessage,
    #[error("Bad request error: {0}")]
    BodyParsing(String),
    #[error("API base URL is not configured")]
    UpstreamNotConfigured,
    #[error("Failed to fetch user activity")]
    UpstreamStatus(StatusCode),
    #[error("Failed to fetch user activity: {0}")]
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Self::MissingUser | Self::EmptyMessage | Self::BodyParsing(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UpstreamNotConfigured | Self::UpstreamStatus(_) | Self::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = match &self {
            Self::UpstreamStatus(upstream) => {
                json!({ "error": self.to_string(), "status": upstream.as_u16() })
            }
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
