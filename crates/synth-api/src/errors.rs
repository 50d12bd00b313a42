use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Generation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(e) => Self::UnsupportedMediaType(e.body_text()),
            other => Self::InvalidInput(other.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidInput(msg) => {
                warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::UnsupportedMediaType(msg) => {
                warn!("Rejected request: {msg}");
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg.as_str())
            }
            AppError::Join(e) => {
                error!("Generation task error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
