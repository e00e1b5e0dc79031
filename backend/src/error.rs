use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal Server Error: {0}")]
    Internal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

// Nothing modeled here is a client error; whatever escapes a handler is a 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                msg
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "I/O error".to_string()
            }
            AppError::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                "Configuration error".to_string()
            }
        };

        let body = Json(json!({ "error": error_message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
