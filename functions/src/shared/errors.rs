use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::types::{CallableError, CallableErrorBody};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Canonical status code used in the callable error envelope
    pub fn status_code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::Config(_) | AppError::Io(_) => "INTERNAL",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        // Internal details stay in the logs
        let message = match &self {
            AppError::InvalidArgument(msg) => msg.clone(),
            other => {
                tracing::error!("[Callable] {}", other);
                "INTERNAL".to_string()
            }
        };

        let body = CallableErrorBody {
            error: CallableError {
                status: self.status_code().to_string(),
                message,
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
