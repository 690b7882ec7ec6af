//! Callable function wire envelope
//!
//! Requests arrive as `{"data": ...}`; successful replies are `{"result": ...}`
//! and failures `{"error": {"status", "message"}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{AppError, AppResult};

/// Incoming callable envelope
///
/// `data` stays untyped: payload fields are read leniently by the command
/// layer so malformed fields degrade instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct CallableRequest {
    #[serde(default)]
    pub data: Option<Value>,
}

impl CallableRequest {
    /// Validate the outer envelope and return its payload
    ///
    /// The body must be a JSON object carrying a non-null `data` field.
    pub fn from_body(body: Value) -> AppResult<Value> {
        if !body.is_object() {
            return Err(AppError::InvalidArgument(
                "Request body must be a JSON object.".to_string(),
            ));
        }

        let request: CallableRequest = serde_json::from_value(body)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        match request.data {
            Some(Value::Null) | None => Err(AppError::InvalidArgument(
                "Request body is missing data.".to_string(),
            )),
            Some(data) => Ok(data),
        }
    }
}

/// Successful callable reply
#[derive(Debug, Clone, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

impl<T> CallableResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CallableErrorBody {
    pub error: CallableError,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallableError {
    pub status: String,
    pub message: String,
}
