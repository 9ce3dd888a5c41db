use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use companion::{CompanionError, NavigationError, VisionError, VoiceError};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Body of every error response
#[derive(Debug, Serialize, TS)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Voice(#[from] VoiceError),
    #[error(transparent)]
    Vision(#[from] VisionError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Service Unavailable: {0}")]
    Unavailable(String),
    /// Unexpected failure. The public message is generic; `detail` is only logged.
    #[error("Internal Server Error: {message} ({detail})")]
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        ApiError::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }
}

impl From<CompanionError> for ApiError {
    fn from(err: CompanionError) -> Self {
        match err {
            CompanionError::Voice(e) => ApiError::Voice(e),
            CompanionError::Vision(e) => ApiError::Vision(e),
            CompanionError::Navigation(e) => ApiError::Navigation(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Voice(VoiceError::MissingTranscript) => StatusCode::BAD_REQUEST,
            ApiError::Vision(VisionError::MissingImage) => StatusCode::BAD_REQUEST,
            ApiError::Navigation(NavigationError::MissingEndpoints) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error_message = match &self {
            ApiError::Voice(e) => e.to_string(),
            ApiError::Vision(e) => e.to_string(),
            ApiError::Navigation(e) => e.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Unavailable(msg) => msg.clone(),
            ApiError::Internal { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                message.clone()
            }
        };

        let body = ErrorBody {
            error: error_message,
        };
        (status_code, Json(body)).into_response()
    }
}
