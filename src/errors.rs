use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::constants::ALLOWED_EXTENSIONS;

/// Nginx-style status for a request the client abandoned.
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("File too large: {0}")]
    FileTooLarge(String),

    #[error("Insufficient text: {0}")]
    InsufficientText(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Empty generated content: {0}")]
    EmptyGeneratedContent(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            AppError::EmptyInput(_) => "EMPTY_INPUT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::FileTooLarge(_) => "FILE_TOO_LARGE",
            AppError::InsufficientText(_) => "INSUFFICIENT_TEXT",
            AppError::ExtractionFailed(_) => "EXTRACTION_FAILED",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Cancelled => "CANCELLED",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::EmptyGeneratedContent(_) => "EMPTY_GENERATED_CONTENT",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the caller. Server-side failures never expose their detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Upstream(_) => {
                "The question generation service is currently unavailable. Please try again later."
                    .to_string()
            }
            AppError::Timeout(_) => {
                "The request took too long to process. Please try with a smaller file or fewer questions."
                    .to_string()
            }
            AppError::InternalError(_) => {
                "An unexpected error occurred. Please try again later.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_formats: Option<Vec<String>>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::EmptyInput(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::FileTooLarge(_) => StatusCode::BAD_REQUEST,
            AppError::InsufficientText(_) => StatusCode::BAD_REQUEST,
            AppError::ExtractionFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            AppError::Cancelled => StatusCode::from_u16(CLIENT_CLOSED_REQUEST)
                .unwrap_or(StatusCode::BAD_REQUEST),
            AppError::MalformedResponse(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyGeneratedContent(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{} ({})", self, self.error_code());
        }

        let allowed_formats = match self {
            AppError::UnsupportedFormat(_) | AppError::EmptyInput(_) => Some(
                ALLOWED_EXTENSIONS
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect(),
            ),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message(),
            code: status.as_u16(),
            allowed_formats,
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("Completion request timed out: {}", err))
        } else {
            AppError::Upstream(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Background task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
