use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::util::validation::FieldViolation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerErrorKind {
    Validation,
    BadRequest,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error surfaced to HTTP clients as `{error, details?}`. Internal failures
/// are reduced to an opaque message; detail goes to the server log only.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    #[serde(skip)]
    pub kind: HandlerErrorKind,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl HandlerError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Validation,
            error: "Invalid form data".to_string(),
            details: Some(violations),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            error: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Internal,
            error: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.error)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => {
                StatusCode::BAD_REQUEST
            }
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, axum::Json(self)).into_response()
    }
}

/// Failures of the submission pipelines.
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Schema violations, one entry per failed field.
    Validation(Vec<FieldViolation>),
    /// Malformed structured payload.
    Parse(String),
    /// An attachment exceeded the per-file size policy; aborts the whole
    /// request.
    FileTooLarge { filename: String, size: usize },
    /// The staff notification could not be delivered.
    Delivery(String),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Validation(violations) => {
                write!(f, "Validation failed for {} field(s)", violations.len())
            }
            ServiceError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ServiceError::FileTooLarge { filename, size } => {
                write!(f, "File {} is too large ({} bytes)", filename, size)
            }
            ServiceError::Delivery(msg) => write!(f, "Delivery error: {}", msg),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(violations) => HandlerError::validation(violations),
            ServiceError::Parse(msg) => {
                HandlerError::bad_request(format!("Invalid form data: {}", msg))
            }
            // Client-caused policy violation, so a 400 rather than a
            // generic server error.
            ServiceError::FileTooLarge { filename, .. } => {
                HandlerError::bad_request(format!("File {} is too large", filename))
            }
            ServiceError::Delivery(_) => HandlerError::internal(
                "Failed to send notification. Please try again or contact us directly.",
            ),
            ServiceError::Internal(_) => HandlerError::internal("Internal server error"),
        }
    }
}
