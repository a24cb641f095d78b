//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use super::request_context::current_request_id;

/// Domain-level errors representing payroll rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid employee: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    pub(crate) fn employee_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource: "Employee".to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }

    /// Individual validation messages, if this is a validation failure
    #[must_use]
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(errors) | Self::Domain(DomainError::Validation(errors)) => Some(errors.as_slice()),
            _ => None,
        }
    }
}

/// Console session errors; neither is a payroll failure
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid employee ID: {0}")]
    InvalidId(String),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// JSON name of a model field
fn wire_field_name(field: &str) -> &str {
    match field {
        "basic_salary" => "basicSalary",
        "allowance" => "hra",
        "net_salary" => "netSalary",
        other => other,
    }
}

impl FieldError {
    /// Split a `field: message` string; messages without a field prefix keep an empty field
    fn from_message(message: &str) -> Self {
        match message.split_once(": ") {
            Some((field, rest)) if !field.contains(' ') => Self {
                field: wire_field_name(field).to_string(),
                message: rest.to_string(),
            },
            _ => Self {
                field: String::new(),
                message: message.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let details = uc_error
                    .validation_messages()
                    .map(|errors| errors.iter().map(|e| FieldError::from_message(e)).collect());
                if uc_error.status_code().is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed");
                }
                (uc_error.status_code(), uc_error.error_code().to_string(), uc_error.to_string(), details)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None),
            ApiError::InvalidId(msg) => (StatusCode::BAD_REQUEST, "INVALID_ID".to_string(), msg.clone(), None),
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message, details },
            request_id: current_request_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<std::num::ParseIntError> for ApiError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApiError::InvalidId(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
