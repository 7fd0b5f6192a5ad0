use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use employees_core::employee::{ErrorResponse, SearchError, ValidationError, EMPLOYEE_NOT_FOUND};
use employees_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error wrapping `anyhow::Error`.
///
/// The status is picked by downcasting: validation and search errors are 400,
/// repository errors go through `repository_error_to_status_code`, anything
/// else is 500. The body is always `{"Error": "..."}`.
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(anyhow::Error::new(BadRequest(message.into())))
    }

    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            return StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        }

        if self.0.is::<ValidationError>() || self.0.is::<SearchError>() || self.0.is::<BadRequest>()
        {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn message(&self) -> String {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(error) if error.is_not_found() => EMPLOYEE_NOT_FOUND.to_string(),
            _ => self.0.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// A request that ran past the configured timeout.
#[derive(Debug, thiserror::Error)]
#[error("Request timed out after {} ms", .0.as_millis())]
pub struct RequestTimeout(pub Duration);

/// Malformed request that is not covered by a core error type.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct BadRequest(String);
