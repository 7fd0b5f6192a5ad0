//! HTTP client for the employees API.

pub mod employees;
pub mod health;

use employees_core::employee::ErrorResponse;

use crate::error::{ClientError, Result};

/// HTTP client for the employees API.
#[derive(Debug, Clone)]
pub struct EmployeesClient {
    client: reqwest::Client,
    base_url: String,
}

impl EmployeesClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body or turn the error body into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(error_from_response(status.as_u16(), &body, resource))
        }
    }
}

/// Maps a non-2xx status and its body to a `ClientError`.
///
/// Uses the `Error` field of the JSON body when present, the raw body
/// otherwise.
pub fn error_from_response(status: u16, body: &str, resource: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| {
            if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            }
        });

    match status {
        404 => ClientError::NotFound {
            resource: resource.to_string(),
        },
        400 => ClientError::BadRequest { message },
        _ => ClientError::ServerError { status, message },
    }
}
