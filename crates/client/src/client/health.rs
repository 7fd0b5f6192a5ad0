//! Health check operations.

use super::EmployeesClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Database readiness status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessStatus {
    pub healthy: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl EmployeesClient {
    /// Liveness probe; `true` when the server answers 200.
    pub async fn health_live(&self) -> Result<bool> {
        let response = self.client.get(self.url("/livez")).send().await?;
        Ok(response.status().is_success())
    }

    /// Readiness probe. A 503 still carries a status body, so it is decoded
    /// rather than treated as an error.
    pub async fn health_ready(&self) -> Result<ReadinessStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await?);
        }
        self.handle_response(response, "Health").await
    }
}
