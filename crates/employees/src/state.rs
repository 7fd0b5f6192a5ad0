//! Shared application state.
//!
//! Cloned into every handler. Holds the repository trait object and nothing
//! else; the database is the only state that outlives a request.

use std::{sync::Arc, time::Duration};

use employees_core::storage::{EmployeeRepository, Result};

use crate::{config::Config, storage::SqliteRepository};

#[derive(Clone)]
pub struct AppState {
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>, request_timeout: Duration) -> Self {
        Self {
            employee_repo,
            request_timeout,
        }
    }

    /// Opens the SQLite database named by the configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Opened SQLite database");

        Ok(Self::new(Arc::new(repo), config.request_timeout()))
    }

    /// State backed by a fresh in-memory database.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repo = SqliteRepository::new_in_memory()
            .await
            .expect("in-memory SQLite should open");
        Self::new(Arc::new(repo), Duration::from_secs(10))
    }
}
