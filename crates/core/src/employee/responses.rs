//! JSON response bodies shared between the server and the client.

use serde::{Deserialize, Serialize};

use super::types::Ssn;

pub const EMPLOYEE_ADDED: &str = "New Employee Added!";
pub const EMPLOYEE_UPDATED: &str = "Employee Updated!";
pub const EMPLOYEE_DELETED: &str = "Employee Deleted!";
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Body returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Affected Rows")]
    pub affected_rows: usize,
    /// Generated identifier, only set on create.
    #[serde(rename = "Ssn", default, skip_serializing_if = "Option::is_none")]
    pub ssn: Option<Ssn>,
}

impl MutationResponse {
    pub fn added(affected_rows: usize, ssn: Ssn) -> Self {
        Self {
            message: EMPLOYEE_ADDED.to_string(),
            affected_rows,
            ssn: Some(ssn),
        }
    }

    pub fn updated(affected_rows: usize) -> Self {
        Self {
            message: EMPLOYEE_UPDATED.to_string(),
            affected_rows,
            ssn: None,
        }
    }

    pub fn deleted(affected_rows: usize) -> Self {
        Self {
            message: EMPLOYEE_DELETED.to_string(),
            affected_rows,
            ssn: None,
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
