//! Employee API operations.

use super::EmployeesClient;
use crate::error::{ClientError, Result};
use employees_core::employee::{Employee, EmployeeRecord, MutationResponse, Ssn};

/// Search criteria; unset fields are not sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchEmployeesQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub sex: Option<String>,
    pub dl_id: Option<String>,
    pub super_ssn: Option<Ssn>,
}

impl SearchEmployeesQuery {
    /// Query pairs keyed by the server's parameter names.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.first_name {
            pairs.push(("Fname", v.clone()));
        }
        if let Some(v) = &self.last_name {
            pairs.push(("Lname", v.clone()));
        }
        if let Some(v) = &self.address {
            pairs.push(("Address", v.clone()));
        }
        if let Some(v) = &self.sex {
            pairs.push(("Sex", v.clone()));
        }
        if let Some(v) = &self.dl_id {
            pairs.push(("DL_id", v.clone()));
        }
        if let Some(v) = self.super_ssn {
            pairs.push(("Super_ssn", v.to_string()));
        }
        pairs
    }
}

impl EmployeesClient {
    /// List all employees.
    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let response = self.client.get(self.url("/employees")).send().await?;
        self.handle_response(response, "Employees").await
    }

    /// Get employee by SSN.
    pub async fn get_employee(&self, ssn: Ssn) -> Result<Employee> {
        let response = self
            .client
            .get(self.url(&format!("/employees/{ssn}")))
            .send()
            .await?;
        self.handle_response(response, &format!("Employee {ssn}"))
            .await
    }

    /// Create a new employee.
    pub async fn create_employee(&self, record: &EmployeeRecord) -> Result<MutationResponse> {
        let response = self
            .client
            .post(self.url("/employees"))
            .json(record)
            .send()
            .await?;
        self.handle_response(response, "Employee").await
    }

    /// Replace an employee's fields.
    pub async fn update_employee(
        &self,
        ssn: Ssn,
        record: &EmployeeRecord,
    ) -> Result<MutationResponse> {
        let response = self
            .client
            .put(self.url(&format!("/employees/{ssn}")))
            .json(record)
            .send()
            .await?;
        self.handle_response(response, &format!("Employee {ssn}"))
            .await
    }

    /// Delete employee by SSN.
    pub async fn delete_employee(&self, ssn: Ssn) -> Result<MutationResponse> {
        let response = self
            .client
            .delete(self.url(&format!("/employees/{ssn}")))
            .send()
            .await?;
        self.handle_response(response, &format!("Employee {ssn}"))
            .await
    }

    /// Search employees. At least one criterion must be set.
    pub async fn search_employees(&self, query: &SearchEmployeesQuery) -> Result<Vec<Employee>> {
        let pairs = query.to_pairs();
        if pairs.is_empty() {
            return Err(ClientError::InvalidInput(
                "at least one search criterion is required".to_string(),
            ));
        }

        let response = self
            .client
            .get(self.url("/employees/search"))
            .query(&pairs)
            .send()
            .await?;
        self.handle_response(response, "Employees").await
    }
}
