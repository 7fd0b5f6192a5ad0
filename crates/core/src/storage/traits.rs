use async_trait::async_trait;

use crate::employee::{Employee, EmployeeRecord, SearchFilter, Ssn};

use super::Result;

/// Result of inserting an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub affected_rows: usize,
    /// Identifier assigned by the store.
    pub ssn: Ssn,
}

/// Repository for the `employee` table.
///
/// Update and delete report the number of affected rows; callers decide what
/// zero means.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Gets every employee.
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Gets an employee by identifier.
    async fn get_employee(&self, ssn: Ssn) -> Result<Option<Employee>>;

    /// Inserts a new employee; the store assigns the identifier.
    async fn create_employee(&self, record: &EmployeeRecord) -> Result<InsertOutcome>;

    /// Replaces every non-key field of an employee.
    async fn update_employee(&self, ssn: Ssn, record: &EmployeeRecord) -> Result<usize>;

    /// Deletes an employee by identifier.
    async fn delete_employee(&self, ssn: Ssn) -> Result<usize>;

    /// Gets the employees matching every condition of the filter.
    async fn search_employees(&self, filter: &SearchFilter) -> Result<Vec<Employee>>;

    /// Round-trips a trivial statement to check the store is reachable.
    async fn ping(&self) -> Result<()>;
}
