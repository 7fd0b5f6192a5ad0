//! SQLite repository implementation.
//!
//! Implements `EmployeeRepository` from `employees_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use tokio_rusqlite::Connection;

use employees_core::employee::{Employee, EmployeeRecord, SearchFilter, Ssn};
use employees_core::storage::{EmployeeRepository, InsertOutcome, RepositoryError, Result};

use super::conversions::{record_to_values, row_to_employee, search_filter_to_values};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based employee repository.
///
/// The connection lives on a dedicated thread owned by `tokio_rusqlite`;
/// calls are executed one at a time in submission order.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a repository over a private in-memory database.
    ///
    /// Data is lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for SqliteRepository {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_EMPLOYEES)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_employee).map_err(wrap_err)?;

                let mut employees = Vec::new();
                for row_result in rows {
                    employees.push(row_result.map_err(wrap_err)?);
                }
                Ok(employees)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, None))
    }

    async fn get_employee(&self, ssn: Ssn) -> Result<Option<Employee>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_EMPLOYEE_BY_SSN)
                    .map_err(wrap_err)?;
                match stmt.query_row([ssn], row_to_employee) {
                    Ok(employee) => Ok(Some(employee)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(ssn)))
    }

    async fn create_employee(&self, record: &EmployeeRecord) -> Result<InsertOutcome> {
        let values = record_to_values(record);

        self.conn
            .call(move |conn| {
                let affected_rows = conn
                    .execute(schema::INSERT_EMPLOYEE, params_from_iter(values))
                    .map_err(wrap_err)?;
                Ok(InsertOutcome {
                    affected_rows,
                    ssn: conn.last_insert_rowid(),
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, None))
    }

    async fn update_employee(&self, ssn: Ssn, record: &EmployeeRecord) -> Result<usize> {
        let mut values = record_to_values(record);
        values.push(rusqlite::types::Value::Integer(ssn));

        self.conn
            .call(move |conn| {
                conn.execute(schema::UPDATE_EMPLOYEE, params_from_iter(values))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(ssn)))
    }

    async fn delete_employee(&self, ssn: Ssn) -> Result<usize> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_EMPLOYEE, [ssn])
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, Some(ssn)))
    }

    async fn search_employees(&self, filter: &SearchFilter) -> Result<Vec<Employee>> {
        let sql = schema::search_employees_sql(filter);
        let values = search_filter_to_values(filter);

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params_from_iter(values), row_to_employee)
                    .map_err(wrap_err)?;

                let mut employees = Vec::new();
                for row_result in rows {
                    employees.push(row_result.map_err(wrap_err)?);
                }
                Ok(employees)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, None))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, None))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    fn filter(pairs: &[(&str, &str)]) -> SearchFilter {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SearchFilter::from_params(&params).unwrap()
    }

    fn john_smith() -> EmployeeRecord {
        EmployeeRecord::new("John", "Smith")
            .with_middle_initial("B")
            .with_birth_date(NaiveDate::from_ymd_opt(1965, 1, 9).unwrap())
            .with_address("731 Fondren, Houston, TX")
            .with_sex("M")
            .with_salary(30000.0)
            .with_dl_id("TX-1001")
    }

    #[tokio::test]
    async fn test_create_assigns_ssn_and_get_returns_record() {
        let repo = repo().await;

        let outcome = repo.create_employee(&john_smith()).await.unwrap();
        assert_eq!(outcome.affected_rows, 1);

        let employee = repo.get_employee(outcome.ssn).await.unwrap().unwrap();
        assert_eq!(employee.ssn, outcome.ssn);
        assert_eq!(employee.record, john_smith());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = repo().await;
        assert_eq!(repo.get_employee(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_ssn() {
        let repo = repo().await;
        let first = repo.create_employee(&john_smith()).await.unwrap();
        let second = repo
            .create_employee(&EmployeeRecord::new("Alicia", "Zelaya"))
            .await
            .unwrap();

        let all = repo.list_employees().await.unwrap();
        let ssns: Vec<Ssn> = all.iter().map(|e| e.ssn).collect();
        assert_eq!(ssns, vec![first.ssn, second.ssn]);
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let repo = repo().await;
        let outcome = repo.create_employee(&john_smith()).await.unwrap();

        let replacement = EmployeeRecord::new("Jon", "Smythe");
        let affected = repo
            .update_employee(outcome.ssn, &replacement)
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let employee = repo.get_employee(outcome.ssn).await.unwrap().unwrap();
        assert_eq!(employee.record, replacement);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_affect_zero_rows() {
        let repo = repo().await;

        assert_eq!(repo.update_employee(99, &john_smith()).await.unwrap(), 0);
        assert_eq!(repo.delete_employee(99).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;
        let outcome = repo.create_employee(&john_smith()).await.unwrap();

        assert_eq!(repo.delete_employee(outcome.ssn).await.unwrap(), 1);
        assert_eq!(repo.get_employee(outcome.ssn).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_supervisor_is_rejected() {
        let repo = repo().await;

        let err = repo
            .create_employee(&john_smith().with_super_ssn(777))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_deleting_supervisor_clears_super_ssn() {
        let repo = repo().await;
        let boss = repo
            .create_employee(&EmployeeRecord::new("James", "Borg"))
            .await
            .unwrap();
        let report = repo
            .create_employee(&john_smith().with_super_ssn(boss.ssn))
            .await
            .unwrap();

        repo.delete_employee(boss.ssn).await.unwrap();

        let employee = repo.get_employee(report.ssn).await.unwrap().unwrap();
        assert_eq!(employee.record.super_ssn, None);
    }

    #[tokio::test]
    async fn test_search_combines_conditions() {
        let repo = repo().await;
        repo.create_employee(&john_smith()).await.unwrap();
        repo.create_employee(
            &EmployeeRecord::new("Jennifer", "Wallace")
                .with_sex("F")
                .with_address("291 Berry, Bellaire, TX"),
        )
        .await
        .unwrap();
        repo.create_employee(
            &EmployeeRecord::new("Ramesh", "Narayan")
                .with_sex("M")
                .with_address("975 Fire Oak, Humble, TX"),
        )
        .await
        .unwrap();

        let men = repo.search_employees(&filter(&[("Sex", "M")])).await.unwrap();
        assert_eq!(men.len(), 2);
        assert!(men.iter().all(|e| e.record.sex.as_deref() == Some("M")));

        let houston_men = repo
            .search_employees(&filter(&[("Sex", "M"), ("Address", "houston")]))
            .await
            .unwrap();
        assert_eq!(houston_men.len(), 1);
        assert_eq!(houston_men[0].record.first_name, "John");
    }

    #[tokio::test]
    async fn test_search_substring_treats_wildcards_literally() {
        let repo = repo().await;
        repo.create_employee(&EmployeeRecord::new("Ann", "Fifty").with_address("50% Main St"))
            .await
            .unwrap();
        repo.create_employee(&EmployeeRecord::new("Bob", "Five").with_address("500 Main St"))
            .await
            .unwrap();

        let hits = repo
            .search_employees(&filter(&[("Address", "50%")]))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record.first_name, "Ann");
    }

    #[tokio::test]
    async fn test_search_by_super_ssn() {
        let repo = repo().await;
        let boss = repo
            .create_employee(&EmployeeRecord::new("Franklin", "Wong"))
            .await
            .unwrap();
        repo.create_employee(&john_smith().with_super_ssn(boss.ssn))
            .await
            .unwrap();
        repo.create_employee(&EmployeeRecord::new("Ahmad", "Jabbar"))
            .await
            .unwrap();

        let reports = repo
            .search_employees(&filter(&[("Super_ssn", &boss.ssn.to_string())]))
            .await
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].record.last_name, "Smith");
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = repo().await;
        assert!(repo.ping().await.is_ok());
    }
}
