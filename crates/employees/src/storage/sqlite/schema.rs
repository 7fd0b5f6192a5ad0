//! SQLite schema and SQL statements.
//!
//! Pure data plus one pure renderer for the search statement; no I/O.

use employees_core::employee::{MatchKind, SearchFilter};

/// Creates the `employee` table. `Ssn` aliases the rowid so inserts get a
/// fresh identifier.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS employee (
    Ssn INTEGER PRIMARY KEY,
    Fname TEXT NOT NULL,
    Minit TEXT,
    Lname TEXT NOT NULL,
    Bdate TEXT,
    Address TEXT,
    Sex TEXT,
    Salary REAL,
    Super_ssn INTEGER,
    DL_id TEXT,
    FOREIGN KEY (Super_ssn) REFERENCES employee(Ssn) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_employee_super_ssn ON employee(Super_ssn);
"#;

const EMPLOYEE_COLUMNS: &str =
    "Ssn, Fname, Minit, Lname, Bdate, Address, Sex, Salary, Super_ssn, DL_id";

pub const SELECT_ALL_EMPLOYEES: &str = r#"
SELECT Ssn, Fname, Minit, Lname, Bdate, Address, Sex, Salary, Super_ssn, DL_id
FROM employee
ORDER BY Ssn ASC
"#;

pub const SELECT_EMPLOYEE_BY_SSN: &str = r#"
SELECT Ssn, Fname, Minit, Lname, Bdate, Address, Sex, Salary, Super_ssn, DL_id
FROM employee
WHERE Ssn = ?1
"#;

pub const INSERT_EMPLOYEE: &str = r#"
INSERT INTO employee (Fname, Minit, Lname, Bdate, Address, Sex, Salary, Super_ssn, DL_id)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const UPDATE_EMPLOYEE: &str = r#"
UPDATE employee
SET Fname = ?1, Minit = ?2, Lname = ?3, Bdate = ?4, Address = ?5, Sex = ?6,
    Salary = ?7, Super_ssn = ?8, DL_id = ?9
WHERE Ssn = ?10
"#;

pub const DELETE_EMPLOYEE: &str = r#"
DELETE FROM employee
WHERE Ssn = ?1
"#;

pub const PING: &str = "SELECT 1";

/// Renders the `SELECT` for a search filter.
///
/// Column names come from the fixed set in [`SearchField`]; values are bound
/// positionally in condition order. The filter is never empty, so the `WHERE`
/// clause always has at least one condition.
///
/// [`SearchField`]: employees_core::employee::SearchField
pub fn search_employees_sql(filter: &SearchFilter) -> String {
    let conditions: Vec<String> = filter
        .conditions()
        .iter()
        .enumerate()
        .map(|(idx, condition)| {
            let column = condition.field.column();
            let param = idx + 1;
            match condition.match_kind() {
                MatchKind::Contains => format!("{column} LIKE ?{param} ESCAPE '\\'"),
                MatchKind::Exact => format!("{column} = ?{param}"),
            }
        })
        .collect();

    format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE {} ORDER BY Ssn ASC",
        conditions.join(" AND ")
    )
}
