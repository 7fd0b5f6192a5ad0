//! SQLite row conversion functions.
//!
//! Pure functions between SQLite rows/values and domain types, testable
//! without a database.

use chrono::NaiveDate;
use rusqlite::{types::Value, Row};

use employees_core::employee::{
    escape_like, Employee, EmployeeRecord, MatchKind, SearchFilter, SearchValue,
};

/// Convert a SQLite row to an Employee.
///
/// Expected columns: Ssn, Fname, Minit, Lname, Bdate, Address, Sex, Salary,
/// Super_ssn, DL_id
pub fn row_to_employee(row: &Row) -> rusqlite::Result<Employee> {
    let ssn: i64 = row.get(0)?;
    let bdate: Option<String> = row.get(4)?;

    Ok(Employee {
        ssn,
        record: EmployeeRecord {
            first_name: row.get(1)?,
            middle_initial: row.get(2)?,
            last_name: row.get(3)?,
            birth_date: bdate.as_deref().map(|s| parse_date(4, s)).transpose()?,
            address: row.get(5)?,
            sex: row.get(6)?,
            salary: row.get(7)?,
            super_ssn: row.get(8)?,
            dl_id: row.get(9)?,
        },
    })
}

/// Positional values for `INSERT_EMPLOYEE` / the first nine of `UPDATE_EMPLOYEE`.
pub fn record_to_values(record: &EmployeeRecord) -> Vec<Value> {
    vec![
        Value::Text(record.first_name.clone()),
        optional_text(record.middle_initial.as_deref()),
        Value::Text(record.last_name.clone()),
        optional_text(record.birth_date.as_ref().map(format_date).as_deref()),
        optional_text(record.address.as_deref()),
        optional_text(record.sex.as_deref()),
        record.salary.map_or(Value::Null, Value::Real),
        record.super_ssn.map_or(Value::Null, Value::Integer),
        optional_text(record.dl_id.as_deref()),
    ]
}

/// Positional values for the statement rendered by `search_employees_sql`.
///
/// Substring conditions are wrapped in `%...%` after escaping wildcards.
pub fn search_filter_to_values(filter: &SearchFilter) -> Vec<Value> {
    filter
        .conditions()
        .iter()
        .map(|condition| match (&condition.value, condition.match_kind()) {
            (SearchValue::Text(text), MatchKind::Contains) => {
                Value::Text(format!("%{}%", escape_like(text)))
            }
            (SearchValue::Text(text), MatchKind::Exact) => Value::Text(text.clone()),
            (SearchValue::Integer(n), _) => Value::Integer(*n),
        })
        .collect()
}

fn optional_text(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::Text(s.to_string()))
}

/// Parse a YYYY-MM-DD date read from column `idx`.
fn parse_date(idx: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a NaiveDate for SQLite storage (YYYY-MM-DD).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
