//! Employee CRUD and search handlers.
//!
//! Each handler validates input shape, calls the repository once and shapes
//! the result. Status codes: 400 for bad input, 404 for absence, 500 for
//! storage failures.

use std::collections::HashMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use employees_core::employee::{
    parse_employee_record, Employee, MutationResponse, SearchFilter, Ssn,
};
use employees_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

fn ssn_from_path(path: Result<Path<Ssn>, PathRejection>) -> Result<Ssn, AppError> {
    path.map(|Path(ssn)| ssn)
        .map_err(|e| AppError::bad_request(format!("Invalid employee SSN: {}", e.body_text())))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(value)| value)
        .map_err(|e| AppError::bad_request(format!("Invalid JSON body: {}", e.body_text())))
}

/// List every employee (GET /employees).
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employee_repo.list_employees().await?;

    tracing::debug!(count = employees.len(), "Listed employees");

    Ok(Json(employees))
}

/// Get one employee (GET /employees/{ssn}).
pub async fn get_employee(
    State(state): State<AppState>,
    path: Result<Path<Ssn>, PathRejection>,
) -> Result<Json<Employee>, AppError> {
    let ssn = ssn_from_path(path)?;

    match state.employee_repo.get_employee(ssn).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(RepositoryError::employee_not_found(ssn).into()),
    }
}

/// Create an employee (POST /employees).
///
/// All nine non-key fields must be present; the identifier is generated.
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let record = parse_employee_record(json_body(body)?)?;

    tracing::debug!(record = ?record, "Received create employee request");

    let outcome = state.employee_repo.create_employee(&record).await?;

    tracing::info!(ssn = %outcome.ssn, "Created new employee");

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::added(outcome.affected_rows, outcome.ssn)),
    ))
}

/// Replace an employee's fields (PUT /employees/{ssn}).
pub async fn update_employee(
    State(state): State<AppState>,
    path: Result<Path<Ssn>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let ssn = ssn_from_path(path)?;
    let record = parse_employee_record(json_body(body)?)?;

    tracing::debug!(ssn = %ssn, record = ?record, "Received update employee request");

    let affected_rows = state.employee_repo.update_employee(ssn, &record).await?;
    if affected_rows == 0 {
        return Err(RepositoryError::employee_not_found(ssn).into());
    }

    tracing::info!(ssn = %ssn, "Updated employee");

    Ok(Json(MutationResponse::updated(affected_rows)))
}

/// Delete an employee (DELETE /employees/{ssn}).
pub async fn delete_employee(
    State(state): State<AppState>,
    path: Result<Path<Ssn>, PathRejection>,
) -> Result<Json<MutationResponse>, AppError> {
    let ssn = ssn_from_path(path)?;

    let affected_rows = state.employee_repo.delete_employee(ssn).await?;
    if affected_rows == 0 {
        return Err(RepositoryError::employee_not_found(ssn).into());
    }

    tracing::info!(ssn = %ssn, "Deleted employee");

    Ok(Json(MutationResponse::deleted(affected_rows)))
}

/// Search employees (GET /employees/search?Fname=..&Sex=..).
///
/// Conditions are ANDed; name and address match substrings, the rest match
/// exactly.
pub async fn search_employees(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let Query(params) = query
        .map_err(|e| AppError::bad_request(format!("Invalid query string: {}", e.body_text())))?;

    let filter = SearchFilter::from_params(&params)?;
    let employees = state.employee_repo.search_employees(&filter).await?;

    tracing::debug!(
        conditions = filter.conditions().len(),
        matches = employees.len(),
        "Searched employees"
    );

    Ok(Json(employees))
}
