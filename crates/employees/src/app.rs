use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        employees::{
            create_employee, delete_employee, get_employee, list_employees, search_employees,
            update_employee,
        },
        health::{healthz, livez},
        root::welcome,
        AppError, RequestTimeout,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // `/employees/search` is a static segment, so it wins over `/employees/{ssn}`.
    let employee_routes = Router::new()
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/search", get(search_employees))
        .route(
            "/employees/{ssn}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .layer(cors);

    let timeout = state.request_timeout;

    Router::new()
        .route("/", get(welcome))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .merge(employee_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(timeout, enforce_timeout))
        .with_state(state)
}

/// Fails requests that outlive `timeout` with a 500 `{"Error": ...}` body.
async fn enforce_timeout(
    State(timeout): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => AppError::from(RequestTimeout(timeout)).into_response(),
    }
}
