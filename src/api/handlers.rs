//! HTTP request handlers for the employee API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;

use super::request::{CalculateRequest, EmployeeRequest};
use super::response::{json_response, ApiError, ApiErrorResponse, SalaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employees", get(list_handler).post(create_handler))
        .route(
            "/api/employees/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .route("/api/employees/:id/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for GET /api/employees.
async fn list_handler(State(state): State<AppState>) -> Response {
    let employees = state.service().list_employees();
    info!(count = employees.len(), "Listed employees");
    json_response(StatusCode::OK, employees)
}

/// Handler for GET /api/employees/{id}.
async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(id, correlation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service().get_employee(id) {
        Ok(employee) => json_response(StatusCode::OK, employee),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /api/employees.
///
/// Responds 201 with the new id as the body and its URL in `Location`.
async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let created = request
        .into_fields()
        .and_then(|fields| state.service().create_employee(fields));

    match created {
        Ok(created) => (
            StatusCode::CREATED,
            [
                (header::CONTENT_TYPE, "application/json".to_string()),
                (header::LOCATION, created.location),
            ],
            Json(created.id),
        )
            .into_response(),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for PUT /api/employees/{id}.
///
/// The record is chosen by the path id; any `id` in the body is ignored.
async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(id, correlation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        "Processing update employee request"
    );

    let request = match json_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    if let Some(body_id) = request.id.filter(|body_id| *body_id != id) {
        warn!(
            correlation_id = %correlation_id,
            path_id = id,
            body_id,
            "Body id differs from path id; updating the path id"
        );
    }

    let updated = request
        .into_fields()
        .and_then(|fields| state.service().update_employee(id, fields));

    match updated {
        Ok(employee) => json_response(StatusCode::OK, employee),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for DELETE /api/employees/{id}.
async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(id, correlation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.service().delete_employee(id) {
        Ok(deleted) => json_response(StatusCode::OK, deleted),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /api/employees/{id}/calculate.
///
/// Responds with the salary as a bare JSON number.
async fn calculate_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(id, correlation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        "Processing salary calculation request"
    );

    let attendance = match json_body(payload, correlation_id) {
        Ok(attendance) => attendance,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match state.service().calculate_salary(id, &attendance) {
        Ok(calculation) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                employee_type = calculation.employee_type.as_str(),
                salary = %calculation.salary,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, SalaryResponse(calculation.salary))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Unwraps the `{id}` path segment or builds a 400 response.
fn path_id(
    id: Result<Path<i64>, PathRejection>,
    correlation_id: Uuid,
) -> Result<i64, Response> {
    id.map(|Path(id)| id).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid employee id in path"
        );
        ApiErrorResponse::bad_request(ApiError::invalid_id(rejection.body_text())).into_response()
    })
}

/// Unwraps a JSON body or builds a 400 response describing what was wrong.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error).into_response())
}

/// Logs a service error and converts it into its HTTP response.
fn error_response(err: PayrollError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}
