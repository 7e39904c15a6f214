//! Response types for the employee API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid path id error response.
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_ID",
            "Employee id must be an integer",
            raw.into(),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        json_response(self.status, self.error)
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    message,
                    format!("No employee with id {} exists", id),
                ),
            },
            PayrollError::UnknownEmployeeType { type_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_EMPLOYEE_TYPE",
                    message,
                    format!("Type id {} has no salary rule", type_id),
                ),
            },
            PayrollError::InvalidInput { .. } => {
                ApiErrorResponse::bad_request(ApiError::validation_error(message))
            }
            PayrollError::InvalidBirthdate { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_BIRTHDATE",
                    message,
                    "Use yyyy-MM-dd, an ISO-8601 date-time, yyyy/MM/dd or MM/dd/yyyy",
                ),
            ),
            PayrollError::AmountOutOfRange { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "AMOUNT_OUT_OF_RANGE",
                    message,
                    format!("{} is too large to compute a salary from", field),
                ),
            ),
            PayrollError::IdSpaceExhausted { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("ID_SPACE_EXHAUSTED", message),
            },
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

/// Body of a successful calculate response: the salary as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalaryResponse(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

/// Builds a JSON response with an explicit content type.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
