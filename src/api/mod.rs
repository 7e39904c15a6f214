//! HTTP API module for the payroll service.
//!
//! This module provides the REST endpoints for managing the employee roster
//! and calculating salaries under `/api/employees`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse, SalaryResponse};
pub use state::{AppState, SharedStore};
