//! Error types for the payroll service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every expected failure of the roster and payroll operations.

use thiserror::Error;

/// The main error type for the payroll service.
///
/// None of these are fatal: each one is an expected outcome that callers
/// turn into a negative response.
///
/// # Example
///
/// ```
/// use employee_payroll::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// No employee with the requested id exists in the store.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// The stored type id does not map to a known employee type.
    #[error("Employee type not found: {type_id}")]
    UnknownEmployeeType {
        /// The unrecognised type id.
        type_id: i32,
    },

    /// A required field was missing or malformed.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A birthdate string could not be parsed in any accepted format.
    #[error("Invalid birthdate '{value}'")]
    InvalidBirthdate {
        /// The text that failed to parse.
        value: String,
    },

    /// An attendance figure drove the salary arithmetic past the range of
    /// `Decimal`.
    #[error("Salary out of range for {field} = {value}")]
    AmountOutOfRange {
        /// The attendance field that caused the overflow.
        field: String,
        /// The offending value as sent.
        value: String,
    },

    /// Every id up to `i64::MAX` is taken, so no new employee can be added.
    #[error("No employee id left after {max_id}")]
    IdSpaceExhausted {
        /// The largest id currently in the roster.
        max_id: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
