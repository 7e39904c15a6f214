//! Request types for the employee API.
//!
//! This module defines the JSON request structures for the create, update
//! and calculate endpoints.

use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::{AttendanceInput, EmployeeFields};

/// Request body for `POST /api/employees` and `PUT /api/employees/{id}`.
///
/// The birthdate is accepted in any supported format and normalized during
/// conversion. An `id` in the body is accepted for client compatibility but
/// never selects the record to update: the path id does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Ignored; present in bodies sent by older clients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tin: String,
    /// Birthdate text in any accepted format.
    pub birthdate: String,
    /// Raw employee type discriminator.
    pub type_id: i32,
}

impl EmployeeRequest {
    /// Converts the request into employee fields, normalizing the birthdate.
    ///
    /// Required-field checks are left to the service, which applies them to
    /// every caller.
    pub fn into_fields(self) -> PayrollResult<EmployeeFields> {
        EmployeeFields::parse(self.full_name, self.tin, &self.birthdate, self.type_id)
    }
}

/// Request body for `POST /api/employees/{id}/calculate`.
pub type CalculateRequest = AttendanceInput;
