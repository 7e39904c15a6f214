//! Roster and payroll orchestration.
//!
//! [`EmployeeService`] answers the external operations (list, get, create,
//! update, delete, calculate) by combining an [`EmployeeStore`] with a
//! [`PayrollCalculator`]. It turns absent records into `EmployeeNotFound`
//! and checks required fields before anything reaches the store.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::PayrollCalculator;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceInput, EmployeeFields, EmployeeRecord, SalaryCalculation};
use crate::store::EmployeeStore;

/// Base path under which employee resources live.
pub const EMPLOYEES_PATH: &str = "/api/employees";

/// The result of creating an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEmployee {
    /// The id assigned by the store.
    pub id: i64,
    /// Where the new record can be fetched.
    pub location: String,
}

/// Orchestrates store access and salary calculation.
///
/// # Example
///
/// ```
/// use employee_payroll::calculation::PayrollCalculator;
/// use employee_payroll::models::{AttendanceInput, EmployeeFields};
/// use employee_payroll::service::EmployeeService;
/// use employee_payroll::store::InMemoryEmployeeStore;
/// use rust_decimal::Decimal;
///
/// let service = EmployeeService::new(InMemoryEmployeeStore::new(), PayrollCalculator::default());
/// let fields = EmployeeFields::parse("John Doe", "957125412", "1990-05-17", 2).unwrap();
///
/// let created = service.create_employee(fields).unwrap();
/// assert_eq!(created.location, "/api/employees/1");
///
/// let salary = service
///     .calculate_salary(created.id, &AttendanceInput::worked(Decimal::from(10)))
///     .unwrap();
/// assert_eq!(salary.salary.to_string(), "5000.00");
/// ```
#[derive(Debug)]
pub struct EmployeeService<S> {
    store: S,
    calculator: PayrollCalculator,
}

impl<S: EmployeeStore> EmployeeService<S> {
    /// Creates a service over the given store and calculator.
    pub fn new(store: S, calculator: PayrollCalculator) -> Self {
        Self { store, calculator }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the payroll calculator.
    pub fn calculator(&self) -> &PayrollCalculator {
        &self.calculator
    }

    /// Returns every employee in insertion order.
    pub fn list_employees(&self) -> Vec<EmployeeRecord> {
        self.store.list()
    }

    /// Returns one employee.
    pub fn get_employee(&self, id: i64) -> PayrollResult<EmployeeRecord> {
        self.store
            .get_by_id(id)
            .ok_or(PayrollError::EmployeeNotFound { id })
    }

    /// Adds an employee and returns its id and location.
    pub fn create_employee(&self, fields: EmployeeFields) -> PayrollResult<CreatedEmployee> {
        fields.validate()?;

        let record = self.store.create(fields)?;
        info!(
            employee_id = record.id,
            type_id = record.type_id,
            "Employee created"
        );

        Ok(CreatedEmployee {
            id: record.id,
            location: format!("{}/{}", EMPLOYEES_PATH, record.id),
        })
    }

    /// Replaces the mutable fields of the employee addressed by `id`.
    ///
    /// `id` is the resource id from the request path; an id carried in a
    /// request body plays no part in choosing the record.
    pub fn update_employee(
        &self,
        id: i64,
        fields: EmployeeFields,
    ) -> PayrollResult<EmployeeRecord> {
        fields.validate()?;

        let record = self
            .store
            .update(id, fields)
            .ok_or(PayrollError::EmployeeNotFound { id })?;
        info!(employee_id = id, type_id = record.type_id, "Employee updated");
        Ok(record)
    }

    /// Permanently removes an employee and returns its id.
    pub fn delete_employee(&self, id: i64) -> PayrollResult<i64> {
        if !self.store.delete(id) {
            return Err(PayrollError::EmployeeNotFound { id });
        }
        info!(employee_id = id, "Employee deleted");
        Ok(id)
    }

    /// Computes the monthly salary of an employee from their attendance.
    pub fn calculate_salary(
        &self,
        id: i64,
        attendance: &AttendanceInput,
    ) -> PayrollResult<SalaryCalculation> {
        let employee = self.get_employee(id)?;
        let calculation = self.calculator.calculate(employee.type_id, attendance)?;

        debug!(
            employee_id = id,
            rule_id = %calculation.audit_step.rule_id,
            reasoning = %calculation.audit_step.reasoning,
            "Salary rule applied"
        );
        Ok(calculation)
    }
}
