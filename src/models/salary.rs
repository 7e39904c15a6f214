//! Attendance input and salary calculation result models.
//!
//! This module contains the [`AttendanceInput`] supplied when computing a
//! salary and the [`SalaryCalculation`] returned by the payroll calculator,
//! including the [`AuditStep`] that explains how the figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeType;

/// Attendance figures for one month.
///
/// Only the field matching the employee's type is read. Omitted fields
/// default to zero.
///
/// # Example
///
/// ```
/// use employee_payroll::models::AttendanceInput;
/// use rust_decimal::Decimal;
///
/// let input: AttendanceInput = serde_json::from_str(r#"{"absentDays": 1.5}"#).unwrap();
/// assert_eq!(input.absent_days, Decimal::new(15, 1));
/// assert_eq!(input.worked_days, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceInput {
    /// Days absent, used for regular employees. Fractions allowed.
    #[serde(default)]
    pub absent_days: Decimal,
    /// Days worked, used for contractual employees. Fractions allowed.
    #[serde(default)]
    pub worked_days: Decimal,
}

impl AttendanceInput {
    /// Attendance for a regular employee.
    pub fn absent(days: Decimal) -> Self {
        Self {
            absent_days: days,
            ..Self::default()
        }
    }

    /// Attendance for a contractual employee.
    pub fn worked(days: Decimal) -> Self {
        Self {
            worked_days: days,
            ..Self::default()
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The outcome of a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryCalculation {
    /// The employee type whose rule produced this salary.
    #[serde(with = "employee_type_id")]
    pub employee_type: EmployeeType,
    /// The salary, rounded to cents.
    pub salary: Decimal,
    /// How the salary was derived.
    pub audit_step: AuditStep,
}

mod employee_type_id {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::EmployeeType;

    pub fn serialize<S: Serializer>(value: &EmployeeType, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i32(value.type_id())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<EmployeeType, D::Error> {
        let type_id = i32::deserialize(d)?;
        EmployeeType::try_from(type_id).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_attendance_defaults_missing_fields_to_zero() {
        let input: AttendanceInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, AttendanceInput::default());
        assert_eq!(input.absent_days, Decimal::ZERO);
        assert_eq!(input.worked_days, Decimal::ZERO);
    }

    #[test]
    fn test_attendance_accepts_numbers_and_strings() {
        let input: AttendanceInput =
            serde_json::from_str(r#"{"absentDays": 2, "workedDays": "10.5"}"#).unwrap();
        assert_eq!(input.absent_days, dec("2"));
        assert_eq!(input.worked_days, dec("10.5"));
    }

    #[test]
    fn test_attendance_constructors() {
        assert_eq!(AttendanceInput::absent(dec("3")).absent_days, dec("3"));
        assert_eq!(AttendanceInput::absent(dec("3")).worked_days, Decimal::ZERO);
        assert_eq!(AttendanceInput::worked(dec("4")).worked_days, dec("4"));
        assert_eq!(AttendanceInput::worked(dec("4")).absent_days, Decimal::ZERO);
    }

    #[test]
    fn test_salary_calculation_serializes_type_id() {
        let calculation = SalaryCalculation {
            employee_type: EmployeeType::Contractual,
            salary: dec("5000.00"),
            audit_step: AuditStep {
                rule_id: "contractual_salary".to_string(),
                rule_name: "Contractual Salary".to_string(),
                input: serde_json::json!({ "worked_days": "10" }),
                output: serde_json::json!({ "salary": "5000.00" }),
                reasoning: "$500 x 10 days = $5000.00".to_string(),
            },
        };

        let json = serde_json::to_value(&calculation).unwrap();
        assert_eq!(json["employee_type"], 2);
        assert_eq!(json["salary"], "5000.00");

        let back: SalaryCalculation = serde_json::from_value(json).unwrap();
        assert_eq!(back, calculation);
    }
}
