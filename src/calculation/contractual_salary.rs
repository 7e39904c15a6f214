//! Contractual employee salary calculation.

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceInput, AuditStep, EmployeeType, SalaryCalculation};

use super::rates::{PayrollRates, round_currency};

/// Calculates the salary of a contractual employee: the daily rate times
/// the number of worked days, rounded to cents.
///
/// Fails with `AmountOutOfRange` on `workedDays` when the product does not
/// fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::{PayrollRates, calculate_contractual_salary};
/// use employee_payroll::models::AttendanceInput;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceInput::worked(Decimal::from(10));
/// let result = calculate_contractual_salary(&PayrollRates::default(), &attendance).unwrap();
/// assert_eq!(result.salary.to_string(), "5000.00");
/// ```
pub fn calculate_contractual_salary(
    rates: &PayrollRates,
    attendance: &AttendanceInput,
) -> PayrollResult<SalaryCalculation> {
    let worked_days = attendance.worked_days;
    let daily_rate = rates.base_contractual_rate;
    let salary = daily_rate
        .checked_mul(worked_days)
        .map(round_currency)
        .ok_or_else(|| PayrollError::AmountOutOfRange {
            field: "workedDays".to_string(),
            value: worked_days.normalize().to_string(),
        })?;

    let audit_step = AuditStep {
        rule_id: "contractual_salary".to_string(),
        rule_name: "Contractual Salary".to_string(),
        input: serde_json::json!({
            "worked_days": worked_days.normalize().to_string(),
            "base_contractual_rate": daily_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "salary": salary.to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            daily_rate.normalize(),
            worked_days.normalize(),
            salary
        ),
    };

    Ok(SalaryCalculation {
        employee_type: EmployeeType::Contractual,
        salary,
        audit_step,
    })
}
