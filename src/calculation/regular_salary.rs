//! Regular employee salary calculation.
//!
//! A regular employee earns a fixed monthly base salary, reduced by an
//! absence deduction prorated over the working days of the month and by a
//! flat tax deduction.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceInput, AuditStep, EmployeeType, SalaryCalculation};

use super::rates::{PayrollRates, round_currency};

/// Calculates the monthly salary of a regular employee.
///
/// ```text
/// absence_deduction = (absent_days / work_days_per_month) * base_regular_salary
/// tax_deduction     = base_regular_salary * tax_rate
/// salary            = base_regular_salary - absence_deduction - tax_deduction
/// ```
///
/// The result is rounded to cents once, after all arithmetic. Day counts are
/// not range-checked: negative or very large values flow straight through
/// until the arithmetic itself leaves the range of `Decimal`, which fails
/// with `AmountOutOfRange` on `absentDays`.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::{PayrollRates, calculate_regular_salary};
/// use employee_payroll::models::AttendanceInput;
/// use rust_decimal::Decimal;
///
/// let attendance = AttendanceInput::absent(Decimal::from(11));
/// let result = calculate_regular_salary(&PayrollRates::default(), &attendance).unwrap();
/// assert_eq!(result.salary.to_string(), "7600.00");
/// ```
pub fn calculate_regular_salary(
    rates: &PayrollRates,
    attendance: &AttendanceInput,
) -> PayrollResult<SalaryCalculation> {
    let absent_days = attendance.absent_days;
    let base = rates.base_regular_salary;
    let out_of_range = || PayrollError::AmountOutOfRange {
        field: "absentDays".to_string(),
        value: absent_days.normalize().to_string(),
    };

    let absence_deduction = if rates.work_days_per_month.is_zero() {
        Decimal::ZERO
    } else {
        absent_days
            .checked_div(rates.work_days_per_month)
            .and_then(|share| share.checked_mul(base))
            .ok_or_else(out_of_range)?
    };
    let tax_deduction = base.checked_mul(rates.tax_rate).ok_or_else(out_of_range)?;
    let salary = base
        .checked_sub(absence_deduction)
        .and_then(|net| net.checked_sub(tax_deduction))
        .map(round_currency)
        .ok_or_else(out_of_range)?;

    let audit_step = AuditStep {
        rule_id: "regular_salary".to_string(),
        rule_name: "Regular Salary".to_string(),
        input: serde_json::json!({
            "absent_days": absent_days.normalize().to_string(),
            "base_regular_salary": base.normalize().to_string(),
            "work_days_per_month": rates.work_days_per_month.normalize().to_string(),
            "tax_rate": rates.tax_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "absence_deduction": round_currency(absence_deduction).to_string(),
            "tax_deduction": round_currency(tax_deduction).to_string(),
            "salary": salary.to_string()
        }),
        reasoning: format!(
            "${} - (({} / {}) x ${}) - (${} x {}) = ${}",
            base.normalize(),
            absent_days.normalize(),
            rates.work_days_per_month.normalize(),
            base.normalize(),
            base.normalize(),
            rates.tax_rate.normalize(),
            salary
        ),
    };

    Ok(SalaryCalculation {
        employee_type: EmployeeType::Regular,
        salary,
        audit_step,
    })
}
