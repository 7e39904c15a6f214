//! Payroll rate constants and currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Working days used to prorate absences for regular employees.
pub const WORK_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Monthly base salary of a regular employee.
pub const BASE_REGULAR_SALARY: Decimal = Decimal::from_parts(20000, 0, 0, false, 0);

/// Flat tax rate deducted from a regular employee's base salary (0.12).
pub const TAX_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Daily rate of a contractual employee.
pub const BASE_CONTRACTUAL_RATE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// The rate table a [`PayrollCalculator`](super::PayrollCalculator) works from.
///
/// Defaults to the published constants. Deployments can override any of
/// the values from `payroll.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollRates {
    /// Working days per month for absence proration.
    pub work_days_per_month: Decimal,
    /// Monthly base salary of a regular employee.
    pub base_regular_salary: Decimal,
    /// Tax rate applied to the regular base salary.
    pub tax_rate: Decimal,
    /// Daily rate of a contractual employee.
    pub base_contractual_rate: Decimal,
}

impl Default for PayrollRates {
    fn default() -> Self {
        Self {
            work_days_per_month: WORK_DAYS_PER_MONTH,
            base_regular_salary: BASE_REGULAR_SALARY,
            tax_rate: TAX_RATE,
            base_contractual_rate: BASE_CONTRACTUAL_RATE,
        }
    }
}

/// Rounds an amount to cents, half away from zero, always with two
/// decimal places.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("17600.005").unwrap();
/// assert_eq!(round_currency(amount).to_string(), "17600.01");
/// assert_eq!(round_currency(Decimal::from(5000)).to_string(), "5000.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
