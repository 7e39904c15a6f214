//! Salary rule dispatch by employee type.

use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceInput, EmployeeType, SalaryCalculation};

use super::contractual_salary::calculate_contractual_salary;
use super::rates::PayrollRates;
use super::regular_salary::calculate_regular_salary;

/// A salary rule: a pure function of the rate table and attendance.
///
/// Rules fail only when their arithmetic leaves the range of `Decimal`.
pub type SalaryRule = fn(&PayrollRates, &AttendanceInput) -> PayrollResult<SalaryCalculation>;

/// Computes salaries by looking up the rule registered for an employee type.
///
/// Adding an employee type means registering one more rule; the dispatch
/// itself never changes.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::PayrollCalculator;
/// use employee_payroll::error::PayrollError;
/// use employee_payroll::models::AttendanceInput;
/// use rust_decimal::Decimal;
///
/// let calculator = PayrollCalculator::default();
/// let regular = calculator.calculate(1, &AttendanceInput::absent(Decimal::ZERO)).unwrap();
/// assert_eq!(regular.salary.to_string(), "17600.00");
///
/// let unknown = calculator.calculate(7, &AttendanceInput::default());
/// assert_eq!(unknown, Err(PayrollError::UnknownEmployeeType { type_id: 7 }));
/// ```
#[derive(Debug, Clone)]
pub struct PayrollCalculator {
    rates: PayrollRates,
    rules: HashMap<EmployeeType, SalaryRule>,
}

impl PayrollCalculator {
    /// Creates a calculator with the standard rules for every known
    /// employee type.
    pub fn new(rates: PayrollRates) -> Self {
        let mut calculator = Self {
            rates,
            rules: HashMap::new(),
        };
        calculator.register(EmployeeType::Regular, calculate_regular_salary);
        calculator.register(EmployeeType::Contractual, calculate_contractual_salary);
        calculator
    }

    /// Registers (or replaces) the rule used for an employee type.
    pub fn register(&mut self, employee_type: EmployeeType, rule: SalaryRule) {
        self.rules.insert(employee_type, rule);
    }

    /// Returns the rate table in use.
    pub fn rates(&self) -> &PayrollRates {
        &self.rates
    }

    /// Calculates the salary for a raw `type_id`.
    ///
    /// Fails with `UnknownEmployeeType` when the id does not name a known
    /// type or no rule is registered for it, and with `AmountOutOfRange`
    /// when the attendance figures overflow the rule's arithmetic.
    pub fn calculate(
        &self,
        type_id: i32,
        attendance: &AttendanceInput,
    ) -> PayrollResult<SalaryCalculation> {
        let employee_type = EmployeeType::try_from(type_id)?;
        self.calculate_for(employee_type, attendance)
    }

    /// Calculates the salary for a resolved employee type.
    pub fn calculate_for(
        &self,
        employee_type: EmployeeType,
        attendance: &AttendanceInput,
    ) -> PayrollResult<SalaryCalculation> {
        let rule = self
            .rules
            .get(&employee_type)
            .ok_or(PayrollError::UnknownEmployeeType {
                type_id: employee_type.type_id(),
            })?;
        rule(&self.rates, attendance)
    }
}

impl Default for PayrollCalculator {
    fn default() -> Self {
        Self::new(PayrollRates::default())
    }
}
