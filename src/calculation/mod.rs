//! Payroll calculation logic.
//!
//! This module contains the salary rules for each employee type, the rate
//! table they read from, currency rounding, and the [`PayrollCalculator`]
//! that dispatches to a rule by employee type. Everything here is pure:
//! no store access, no logging.

mod calculator;
mod contractual_salary;
mod rates;
mod regular_salary;

pub use calculator::{PayrollCalculator, SalaryRule};
pub use contractual_salary::calculate_contractual_salary;
pub use rates::{
    BASE_CONTRACTUAL_RATE, BASE_REGULAR_SALARY, PayrollRates, TAX_RATE, WORK_DAYS_PER_MONTH,
    round_currency,
};
pub use regular_salary::calculate_regular_salary;
