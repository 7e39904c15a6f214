//! Core data models for the payroll service.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod salary;

pub use employee::{EmployeeFields, EmployeeRecord, EmployeeType, parse_birthdate};
pub use salary::{AttendanceInput, AuditStep, SalaryCalculation};
