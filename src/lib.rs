//! Employee roster and payroll service.
//!
//! This crate keeps a roster of employee records behind a repository
//! interface and derives a monthly salary for each employee from their
//! employment type and attendance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
