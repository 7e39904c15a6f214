//! Configuration loading and management for the payroll service.
//!
//! This module provides functionality to load the payroll rate table and the
//! seed employee roster from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use employee_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded payroll: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollSettings, RosterConfig, SeedEmployee};
