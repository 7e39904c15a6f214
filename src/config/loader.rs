//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings and the seed roster from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::calculation::{PayrollCalculator, PayrollRates};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeFields, EmployeeRecord};
use crate::store::InMemoryEmployeeStore;

use super::types::{PayrollSettings, RosterConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml     # Scheme name, currency and rate table (required)
/// └── employees.yaml   # Seed roster (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded payroll: {}", loader.settings().name);
/// println!("Seed employees: {}", loader.roster().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: PayrollSettings,
    roster: Vec<EmployeeRecord>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `payroll.yaml` is missing, if any file contains
    /// invalid YAML, if a seed birthdate cannot be parsed, or if two seed
    /// employees share an id.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("payroll.yaml"))?;

        let roster_path = path.join("employees.yaml");
        let roster = if roster_path.exists() {
            Self::load_roster(&roster_path)?
        } else {
            Vec::new()
        };

        Ok(Self { settings, roster })
    }

    /// Returns the built-in configuration: standard rates, empty roster.
    pub fn builtin() -> Self {
        Self {
            settings: PayrollSettings::default(),
            roster: Vec::new(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads the seed roster, normalizing birthdates.
    fn load_roster(path: &Path) -> PayrollResult<Vec<EmployeeRecord>> {
        let path_str = path.display().to_string();
        let config = Self::load_yaml::<RosterConfig>(path)?;

        let mut seen = HashSet::new();
        let mut roster = Vec::with_capacity(config.employees.len());

        for seed in config.employees {
            if !seen.insert(seed.id) {
                return Err(PayrollError::ConfigParseError {
                    path: path_str,
                    message: format!("duplicate employee id {}", seed.id),
                });
            }

            let fields =
                EmployeeFields::parse(seed.full_name, seed.tin, &seed.birthdate, seed.type_id)
                    .map_err(|e| PayrollError::ConfigParseError {
                        path: path_str.clone(),
                        message: format!("employee {}: {}", seed.id, e),
                    })?;
            roster.push(EmployeeRecord::from_fields(seed.id, fields));
        }

        Ok(roster)
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the configured rate table.
    pub fn rates(&self) -> &PayrollRates {
        &self.settings.rates
    }

    /// Returns the seed roster in file order.
    pub fn roster(&self) -> &[EmployeeRecord] {
        &self.roster
    }

    /// Builds a calculator over the configured rates.
    pub fn calculator(&self) -> PayrollCalculator {
        PayrollCalculator::new(self.settings.rates)
    }

    /// Builds an in-memory store holding the seed roster.
    pub fn seeded_store(&self) -> PayrollResult<InMemoryEmployeeStore> {
        InMemoryEmployeeStore::with_records(self.roster.clone())
    }
}
