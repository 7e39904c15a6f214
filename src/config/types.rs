//! Configuration types for the payroll service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::PayrollRates;

/// Contents of `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// Human-readable name of the payroll scheme.
    pub name: String,
    /// Currency code salaries are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Rate table; omitted values fall back to the standard constants.
    #[serde(default)]
    pub rates: PayrollRates,
}

fn default_currency() -> String {
    "PHP".to_string()
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            name: "Standard monthly payroll".to_string(),
            currency: default_currency(),
            rates: PayrollRates::default(),
        }
    }
}

/// One employee in the seed roster.
///
/// The birthdate is kept as text here and normalized when the roster is
/// loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedEmployee {
    /// Employee id, kept as-is in the store.
    pub id: i64,
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tin: String,
    /// Birthdate in any accepted format.
    pub birthdate: String,
    /// Raw employee type discriminator.
    pub type_id: i32,
}

/// Contents of `employees.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// The seed employees, in roster order.
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}
