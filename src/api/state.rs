//! Application state for the employee API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayrollCalculator;
use crate::config::ConfigLoader;
use crate::error::PayrollResult;
use crate::service::EmployeeService;
use crate::store::EmployeeStore;

/// The store type handlers work against: any backend behind the trait.
pub type SharedStore = Arc<dyn EmployeeStore>;

/// Shared application state.
///
/// Holds the one employee service every handler uses, so all requests see
/// the same roster.
#[derive(Clone)]
pub struct AppState {
    service: Arc<EmployeeService<SharedStore>>,
}

impl AppState {
    /// Creates a new application state over a store and calculator.
    pub fn new(store: SharedStore, calculator: PayrollCalculator) -> Self {
        Self {
            service: Arc::new(EmployeeService::new(store, calculator)),
        }
    }

    /// Creates the state from loaded configuration: the seed roster in an
    /// in-memory store and a calculator over the configured rates.
    pub fn from_config(config: &ConfigLoader) -> PayrollResult<Self> {
        let store = Arc::new(config.seeded_store()?);
        Ok(Self::new(store, config.calculator()))
    }

    /// Returns a reference to the employee service.
    pub fn service(&self) -> &EmployeeService<SharedStore> {
        &self.service
    }
}
