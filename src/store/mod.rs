//! Employee record storage.
//!
//! The [`EmployeeStore`] trait is the repository seam: the service talks
//! only to the trait, so a durable backend can replace the in-memory
//! implementation without touching payroll or orchestration code.

mod memory;

pub use memory::InMemoryEmployeeStore;

use crate::error::PayrollResult;
use crate::models::{EmployeeFields, EmployeeRecord};

/// CRUD access to the employee roster.
///
/// Implementations own the record collection exclusively. They must keep
/// ids unique under concurrent use and must never expose a half-applied
/// mutation to readers.
pub trait EmployeeStore: Send + Sync {
    /// Returns every record in insertion order.
    fn list(&self) -> Vec<EmployeeRecord>;

    /// Returns the record with the given id, if any.
    fn get_by_id(&self, id: i64) -> Option<EmployeeRecord>;

    /// Appends a new record with `id = max(existing ids) + 1`, or `1` on an
    /// empty store.
    ///
    /// Fails with `IdSpaceExhausted`, leaving the store unchanged, when the
    /// largest id is already `i64::MAX`.
    fn create(&self, fields: EmployeeFields) -> PayrollResult<EmployeeRecord>;

    /// Overwrites the mutable fields of the record with the given id.
    ///
    /// Returns `None` and leaves the store unchanged when no record matches.
    fn update(&self, id: i64, fields: EmployeeFields) -> Option<EmployeeRecord>;

    /// Permanently removes the record with the given id.
    ///
    /// Returns `false` when no record matched.
    fn delete(&self, id: i64) -> bool;
}

impl<T: EmployeeStore + ?Sized> EmployeeStore for std::sync::Arc<T> {
    fn list(&self) -> Vec<EmployeeRecord> {
        (**self).list()
    }

    fn get_by_id(&self, id: i64) -> Option<EmployeeRecord> {
        (**self).get_by_id(id)
    }

    fn create(&self, fields: EmployeeFields) -> PayrollResult<EmployeeRecord> {
        (**self).create(fields)
    }

    fn update(&self, id: i64, fields: EmployeeFields) -> Option<EmployeeRecord> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: i64) -> bool {
        (**self).delete(id)
    }
}
