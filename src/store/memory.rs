//! In-memory employee store.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeFields, EmployeeRecord};

use super::EmployeeStore;

/// An [`EmployeeStore`] backed by a `Vec` behind a read-write lock.
///
/// Writers are serialized against each other and against readers, so the
/// max+1 id assignment stays unique under concurrent creates.
///
/// # Example
///
/// ```
/// use employee_payroll::models::EmployeeFields;
/// use employee_payroll::store::{EmployeeStore, InMemoryEmployeeStore};
///
/// let store = InMemoryEmployeeStore::new();
/// let fields = EmployeeFields::parse("Jane Doe", "123215413", "1993-03-25", 1).unwrap();
///
/// let created = store.create(fields).unwrap();
/// assert_eq!(created.id, 1);
/// assert_eq!(store.get_by_id(1), Some(created));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding existing records, keeping their ids and order.
    ///
    /// Fails with `InvalidInput` if two records share an id.
    pub fn with_records(records: Vec<EmployeeRecord>) -> PayrollResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(PayrollError::InvalidInput {
                    field: "id".to_string(),
                    message: format!("duplicate employee id {}", record.id),
                });
            }
        }

        Ok(Self {
            records: RwLock::new(records),
        })
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoned locks are recovered: no mutation here leaves the Vec half-written.
    fn read(&self) -> RwLockReadGuard<'_, Vec<EmployeeRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<EmployeeRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn list(&self) -> Vec<EmployeeRecord> {
        self.read().clone()
    }

    fn get_by_id(&self, id: i64) -> Option<EmployeeRecord> {
        self.read().iter().find(|r| r.id == id).cloned()
    }

    fn create(&self, fields: EmployeeFields) -> PayrollResult<EmployeeRecord> {
        let mut records = self.write();
        let max_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        let id = max_id
            .checked_add(1)
            .ok_or(PayrollError::IdSpaceExhausted { max_id })?;
        let record = EmployeeRecord::from_fields(id, fields);
        records.push(record.clone());
        Ok(record)
    }

    fn update(&self, id: i64, fields: EmployeeFields) -> Option<EmployeeRecord> {
        let mut records = self.write();
        let record = records.iter_mut().find(|r| r.id == id)?;
        record.apply(fields);
        Some(record.clone())
    }

    fn delete(&self, id: i64) -> bool {
        let mut records = self.write();
        let before = records.len();
        records.retain(|r| r.id != id);
        records.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::thread;

    fn fields(name: &str, type_id: i32) -> EmployeeFields {
        EmployeeFields {
            full_name: name.to_string(),
            tin: format!("TIN-{name}"),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            type_id,
        }
    }

    fn record(id: i64, name: &str) -> EmployeeRecord {
        EmployeeRecord::from_fields(id, fields(name, 1))
    }

    #[test]
    fn test_create_on_empty_store_assigns_one() {
        let store = InMemoryEmployeeStore::new();
        assert!(store.is_empty());

        let created = store.create(fields("Jane", 1)).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sequential_creates_assign_increasing_ids() {
        let store = InMemoryEmployeeStore::new();
        let ids: Vec<i64> = (0..5)
            .map(|i| store.create(fields(&format!("E{i}"), 1)).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_create_uses_max_id_not_count() {
        let store =
            InMemoryEmployeeStore::with_records(vec![record(10, "A"), record(3, "B")]).unwrap();
        assert_eq!(store.create(fields("C", 2)).unwrap().id, 11);
    }

    #[test]
    fn test_create_after_delete_uses_current_max() {
        let store = InMemoryEmployeeStore::new();
        store.create(fields("A", 1)).unwrap();
        store.create(fields("B", 1)).unwrap();
        store.create(fields("C", 1)).unwrap();
        assert!(store.delete(2));

        assert_eq!(store.create(fields("D", 1)).unwrap().id, 4);
    }

    #[test]
    fn test_create_after_emptying_store_starts_at_one() {
        let store = InMemoryEmployeeStore::new();
        store.create(fields("A", 1)).unwrap();
        assert!(store.delete(1));
        assert_eq!(store.create(fields("B", 1)).unwrap().id, 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store =
            InMemoryEmployeeStore::with_records(vec![record(5, "A"), record(2, "B")]).unwrap();
        store.create(fields("C", 1)).unwrap();

        let names: Vec<String> = store.list().into_iter().map(|r| r.full_name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_get_missing_id_is_none() {
        let store = InMemoryEmployeeStore::new();
        store.create(fields("A", 1)).unwrap();
        assert_eq!(store.get_by_id(99), None);
    }

    #[test]
    fn test_update_overwrites_fields_and_keeps_id() {
        let store = InMemoryEmployeeStore::new();
        let created = store.create(fields("A", 1)).unwrap();

        let mut replacement = fields("Renamed", 2);
        replacement.birthdate = NaiveDate::from_ymd_opt(1985, 12, 1).unwrap();
        let updated = store.update(created.id, replacement.clone()).unwrap();

        assert_eq!(updated, EmployeeRecord::from_fields(created.id, replacement));
        assert_eq!(store.get_by_id(created.id), Some(updated));
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() {
        let store = InMemoryEmployeeStore::new();
        store.create(fields("A", 1)).unwrap();
        let before = store.list();

        assert_eq!(store.update(42, fields("B", 2)), None);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete_removes_record() {
        let store = InMemoryEmployeeStore::new();
        let created = store.create(fields("A", 1)).unwrap();

        assert!(store.delete(created.id));
        assert_eq!(store.get_by_id(created.id), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_id_returns_false() {
        let store = InMemoryEmployeeStore::new();
        store.create(fields("A", 1)).unwrap();
        let before = store.list();

        assert!(!store.delete(7));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_with_records_rejects_duplicate_ids() {
        let result = InMemoryEmployeeStore::with_records(vec![record(1, "A"), record(1, "B")]);
        assert!(matches!(
            result,
            Err(PayrollError::InvalidInput { field, .. }) if field == "id"
        ));
    }

    #[test]
    fn test_concurrent_creates_assign_unique_ids() {
        let store = Arc::new(InMemoryEmployeeStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| {
                            store
                                .create(fields(&format!("T{t}-{i}"), 1))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=200).collect::<Vec<i64>>());
    }

    #[test]
    fn test_create_past_max_id_is_an_error() {
        let store = InMemoryEmployeeStore::with_records(vec![record(i64::MAX, "Last")]).unwrap();

        assert_eq!(
            store.create(fields("Overflow", 1)),
            Err(PayrollError::IdSpaceExhausted { max_id: i64::MAX })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_up_to_max_id_succeeds() {
        let store =
            InMemoryEmployeeStore::with_records(vec![record(i64::MAX - 1, "Penultimate")]).unwrap();
        assert_eq!(store.create(fields("Last", 1)).unwrap().id, i64::MAX);
        assert!(store.create(fields("Overflow", 1)).is_err());
    }
}
