//! Property tests for roster invariants and salary arithmetic.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use employee_payroll::calculation::{
    calculate_contractual_salary, calculate_regular_salary, round_currency, PayrollCalculator,
    PayrollRates,
};
use employee_payroll::error::PayrollError;
use employee_payroll::models::{AttendanceInput, EmployeeFields};
use employee_payroll::store::{EmployeeStore, InMemoryEmployeeStore};

fn arb_fields() -> impl Strategy<Value = EmployeeFields> {
    (
        "[A-Za-z][A-Za-z ]{0,30}",
        "[0-9]{9}",
        1900i32..2010,
        1u32..=12,
        1u32..=28,
        -1i32..5,
    )
        .prop_map(|(full_name, tin, year, month, day, type_id)| EmployeeFields {
            full_name,
            tin,
            birthdate: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            type_id,
        })
}

/// Day counts with up to two decimal places, as a payroll clerk would enter.
fn arb_days() -> impl Strategy<Value = Decimal> {
    (0i64..=3100).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

/// Any representable `Decimal`, from tiny fractions to `Decimal::MAX`.
fn arb_any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| {
            Decimal::from_parts(lo, mid, hi, negative, scale)
        })
}

proptest! {
    #[test]
    fn creates_on_empty_store_are_numbered_from_one(
        fields in prop::collection::vec(arb_fields(), 1..40)
    ) {
        let store = InMemoryEmployeeStore::new();
        for (index, f) in fields.into_iter().enumerate() {
            let record = store.create(f).unwrap();
            prop_assert_eq!(record.id, index as i64 + 1);
        }
    }

    #[test]
    fn create_then_get_returns_the_input(fields in arb_fields()) {
        let store = InMemoryEmployeeStore::new();
        let created = store.create(fields.clone()).unwrap();
        let fetched = store.get_by_id(created.id).unwrap();

        prop_assert_eq!(fetched.full_name, fields.full_name);
        prop_assert_eq!(fetched.tin, fields.tin);
        prop_assert_eq!(fetched.birthdate, fields.birthdate);
        prop_assert_eq!(fetched.type_id, fields.type_id);
    }

    #[test]
    fn ids_stay_unique_across_creates_and_deletes(
        ops in prop::collection::vec((any::<bool>(), 1i64..20, arb_fields()), 1..60)
    ) {
        let store = InMemoryEmployeeStore::new();
        for (is_delete, id, fields) in ops {
            if is_delete {
                let existed = store.get_by_id(id).is_some();
                prop_assert_eq!(store.delete(id), existed);
                prop_assert!(store.get_by_id(id).is_none());
            } else {
                store.create(fields).unwrap();
            }

            let mut ids: Vec<i64> = store.list().iter().map(|r| r.id).collect();
            let total = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), total);
        }
    }

    #[test]
    fn update_changes_only_the_mutable_fields(
        seed in prop::collection::vec(arb_fields(), 1..10),
        pick in any::<prop::sample::Index>(),
        replacement in arb_fields(),
    ) {
        let store = InMemoryEmployeeStore::new();
        for f in seed {
            store.create(f).unwrap();
        }
        let before = store.list();
        let target = before[pick.index(before.len())].id;

        let updated = store.update(target, replacement.clone()).unwrap();
        prop_assert_eq!(updated.id, target);

        for (old, new) in before.iter().zip(store.list().iter()) {
            prop_assert_eq!(old.id, new.id);
            if old.id == target {
                prop_assert_eq!(&new.full_name, &replacement.full_name);
                prop_assert_eq!(&new.tin, &replacement.tin);
                prop_assert_eq!(new.birthdate, replacement.birthdate);
                prop_assert_eq!(new.type_id, replacement.type_id);
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn update_of_missing_id_changes_nothing(
        seed in prop::collection::vec(arb_fields(), 0..10),
        replacement in arb_fields(),
    ) {
        let store = InMemoryEmployeeStore::new();
        for f in seed {
            store.create(f).unwrap();
        }
        let before = store.list();
        let missing = before.len() as i64 + 100;

        prop_assert!(store.update(missing, replacement).is_none());
        prop_assert_eq!(store.list(), before);
    }

    #[test]
    fn contractual_salary_is_rate_times_days(days in arb_days()) {
        let attendance = AttendanceInput::worked(days);
        let result = calculate_contractual_salary(&PayrollRates::default(), &attendance).unwrap();
        // Two-decimal day counts times 500 are already whole cents.
        prop_assert_eq!(result.salary, days * Decimal::from(500));
        prop_assert_eq!(result.salary.scale(), 2);
    }

    #[test]
    fn regular_salary_matches_closed_form(days in arb_days()) {
        let attendance = AttendanceInput::absent(days);
        let result = calculate_regular_salary(&PayrollRates::default(), &attendance).unwrap();
        let base = Decimal::from(20000);
        let absence = (days / Decimal::from(22)) * base;
        let expected = round_currency(base - absence - Decimal::from(2400));
        prop_assert_eq!(result.salary, expected);
        prop_assert_eq!(result.salary.scale(), 2);
    }

    #[test]
    fn regular_salary_never_increases_with_absences(a in arb_days(), b in arb_days()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let rates = PayrollRates::default();
        let fewer = calculate_regular_salary(&rates, &AttendanceInput::absent(low)).unwrap().salary;
        let more = calculate_regular_salary(&rates, &AttendanceInput::absent(high)).unwrap().salary;
        prop_assert!(more <= fewer);
    }

    #[test]
    fn any_attendance_yields_a_salary_or_a_range_error(
        absent_days in arb_any_decimal(),
        worked_days in arb_any_decimal(),
        type_id in 1i32..=2,
    ) {
        let calculator = PayrollCalculator::default();
        let attendance = AttendanceInput { absent_days, worked_days };
        let expected_field = if type_id == 1 { "absentDays" } else { "workedDays" };

        match calculator.calculate(type_id, &attendance) {
            Ok(result) => prop_assert!(result.salary.scale() <= 2),
            Err(PayrollError::AmountOutOfRange { field, .. }) => {
                prop_assert_eq!(field, expected_field)
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn contractual_salary_overflows_only_past_decimal_range(days in arb_any_decimal()) {
        let attendance = AttendanceInput::worked(days);
        let result = calculate_contractual_salary(&PayrollRates::default(), &attendance);
        let product = Decimal::from(500).checked_mul(days);

        prop_assert_eq!(result.is_ok(), product.is_some());
        if let (Ok(result), Some(product)) = (result, product) {
            prop_assert_eq!(result.salary, round_currency(product));
        }
    }
}
