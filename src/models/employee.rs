//! Employee model and related types.
//!
//! This module defines the [`EmployeeRecord`] stored in the roster, the
//! [`EmployeeFields`] that callers supply on create and update, and the
//! [`EmployeeType`] discriminator used to pick a salary rule.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The employment arrangement that decides how salary is computed.
///
/// The discriminants are the `typeId` values used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum EmployeeType {
    /// Salaried employee, paid a fixed monthly amount less absences and tax.
    Regular = 1,
    /// Employee paid per worked day at a fixed daily rate.
    Contractual = 2,
}

impl EmployeeType {
    /// Every known employee type, in discriminant order.
    pub const ALL: [EmployeeType; 2] = [EmployeeType::Regular, EmployeeType::Contractual];

    /// Returns the `typeId` for this employee type.
    pub fn type_id(self) -> i32 {
        self as i32
    }

    /// Returns a stable lowercase name, used in audit output and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeType::Regular => "regular",
            EmployeeType::Contractual => "contractual",
        }
    }
}

impl TryFrom<i32> for EmployeeType {
    type Error = PayrollError;

    fn try_from(type_id: i32) -> PayrollResult<Self> {
        EmployeeType::ALL
            .into_iter()
            .find(|t| t.type_id() == type_id)
            .ok_or(PayrollError::UnknownEmployeeType { type_id })
    }
}

/// A single employee on the roster.
///
/// `birthdate` always serializes as `yyyy-MM-dd`. `type_id` is kept as the
/// raw integer: an unknown value is a valid stored state and only fails
/// when a salary is calculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tin: String,
    /// The employee's date of birth.
    pub birthdate: NaiveDate,
    /// Raw employee type discriminator.
    pub type_id: i32,
}

impl EmployeeRecord {
    /// Builds a record from an id and a set of fields.
    pub fn from_fields(id: i64, fields: EmployeeFields) -> Self {
        Self {
            id,
            full_name: fields.full_name,
            tin: fields.tin,
            birthdate: fields.birthdate,
            type_id: fields.type_id,
        }
    }

    /// Overwrites every mutable field. The id is left untouched.
    pub fn apply(&mut self, fields: EmployeeFields) {
        self.full_name = fields.full_name;
        self.tin = fields.tin;
        self.birthdate = fields.birthdate;
        self.type_id = fields.type_id;
    }

    /// Resolves the stored type id into an [`EmployeeType`].
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::{EmployeeRecord, EmployeeType};
    /// use chrono::NaiveDate;
    ///
    /// let record = EmployeeRecord {
    ///     id: 1,
    ///     full_name: "Jane Doe".to_string(),
    ///     tin: "123215413".to_string(),
    ///     birthdate: NaiveDate::from_ymd_opt(1993, 3, 25).unwrap(),
    ///     type_id: 1,
    /// };
    /// assert_eq!(record.employee_type().unwrap(), EmployeeType::Regular);
    /// ```
    pub fn employee_type(&self) -> PayrollResult<EmployeeType> {
        EmployeeType::try_from(self.type_id)
    }
}

/// The four mutable fields of an employee, supplied on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFields {
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tin: String,
    /// The employee's date of birth.
    #[serde(deserialize_with = "deserialize_birthdate")]
    pub birthdate: NaiveDate,
    /// Raw employee type discriminator.
    pub type_id: i32,
}

impl EmployeeFields {
    /// Builds fields from a birthdate in any accepted text format.
    pub fn parse(
        full_name: impl Into<String>,
        tin: impl Into<String>,
        birthdate: &str,
        type_id: i32,
    ) -> PayrollResult<Self> {
        Ok(Self {
            full_name: full_name.into(),
            tin: tin.into(),
            birthdate: parse_birthdate(birthdate)?,
            type_id,
        })
    }

    /// Checks that the text fields carry a value.
    pub fn validate(&self) -> PayrollResult<()> {
        require_text("fullName", &self.full_name)?;
        require_text("tin", &self.tin)?;
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> PayrollResult<()> {
    if value.trim().is_empty() {
        return Err(PayrollError::InvalidInput {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a birthdate from any accepted input format.
///
/// Accepted: `yyyy-MM-dd`, `yyyy/MM/dd`, `MM/dd/yyyy`, and ISO-8601
/// date-times with or without an offset. A date-time keeps the calendar
/// date as written, ignoring the time component.
///
/// # Examples
///
/// ```
/// use employee_payroll::models::parse_birthdate;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(1990, 5, 17).unwrap();
/// assert_eq!(parse_birthdate("1990-05-17").unwrap(), expected);
/// assert_eq!(parse_birthdate("1990-05-17T00:00:00+08:00").unwrap(), expected);
/// assert_eq!(parse_birthdate("05/17/1990").unwrap(), expected);
/// ```
pub fn parse_birthdate(value: &str) -> PayrollResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
        .ok_or_else(|| PayrollError::InvalidBirthdate {
            value: value.to_string(),
        })
}

fn deserialize_birthdate<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_birthdate(&raw).map_err(serde::de::Error::custom)
}
