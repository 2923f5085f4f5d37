//! Versioned persisted form of a player account.
//!
//! The record is an ordered list of text fields, version first:
//!
//! | index | field        | format       |
//! |-------|--------------|--------------|
//! | 0     | version      | `1`          |
//! | 1     | email        | as given     |
//! | 2     | nickname     | as given     |
//! | 3     | balance      | decimal      |
//! | 4     | birth_date   | `YYYY-MM-DD` |
//!
//! Eligibility is not stored; it is re-derived from the birth date when the
//! account is rebuilt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{RecordError, RecordResult};
use crate::game::{Credits, constants::RECORD_VERSION};

const FIELD_COUNT: usize = 5;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub email: String,
    pub nickname: String,
    pub balance: Credits,
    pub birth_date: NaiveDate,
}

impl AccountRecord {
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        balance: Credits,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
            balance,
            birth_date,
        }
    }

    pub fn to_fields(&self) -> Vec<String> {
        vec![
            RECORD_VERSION.to_string(),
            self.email.clone(),
            self.nickname.clone(),
            self.balance.to_string(),
            self.birth_date.format(DATE_FORMAT).to_string(),
        ]
    }

    /// Decode the field list written by [`to_fields`](Self::to_fields).
    ///
    /// # Errors
    ///
    /// * `RecordError::FieldCount` - Empty list, or wrong length for the
    ///   version
    /// * `RecordError::UnsupportedVersion` - Version field is not `1`
    /// * `RecordError::InvalidField` - A field does not parse
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> RecordResult<Self> {
        let Some(version) = fields.first() else {
            return Err(RecordError::FieldCount {
                expected: FIELD_COUNT,
                got: 0,
            });
        };
        let version = version.as_ref();
        if version.trim().parse::<u32>() != Ok(RECORD_VERSION) {
            return Err(RecordError::UnsupportedVersion(version.to_string()));
        }
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: FIELD_COUNT,
                got: fields.len(),
            });
        }

        let email = non_empty("email", fields[1].as_ref())?;
        let nickname = fields[2].as_ref().to_string();

        let raw_balance = fields[3].as_ref();
        let balance = raw_balance
            .trim()
            .parse::<Credits>()
            .map_err(|_| invalid("balance", raw_balance))?;

        let raw_birth = fields[4].as_ref();
        let birth_date = NaiveDate::parse_from_str(raw_birth.trim(), DATE_FORMAT)
            .map_err(|_| invalid("birth_date", raw_birth))?;

        Ok(Self {
            email,
            nickname,
            balance,
            birth_date,
        })
    }
}

fn non_empty(field: &'static str, value: &str) -> RecordResult<String> {
    if value.trim().is_empty() {
        return Err(invalid(field, value));
    }
    Ok(value.to_string())
}

fn invalid(field: &'static str, value: &str) -> RecordError {
    RecordError::InvalidField {
        field,
        value: value.to_string(),
    }
}
