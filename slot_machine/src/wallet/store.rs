//! Persistence seam for account records.

use std::collections::HashMap;

use super::{errors::RecordError, record::AccountRecord};

/// Where account records live between sessions. Keyed by email.
///
/// The core never calls a store itself; hosts save the record returned by
/// [`PlayerAccount::to_record`](super::PlayerAccount::to_record) after each
/// mutation they want durable.
pub trait AccountStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self, email: &str) -> Result<Option<AccountRecord>, Self::Error>;

    /// Insert or replace the record for `record.email`.
    fn save(&mut self, record: &AccountRecord) -> Result<(), Self::Error>;
}

/// In-process store holding each record in its encoded field-list form.
#[derive(Debug, Default, Clone)]
pub struct MemoryAccountStore {
    rows: HashMap<String, Vec<String>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw fields as last saved.
    pub fn fields(&self, email: &str) -> Option<&[String]> {
        self.rows.get(email).map(Vec::as_slice)
    }
}

impl AccountStore for MemoryAccountStore {
    type Error = RecordError;

    fn load(&self, email: &str) -> Result<Option<AccountRecord>, Self::Error> {
        self.rows
            .get(email)
            .map(|fields| AccountRecord::from_fields(fields))
            .transpose()
    }

    fn save(&mut self, record: &AccountRecord) -> Result<(), Self::Error> {
        self.rows.insert(record.email.clone(), record.to_fields());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(balance: u64) -> AccountRecord {
        AccountRecord::new(
            "bo@example.com",
            "bo",
            balance,
            NaiveDate::from_ymd_opt(1980, 12, 1).unwrap(),
        )
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryAccountStore::new();
        assert!(store.is_empty());
        assert_eq!(store.load("bo@example.com").unwrap(), None);

        store.save(&record(10)).unwrap();
        assert_eq!(store.load("bo@example.com").unwrap(), Some(record(10)));
        assert_eq!(store.fields("bo@example.com").unwrap()[0], "1");
    }

    #[test]
    fn test_save_replaces() {
        let mut store = MemoryAccountStore::new();
        store.save(&record(10)).unwrap();
        store.save(&record(99)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load("bo@example.com").unwrap().unwrap().balance, 99);
    }
}
