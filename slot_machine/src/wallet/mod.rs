//! Player wallet: balance, eligibility and the persisted account record.
//!
//! This module implements:
//! - `PlayerAccount`, the only way to move a player's balance
//! - One `WalletEntry` per successful mutation, for hosts that keep a ledger
//! - A versioned, field-list `AccountRecord` and the `AccountStore` seam
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use slot_machine::wallet::{AccountStore, Identity, MemoryAccountStore, PlayerAccount};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let birth = NaiveDate::from_ymd_opt(1990, 7, 4).unwrap();
//! let mut account = PlayerAccount::register(Identity::new("ana@example.com", "ana"), birth, today);
//!
//! account.deposit(100).unwrap();
//! assert_eq!(account.balance(), 150);
//!
//! let mut store = MemoryAccountStore::new();
//! store.save(&account.to_record()).unwrap();
//! let loaded = store.load("ana@example.com").unwrap().unwrap();
//! assert_eq!(PlayerAccount::from_record(loaded, today), account);
//! ```

pub mod account;
pub mod errors;
pub mod models;
pub mod record;
pub mod store;

pub use account::{PlayerAccount, is_adult};
pub use errors::{RecordError, RecordResult, WalletError, WalletResult};
pub use models::{EntryDirection, EntryType, Identity, WalletEntry};
pub use record::AccountRecord;
pub use store::{AccountStore, MemoryAccountStore};
