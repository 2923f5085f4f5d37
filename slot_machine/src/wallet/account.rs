//! Player account: balance and betting eligibility.

use chrono::{NaiveDate, Utc};
use log::{info, warn};

use super::{
    errors::{RecordResult, WalletError, WalletResult},
    models::{EntryType, Identity, WalletEntry},
    record::AccountRecord,
};
use crate::game::{
    Credits,
    constants::{ADULT_AGE, STARTING_BALANCE, WITHDRAWAL_MIN_BALANCE},
};

/// True when the holder is at least [`ADULT_AGE`] whole years old on `today`.
pub fn is_adult(birth_date: NaiveDate, today: NaiveDate) -> bool {
    today
        .years_since(birth_date)
        .is_some_and(|age| age >= ADULT_AGE)
}

/// A player's balance and eligibility.
///
/// Eligibility is derived from the birth date once, when the account is
/// built, and never re-evaluated afterwards. The balance only moves through
/// [`deposit`](Self::deposit), [`withdraw`](Self::withdraw),
/// [`place_bet`](Self::place_bet) and [`reward`](Self::reward); a failed
/// operation leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAccount {
    identity: Identity,
    birth_date: NaiveDate,
    balance: Credits,
    eligible: bool,
}

impl PlayerAccount {
    /// Account for a new registration, credited with the starting balance.
    pub fn register(identity: Identity, birth_date: NaiveDate, today: NaiveDate) -> Self {
        Self::open(identity, birth_date, STARTING_BALANCE, today)
    }

    /// Account with an explicit balance. Eligibility is computed against
    /// `today`.
    pub fn open(
        identity: Identity,
        birth_date: NaiveDate,
        balance: Credits,
        today: NaiveDate,
    ) -> Self {
        let eligible = is_adult(birth_date, today);
        Self {
            identity,
            birth_date,
            balance,
            eligible,
        }
    }

    /// Rebuild an account from its persisted record, re-deriving
    /// eligibility from the stored birth date.
    pub fn from_record(record: AccountRecord, today: NaiveDate) -> Self {
        Self::open(
            Identity::new(record.email, record.nickname),
            record.birth_date,
            record.balance,
            today,
        )
    }

    /// [`from_record`](Self::from_record) against the current UTC date.
    pub fn from_record_now(record: AccountRecord) -> Self {
        Self::from_record(record, Utc::now().date_naive())
    }

    /// Decode a record's fields and rebuild the account from it.
    pub fn from_fields<S: AsRef<str>>(fields: &[S], today: NaiveDate) -> RecordResult<Self> {
        Ok(Self::from_record(AccountRecord::from_fields(fields)?, today))
    }

    pub fn to_record(&self) -> AccountRecord {
        AccountRecord::new(
            self.identity.email.clone(),
            self.identity.nickname.clone(),
            self.balance,
            self.birth_date,
        )
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn balance(&self) -> Credits {
        self.balance
    }

    /// Whether this account may place bets.
    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    /// Add funds.
    ///
    /// # Errors
    ///
    /// * `WalletError::InvalidAmount` - `amount` is zero
    pub fn deposit(&mut self, amount: Credits) -> WalletResult<WalletEntry> {
        if amount == 0 {
            warn!("{}: rejected deposit of {amount}", self.identity.email);
            return Err(WalletError::InvalidAmount(amount));
        }
        Ok(self.credit(EntryType::Deposit, amount))
    }

    /// Take funds out.
    ///
    /// Requires the balance to be at least [`WITHDRAWAL_MIN_BALANCE`]
    /// regardless of the amount, and to cover the amount itself.
    ///
    /// # Errors
    ///
    /// * `WalletError::InsufficientFunds` - Balance below the floor or below
    ///   `amount`
    pub fn withdraw(&mut self, amount: Credits) -> WalletResult<WalletEntry> {
        if self.balance < WITHDRAWAL_MIN_BALANCE || self.balance < amount {
            warn!(
                "{}: rejected withdrawal of {amount} with balance {}",
                self.identity.email, self.balance
            );
            return Err(WalletError::InsufficientFunds {
                available: self.balance,
                required: amount.max(WITHDRAWAL_MIN_BALANCE),
            });
        }
        Ok(self.debit(EntryType::Withdrawal, amount))
    }

    /// Stake a wager.
    ///
    /// # Errors
    ///
    /// * `WalletError::Ineligible` - Holder is not allowed to bet (checked
    ///   first)
    /// * `WalletError::InsufficientFunds` - Balance below `amount`
    pub fn place_bet(&mut self, amount: Credits) -> WalletResult<WalletEntry> {
        if !self.eligible {
            warn!("{}: bet refused, not eligible", self.identity.email);
            return Err(WalletError::Ineligible);
        }
        if self.balance < amount {
            warn!(
                "{}: bet of {amount} refused with balance {}",
                self.identity.email, self.balance
            );
            return Err(WalletError::InsufficientFunds {
                available: self.balance,
                required: amount,
            });
        }
        Ok(self.debit(EntryType::Bet, amount))
    }

    /// Credit a payout. Always succeeds.
    pub fn reward(&mut self, amount: Credits) -> WalletEntry {
        self.credit(EntryType::Reward, amount)
    }

    fn credit(&mut self, entry_type: EntryType, amount: Credits) -> WalletEntry {
        self.balance = self.balance.saturating_add(amount);
        self.entry(entry_type, amount)
    }

    // Callers have already checked `amount <= balance`.
    fn debit(&mut self, entry_type: EntryType, amount: Credits) -> WalletEntry {
        self.balance -= amount;
        self.entry(entry_type, amount)
    }

    fn entry(&self, entry_type: EntryType, amount: Credits) -> WalletEntry {
        info!(
            "{}: {entry_type} of {amount}, balance {}",
            self.identity.email, self.balance
        );
        WalletEntry {
            entry_type,
            direction: entry_type.direction(),
            amount,
            balance_after: self.balance,
        }
    }
}
