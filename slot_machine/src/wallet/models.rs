//! Wallet data models.

use serde::{Deserialize, Serialize};

use crate::game::Credits;

/// Who owns an account. Supplied by the registration/login flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Unique login key
    pub email: String,
    /// Name shown to the player
    pub nickname: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            nickname: nickname.into(),
        }
    }
}

/// One balance change. Every successful account operation produces exactly
/// one entry, which the caller may persist on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletEntry {
    pub entry_type: EntryType,
    pub direction: EntryDirection,
    pub amount: Credits,
    pub balance_after: Credits,
}

/// Entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryDirection {
    Debit,
    Credit,
}

impl std::fmt::Display for EntryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryDirection::Debit => write!(f, "debit"),
            EntryDirection::Credit => write!(f, "credit"),
        }
    }
}

/// Entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    Deposit,
    Withdrawal,
    Bet,
    Reward,
}

impl EntryType {
    pub fn direction(self) -> EntryDirection {
        match self {
            EntryType::Deposit | EntryType::Reward => EntryDirection::Credit,
            EntryType::Withdrawal | EntryType::Bet => EntryDirection::Debit,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::Deposit => write!(f, "deposit"),
            EntryType::Withdrawal => write!(f, "withdrawal"),
            EntryType::Bet => write!(f, "bet"),
            EntryType::Reward => write!(f, "reward"),
        }
    }
}
