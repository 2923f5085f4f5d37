//! Game error types.

use thiserror::Error;

use super::constants::Credits;
use crate::wallet::WalletError;

/// Errors raised while playing a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Wager outside the tier's inclusive limits
    #[error("Wager {wager} out of range ({min}-{max})")]
    WagerOutOfRange {
        wager: Credits,
        min: Credits,
        max: Credits,
    },

    /// The account rejected the bet
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl GameError {
    pub fn is_wager_out_of_range(&self) -> bool {
        matches!(self, GameError::WagerOutOfRange { .. })
    }

    /// Message suitable for showing to the player before re-prompting.
    pub fn client_message(&self) -> String {
        match self {
            GameError::WagerOutOfRange { min, max, .. } => {
                format!("Wager must be between {min} and {max}")
            }
            GameError::Wallet(err) => err.to_string(),
        }
    }
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised when building a board from explicit rows or text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Unknown symbol: {0:?}")]
    UnknownSymbol(String),

    #[error("Board of size {size} needs {} cells, got {cells}", size * size)]
    CellCount { size: usize, cells: usize },

    #[error("Board is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}
