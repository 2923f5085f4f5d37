//! # Slot Machine
//!
//! A square-grid slot engine with a player wallet.
//!
//! Each round fills an N×N board with the thirteen card ranks, scatters a
//! tier-dependent number of wildcards, and scores every row, column and both
//! diagonals. Any line of one symbol (wildcards substituting) is a win paying
//! the tier's multiplier; failing that, any wildcard-free line forming a
//! strict unit-step run refunds the wager.
//!
//! ## Core Modules
//!
//! - [`game`]: Symbols, difficulty tiers, board generation, line scoring and
//!   the `GameSession` that plays a round
//! - [`wallet`]: `PlayerAccount`, ledger entries and the persisted record
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use slot_machine::{Difficulty, GameSession, Identity, PlayerAccount};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let birth = NaiveDate::from_ymd_opt(1990, 7, 4).unwrap();
//! let mut account = PlayerAccount::register(Identity::new("ana@example.com", "ana"), birth, today);
//!
//! let mut session = GameSession::seeded(42);
//! let result = session.play(&mut account, 5, Difficulty::Easy.tier()).unwrap();
//! println!("{}\n{}", result.board, result.outcome);
//! assert_eq!(account.balance(), 50 - 5 + result.payout);
//! ```

/// Board, lines, outcome evaluation and round orchestration.
pub mod game;
pub use game::{
    Board, BoardGenerator, Credits, Difficulty, DifficultyTier, GameError, GameResult,
    GameSession, Outcome, PlayResult, Symbol, TIERS,
    constants::{self, STARTING_BALANCE, WITHDRAWAL_MIN_BALANCE},
};

/// Player balance, eligibility and persistence.
pub mod wallet;
pub use wallet::{AccountRecord, AccountStore, Identity, PlayerAccount, WalletError};
