//! Slot engine - board generation, line scoring and round orchestration.
//!
//! This module provides:
//! - The thirteen-rank symbol alphabet plus the wildcard
//! - Data-driven difficulty tiers
//! - Board generation under the wildcard placement policy
//! - Line extraction and win/bonus evaluation
//! - `GameSession`, which plays a round against a `PlayerAccount`

pub mod board;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod lines;
pub mod outcome;
pub mod session;
pub mod symbols;
pub mod tier;

pub use board::{Board, Cell};
pub use constants::Credits;
pub use errors::{BoardError, GameError, GameResult};
pub use generator::BoardGenerator;
pub use lines::{Line, LineId, lines};
pub use outcome::{
    Outcome, bonus, bonus_lines, evaluate, is_strict_sequence, line_is_bonus, line_wins, won,
    winning_lines,
};
pub use session::{GameSession, PlayResult};
pub use symbols::Symbol;
pub use tier::{Difficulty, DifficultyTier, TIERS};
