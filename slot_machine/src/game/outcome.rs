//! Win and bonus evaluation.
//!
//! A board *wins* when any of its lines holds a single rank, with wildcards
//! standing in for that rank. A board earns a *bonus* when it does not win
//! and some wildcard-free line reads as a run of consecutive ranks, up or
//! down. The two results are mutually exclusive and a win is always checked
//! first.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    board::Board,
    constants::Credits,
    lines::{Line, LineId, lines},
    tier::DifficultyTier,
};

/// Result of scoring one board.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Bonus,
    Loss,
}

impl Outcome {
    /// Amount credited for this outcome. A win pays the tier multiple and
    /// a bonus returns the wager.
    pub fn payout(self, wager: Credits, tier: &DifficultyTier) -> Credits {
        match self {
            Outcome::Win => wager.saturating_mul(tier.payout_multiplier),
            Outcome::Bonus => wager,
            Outcome::Loss => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Bonus => write!(f, "bonus"),
            Outcome::Loss => write!(f, "loss"),
        }
    }
}

/// Whether a single line wins.
///
/// The first non-wildcard symbol sets the target; every other cell must be
/// that symbol or a wildcard. A line of only wildcards never wins.
pub fn line_wins(line: &Line) -> bool {
    let Some(target) = line.symbols.iter().copied().find(|s| !s.is_wild()) else {
        return false;
    };
    line.symbols.iter().all(|&s| s == target || s.is_wild())
}

/// Whether a single line qualifies for the bonus.
///
/// Any wildcard disqualifies the line outright, even when the remaining
/// symbols would form a run.
pub fn line_is_bonus(line: &Line) -> bool {
    if line.contains_wild() {
        return false;
    }
    let ranks: Option<Vec<usize>> = line.symbols.iter().map(|s| s.rank()).collect();
    ranks.is_some_and(|ranks| is_strict_sequence(&ranks))
}

/// True when `ranks` steps by exactly +1 or exactly -1 between every pair
/// of neighbours. Fewer than two values is never a sequence.
pub fn is_strict_sequence(ranks: &[usize]) -> bool {
    if ranks.len() < 2 {
        return false;
    }
    let ascending = ranks.windows(2).all(|w| w[1] == w[0] + 1);
    let descending = ranks.windows(2).all(|w| w[0] == w[1] + 1);
    ascending || descending
}

pub fn won(board: &Board) -> bool {
    lines(board).iter().any(line_wins)
}

/// Bonus never applies to a winning board.
pub fn bonus(board: &Board) -> bool {
    let lines = lines(board);
    !lines.iter().any(line_wins) && lines.iter().any(line_is_bonus)
}

pub fn evaluate(board: &Board) -> Outcome {
    let lines = lines(board);
    let outcome = if lines.iter().any(line_wins) {
        Outcome::Win
    } else if lines.iter().any(line_is_bonus) {
        Outcome::Bonus
    } else {
        Outcome::Loss
    };
    debug!("Evaluated board as {outcome}");
    outcome
}

/// Every winning line on the board.
pub fn winning_lines(board: &Board) -> Vec<LineId> {
    lines(board)
        .iter()
        .filter(|line| line_wins(line))
        .map(|line| line.id)
        .collect()
}

/// Every line that would qualify for the bonus, regardless of whether the
/// board also wins.
pub fn bonus_lines(board: &Board) -> Vec<LineId> {
    lines(board)
        .iter()
        .filter(|line| line_is_bonus(line))
        .map(|line| line.id)
        .collect()
}
