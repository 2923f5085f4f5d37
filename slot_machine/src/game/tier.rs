//! Difficulty tiers.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::constants::Credits;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,   // 3x3, one wildcard, 1-10 wagers, pays x10
    Medium, // 4x4, two wildcards, 10-30 wagers, pays x50
    Hard,   // 5x5, three wildcards, 30-50 wagers, pays x100
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Tier configuration for this difficulty.
    pub fn tier(self) -> &'static DifficultyTier {
        match self {
            Difficulty::Easy => &TIERS[0],
            Difficulty::Medium => &TIERS[1],
            Difficulty::Hard => &TIERS[2],
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts the menu number (`1`-`3`) or the name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "medium" => Ok(Difficulty::Medium),
            "3" | "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

/// Board and wager configuration for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTier {
    /// Rows and columns of the square board
    pub board_size: usize,

    /// Wildcards placed on every generated board (capped at the cell count)
    pub wildcard_limit: usize,

    /// Smallest accepted wager, inclusive
    pub min_wager: Credits,

    /// Largest accepted wager, inclusive
    pub max_wager: Credits,

    /// Multiple of the wager paid on a win
    pub payout_multiplier: Credits,
}

/// The three fixed tiers, indexed in [`Difficulty::ALL`] order.
pub const TIERS: [DifficultyTier; 3] = [
    DifficultyTier {
        board_size: 3,
        wildcard_limit: 1,
        min_wager: 1,
        max_wager: 10,
        payout_multiplier: 10,
    },
    DifficultyTier {
        board_size: 4,
        wildcard_limit: 2,
        min_wager: 10,
        max_wager: 30,
        payout_multiplier: 50,
    },
    DifficultyTier {
        board_size: 5,
        wildcard_limit: 3,
        min_wager: 30,
        max_wager: 50,
        payout_multiplier: 100,
    },
];

impl DifficultyTier {
    /// Validate a custom tier
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 {
            return Err("Board size must be at least 1".to_string());
        }

        if self.min_wager > self.max_wager {
            return Err("Min wager must not exceed max wager".to_string());
        }

        if self.payout_multiplier == 0 {
            return Err("Payout multiplier must be positive".to_string());
        }

        Ok(())
    }

    pub fn accepts_wager(&self, wager: Credits) -> bool {
        (self.min_wager..=self.max_wager).contains(&wager)
    }

    /// Number of wildcards the generator actually places.
    pub fn wildcards_placed(&self) -> usize {
        self.wildcard_limit.min(self.cell_count())
    }

    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Lines scored on a board of this size.
    pub fn line_count(&self) -> usize {
        2 * self.board_size + 2
    }
}
