use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    constants::{ALPHABET, RANK_COUNT},
    errors::BoardError,
};

/// A single reel symbol: one of the thirteen ranks or the wildcard.
///
/// The declaration order of the ranks matches [`ALPHABET`], so the rank
/// index of a regular symbol is its position in that table.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Symbol {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    // Never drawn by the uniform fill; only placed by the wildcard policy.
    Wild,
}

impl Symbol {
    /// Rank index in `0..13`, or `None` for the wildcard.
    pub fn rank(self) -> Option<usize> {
        ALPHABET.iter().position(|&s| s == self)
    }

    /// Symbol with the given rank index.
    pub fn from_rank(rank: usize) -> Option<Self> {
        ALPHABET.get(rank).copied()
    }

    pub fn is_wild(self) -> bool {
        self == Self::Wild
    }

    /// Text form used by boards and records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Wild => "*",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = match s.trim().to_ascii_uppercase().as_str() {
            "*" => Self::Wild,
            "10" => Self::Ten,
            other => ALPHABET
                .into_iter()
                .find(|symbol| symbol.as_str() == other)
                .ok_or_else(|| BoardError::UnknownSymbol(s.to_string()))?,
        };
        Ok(symbol)
    }
}

/// Ranks are contiguous in declaration order.
const _: () = assert!(RANK_COUNT == Symbol::Wild as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_matches_alphabet() {
        for (idx, symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(symbol.rank(), Some(idx));
            assert_eq!(Symbol::from_rank(idx), Some(*symbol));
        }
        assert_eq!(Symbol::Wild.rank(), None);
        assert_eq!(Symbol::from_rank(RANK_COUNT), None);
    }

    #[test]
    fn test_parse_accepts_both_ten_forms() {
        assert_eq!("T".parse::<Symbol>().unwrap(), Symbol::Ten);
        assert_eq!("10".parse::<Symbol>().unwrap(), Symbol::Ten);
        assert_eq!("q".parse::<Symbol>().unwrap(), Symbol::Queen);
        assert_eq!("*".parse::<Symbol>().unwrap(), Symbol::Wild);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "B".parse::<Symbol>().unwrap_err();
        assert!(matches!(err, BoardError::UnknownSymbol(s) if s == "B"));
    }

    #[test]
    fn test_display_round_trips() {
        for symbol in ALPHABET.iter().chain([Symbol::Wild].iter()) {
            assert_eq!(symbol.to_string().parse::<Symbol>().unwrap(), *symbol);
        }
    }
}
