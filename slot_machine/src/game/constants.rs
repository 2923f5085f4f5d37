use super::symbols::Symbol;

/// Whole currency units. Balances, wagers and payouts never deal in
/// fractions.
pub type Credits = u64;

/// Balance credited to a freshly registered account.
pub const STARTING_BALANCE: Credits = 50;

/// A withdrawal is only allowed while the balance is at least this much,
/// independent of the amount being withdrawn.
pub const WITHDRAWAL_MIN_BALANCE: Credits = 100;

/// Minimum age, in whole years, for an account to be allowed to bet.
pub const ADULT_AGE: u32 = 18;

/// Version tag written as the first field of every account record.
pub const RECORD_VERSION: u32 = 1;

/// Number of regular (rankable) symbols.
pub const RANK_COUNT: usize = 13;

/// Regular symbols in rank order. The wildcard is not part of the alphabet.
pub const ALPHABET: [Symbol; RANK_COUNT] = [
    Symbol::Ace,
    Symbol::Two,
    Symbol::Three,
    Symbol::Four,
    Symbol::Five,
    Symbol::Six,
    Symbol::Seven,
    Symbol::Eight,
    Symbol::Nine,
    Symbol::Ten,
    Symbol::Jack,
    Symbol::Queen,
    Symbol::King,
];
