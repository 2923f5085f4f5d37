//! One round of play: wager check, bet, board, evaluation, payout.

use log::info;
use rand::{Rng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{
    board::Board,
    constants::Credits,
    errors::{GameError, GameResult},
    generator::BoardGenerator,
    outcome::{self, Outcome},
    tier::DifficultyTier,
};
use crate::wallet::{PlayerAccount, WalletEntry};

/// Everything a caller needs to render a round and persist the account.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayResult {
    pub board: Board,
    pub outcome: Outcome,
    pub wager: Credits,
    /// Amount credited back (zero on a loss)
    pub payout: Credits,
    pub balance_after: Credits,
    /// Ledger entries produced by this round, bet first
    pub entries: Vec<WalletEntry>,
}

impl PlayResult {
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Win
    }

    pub fn bonus(&self) -> bool {
        self.outcome == Outcome::Bonus
    }
}

/// Plays rounds against a player account.
///
/// The session owns the board generator; it holds no per-account state, so
/// one session may serve any number of accounts in turn.
#[derive(Debug)]
pub struct GameSession<R = StdRng> {
    generator: BoardGenerator<R>,
}

impl GameSession<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(BoardGenerator::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_generator(BoardGenerator::seeded(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_generator(generator: BoardGenerator<R>) -> Self {
        Self { generator }
    }

    /// Play one round.
    ///
    /// # Errors
    ///
    /// * `GameError::WagerOutOfRange` - Wager outside the tier's limits; the
    ///   account is not touched
    /// * `GameError::Wallet` - The account refused the bet (ineligible or
    ///   insufficient funds); the account is not touched
    pub fn play(
        &mut self,
        account: &mut PlayerAccount,
        wager: Credits,
        tier: &DifficultyTier,
    ) -> GameResult<PlayResult> {
        if !tier.accepts_wager(wager) {
            return Err(GameError::WagerOutOfRange {
                wager,
                min: tier.min_wager,
                max: tier.max_wager,
            });
        }

        let mut entries = vec![account.place_bet(wager)?];

        let board = self.generator.generate(tier);
        let outcome = outcome::evaluate(&board);
        let payout = outcome.payout(wager, tier);
        if outcome != Outcome::Loss {
            entries.push(account.reward(payout));
        }

        info!(
            "{} played {wager}: {outcome}, paid {payout}, balance {}",
            account.identity().nickname,
            account.balance()
        );

        Ok(PlayResult {
            board,
            outcome,
            wager,
            payout,
            balance_after: account.balance(),
            entries,
        })
    }
}
