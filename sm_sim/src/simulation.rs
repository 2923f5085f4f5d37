//! Plays a configured number of rounds with one simulated player.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Error};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;
use slot_machine::{
    Credits, Difficulty, GameError, GameSession, Identity, Outcome, PlayerAccount, WalletError,
    wallet::AccountStore,
};

use crate::config::SimConfig;

const SIM_EMAIL: &str = "sim@slot.local";
const SIM_NICKNAME: &str = "sim";

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Completed,
    OutOfCredits,
    Ineligible,
    Interrupted,
}

/// Totals for one run.
///
/// `final_balance == starting_balance + total_paid - total_wagered` always
/// holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub difficulty: Difficulty,
    pub rounds_played: u64,
    pub wins: u64,
    pub bonuses: u64,
    pub losses: u64,
    pub total_wagered: Credits,
    pub total_paid: Credits,
    pub starting_balance: Credits,
    pub final_balance: Credits,
    pub stopped_reason: StopReason,
}

impl SimulationReport {
    fn new(difficulty: Difficulty, starting_balance: Credits) -> Self {
        Self {
            difficulty,
            rounds_played: 0,
            wins: 0,
            bonuses: 0,
            losses: 0,
            total_wagered: 0,
            total_paid: 0,
            starting_balance,
            final_balance: starting_balance,
            stopped_reason: StopReason::Completed,
        }
    }

    fn record(&mut self, outcome: Outcome, wager: Credits, payout: Credits) {
        self.rounds_played += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Bonus => self.bonuses += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.total_wagered += wager;
        self.total_paid += payout;
    }

    /// Fraction of wagered credits paid back.
    pub fn return_to_player(&self) -> f64 {
        if self.total_wagered == 0 {
            return 0.0;
        }
        self.total_paid as f64 / self.total_wagered as f64
    }
}

pub struct Simulation<S> {
    config: SimConfig,
    session: GameSession,
    store: S,
    stop: Arc<AtomicBool>,
}

impl<S: AccountStore> Simulation<S> {
    pub fn new(config: SimConfig, store: S, stop: Arc<AtomicBool>) -> Self {
        let session = match config.seed {
            Some(seed) => GameSession::seeded(seed),
            None => GameSession::new(),
        };
        Self {
            config,
            session,
            store,
            stop,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register the simulated player as of `today` and play until the round
    /// count is reached, the player can no longer bet, or `stop` is raised.
    /// The account record is saved after every balance change.
    ///
    /// # Errors
    ///
    /// Fails if the store rejects a save, or on a game error other than the
    /// player running out of credits or being ineligible.
    pub fn run(&mut self, today: NaiveDate) -> Result<SimulationReport, Error> {
        let SimConfig {
            difficulty,
            rounds,
            wager,
            deposit,
            birth_date,
            ..
        } = self.config;
        let tier = difficulty.tier();

        let mut account =
            PlayerAccount::register(Identity::new(SIM_EMAIL, SIM_NICKNAME), birth_date, today);
        if deposit > 0 {
            account.deposit(deposit)?;
        }
        self.save(&account)?;

        info!(
            "Simulating {rounds} rounds on {difficulty} at {wager} per round, balance {}",
            account.balance()
        );

        let mut report = SimulationReport::new(difficulty, account.balance());
        while report.rounds_played < rounds {
            if self.stop.load(Ordering::SeqCst) {
                report.stopped_reason = StopReason::Interrupted;
                break;
            }

            match self.session.play(&mut account, wager, tier) {
                Ok(result) => {
                    debug!("Round {}:\n{}", report.rounds_played + 1, result.board);
                    report.record(result.outcome, result.wager, result.payout);
                    self.save(&account)?;
                }
                Err(GameError::Wallet(WalletError::InsufficientFunds { available, .. })) => {
                    warn!("Stopping: balance {available} cannot cover wager {wager}");
                    report.stopped_reason = StopReason::OutOfCredits;
                    break;
                }
                Err(GameError::Wallet(WalletError::Ineligible)) => {
                    warn!("Stopping: player is not eligible to bet");
                    report.stopped_reason = StopReason::Ineligible;
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        report.final_balance = account.balance();
        info!(
            "Finished after {} rounds ({:?}): {} wins, {} bonuses, {} losses, balance {}",
            report.rounds_played,
            report.stopped_reason,
            report.wins,
            report.bonuses,
            report.losses,
            report.final_balance
        );

        Ok(report)
    }

    fn save(&mut self, account: &PlayerAccount) -> Result<(), Error> {
        self.store
            .save(&account.to_record())
            .with_context(|| format!("Failed to save account {}", account.identity().email))
    }
}
