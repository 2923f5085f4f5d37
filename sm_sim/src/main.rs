//! Slot machine simulation runner.
//!
//! Registers one simulated player, plays a configured number of rounds
//! through `GameSession`, saving the account after every balance change,
//! and prints a JSON report.

mod config;
mod simulation;

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use anyhow::{Context, Error};
use chrono::Utc;
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use slot_machine::wallet::MemoryAccountStore;

use crate::{
    config::{Overrides, SimConfig},
    simulation::Simulation,
};

const HELP: &str = "\
Run a slot machine simulation

USAGE:
  sm_sim [OPTIONS]

OPTIONS:
  --difficulty LEVEL   easy, medium, hard or 1-3   [default: env SIM_DIFFICULTY or easy]
  --rounds     N       Rounds to play              [default: env SIM_ROUNDS or 100]
  --wager      N       Wager per round             [default: env SIM_WAGER or tier minimum]
  --seed       N       Seed for reproducible runs  [default: env SIM_SEED or random]

FLAGS:
  -h, --help           Print help information

ENVIRONMENT:
  SIM_DEPOSIT          Credits deposited before the first round
  SIM_BIRTH_DATE       Player birth date, YYYY-MM-DD
  RUST_LOG             Log level (e.g., debug to print every board)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        difficulty: pargs.opt_value_from_str("--difficulty")?,
        rounds: pargs.opt_value_from_str("--rounds")?,
        wager: pargs.opt_value_from_str("--wager")?,
        seed: pargs.opt_value_from_str("--seed")?,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = SimConfig::from_env(overrides)?;
    config.validate()?;

    // Finish the current round and report on Ctrl-C.
    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();
    set_handler(move || flag.store(true, Ordering::SeqCst))?;

    info!("Starting simulation with {config:?}");
    let mut simulation = Simulation::new(config, MemoryAccountStore::new(), stop);
    let report = simulation.run(Utc::now().date_naive())?;

    info!(
        "Return to player: {:.2}%",
        report.return_to_player() * 100.0
    );
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");

    Ok(())
}
