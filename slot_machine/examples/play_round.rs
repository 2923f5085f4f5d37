//! Play Round Example
//!
//! Registers a player, plays a few rounds on each difficulty and prints the
//! boards and the resulting balance.

use chrono::NaiveDate;
use slot_machine::{
    Difficulty, GameSession, Identity, PlayerAccount,
    game::{bonus_lines, winning_lines},
};

fn main() {
    println!("=== Slot Machine Example ===\n");

    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let birth = NaiveDate::from_ymd_opt(1992, 8, 14).unwrap();
    let mut account =
        PlayerAccount::register(Identity::new("demo@example.com", "demo"), birth, today);
    account.deposit(500).unwrap();
    println!("Starting balance: {}\n", account.balance());

    let mut session = GameSession::seeded(2025);
    for difficulty in Difficulty::ALL {
        let tier = difficulty.tier();
        println!("--- {difficulty} ({0}x{0}) ---", tier.board_size);

        for _ in 0..3 {
            match session.play(&mut account, tier.min_wager, tier) {
                Ok(result) => {
                    println!("{}", result.board);
                    println!(
                        "{} | wins: {} | bonus lines: {} | paid {} | balance {}\n",
                        result.outcome,
                        winning_lines(&result.board).len(),
                        bonus_lines(&result.board).len(),
                        result.payout,
                        result.balance_after
                    );
                }
                Err(err) => {
                    println!("{}\n", err.client_message());
                    break;
                }
            }
        }
    }

    println!("Final balance: {}", account.balance());
}
