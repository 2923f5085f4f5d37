//! Simulation configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use chrono::NaiveDate;
use slot_machine::{Credits, Difficulty};

const DEFAULT_ROUNDS: u64 = 100;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Complete simulation configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Tier to play on
    pub difficulty: Difficulty,
    /// Rounds to attempt before stopping
    pub rounds: u64,
    /// Wager per round
    pub wager: Credits,
    /// Credited on top of the starting balance before the first round
    pub deposit: Credits,
    /// Fixed seed for a reproducible run; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Birth date of the simulated player
    pub birth_date: NaiveDate,
}

/// Values given on the command line. Each one beats its environment variable.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub difficulty: Option<Difficulty>,
    pub rounds: Option<u64>,
    pub wager: Option<Credits>,
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `overrides` - Values parsed from CLI args
    ///
    /// # Errors
    ///
    /// Returns error if `SIM_DIFFICULTY`, `SIM_SEED` or `SIM_BIRTH_DATE` is
    /// set but cannot be parsed
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let difficulty = match overrides.difficulty {
            Some(difficulty) => difficulty,
            None => parse_env_strict("SIM_DIFFICULTY", str::parse::<Difficulty>)?
                .unwrap_or(Difficulty::Easy),
        };

        let rounds = overrides
            .rounds
            .unwrap_or_else(|| parse_env_or("SIM_ROUNDS", DEFAULT_ROUNDS));

        // Default wager is the tier minimum, so any difficulty works out of the box.
        let wager = overrides
            .wager
            .unwrap_or_else(|| parse_env_or("SIM_WAGER", difficulty.tier().min_wager));

        let deposit = parse_env_or("SIM_DEPOSIT", 0);

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => parse_env_strict("SIM_SEED", str::parse::<u64>)?,
        };

        let birth_date = parse_env_strict("SIM_BIRTH_DATE", |v| {
            NaiveDate::parse_from_str(v, DATE_FORMAT).map_err(|e| e.to_string())
        })?
        .unwrap_or(default_birth_date());

        Ok(SimConfig {
            difficulty,
            rounds,
            wager,
            deposit,
            seed,
            birth_date,
        })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Invalid {
                var: "SIM_ROUNDS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let tier = self.difficulty.tier();
        if !tier.accepts_wager(self.wager) {
            return Err(ConfigError::Invalid {
                var: "SIM_WAGER".to_string(),
                reason: format!(
                    "Must be between {} and {} on {}",
                    tier.min_wager, tier.max_wager, self.difficulty
                ),
            });
        }

        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            difficulty: Difficulty::Easy,
            rounds: DEFAULT_ROUNDS,
            wager: Difficulty::Easy.tier().min_wager,
            deposit: 0,
            seed: None,
            birth_date: default_birth_date(),
        }
    }
}

fn default_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default()
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Like [`parse_env_or`], but a value that is set and fails to parse is an
/// error instead of silently falling back.
fn parse_env_strict<T, E, F>(key: &str, parse: F) -> Result<Option<T>, ConfigError>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(v) => parse(v.trim()).map(Some).map_err(|e| ConfigError::Invalid {
            var: key.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "SIM_DIFFICULTY",
        "SIM_ROUNDS",
        "SIM_WAGER",
        "SIM_DEPOSIT",
        "SIM_SEED",
        "SIM_BIRTH_DATE",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment run under #[serial].
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = SimConfig::from_env(Overrides::default()).unwrap();
        assert_eq!(config, SimConfig::default());
        config.validate().unwrap();
    }

    #[test]
    #[serial]
    fn test_reads_environment() {
        clear_env();
        set_env("SIM_DIFFICULTY", "3");
        set_env("SIM_ROUNDS", "25");
        set_env("SIM_WAGER", "45");
        set_env("SIM_DEPOSIT", "500");
        set_env("SIM_SEED", "99");
        set_env("SIM_BIRTH_DATE", "1970-06-15");

        let config = SimConfig::from_env(Overrides::default()).unwrap();
        clear_env();

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.rounds, 25);
        assert_eq!(config.wager, 45);
        assert_eq!(config.deposit, 500);
        assert_eq!(config.seed, Some(99));
        assert_eq!(
            config.birth_date,
            NaiveDate::from_ymd_opt(1970, 6, 15).unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_overrides_win() {
        clear_env();
        set_env("SIM_DIFFICULTY", "easy");
        set_env("SIM_ROUNDS", "5");

        let config = SimConfig::from_env(Overrides {
            difficulty: Some(Difficulty::Medium),
            rounds: Some(7),
            wager: None,
            seed: Some(1),
        })
        .unwrap();
        clear_env();

        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.rounds, 7);
        // Wager default follows the chosen tier.
        assert_eq!(config.wager, 10);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    #[serial]
    fn test_bad_difficulty_is_an_error() {
        clear_env();
        set_env("SIM_DIFFICULTY", "nightmare");
        let err = SimConfig::from_env(Overrides::default()).unwrap_err();
        clear_env();

        let ConfigError::Invalid { var, .. } = err;
        assert_eq!(var, "SIM_DIFFICULTY");
    }

    #[test]
    #[serial]
    fn test_bad_birth_date_is_an_error() {
        clear_env();
        set_env("SIM_BIRTH_DATE", "15/06/1970");
        let err = SimConfig::from_env(Overrides::default()).unwrap_err();
        clear_env();

        assert!(err.to_string().contains("SIM_BIRTH_DATE"));
    }

    #[test]
    #[serial]
    fn test_bad_seed_is_an_error() {
        clear_env();
        set_env("SIM_SEED", "not-a-number");
        let err = SimConfig::from_env(Overrides::default()).unwrap_err();

        // A CLI seed replaces the broken variable entirely.
        let config = SimConfig::from_env(Overrides {
            seed: Some(5),
            ..Overrides::default()
        })
        .unwrap();
        clear_env();

        assert!(err.to_string().contains("SIM_SEED"));
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_validation_rejects_zero_rounds() {
        let config = SimConfig {
            rounds: 0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SIM_ROUNDS"));
    }

    #[test]
    fn test_validation_rejects_wager_outside_tier() {
        let config = SimConfig {
            difficulty: Difficulty::Hard,
            wager: 10,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("SIM_WAGER"));
        assert!(err.to_string().contains("30"));
    }
}
