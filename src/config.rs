//! Simulator settings read from the environment at startup.
//!
//! Only the binary reads these; the engine takes everything through
//! constructor arguments.

use std::path::PathBuf;
use std::str::FromStr;

use error::ConfigError;

use crate::battle::DEFAULT_MAX_ROUNDS;
use crate::log::{DEFAULT_LOG_PATH, LogFormat};

pub const ENV_SEED: &str = "BATTLE_SEED";
pub const ENV_MAX_ROUNDS: &str = "BATTLE_MAX_ROUNDS";
pub const ENV_LOG_PATH: &str = "BATTLE_LOG_PATH";
pub const ENV_LOG_FORMAT: &str = "BATTLE_LOG_FORMAT";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub seed: u64,
    pub max_rounds: u32,
    pub log_path: PathBuf,
    pub log_format: LogFormat,
    pub color: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            max_rounds: DEFAULT_MAX_ROUNDS,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_format: LogFormat::default(),
            color: true,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = parse(ENV_SEED, &raw, "an unsigned 64-bit integer")?;
        }
        if let Some(raw) = lookup(ENV_MAX_ROUNDS) {
            let rounds: u32 = parse(ENV_MAX_ROUNDS, &raw, "a positive integer")?;
            if rounds == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_MAX_ROUNDS,
                    value: raw,
                    expected: "a positive integer",
                });
            }
            config.max_rounds = rounds;
        }
        if let Some(raw) = lookup(ENV_LOG_PATH).filter(|p| !p.trim().is_empty()) {
            config.log_path = PathBuf::from(raw);
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = raw.parse()?;
        }
        // https://no-color.org: any non-empty value disables colour
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str, expected: &'static str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
        expected,
    })
}
