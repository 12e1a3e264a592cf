use crate::{
    error::{SimError, SimResult},
    types::Round,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROUNDS: Round = 1000;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PROGRESS_LOG_INTERVAL: Round = 100;

/// Run-level settings. Population size, winner count and score weights
/// are fixed constants and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Rounds to simulate.
    pub rounds: Round,
    /// Master seed; every round stream derives from it.
    pub seed: u64,
    /// LogProgress reports every this many rounds.
    pub progress_log_interval: Round,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds:                DEFAULT_ROUNDS,
            seed:                  DEFAULT_SEED,
            progress_log_interval: DEFAULT_PROGRESS_LOG_INTERVAL,
        }
    }
}

impl SimConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SimConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Config with hardcoded defaults for use in tests.
    pub fn default_test() -> Self {
        Self {
            rounds:                5,
            seed:                  0x5EED_0000_1234_ABCD,
            progress_log_interval: 1,
        }
    }

    /// A zero round count is allowed and yields an empty run.
    pub fn validate(&self) -> SimResult<()> {
        if self.progress_log_interval == 0 {
            return Err(SimError::InvalidConfig(
                "progress_log_interval must be > 0".into(),
            ));
        }
        Ok(())
    }
}
