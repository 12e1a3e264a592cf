//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through a RandomSource. Production runs use
//! SimRng streams derived from the single master seed in SimConfig.
//!
//! Each round gets its own stream, seeded deterministically from
//! (master_seed XOR round). This means:
//!   - A round's population is reproducible in isolation.
//!   - Changing the round count never changes earlier rounds.

use crate::{
    error::{SimError, SimResult},
    types::Round,
};
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Anything that can hand out uniform draws in [0.0, 1.0).
///
/// Failures are fatal for the round that asked: the caller propagates
/// them and the run aborts.
pub trait RandomSource {
    fn next_f64(&mut self) -> SimResult<f64>;
}

/// A deterministic PCG stream for a single round.
pub struct SimRng {
    pub round: Round,
    inner: Pcg64Mcg,
}

impl SimRng {
    /// Stream `round` of the run seeded with `master_seed`.
    pub fn new(master_seed: u64, round: Round) -> Self {
        let derived_seed = master_seed ^ round.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            round,
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Standalone stream, for tests and tooling.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, 0)
    }
}

impl RandomSource for SimRng {
    fn next_f64(&mut self) -> SimResult<f64> {
        let mut buf = [0u8; 8];
        self.inner
            .try_fill_bytes(&mut buf)
            .map_err(|e| SimError::RandomSource(format!("round {}: {e}", self.round)))?;
        let bits = u64::from_le_bytes(buf);
        Ok((bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64))
    }
}

/// Hands out one stream per round for a single run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_round(&self, round: Round) -> SimRng {
        SimRng::new(self.master_seed, round)
    }
}
