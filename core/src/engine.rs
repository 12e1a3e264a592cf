//! The simulation engine: runs rounds in order and accumulates their
//! means.
//!
//! RULES:
//!   - Rounds execute strictly in order, 1..=rounds, on one thread.
//!   - Each round gets its own RNG stream from the RngBank.
//!   - RunningTotals keep full precision; rounding happens only when
//!     values leave the engine (progress fields, final report).

use crate::{
    config::SimConfig,
    error::SimResult,
    progress::{progress_fields, ProgressObserver},
    rng::RngBank,
    round::{RoundResult, RoundRunner, TopKRound},
    types::Round,
};

/// Sums of per-round means for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningTotals {
    pub sum_average_skill: f64,
    pub sum_average_luck:  f64,
    pub rounds_completed:  Round,
}

impl RunningTotals {
    /// Fold one round in. Returns the new completed count.
    pub fn record(&mut self, result: &RoundResult) -> Round {
        self.sum_average_skill += result.average_skill;
        self.sum_average_luck += result.average_luck;
        self.rounds_completed += 1;
        self.rounds_completed
    }

    /// Means over the rounds recorded so far; zero before the first.
    pub fn running_means(&self) -> RoundResult {
        if self.rounds_completed == 0 {
            return RoundResult::default();
        }
        let n = self.rounds_completed as f64;
        RoundResult {
            average_skill: self.sum_average_skill / n,
            average_luck:  self.sum_average_luck / n,
        }
    }
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub rounds: Round,
    /// Unrounded means across rounds.
    pub mean_skill: f64,
    pub mean_luck:  f64,
    /// The same means rounded to the nearest integer.
    pub final_average_skill: i64,
    pub final_average_luck:  i64,
}

impl SimulationOutcome {
    fn from_totals(totals: &RunningTotals) -> Self {
        let means = totals.running_means();
        Self {
            rounds:              totals.rounds_completed,
            mean_skill:          means.average_skill,
            mean_luck:           means.average_luck,
            final_average_skill: means.average_skill.round() as i64,
            final_average_luck:  means.average_luck.round() as i64,
        }
    }
}

pub struct SimulationDriver<R: RoundRunner = TopKRound> {
    pub config: SimConfig,
    rng_bank:   RngBank,
    runner:     R,
}

impl SimulationDriver<TopKRound> {
    /// Build a driver running the standard 20,000 / top-10 round.
    pub fn build(config: SimConfig) -> SimResult<Self> {
        Self::with_runner(config, TopKRound::default())
    }

    pub fn build_test() -> SimResult<Self> {
        Self::build(SimConfig::default_test())
    }
}

impl<R: RoundRunner> SimulationDriver<R> {
    pub fn with_runner(config: SimConfig, runner: R) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            rng_bank: RngBank::new(config.seed),
            config,
            runner,
        })
    }

    /// Run a single round on its own stream.
    pub fn run_round(&mut self, round: Round) -> SimResult<RoundResult> {
        let mut rng = self.rng_bank.for_round(round);
        self.runner
            .run_round(round, &mut rng)
            .inspect_err(|e| log::error!("round={round} {}: aborted: {e}", self.runner.name()))
    }

    /// Run the configured number of rounds.
    pub fn run(&mut self, observer: &mut dyn ProgressObserver) -> SimResult<SimulationOutcome> {
        self.run_simulation(self.config.rounds, observer)
    }

    /// Run `rounds` rounds, reporting to `observer` after each.
    pub fn run_simulation(
        &mut self,
        rounds: Round,
        observer: &mut dyn ProgressObserver,
    ) -> SimResult<SimulationOutcome> {
        log::info!(
            "run: starting {rounds} rounds of '{}' (seed={})",
            self.runner.name(),
            self.rng_bank.master_seed()
        );

        let mut totals = RunningTotals::default();
        for round in 1..=rounds {
            let result = self.run_round(round)?;
            let completed = totals.record(&result);
            observer.on_progress(completed, rounds, &progress_fields(&totals.running_means()));
        }

        let outcome = SimulationOutcome::from_totals(&totals);
        log::info!(
            "run: finished {} rounds, skill={:.3} luck={:.3}",
            outcome.rounds,
            outcome.mean_skill,
            outcome.mean_luck
        );
        Ok(outcome)
    }
}
