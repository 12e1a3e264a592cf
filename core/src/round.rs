//! One round: generate → select → aggregate.
//!
//! RULE: Every round implementation goes through RoundRunner.
//! The engine calls run_round() once per round, in round order,
//! handing it that round's RNG stream. A round never reads state
//! left behind by an earlier round.

use crate::{
    aggregate::{average_of, Attribute},
    error::SimResult,
    population::{generate_population, Entity, POPULATION_SIZE},
    rng::RandomSource,
    selection::{select_top, WINNERS_PER_ROUND},
    types::Round,
};

/// Means of the winners of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundResult {
    pub average_skill: f64,
    pub average_luck:  f64,
}

/// The contract every round implementation must fulfill.
pub trait RoundRunner {
    /// Stable name, used in logs.
    fn name(&self) -> &'static str;

    /// Run round `round` using `rng` as the only source of randomness.
    fn run_round(&mut self, round: Round, rng: &mut dyn RandomSource) -> SimResult<RoundResult>;
}

/// Select the top `winners` of an existing population and average them.
pub fn evaluate(population: &[Entity], winners: usize) -> RoundResult {
    let top = select_top(population, winners);
    RoundResult {
        average_skill: average_of(&top, Attribute::Skill),
        average_luck:  average_of(&top, Attribute::Luck),
    }
}

/// The standard round: 20,000 players, top 10.
#[derive(Debug, Clone)]
pub struct TopKRound {
    population_size: usize,
    winners:         usize,
}

impl Default for TopKRound {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SIZE,
            winners:         WINNERS_PER_ROUND,
        }
    }
}

impl RoundRunner for TopKRound {
    fn name(&self) -> &'static str {
        "top_k"
    }

    fn run_round(&mut self, round: Round, rng: &mut dyn RandomSource) -> SimResult<RoundResult> {
        let population = generate_population(self.population_size, rng)?;
        let result = evaluate(&population, self.winners);
        log::debug!(
            "round={round} {}: {}={:.1} {}={:.1}",
            self.name(),
            Attribute::Skill.label(),
            result.average_skill,
            Attribute::Luck.label(),
            result.average_luck
        );
        Ok(result)
    }
}
