//! End-of-run report.

use crate::{
    aggregate::Attribute,
    config::SimConfig,
    engine::SimulationOutcome,
    error::SimResult,
    population::POPULATION_SIZE,
    selection::WINNERS_PER_ROUND,
    types::{Round, RunId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type Timestamp = DateTime<Utc>;

pub fn timestamp_now() -> Timestamp {
    Utc::now()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id:              RunId,
    pub seed:                u64,
    pub rounds:              Round,
    pub population_size:     usize,
    pub winners_per_round:   usize,
    pub final_average_skill: i64,
    pub final_average_luck:  i64,
    pub mean_skill:          f64,
    pub mean_luck:           f64,
    pub started_at:          Timestamp,
    pub finished_at:         Timestamp,
}

impl RunSummary {
    pub fn new(config: &SimConfig, outcome: &SimulationOutcome, started_at: Timestamp) -> Self {
        Self {
            run_id:              format!("run-{}", Uuid::new_v4()),
            seed:                config.seed,
            rounds:              outcome.rounds,
            population_size:     POPULATION_SIZE,
            winners_per_round:   WINNERS_PER_ROUND.min(POPULATION_SIZE),
            final_average_skill: outcome.final_average_skill,
            final_average_luck:  outcome.final_average_luck,
            mean_skill:          outcome.mean_skill,
            mean_luck:           outcome.mean_luck,
            started_at,
            finished_at:         timestamp_now(),
        }
    }

    /// Human-readable report: luck first, then skill.
    pub fn render_text(&self) -> String {
        let population = group_thousands(self.population_size as u64);
        [Attribute::Luck, Attribute::Skill]
            .into_iter()
            .map(|attribute| {
                let value = match attribute {
                    Attribute::Skill => self.final_average_skill,
                    Attribute::Luck  => self.final_average_luck,
                };
                format!(
                    "After {} simulations of {population} players each, average {} of top {} winners:\n{value}\n",
                    self.rounds,
                    attribute.label(),
                    self.winners_per_round
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 20000 -> "20,000".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}
