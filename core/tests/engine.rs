//! Round and run-level tests for the simulation engine.

use luck_sim_core::{
    config::SimConfig,
    engine::{RunningTotals, SimulationDriver},
    error::{SimError, SimResult},
    population::{Entity, POPULATION_SIZE},
    progress::{LogProgress, NoProgress, ProgressFields, AVG_LUCK_LABEL, AVG_SKILL_LABEL},
    rng::RandomSource,
    round::{evaluate, RoundResult, RoundRunner},
    selection::{select_top, WINNERS_PER_ROUND},
    types::Round,
};

/// Returns the same result every round.
struct FixedRound(RoundResult);

impl RoundRunner for FixedRound {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn run_round(&mut self, _round: Round, _rng: &mut dyn RandomSource) -> SimResult<RoundResult> {
        Ok(self.0)
    }
}

/// Returns `skill = round`, `luck = 2 * round`.
struct CountingRound;

impl RoundRunner for CountingRound {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn run_round(&mut self, round: Round, _rng: &mut dyn RandomSource) -> SimResult<RoundResult> {
        Ok(RoundResult {
            average_skill: round as f64,
            average_luck:  2.0 * round as f64,
        })
    }
}

/// Replays a fixed list of per-round results.
struct ScriptedRounds(Vec<RoundResult>);

impl RoundRunner for ScriptedRounds {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn run_round(&mut self, round: Round, _rng: &mut dyn RandomSource) -> SimResult<RoundResult> {
        Ok(self.0[(round - 1) as usize])
    }
}

/// Fails on a given round.
struct FailingRound {
    fail_at: Round,
}

impl RoundRunner for FailingRound {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn run_round(&mut self, round: Round, _rng: &mut dyn RandomSource) -> SimResult<RoundResult> {
        if round == self.fail_at {
            return Err(SimError::RandomSource(format!("round {round}: entropy unavailable")));
        }
        Ok(RoundResult::default())
    }
}

fn player(ordinal: usize, skill: u8, luck: u8) -> Entity {
    Entity::new(format!("Player {ordinal}"), skill, luck).expect("valid player")
}

#[test]
fn skill_beats_luck_with_one_winner() {
    let population = vec![player(1, 100, 0), player(2, 0, 100)];

    let top = select_top(&population, 1);
    assert_eq!(top, vec![&population[0]]);

    let result = evaluate(&population, 1);
    assert_eq!(result.average_skill, 100.0);
    assert_eq!(result.average_luck, 0.0);
}

#[test]
fn empty_population_gives_zero_means() {
    assert!(select_top(&[], WINNERS_PER_ROUND).is_empty());
    assert_eq!(evaluate(&[], WINNERS_PER_ROUND), RoundResult::default());
}

#[test]
fn uniform_population_selects_first_ten() {
    let population: Vec<Entity> = (1..=POPULATION_SIZE).map(|i| player(i, 50, 50)).collect();

    let top = select_top(&population, WINNERS_PER_ROUND);
    let expected: Vec<&Entity> = population.iter().take(10).collect();
    assert_eq!(top, expected);

    let result = evaluate(&population, WINNERS_PER_ROUND);
    assert_eq!(result.average_skill, 50.0);
    assert_eq!(result.average_luck, 50.0);
}

#[test]
fn single_round_run_reports_that_round_exactly() {
    let fixed = FixedRound(RoundResult { average_skill: 72.0, average_luck: 13.0 });
    let mut driver = SimulationDriver::with_runner(SimConfig::default_test(), fixed).unwrap();

    let outcome = driver.run_simulation(1, &mut NoProgress).unwrap();
    assert_eq!(outcome.rounds, 1);
    assert_eq!(outcome.final_average_skill, 72);
    assert_eq!(outcome.final_average_luck, 13);
    assert_eq!(outcome.mean_skill, 72.0);
    assert_eq!(outcome.mean_luck, 13.0);
}

#[test]
fn final_means_average_over_all_rounds() {
    let mut driver =
        SimulationDriver::with_runner(SimConfig::default_test(), CountingRound).unwrap();

    // skill 1..=4 -> 2.5, luck 2..=8 step 2 -> 5.0
    let outcome = driver.run_simulation(4, &mut NoProgress).unwrap();
    assert_eq!(outcome.mean_skill, 2.5);
    assert_eq!(outcome.mean_luck, 5.0);
    assert_eq!(outcome.final_average_skill, 3, "2.5 rounds half-up");
    assert_eq!(outcome.final_average_luck, 5);
}

#[test]
fn progress_is_reported_once_per_round_in_order() {
    const ROUNDS: Round = 7;
    let mut driver =
        SimulationDriver::with_runner(SimConfig::default_test(), CountingRound).unwrap();

    let mut seen: Vec<(Round, Round, ProgressFields)> = Vec::new();
    let mut observer = |round: Round, total: Round, fields: &ProgressFields| {
        seen.push((round, total, fields.clone()));
    };
    driver.run_simulation(ROUNDS, &mut observer).unwrap();

    assert_eq!(seen.len(), ROUNDS as usize);
    let rounds: Vec<Round> = seen.iter().map(|(r, _, _)| *r).collect();
    assert_eq!(rounds, (1..=ROUNDS).collect::<Vec<_>>());
    assert!(seen.iter().all(|(_, total, _)| *total == ROUNDS));

    // Running means after round 3: skill (1+2+3)/3 = 2, luck (2+4+6)/3 = 4.
    let (_, _, fields) = &seen[2];
    assert_eq!(fields[AVG_SKILL_LABEL], "2");
    assert_eq!(fields[AVG_LUCK_LABEL], "4");
}

#[test]
fn zero_rounds_is_an_empty_run() {
    let mut driver =
        SimulationDriver::with_runner(SimConfig::default_test(), CountingRound).unwrap();
    let mut calls = 0;
    let mut observer = |_: Round, _: Round, _: &ProgressFields| calls += 1;

    let outcome = driver.run_simulation(0, &mut observer).unwrap();
    assert_eq!(calls, 0);
    assert_eq!(outcome.rounds, 0);
    assert_eq!(outcome.mean_skill, 0.0);
    assert_eq!(outcome.final_average_luck, 0);
}

#[test]
fn round_failure_aborts_the_run() {
    let mut driver =
        SimulationDriver::with_runner(SimConfig::default_test(), FailingRound { fail_at: 3 })
            .unwrap();
    let mut calls = 0;
    let mut observer = |_: Round, _: Round, _: &ProgressFields| calls += 1;

    let err = driver.run_simulation(10, &mut observer).unwrap_err();
    assert!(matches!(err, SimError::RandomSource(_)));
    assert_eq!(calls, 2, "only completed rounds are reported");
}

#[test]
fn running_totals_keep_full_precision() {
    let mut totals = RunningTotals::default();
    assert_eq!(totals.running_means(), RoundResult::default());

    totals.record(&RoundResult { average_skill: 99.9, average_luck: 90.1 });
    let completed = totals.record(&RoundResult { average_skill: 100.0, average_luck: 89.6 });

    assert_eq!(completed, 2);
    assert_eq!(totals.sum_average_skill, 99.9 + 100.0);
    assert_eq!(totals.sum_average_luck, 90.1 + 89.6);
}

#[test]
fn standard_rounds_favour_skill() {
    let mut driver = SimulationDriver::build_test().unwrap();

    let outcome = driver.run(&mut NoProgress).unwrap();
    assert_eq!(outcome.rounds, driver.config.rounds);
    // ~100 players per round max out skill, so all ten winners sit at 100
    // and are then ranked by luck.
    assert_eq!(outcome.final_average_skill, 100);
    assert!(
        outcome.final_average_luck >= 80,
        "winner luck unexpectedly low: {}",
        outcome.mean_luck
    );
}

#[test]
fn zero_log_interval_is_rejected() {
    let config = SimConfig { progress_log_interval: 0, ..SimConfig::default_test() };
    assert!(matches!(
        SimulationDriver::build(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn log_progress_observes_without_changing_results() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut quiet =
        SimulationDriver::with_runner(SimConfig::default_test(), CountingRound).unwrap();
    let mut logged =
        SimulationDriver::with_runner(SimConfig::default_test(), CountingRound).unwrap();

    let a = quiet.run_simulation(5, &mut NoProgress).unwrap();
    let b = logged.run_simulation(5, &mut LogProgress::new(2)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn progress_rounds_running_means_but_totals_stay_exact() {
    let rounds = ScriptedRounds(vec![
        RoundResult { average_skill: 2.0, average_luck: 0.49 },
        RoundResult { average_skill: 3.0, average_luck: 0.49 },
    ]);
    let mut driver = SimulationDriver::with_runner(SimConfig::default_test(), rounds).unwrap();

    let mut seen: Vec<(Round, ProgressFields)> = Vec::new();
    let mut observer = |round: Round, _: Round, fields: &ProgressFields| {
        seen.push((round, fields.clone()));
    };
    let outcome = driver.run_simulation(2, &mut observer).unwrap();

    let (round, fields) = &seen[1];
    assert_eq!(*round, 2);
    assert_eq!(fields[AVG_SKILL_LABEL], "3", "running skill 2.5 displays half-up");
    assert_eq!(fields[AVG_LUCK_LABEL], "0");

    assert_eq!(outcome.mean_skill, 2.5);
    assert_eq!(outcome.mean_luck, 0.49);
    assert_eq!(outcome.final_average_skill, 3);
}
