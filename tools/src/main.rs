//! sim-runner: headless runner for the skill vs. luck simulation.
//!
//! Usage:
//!   sim-runner --rounds 1000 --seed 12345
//!   sim-runner --config run.json --json --quiet

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use luck_sim_core::{
    config::SimConfig,
    engine::SimulationDriver,
    progress::{LogProgress, ProgressFields, ProgressObserver, AVG_LUCK_LABEL, AVG_SKILL_LABEL},
    report::{timestamp_now, RunSummary},
    types::Round,
};
use std::env;

/// Terminal progress bar fed by the engine after every round.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new(total: Round) -> Result<Self> {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(
                "Simulations |{bar:40.cyan/blue}| {percent}% || {pos}/{len} rounds || {msg}",
            )?
            .progress_chars("#>-"),
        );
        bar.set_message(format!("{AVG_LUCK_LABEL}: N/A"));
        Ok(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

impl ProgressObserver for BarProgress {
    fn on_progress(&mut self, round: Round, _total: Round, fields: &ProgressFields) {
        let get = |label: &str| fields.get(label).cloned().unwrap_or_else(|| "N/A".into());
        self.bar.set_position(round);
        self.bar.set_message(format!(
            "{AVG_LUCK_LABEL}: {} {AVG_SKILL_LABEL}: {}",
            get(AVG_LUCK_LABEL),
            get(AVG_SKILL_LABEL)
        ));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let quiet = args.iter().any(|a| a == "--quiet");

    let mut config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SimConfig::load(&w[1])?,
        None => SimConfig {
            seed: clock_seed(),
            ..SimConfig::default()
        },
    };
    config.rounds = parse_arg(&args, "--rounds", config.rounds);
    config.seed = parse_arg(&args, "--seed", config.seed);

    if !json {
        println!("Skill vs. Luck: sim-runner");
        println!("  rounds:    {}", config.rounds);
        println!("  seed:      {}", config.seed);
        println!();
    }

    let started_at = timestamp_now();
    log::info!("sim-runner: seed={} rounds={}", config.seed, config.rounds);
    let mut driver = SimulationDriver::build(config.clone())?;

    let outcome = if quiet {
        driver.run(&mut LogProgress::new(config.progress_log_interval))?
    } else {
        let mut bar = BarProgress::new(config.rounds)?;
        let outcome = driver.run(&mut bar)?;
        bar.finish();
        outcome
    };

    let summary = RunSummary::new(&config, &outcome, started_at);
    log::info!(
        "sim-runner: {} finished, skill={} luck={}",
        summary.run_id,
        summary.final_average_skill,
        summary.final_average_luck
    );
    if json {
        println!("{}", summary.to_json()?);
    } else {
        println!();
        print!("{}", summary.render_text());
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    match args.windows(2).find(|w| w[0] == flag) {
        Some(w) => w[1].parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {flag} {}: not a valid value", w[1]);
            default
        }),
        None => default,
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
