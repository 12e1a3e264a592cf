//! Progress observers.
//!
//! The engine reports after every completed round. Observers only
//! watch: nothing they do feeds back into the simulation.

use crate::{round::RoundResult, types::Round};
use std::collections::BTreeMap;

pub const AVG_SKILL_LABEL: &str = "avgSkill";
pub const AVG_LUCK_LABEL: &str = "avgLuck";

/// Display fields keyed by label.
pub type ProgressFields = BTreeMap<&'static str, String>;

pub trait ProgressObserver {
    /// Called once per round, `round` running 1..=`total`.
    fn on_progress(&mut self, round: Round, total: Round, fields: &ProgressFields);
}

impl<F> ProgressObserver for F
where
    F: FnMut(Round, Round, &ProgressFields),
{
    fn on_progress(&mut self, round: Round, total: Round, fields: &ProgressFields) {
        self(round, total, fields)
    }
}

/// Running means rounded to whole numbers for display.
pub fn progress_fields(running: &RoundResult) -> ProgressFields {
    let mut fields = ProgressFields::new();
    fields.insert(AVG_SKILL_LABEL, format!("{}", running.average_skill.round() as i64));
    fields.insert(AVG_LUCK_LABEL, format!("{}", running.average_luck.round() as i64));
    fields
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _round: Round, _total: Round, _fields: &ProgressFields) {}
}

/// Logs every `interval` rounds and on the last one.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    interval: Round,
}

impl LogProgress {
    pub fn new(interval: Round) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, round: Round, total: Round, fields: &ProgressFields) {
        if round.is_multiple_of(self.interval) || round == total {
            let get = |label: &str| fields.get(label).map(String::as_str).unwrap_or("N/A");
            log::info!(
                "progress: {round}/{total} rounds, {AVG_SKILL_LABEL}={} {AVG_LUCK_LABEL}={}",
                get(AVG_SKILL_LABEL),
                get(AVG_LUCK_LABEL)
            );
        }
    }
}
