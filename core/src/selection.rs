//! Scoring and top-K selection.

use crate::population::Entity;

pub const SKILL_WEIGHT: f64 = 0.95;
pub const LUCK_WEIGHT: f64 = 0.05;

/// Winners kept per round.
pub const WINNERS_PER_ROUND: usize = 10;

/// Weighted score in [0, 100].
pub fn score(entity: &Entity) -> f64 {
    f64::from(entity.skill()) * SKILL_WEIGHT + f64::from(entity.luck()) * LUCK_WEIGHT
}

struct Scored<'a> {
    entity: &'a Entity,
    score:  f64,
}

/// The `k` highest-scoring entities, best first.
///
/// Entities with equal scores keep their input order: the sort is
/// stable and compares on score only. Returns references into
/// `entities`; scores are dropped.
pub fn select_top(entities: &[Entity], k: usize) -> Vec<&Entity> {
    if entities.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Scored<'_>> = entities
        .iter()
        .map(|entity| Scored { entity, score: score(entity) })
        .collect();

    // slice::sort_by is stable.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(k);

    if let Some(cutoff) = scored.last() {
        log::trace!(
            "selection: kept {} of {}, cutoff score {:.2}",
            scored.len(),
            entities.len(),
            cutoff.score
        );
    }

    scored.into_iter().map(|s| s.entity).collect()
}
