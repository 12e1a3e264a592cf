//! Means over a selected subset.

use crate::population::Entity;
use std::borrow::Borrow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Skill,
    Luck,
}

impl Attribute {
    pub fn of(self, entity: &Entity) -> u8 {
        match self {
            Self::Skill => entity.skill(),
            Self::Luck  => entity.luck(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Luck  => "luck",
        }
    }
}

/// Arithmetic mean of `attribute`; 0.0 for an empty slice.
pub fn average_of<E: Borrow<Entity>>(entities: &[E], attribute: Attribute) -> f64 {
    mean_by(entities, |e| attribute.of(e))
}

/// Mean of an arbitrary projection. The sum is exact (integer), so the
/// result does not depend on input order.
pub fn mean_by<E, F>(entities: &[E], select: F) -> f64
where
    E: Borrow<Entity>,
    F: Fn(&Entity) -> u8,
{
    if entities.is_empty() {
        return 0.0;
    }
    let total: u64 = entities
        .iter()
        .map(|e| u64::from(select(e.borrow())))
        .sum();
    total as f64 / entities.len() as f64
}
