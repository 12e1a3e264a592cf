//! Population generation: one fresh set of players per round.

use crate::{
    error::{SimError, SimResult},
    rng::RandomSource,
};

/// Players drawn per round.
pub const POPULATION_SIZE: usize = 20_000;

/// Upper bound of both attributes (inclusive).
pub const ATTRIBUTE_MAX: u8 = 100;

/// A simulated player. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    name:  String,
    skill: u8,
    luck:  u8,
}

impl Entity {
    /// Both attributes must lie in [0, ATTRIBUTE_MAX].
    pub fn new(name: impl Into<String>, skill: u8, luck: u8) -> SimResult<Self> {
        let name = name.into();
        if skill > ATTRIBUTE_MAX || luck > ATTRIBUTE_MAX {
            return Err(SimError::InvalidEntity(format!(
                "{name}: skill={skill} luck={luck} exceeds {ATTRIBUTE_MAX}"
            )));
        }
        Ok(Self { name, skill, luck })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn skill(&self) -> u8 {
        self.skill
    }

    pub fn luck(&self) -> u8 {
        self.luck
    }
}

/// Generate `size` players named "Player 1".."Player {size}".
///
/// Draw order is fixed: for each player in ordinal order, skill first,
/// then luck. Seeded sources therefore reproduce the same population.
pub fn generate_population<R>(size: usize, rng: &mut R) -> SimResult<Vec<Entity>>
where
    R: RandomSource + ?Sized,
{
    let mut population = Vec::new();
    population
        .try_reserve_exact(size)
        .map_err(|source| SimError::Allocation { size, source })?;

    for ordinal in 1..=size {
        let skill = draw_attribute(rng)?;
        let luck = draw_attribute(rng)?;
        population.push(Entity {
            name: format!("Player {ordinal}"),
            skill,
            luck,
        });
    }
    Ok(population)
}

/// Scale a unit draw to [0, 100] and round half-up.
fn draw_attribute<R>(rng: &mut R) -> SimResult<u8>
where
    R: RandomSource + ?Sized,
{
    let u = rng.next_f64()?;
    if !(0.0..1.0).contains(&u) {
        return Err(SimError::RandomSource(format!(
            "draw {u} outside [0, 1)"
        )));
    }
    Ok((u * f64::from(ATTRIBUTE_MAX)).round() as u8)
}
