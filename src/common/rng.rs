//! Randomness for loot rolls and teleport picks.
//!
//! Only two call sites draw from this stream, so seeding it makes a whole run reproducible.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Resource)]
pub struct CombatRng(pub StdRng);

impl CombatRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}
