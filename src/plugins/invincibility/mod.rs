//! Invincibility ticker. Runs last in the combat frame.

use bevy::prelude::*;

use crate::plugins::combat::Invincible;
use crate::plugins::{CombatFrame, CombatStage};

pub fn plugin(app: &mut App) {
    app.add_systems(CombatFrame, tick_invincibility.in_set(CombatStage::Invincibility));
}

pub fn tick_invincibility(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Invincible)>,
) {
    let dt = time.delta_secs();
    for (entity, mut grace) in &mut q {
        grace.remaining -= dt;
        if grace.remaining <= 0.0 {
            commands.entity(entity).remove::<Invincible>();
        }
    }
}

#[cfg(test)]
mod tests;
