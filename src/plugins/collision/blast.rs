//! Area damage shared by bombs and explosive projectiles.
//!
//! Reach is inclusive (`distance <= radius`), unlike the strict collider overlap test.

use bevy::prelude::*;

use crate::common::geometry::{planar, within_radius};
use crate::plugins::combat::{Health, Invincible, Player};

/// One entity a blast may damage.
pub struct BlastTarget<'a> {
    pub entity: Entity,
    pub position: Vec2,
    pub health: &'a mut Health,
    /// An invincible player ignores blasts.
    pub immune: bool,
}

/// Damage every eligible target within `radius` of `center`.
///
/// Targets already at or below zero health are skipped. Returns the entities this blast
/// brought to zero or below, in iteration order.
pub fn apply_blast<'a>(
    center: Vec2,
    radius: f32,
    amount: f32,
    targets: impl IntoIterator<Item = BlastTarget<'a>>,
) -> Vec<Entity> {
    let mut casualties = Vec::new();
    for target in targets {
        if target.health.is_depleted() || target.immune {
            continue;
        }
        if !within_radius(center, radius, target.position) {
            continue;
        }
        target.health.take(amount);
        if target.health.is_depleted() {
            casualties.push(target.entity);
        }
    }
    casualties
}

/// Blast entry point for collaborators holding the world (bomb fuses, scripted hazards).
///
/// Death handling is left to the caller; the returned entities are the fresh casualties.
pub fn bomb_blast_damage(world: &mut World, center: Vec2, radius: f32, amount: f32) -> Vec<Entity> {
    let mut q = world.query::<(Entity, &Transform, &mut Health, Has<Player>, Has<Invincible>)>();
    apply_blast(
        center,
        radius,
        amount,
        q.iter_mut(world).map(|(entity, tf, health, is_player, invincible)| BlastTarget {
            entity,
            position: planar(tf),
            health: health.into_inner(),
            immune: is_player && invincible,
        }),
    )
}
