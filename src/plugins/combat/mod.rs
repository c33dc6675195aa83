//! Combat data: the components every other combat plugin reads and writes.
//!
//! Nothing here runs per frame. The module owns construction (with validation) and the
//! spawn bundles for actors, so invalid values are stopped before they reach a system.

use bevy::prelude::*;

mod components;

pub use components::*;

/// Count enemies that are still alive.
///
/// Room management polls this after each frame to detect a cleared room.
pub fn living_enemy_count(world: &mut World) -> usize {
    world
        .query_filtered::<&Health, With<Enemy>>()
        .iter(world)
        .filter(|h| !h.is_depleted())
        .count()
}
