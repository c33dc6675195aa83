//! Boss plugin: phase switch, attack patterns and teleports.
//!
//! Each tick, per boss, in this order:
//! 1. phase check (one-way switch to phase 2 at the health threshold),
//! 2. pattern timer (fire the bound pattern from the boss's position),
//! 3. teleport timer (jump to a waypoint away from the player).
//!
//! The player is optional. Without one, patterns still fire and teleports pick from every
//! waypoint.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::plugins::combat::{CircleCollider, Enemy, Glyph, Health, ENEMY_RADIUS};
use crate::plugins::{CombatFrame, CombatStage};

mod components;
mod profiles;
pub mod systems;

pub use components::*;
pub use profiles::*;

pub fn plugin(app: &mut App) {
    app.add_systems(CombatFrame, systems::drive_boss_ai.in_set(CombatStage::BossAi));
}

/// Spawn components for a boss at full health, phase 1, both timers due.
pub fn boss_bundle(kind: BossKind, position: Vec2) -> impl Bundle {
    let profile = kind.profile();
    (
        Name::new(profile.title),
        Enemy,
        Boss::new(kind),
        BossAi {
            pattern: profile.phase1_patterns[0],
            pattern_timer: 0.0,
            pattern_cooldown: profile.pattern_cooldown,
            teleport_timer: 0.0,
            teleport_cooldown: profile.phase1_teleport_cooldown,
        },
        Health { current: profile.max_health, max: profile.max_health },
        CircleCollider { radius: ENEMY_RADIUS },
        Transform::from_translation(position.extend(1.0)),
        LinearVelocity::ZERO,
        Glyph { symbol: profile.symbol, tint: Color::srgb(0.3, 0.9, 0.9) },
    )
}

#[cfg(test)]
mod tests;
