//! Homing: player projectiles bend toward the nearest enemy.
//!
//! Rotation only. The turn per tick is capped at `homing_turn_rate_deg * dt` and never
//! overshoots the target heading; speed is left exactly as it was.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::common::geometry::{heading, planar, wrap_angle};
use crate::common::tunables::CombatTunables;
use crate::plugins::combat::{Enemy, Player, Projectile};
use crate::plugins::effects::{Effect, EffectRegistry};
use crate::plugins::{CombatFrame, CombatStage};

pub fn plugin(app: &mut App) {
    app.add_systems(CombatFrame, steer_homing_projectiles.in_set(CombatStage::Homing));
}

pub fn steer_homing_projectiles(
    time: Res<Time>,
    tunables: Res<CombatTunables>,
    effects: EffectRegistry,
    q_players: Query<(), With<Player>>,
    q_enemies: Query<&Transform, (With<Enemy>, Without<Projectile>)>,
    mut q_projectiles: Query<(&Projectile, &Transform, &mut LinearVelocity)>,
) {
    let max_turn = tunables.homing_turn_rate_deg.to_radians() * time.delta_secs();

    for (projectile, tf, mut vel) in &mut q_projectiles {
        let Some(owner) = projectile.owner else { continue };
        if !q_players.contains(owner) || !effects.has(owner, Effect::Homing) {
            continue;
        }

        let from = planar(tf);
        let Some(target) = nearest_target(from, q_enemies.iter().map(planar)) else {
            continue;
        };

        vel.0 = turn_toward(vel.0, target - from, max_turn);
    }
}

/// First position with the smallest distance to `from`.
pub fn nearest_target(from: Vec2, candidates: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    let mut best: Option<(Vec2, f32)> = None;
    for c in candidates {
        let d = from.distance(c);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((c, d));
        }
    }
    best.map(|(c, _)| c)
}

/// Rotate `velocity` toward `to_target` by at most `max_turn` radians, keeping its length.
pub fn turn_toward(velocity: Vec2, to_target: Vec2, max_turn: f32) -> Vec2 {
    let speed = velocity.length();
    let current = heading(velocity);
    let diff = wrap_angle(heading(to_target) - current);
    let turn = diff.clamp(-max_turn, max_turn);
    Vec2::from_angle(current + turn) * speed
}
