use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::error::CombatResult;
use crate::common::geometry::{planar, set_planar};
use crate::common::rng::CombatRng;
use crate::common::tunables::CombatTunables;
use crate::plugins::combat::{projectile_bundle, Glyph, Health, Invincible, Player, Projectile};

use super::components::{Boss, BossAi, BossPhase};

/// Boss projectiles all look the same.
const BOSS_SHOT_GLYPH: Glyph = Glyph { symbol: '*', tint: Color::srgb(1.0, 0.9, 0.2) };

pub fn drive_boss_ai(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<CombatTunables>,
    mut rng: ResMut<CombatRng>,
    q_players: Query<&Transform, (With<Player>, Without<Boss>)>,
    mut q_bosses: Query<(Entity, &mut Boss, &mut BossAi, &mut Transform, &Health)>,
) {
    let dt = time.delta_secs();
    let players: Vec<Vec2> = q_players.iter().map(planar).collect();

    for (entity, mut boss, mut ai, mut tf, health) in &mut q_bosses {
        if enter_phase_two(&mut boss, &mut ai, health) {
            info!(
                "{} enters phase 2 (pattern {}, teleport every {}s)",
                boss.kind.profile().title,
                ai.pattern,
                ai.teleport_cooldown
            );
            commands
                .entity(entity)
                .insert(Invincible::granted(tunables.boss_phase_grace_secs));
        }

        ai.pattern_timer -= dt;
        if ai.pattern_timer <= 0.0 {
            if let Err(e) = fire_pattern(&mut commands, &tunables, entity, &boss, &ai, planar(&tf)) {
                warn!("boss pattern skipped: {e}");
            }
            ai.pattern_timer = ai.pattern_cooldown;
        }

        ai.teleport_timer -= dt;
        if ai.teleport_timer <= 0.0 {
            let here = planar(&tf);
            let player = nearest_player_position(here, players.iter().copied());
            if let Some(dest) = pick_waypoint(
                &mut rng.0,
                &tunables.boss_teleport_waypoints,
                player,
                tunables.boss_teleport_min_player_distance,
            ) {
                debug!("{} teleports {here} -> {dest}", boss.kind.profile().title);
                set_planar(&mut tf, dest);
            }
            ai.teleport_timer = ai.teleport_cooldown;
        }
    }
}

/// One-way switch to phase 2. Returns true only on the tick the switch happens.
pub fn enter_phase_two(boss: &mut Boss, ai: &mut BossAi, health: &Health) -> bool {
    if boss.has_transitioned || health.ratio() > boss.phase2_threshold {
        return false;
    }

    boss.phase = BossPhase::Two;
    boss.has_transitioned = true;

    let profile = boss.kind.profile();
    if let Some(&first) = profile.phase2_patterns.first() {
        ai.pattern = first;
    }
    ai.teleport_cooldown = profile.teleport_cooldown(BossPhase::Two);
    true
}

/// Spawn one enemy-owned projectile per shot of the bound pattern.
///
/// Returns the number of projectiles spawned; an unbound pattern spawns none.
fn fire_pattern(
    commands: &mut Commands,
    tunables: &CombatTunables,
    boss_entity: Entity,
    boss: &Boss,
    ai: &BossAi,
    origin: Vec2,
) -> CombatResult<usize> {
    let Some(pattern) = boss.kind.bound_pattern(boss.phase, ai.pattern) else {
        debug!(
            "no {} pattern bound for {} in phase {}",
            ai.pattern,
            boss.kind.profile().id,
            boss.phase.number()
        );
        return Ok(0);
    };

    let shots = pattern.generate(origin);
    let projectile = Projectile::new(tunables.boss_projectile_damage, Some(boss_entity))?;
    for shot in &shots {
        commands.spawn(projectile_bundle(
            projectile,
            tunables.boss_projectile_radius,
            shot.origin,
            shot.velocity,
            BOSS_SHOT_GLYPH,
        )?);
    }
    Ok(shots.len())
}

/// Position of the player closest to `from`, if there is a player at all.
pub fn nearest_player_position(from: Vec2, players: impl IntoIterator<Item = Vec2>) -> Option<Vec2> {
    players
        .into_iter()
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}

/// Uniform pick among waypoints at least `min_distance` away from the player.
///
/// Falls back to every waypoint when none is far enough or there is no player.
pub fn pick_waypoint<R: Rng + ?Sized>(
    rng: &mut R,
    waypoints: &[Vec2],
    player: Option<Vec2>,
    min_distance: f32,
) -> Option<Vec2> {
    let safe: Vec<Vec2> = match player {
        Some(p) => waypoints.iter().copied().filter(|w| w.distance(p) >= min_distance).collect(),
        None => Vec::new(),
    };

    if safe.is_empty() {
        waypoints.choose(rng).copied()
    } else {
        safe.choose(rng).copied()
    }
}
