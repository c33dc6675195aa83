use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::systems::{drive_boss_ai, nearest_player_position, pick_waypoint};
use super::*;
use crate::common::test_utils::{combat_world, run_system_once, set_delta};
use crate::common::tunables::CombatTunables;
use crate::plugins::combat::{player_bundle, Invincible, Projectile};
use crate::plugins::patterns::PatternKind;

fn spawn_boss(world: &mut World, kind: BossKind, at: Vec2) -> Entity {
    world.spawn(boss_bundle(kind, at)).id()
}

fn boss_projectiles(world: &mut World, boss: Entity) -> usize {
    world
        .query::<&Projectile>()
        .iter(world)
        .filter(|p| p.owner == Some(boss))
        .count()
}

/// Timers far in the future so only the phase check does anything.
fn quiet(world: &mut World, boss: Entity) {
    let mut ai = world.get_mut::<BossAi>(boss).unwrap();
    ai.pattern_timer = 100.0;
    ai.teleport_timer = 100.0;
}

#[test]
fn bundle_starts_in_phase_one_with_first_pattern() {
    let mut world = World::new();
    let boss = spawn_boss(&mut world, BossKind::Orbiter, Vec2::ZERO);

    let b = world.get::<Boss>(boss).unwrap();
    assert_eq!(b.phase, BossPhase::One);
    assert!(!b.has_transitioned);
    assert_eq!(b.phase2_threshold, 0.5);

    let ai = world.get::<BossAi>(boss).unwrap();
    assert_eq!(ai.pattern, PatternKind::Spiral);
    assert_eq!(ai.teleport_cooldown, 7.0);
    assert_eq!(ai.pattern_cooldown, 3.0);
    assert_eq!(world.get::<Health>(boss).unwrap().max, 50.0);
}

#[test]
fn boss_c_at_half_health_enters_phase_two_with_grace() {
    let mut world = combat_world(0.1);
    let boss = spawn_boss(&mut world, BossKind::SpiralKing, Vec2::new(30.0, 10.0));
    world.spawn(player_bundle(Vec2::new(40.0, 10.0), 6.0).unwrap());
    world.get_mut::<Health>(boss).unwrap().current = 50.0;

    run_system_once(&mut world, drive_boss_ai);

    let b = world.get::<Boss>(boss).unwrap();
    assert_eq!(b.phase, BossPhase::Two);
    assert!(b.has_transitioned);

    let ai = world.get::<BossAi>(boss).unwrap();
    assert_eq!(ai.pattern, PatternKind::BurstPulse);
    assert_eq!(ai.teleport_cooldown, 3.0);

    let grace = world.get::<Invincible>(boss).expect("grace window granted");
    assert_eq!(grace.remaining, CombatTunables::default().boss_phase_grace_secs);
}

#[test]
fn above_threshold_stays_in_phase_one() {
    let mut world = combat_world(0.1);
    let boss = spawn_boss(&mut world, BossKind::SpiralKing, Vec2::ZERO);
    quiet(&mut world, boss);
    world.get_mut::<Health>(boss).unwrap().current = 51.0;

    run_system_once(&mut world, drive_boss_ai);

    assert_eq!(world.get::<Boss>(boss).unwrap().phase, BossPhase::One);
    assert!(world.get::<Invincible>(boss).is_none());
}

#[test]
fn transition_is_one_way_and_fires_once() {
    let mut world = combat_world(0.1);
    let boss = spawn_boss(&mut world, BossKind::Crossfire, Vec2::ZERO);
    quiet(&mut world, boss);
    world.get_mut::<Health>(boss).unwrap().current = 10.0;

    run_system_once(&mut world, drive_boss_ai);
    assert_eq!(world.get::<Boss>(boss).unwrap().phase, BossPhase::Two);

    // Drop the grace window and heal above the threshold: nothing reverts or re-triggers.
    world.entity_mut(boss).remove::<Invincible>();
    world.get_mut::<Health>(boss).unwrap().current = 75.0;
    for _ in 0..5 {
        run_system_once(&mut world, drive_boss_ai);
    }

    let b = world.get::<Boss>(boss).unwrap();
    assert_eq!(b.phase, BossPhase::Two);
    assert!(b.has_transitioned);
    assert!(world.get::<Invincible>(boss).is_none());
}

#[test]
fn pattern_fires_when_due_and_resets_timer() {
    let mut world = combat_world(0.1);
    let at = Vec2::new(30.0, 10.0);
    let boss = spawn_boss(&mut world, BossKind::Orbiter, at);
    world.get_mut::<BossAi>(boss).unwrap().teleport_timer = 100.0;

    run_system_once(&mut world, drive_boss_ai);

    // Spiral: 8 shots from the boss position.
    assert_eq!(boss_projectiles(&mut world, boss), 8);
    let mut q = world.query::<(&Projectile, &Transform)>();
    assert!(q.iter(&world).all(|(_, tf)| tf.translation.truncate() == at));
    assert!(q.iter(&world).all(|(p, _)| p.damage == 1.0));
    assert_eq!(world.get::<BossAi>(boss).unwrap().pattern_timer, 3.0);

    // Not due again yet.
    run_system_once(&mut world, drive_boss_ai);
    assert_eq!(boss_projectiles(&mut world, boss), 8);
    assert!((world.get::<BossAi>(boss).unwrap().pattern_timer - 2.9).abs() < 1e-5);
}

#[test]
fn unbound_pattern_is_a_no_op() {
    let mut world = combat_world(0.1);
    let boss = spawn_boss(&mut world, BossKind::Orbiter, Vec2::ZERO);
    {
        let mut ai = world.get_mut::<BossAi>(boss).unwrap();
        // Orbiter never uses pulse.
        ai.pattern = PatternKind::Pulse;
        ai.teleport_timer = 100.0;
    }

    run_system_once(&mut world, drive_boss_ai);

    assert_eq!(boss_projectiles(&mut world, boss), 0);
    assert_eq!(world.get::<BossAi>(boss).unwrap().pattern_timer, 3.0);
}

#[test]
fn phase_two_pattern_fires_in_the_transition_tick() {
    let mut world = combat_world(0.1);
    let boss = spawn_boss(&mut world, BossKind::SpiralKing, Vec2::ZERO);
    world.get_mut::<BossAi>(boss).unwrap().teleport_timer = 100.0;
    world.get_mut::<Health>(boss).unwrap().current = 20.0;

    run_system_once(&mut world, drive_boss_ai);

    // Burst pulse has 16 shots; the phase-1 pulse would have had 12.
    assert_eq!(boss_projectiles(&mut world, boss), 16);
}

#[test]
fn teleport_avoids_waypoints_near_the_player() {
    let mut world = combat_world(0.1);
    let player_at = Vec2::new(15.0, 5.0);
    world.spawn(player_bundle(player_at, 6.0).unwrap());
    let boss = spawn_boss(&mut world, BossKind::Orbiter, Vec2::new(30.0, 10.0));
    world.get_mut::<BossAi>(boss).unwrap().pattern_timer = 100.0;

    let tunables = CombatTunables::default();
    for _ in 0..20 {
        world.get_mut::<BossAi>(boss).unwrap().teleport_timer = 0.0;
        run_system_once(&mut world, drive_boss_ai);

        let p = world.get::<Transform>(boss).unwrap().translation.truncate();
        assert!(tunables.boss_teleport_waypoints.contains(&p));
        assert!(p.distance(player_at) >= tunables.boss_teleport_min_player_distance);
    }
    assert_eq!(world.get::<BossAi>(boss).unwrap().teleport_timer, 7.0);
}

#[test]
fn teleport_without_player_uses_any_waypoint() {
    let mut world = combat_world(0.1);
    let boss = spawn_boss(&mut world, BossKind::Orbiter, Vec2::new(-100.0, -100.0));
    world.get_mut::<BossAi>(boss).unwrap().pattern_timer = 100.0;

    run_system_once(&mut world, drive_boss_ai);

    let p = world.get::<Transform>(boss).unwrap().translation.truncate();
    assert!(CombatTunables::default().boss_teleport_waypoints.contains(&p));
}

#[test]
fn teleport_timer_counts_down_with_dt() {
    let mut world = combat_world(0.25);
    let start = Vec2::new(-100.0, -100.0);
    let boss = spawn_boss(&mut world, BossKind::Orbiter, start);
    {
        let mut ai = world.get_mut::<BossAi>(boss).unwrap();
        ai.pattern_timer = 100.0;
        ai.teleport_timer = 0.5;
    }

    run_system_once(&mut world, drive_boss_ai);
    assert_eq!(world.get::<Transform>(boss).unwrap().translation.truncate(), start);

    set_delta(&mut world, 0.25);
    run_system_once(&mut world, drive_boss_ai);
    assert_ne!(world.get::<Transform>(boss).unwrap().translation.truncate(), start);
}

#[test]
fn waypoint_filter_falls_back_when_everything_is_close() {
    let mut rng = StdRng::seed_from_u64(1);
    let waypoints = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];

    let pick = pick_waypoint(&mut rng, &waypoints, Some(Vec2::ZERO), 50.0).unwrap();
    assert!(waypoints.contains(&pick));

    assert_eq!(pick_waypoint(&mut rng, &[], Some(Vec2::ZERO), 1.0), None);
}

#[test]
fn waypoint_filter_keeps_only_safe_points() {
    let mut rng = StdRng::seed_from_u64(2);
    let waypoints = [Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)];
    for _ in 0..50 {
        assert_eq!(pick_waypoint(&mut rng, &waypoints, Some(Vec2::ZERO), 8.0), Some(Vec2::new(20.0, 0.0)));
    }
}

#[test]
fn nearest_player_picks_the_closest() {
    let from = Vec2::ZERO;
    assert_eq!(nearest_player_position(from, []), None);
    assert_eq!(
        nearest_player_position(from, [Vec2::new(5.0, 0.0), Vec2::new(1.0, 1.0)]),
        Some(Vec2::new(1.0, 1.0))
    );
}

#[test]
fn boss_kinds_parse_from_ids() {
    assert_eq!("boss_c".parse::<BossKind>(), Ok(BossKind::SpiralKing));
    assert!("boss_z".parse::<BossKind>().is_err());
    for kind in BossKind::ALL {
        let p = kind.profile();
        assert!(kind.bound_pattern(BossPhase::One, p.phase1_patterns[0]).is_some());
        assert!(kind.bound_pattern(BossPhase::Two, p.phase2_patterns[0]).is_some());
    }
}
