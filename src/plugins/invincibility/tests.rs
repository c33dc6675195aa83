use bevy::prelude::*;

use super::*;
use crate::common::test_utils::{combat_world, run_system_once, set_delta};

#[test]
fn counts_down_and_expires() {
    let mut world = combat_world(0.2);
    let e = world.spawn(Invincible::new(0.5).unwrap()).id();

    run_system_once(&mut world, tick_invincibility);
    let left = world.get::<Invincible>(e).unwrap().remaining;
    assert!((left - 0.3).abs() < 1e-6);

    run_system_once(&mut world, tick_invincibility);
    run_system_once(&mut world, tick_invincibility);
    assert!(world.get::<Invincible>(e).is_none());
    assert!(world.get_entity(e).is_ok());
}

#[test]
fn exact_expiry_removes_the_component() {
    let mut world = combat_world(0.25);
    let e = world.spawn(Invincible::new(0.25).unwrap()).id();

    run_system_once(&mut world, tick_invincibility);

    assert!(world.get::<Invincible>(e).is_none());
}

#[test]
fn zero_delta_changes_nothing() {
    let mut world = combat_world(0.0);
    let e = world.spawn(Invincible::new(0.4).unwrap()).id();

    run_system_once(&mut world, tick_invincibility);
    set_delta(&mut world, 0.0);
    run_system_once(&mut world, tick_invincibility);

    assert_eq!(world.get::<Invincible>(e).unwrap().remaining, 0.4);
}

#[test]
fn zero_duration_grant_expires_on_the_next_tick() {
    let mut world = combat_world(0.0);
    let e = world.spawn(Invincible::new(0.0).unwrap()).id();

    run_system_once(&mut world, tick_invincibility);

    assert!(world.get::<Invincible>(e).is_none());
}
