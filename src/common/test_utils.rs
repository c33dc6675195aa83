//! Test helpers.
//!
//! Bevy provides `World::run_system_once` (via the `RunSystemOnce` trait) for quickly
//! executing a system without building a full schedule. Systems that use `Commands`
//! only enqueue structural changes, so we flush before returning.

use std::time::Duration;

use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::rng::CombatRng;
use crate::common::tunables::CombatTunables;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// A `Time` whose last delta is exactly `dt` seconds.
pub fn time_with_delta(dt: f32) -> Time {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    t
}

/// World with default tunables, a seeded RNG and a `Time` advanced by `dt`.
pub fn combat_world(dt: f32) -> World {
    let mut world = World::new();
    world.insert_resource(CombatTunables::default());
    world.insert_resource(CombatRng::seeded(7));
    world.insert_resource(time_with_delta(dt));
    world
}

/// Replace the frame delta on an existing world.
pub fn set_delta(world: &mut World, dt: f32) {
    world.insert_resource(time_with_delta(dt));
}
