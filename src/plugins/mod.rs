//! Feature plugins.
//!
//! The combat frame is its own schedule so a host can step it directly (`resolve_frame`)
//! or let `FixedUpdate` drive it while in game. Stage order is fixed:
//! boss AI, homing, collision, invincibility. Commands queued by one stage are applied
//! before the next one runs.

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

use crate::common::error::{CombatError, CombatResult};
use crate::common::rng::CombatRng;
use crate::common::state::GameState;
use crate::common::tunables::CombatTunables;

pub mod boss;
pub mod collision;
pub mod combat;
pub mod core;
pub mod effects;
pub mod homing;
pub mod invincibility;
pub mod patterns;

/// Schedule holding one combat frame.
#[derive(ScheduleLabel, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombatFrame;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatStage {
    BossAi,
    Homing,
    Collision,
    Invincibility,
}

/// Register gameplay plugins. Everything here works headless.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);

    app.init_schedule(CombatFrame);
    app.configure_sets(
        CombatFrame,
        (
            CombatStage::BossAi,
            CombatStage::Homing,
            CombatStage::Collision,
            CombatStage::Invincibility,
        )
            .chain(),
    );

    boss::plugin(app);
    homing::plugin(app);
    collision::plugin(app);
    invincibility::plugin(app);

    app.add_systems(FixedUpdate, run_combat_frame.run_if(in_state(GameState::InGame)));
}

/// Everything a combat frame needs before it may touch the world.
pub fn check_frame_ready(world: &World) -> CombatResult<()> {
    world
        .get_resource::<CombatTunables>()
        .ok_or(CombatError::MissingResource("CombatTunables"))?
        .validate()?;
    if !world.contains_resource::<CombatRng>() {
        return Err(CombatError::MissingResource("CombatRng"));
    }
    if !world
        .get_resource::<Schedules>()
        .is_some_and(|s| s.contains(CombatFrame))
    {
        return Err(CombatError::ScheduleMissing);
    }
    Ok(())
}

/// `FixedUpdate` driver. A rejected frame is skipped and reported once until it recovers.
fn run_combat_frame(world: &mut World, mut rejected: Local<bool>) {
    match check_frame_ready(world) {
        Ok(()) => {
            *rejected = false;
            world.run_schedule(CombatFrame);
        }
        Err(err) => {
            if !*rejected {
                warn!(%err, "combat frame skipped");
            }
            *rejected = true;
        }
    }
}
