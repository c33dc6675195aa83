//! Game composition root.
//!
//! - `configure_headless`: states + gameplay plugins, no window or renderer. The host
//!   brings its own plugin group (`MinimalPlugins` in tests).
//! - `resolve_frame`: step one combat frame by hand with an explicit delta.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::error::{non_negative, CombatError, CombatResult};
use crate::common::state::GameState;
use crate::plugins::{self, CombatFrame};

/// Headless configuration for integration tests and embedding hosts.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by every host.
pub fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}

/// Run boss AI, homing, collision and invincibility once, in that order, over `dt` seconds.
///
/// Fails without touching the world when `dt` is negative or not finite, when the combat
/// resources are missing or when the frame schedule was never registered.
pub fn resolve_frame(world: &mut World, dt: f32) -> CombatResult<()> {
    if !non_negative(dt) {
        return Err(CombatError::InvalidDelta(dt));
    }
    plugins::check_frame_ready(world)?;

    world
        .get_resource_or_insert_with(Time::<()>::default)
        .advance_by(Duration::from_secs_f32(dt));

    world
        .try_run_schedule(CombatFrame)
        .map_err(|_| CombatError::ScheduleMissing)
}
