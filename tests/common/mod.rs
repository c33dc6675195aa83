//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `dungeon_combat::game::configure_headless` to install gameplay plugins.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use dungeon_combat::common::tunables::CombatTunables;

pub fn app_headless() -> App {
    app_with_tunables(CombatTunables { rng_seed: Some(7), ..default() })
}

pub fn app_with_tunables(tunables: CombatTunables) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(tunables);

    dungeon_combat::game::configure_headless(&mut app);
    app
}
