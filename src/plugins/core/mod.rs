//! Core plugin: shared combat resources.
//!
//! A host may insert its own `CombatTunables` or `CombatRng` before registering the
//! gameplay plugins; those are kept. Rejected tunables are replaced with the defaults.

use bevy::prelude::*;

use crate::common::rng::CombatRng;
use crate::common::tunables::CombatTunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<CombatTunables>();

    if let Err(err) = app.world().resource::<CombatTunables>().validate() {
        warn!(%err, "combat tunables rejected, using defaults");
        let defaults = CombatTunables::default();
        defaults.validate().expect("built-in combat tunables must be valid");
        app.insert_resource(defaults);
    }

    if !app.world().contains_resource::<CombatRng>() {
        let seed = app.world().resource::<CombatTunables>().rng_seed;
        app.insert_resource(CombatRng::from_seed_option(seed));
    }
}
