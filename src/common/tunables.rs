//! Tunable gameplay constants.

use bevy::prelude::*;

use crate::common::error::{non_negative, CombatError, CombatResult};

#[derive(Resource, Debug, Clone)]
pub struct CombatTunables {
    /// Immunity window granted to the player after taking damage.
    pub invincibility_secs: f32,
    /// Damage dealt by touching an enemy.
    pub contact_damage: f32,

    pub bomb_damage: f32,
    pub bomb_blast_radius: f32,
    /// Fraction of `bomb_damage` dealt by an explosive projectile.
    pub explosive_multiplier: f32,

    pub item_drop_chance: f32,
    pub coin_drop_chance: f32,
    pub coin_drop_min: u32,
    pub coin_drop_max: u32,

    /// Degrees per second.
    pub homing_turn_rate_deg: f32,

    pub boss_phase_grace_secs: f32,
    pub boss_projectile_damage: f32,
    pub boss_projectile_radius: f32,
    pub boss_teleport_waypoints: Vec<Vec2>,
    pub boss_teleport_min_player_distance: f32,

    /// Fixed seed for loot rolls and teleport picks. `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for CombatTunables {
    fn default() -> Self {
        Self {
            invincibility_secs: 0.5,
            contact_damage: 1.0,
            bomb_damage: 2.0,
            bomb_blast_radius: 2.0,
            explosive_multiplier: 0.5,
            item_drop_chance: 0.15,
            coin_drop_chance: 0.15,
            coin_drop_min: 1,
            coin_drop_max: 2,
            homing_turn_rate_deg: 180.0,
            boss_phase_grace_secs: 1.0,
            boss_projectile_damage: 1.0,
            boss_projectile_radius: 0.2,
            boss_teleport_waypoints: vec![
                Vec2::new(15.0, 5.0),
                Vec2::new(45.0, 5.0),
                Vec2::new(15.0, 15.0),
                Vec2::new(45.0, 15.0),
                Vec2::new(30.0, 10.0),
            ],
            boss_teleport_min_player_distance: 8.0,
            rng_seed: None,
        }
    }
}

impl CombatTunables {
    /// Reject values the frame systems cannot work with.
    pub fn validate(&self) -> CombatResult<()> {
        let non_negatives = [
            ("invincibility_secs", self.invincibility_secs),
            ("contact_damage", self.contact_damage),
            ("bomb_damage", self.bomb_damage),
            ("bomb_blast_radius", self.bomb_blast_radius),
            ("explosive_multiplier", self.explosive_multiplier),
            ("homing_turn_rate_deg", self.homing_turn_rate_deg),
            ("boss_phase_grace_secs", self.boss_phase_grace_secs),
            ("boss_projectile_damage", self.boss_projectile_damage),
            ("boss_projectile_radius", self.boss_projectile_radius),
            ("boss_teleport_min_player_distance", self.boss_teleport_min_player_distance),
        ];
        for (name, value) in non_negatives {
            if !non_negative(value) {
                return Err(CombatError::TunableOutOfRange { name, value });
            }
        }

        for (name, value) in [
            ("item_drop_chance", self.item_drop_chance),
            ("coin_drop_chance", self.coin_drop_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CombatError::TunableOutOfRange { name, value });
            }
        }

        if self.coin_drop_min > self.coin_drop_max {
            return Err(CombatError::TunableOutOfRange {
                name: "coin_drop_min",
                value: self.coin_drop_min as f32,
            });
        }

        if let Some(bad) = self.boss_teleport_waypoints.iter().find(|p| !p.is_finite()) {
            return Err(CombatError::TunableOutOfRange {
                name: "boss_teleport_waypoints",
                value: if bad.x.is_finite() { bad.y } else { bad.x },
            });
        }

        Ok(())
    }

    /// Damage dealt by an explosive projectile's blast.
    #[inline]
    pub fn explosive_blast_damage(&self) -> f32 {
        self.bomb_damage * self.explosive_multiplier
    }
}
