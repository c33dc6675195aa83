//! Combat roles as a physics-layer bitset.
//!
//! Pair classification never probes components one by one. Each collidable entity gets a
//! `LayerMask` of the roles it plays, computed once per pass, and the resolver branches on it.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatRole {
    #[default]
    Default,
    Projectile,
    Enemy,
    Player,
}

/// Build the role mask from component presence.
#[inline]
pub fn role_mask(is_projectile: bool, is_enemy: bool, is_player: bool) -> LayerMask {
    let mut mask = LayerMask::NONE;
    if is_projectile {
        mask |= CombatRole::Projectile;
    }
    if is_enemy {
        mask |= CombatRole::Enemy;
    }
    if is_player {
        mask |= CombatRole::Player;
    }
    mask
}

#[inline]
pub fn plays(mask: LayerMask, role: CombatRole) -> bool {
    mask.has_all(role)
}
