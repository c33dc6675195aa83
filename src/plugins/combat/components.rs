use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::common::error::{non_negative, CombatError, CombatResult};

/// Player-controlled actor.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Enemy-controlled actor (regular enemies and bosses).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Enemy;

/// Terminal marker: the player ran out of health. The entity is kept.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

/// Terminal-style visual marker.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub symbol: char,
    pub tint: Color,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(current: f32, max: f32) -> CombatResult<Self> {
        if !non_negative(current) || !non_negative(max) || current > max {
            return Err(CombatError::InvalidHealth { current, max });
        }
        Ok(Self { current, max })
    }

    pub fn full(max: f32) -> CombatResult<Self> {
        Self::new(max, max)
    }

    /// Health may go below zero here; that is the death signal.
    #[inline]
    pub fn take(&mut self, amount: f32) {
        self.current -= amount;
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// `current / max`, or 0 for a zero-max pool.
    #[inline]
    pub fn ratio(&self) -> f32 {
        if self.max > 0.0 { self.current / self.max } else { 0.0 }
    }
}

/// Circular hit area used for overlap tests.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CircleCollider {
    pub radius: f32,
}

impl CircleCollider {
    pub fn new(radius: f32) -> CombatResult<Self> {
        if !non_negative(radius) {
            return Err(CombatError::NegativeRadius(radius));
        }
        Ok(Self { radius })
    }
}

/// Damage carrier.
///
/// `owner` is a lookup handle only. The owner may have been despawned since firing, so
/// every consumer checks that it still exists before trusting anything about it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub damage: f32,
    pub owner: Option<Entity>,
}

impl Projectile {
    pub fn new(damage: f32, owner: Option<Entity>) -> CombatResult<Self> {
        if !non_negative(damage) {
            return Err(CombatError::NegativeDamage(damage));
        }
        Ok(Self { damage, owner })
    }
}

/// Temporary immunity to projectile and contact damage.
///
/// Never present with `remaining <= 0`: the ticker removes it instead of zeroing it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Invincible {
    pub remaining: f32,
}

impl Invincible {
    pub fn new(duration: f32) -> CombatResult<Self> {
        if !non_negative(duration) {
            return Err(CombatError::InvalidDuration(duration));
        }
        Ok(Self { remaining: duration })
    }

    /// Grant from an already validated tunable.
    #[inline]
    pub(crate) fn granted(duration: f32) -> Self {
        Self { remaining: duration }
    }
}

// -----------------------------------------------------------------------------
// Enemy catalogue
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Chaser,
    Shooter,
    Orbiter,
    Turret,
    Tank,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Chaser,
        EnemyKind::Shooter,
        EnemyKind::Orbiter,
        EnemyKind::Turret,
        EnemyKind::Tank,
    ];

    pub fn max_health(self) -> f32 {
        match self {
            EnemyKind::Chaser => 3.0,
            EnemyKind::Shooter => 4.0,
            EnemyKind::Orbiter => 5.0,
            EnemyKind::Turret => 6.0,
            EnemyKind::Tank => 10.0,
        }
    }

    pub fn glyph(self) -> Glyph {
        let (symbol, tint) = match self {
            EnemyKind::Chaser => ('e', Color::srgb(0.9, 0.2, 0.2)),
            EnemyKind::Shooter => ('S', Color::srgb(0.8, 0.2, 0.8)),
            EnemyKind::Orbiter => ('O', Color::srgb(0.9, 0.85, 0.2)),
            EnemyKind::Turret => ('T', Color::srgb(0.9, 0.2, 0.2)),
            EnemyKind::Tank => ('E', Color::srgb(1.0, 0.35, 0.35)),
        };
        Glyph { symbol, tint }
    }
}

pub const ENEMY_RADIUS: f32 = 0.5;
pub const PLAYER_RADIUS: f32 = 0.3;

pub fn enemy_bundle(kind: EnemyKind, position: Vec2) -> impl Bundle {
    let hp = kind.max_health();
    (
        Name::new(format!("{kind:?}")),
        Enemy,
        Health { current: hp, max: hp },
        CircleCollider { radius: ENEMY_RADIUS },
        Transform::from_translation(position.extend(1.0)),
        LinearVelocity::ZERO,
        kind.glyph(),
    )
}

pub fn player_bundle(position: Vec2, max_health: f32) -> CombatResult<impl Bundle> {
    Ok((
        Name::new("Player"),
        Player,
        Health::full(max_health)?,
        CircleCollider { radius: PLAYER_RADIUS },
        Transform::from_translation(position.extend(1.0)),
        LinearVelocity::ZERO,
        Glyph { symbol: '@', tint: Color::WHITE },
    ))
}

/// A projectile at `position` moving with `velocity`.
pub fn projectile_bundle(
    projectile: Projectile,
    radius: f32,
    position: Vec2,
    velocity: Vec2,
    glyph: Glyph,
) -> CombatResult<impl Bundle> {
    Ok((
        Name::new("Projectile"),
        projectile,
        CircleCollider::new(radius)?,
        Transform::from_translation(position.extend(2.0)),
        LinearVelocity(velocity),
        glyph,
    ))
}
