//! Effect registry: "does actor X currently have effect E?"
//!
//! The pickup subsystem owns `CollectedItems`; combat only reads it. Effects stack by
//! presence, not count: two piercing items behave like one.

use std::fmt;
use std::str::FromStr;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::error::{non_negative, CombatError, CombatResult};

pub mod items;

pub use items::{ItemDefinition, ItemKind, StatModifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Piercing,
    Explosive,
    Homing,
    MultiShot,
}

impl Effect {
    pub const ALL: [Effect; 4] = [Effect::Piercing, Effect::Explosive, Effect::Homing, Effect::MultiShot];

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::Piercing => "piercing",
            Effect::Explosive => "explosive",
            Effect::Homing => "homing",
            Effect::MultiShot => "multi_shot",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Effect {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Effect::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| CombatError::UnknownName { kind: "effect", name: s.to_owned() })
    }
}

/// Base combat stats of an actor.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub speed: f32,
    pub damage: f32,
    pub fire_rate: f32,
    pub shot_speed: f32,
}

impl Stats {
    pub fn new(speed: f32, damage: f32, fire_rate: f32, shot_speed: f32) -> CombatResult<Self> {
        for (name, value) in [
            ("speed", speed),
            ("damage", damage),
            ("fire_rate", fire_rate),
            ("shot_speed", shot_speed),
        ] {
            if !non_negative(value) {
                return Err(CombatError::NegativeStat { name, value });
            }
        }
        Ok(Self { speed, damage, fire_rate, shot_speed })
    }
}

/// Items an actor has picked up.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct CollectedItems {
    pub items: Vec<ItemKind>,
}

impl CollectedItems {
    pub fn with(items: impl IntoIterator<Item = ItemKind>) -> Self {
        Self { items: items.into_iter().collect() }
    }

    pub fn has_effect(&self, effect: Effect) -> bool {
        self.items.iter().any(|item| item.definition().effects.contains(&effect))
    }

    /// Fold every collected modifier into `base`, in pickup order.
    pub fn apply_to(&self, base: Stats) -> Stats {
        self.items
            .iter()
            .flat_map(|item| item.definition().modifiers.iter())
            .fold(base, |stats, modifier| modifier.apply(stats))
    }
}

/// Read-only view used by combat systems.
#[derive(SystemParam)]
pub struct EffectRegistry<'w, 's> {
    collected: Query<'w, 's, &'static CollectedItems>,
}

impl EffectRegistry<'_, '_> {
    /// False for actors without a `CollectedItems` component or that no longer exist.
    pub fn has(&self, actor: Entity, effect: Effect) -> bool {
        self.collected.get(actor).is_ok_and(|c| c.has_effect(effect))
    }
}
