//! Item catalogue.

use std::str::FromStr;

use crate::common::error::CombatError;

use super::{Effect, Stats};

/// How an item changes one stat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatModifier {
    AddDamage(f32),
    MulSpeed(f32),
    AddFireRate(f32),
    AddShotSpeed(f32),
}

impl StatModifier {
    pub fn apply(self, mut stats: Stats) -> Stats {
        match self {
            StatModifier::AddDamage(v) => stats.damage += v,
            StatModifier::MulSpeed(v) => stats.speed *= v,
            StatModifier::AddFireRate(v) => stats.fire_rate += v,
            StatModifier::AddShotSpeed(v) => stats.shot_speed += v,
        }
        stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDefinition {
    pub name: &'static str,
    pub symbol: char,
    pub modifiers: &'static [StatModifier],
    pub effects: &'static [Effect],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    MagicMushroom,
    TripleShot,
    PiercingTears,
    HomingShots,
    SpeedBoost,
    DamageUp,
    MiniMushroom,
    FireRateUp,
    ExplosiveTears,
}

impl ItemKind {
    pub const ALL: [ItemKind; 9] = [
        ItemKind::MagicMushroom,
        ItemKind::TripleShot,
        ItemKind::PiercingTears,
        ItemKind::HomingShots,
        ItemKind::SpeedBoost,
        ItemKind::DamageUp,
        ItemKind::MiniMushroom,
        ItemKind::FireRateUp,
        ItemKind::ExplosiveTears,
    ];

    pub fn definition(self) -> &'static ItemDefinition {
        match self {
            ItemKind::MagicMushroom => &MAGIC_MUSHROOM,
            ItemKind::TripleShot => &TRIPLE_SHOT,
            ItemKind::PiercingTears => &PIERCING_TEARS,
            ItemKind::HomingShots => &HOMING_SHOTS,
            ItemKind::SpeedBoost => &SPEED_BOOST,
            ItemKind::DamageUp => &DAMAGE_UP,
            ItemKind::MiniMushroom => &MINI_MUSHROOM,
            ItemKind::FireRateUp => &FIRE_RATE_UP,
            ItemKind::ExplosiveTears => &EXPLOSIVE_TEARS,
        }
    }
}

impl FromStr for ItemKind {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .into_iter()
            .find(|k| k.definition().name == s)
            .ok_or_else(|| CombatError::UnknownName { kind: "item", name: s.to_owned() })
    }
}

const MAGIC_MUSHROOM: ItemDefinition = ItemDefinition {
    name: "magic_mushroom",
    symbol: 'M',
    modifiers: &[StatModifier::AddDamage(1.0), StatModifier::MulSpeed(1.2)],
    effects: &[],
};

const TRIPLE_SHOT: ItemDefinition = ItemDefinition {
    name: "triple_shot",
    symbol: '3',
    modifiers: &[StatModifier::AddFireRate(0.1)],
    effects: &[Effect::MultiShot],
};

const PIERCING_TEARS: ItemDefinition = ItemDefinition {
    name: "piercing_tears",
    symbol: 'P',
    modifiers: &[StatModifier::AddDamage(0.5)],
    effects: &[Effect::Piercing],
};

const HOMING_SHOTS: ItemDefinition = ItemDefinition {
    name: "homing_shots",
    symbol: 'H',
    modifiers: &[],
    effects: &[Effect::Homing],
};

const SPEED_BOOST: ItemDefinition = ItemDefinition {
    name: "speed_boost",
    symbol: 'S',
    modifiers: &[StatModifier::MulSpeed(1.3)],
    effects: &[],
};

const DAMAGE_UP: ItemDefinition = ItemDefinition {
    name: "damage_up",
    symbol: 'D',
    modifiers: &[StatModifier::AddDamage(1.5)],
    effects: &[],
};

const MINI_MUSHROOM: ItemDefinition = ItemDefinition {
    name: "mini_mushroom",
    symbol: 'm',
    modifiers: &[StatModifier::AddDamage(0.3)],
    effects: &[],
};

const FIRE_RATE_UP: ItemDefinition = ItemDefinition {
    name: "fire_rate_up",
    symbol: 'F',
    modifiers: &[StatModifier::AddFireRate(0.5)],
    effects: &[],
};

const EXPLOSIVE_TEARS: ItemDefinition = ItemDefinition {
    name: "explosive_tears",
    symbol: 'X',
    modifiers: &[StatModifier::AddDamage(0.5)],
    effects: &[Effect::Explosive],
};
