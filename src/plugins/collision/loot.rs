//! Drops from dead enemies.
//!
//! The item roll and the coin roll are independent: either, both or neither may fire.

use bevy::prelude::*;
use rand::Rng;

use crate::common::tunables::CombatTunables;
use crate::plugins::combat::{CircleCollider, Glyph};
use crate::plugins::effects::ItemKind;

pub const PICKUP_RADIUS: f32 = 0.4;

/// An item lying on the floor, waiting for the pickup subsystem.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPickup(pub ItemKind);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LootRoll {
    pub item: bool,
    pub coins: u32,
}

pub fn roll_loot<R: Rng + ?Sized>(rng: &mut R, tunables: &CombatTunables) -> LootRoll {
    let item = rng.gen_bool(f64::from(tunables.item_drop_chance));
    let coins = if rng.gen_bool(f64::from(tunables.coin_drop_chance)) {
        rng.gen_range(tunables.coin_drop_min..=tunables.coin_drop_max)
    } else {
        0
    };
    LootRoll { item, coins }
}

pub fn item_pickup_bundle(kind: ItemKind, at: Vec2) -> impl Bundle {
    let def = kind.definition();
    (
        Name::new(def.name),
        ItemPickup(kind),
        CircleCollider { radius: PICKUP_RADIUS },
        Transform::from_translation(at.extend(0.5)),
        Glyph { symbol: def.symbol, tint: Color::srgb(0.9, 0.9, 0.3) },
    )
}

pub fn coin_bundle(at: Vec2) -> impl Bundle {
    (
        Name::new("Coin"),
        Coin { value: 1 },
        Transform::from_translation(at.extend(0.5)),
        Glyph { symbol: '$', tint: Color::srgb(1.0, 0.85, 0.2) },
    )
}

/// Spawn what `roll` asks for at `at`. The item is drawn uniformly from the catalogue.
pub fn spawn_loot<R: Rng + ?Sized>(commands: &mut Commands, rng: &mut R, roll: LootRoll, at: Vec2) {
    if roll.item {
        let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
        commands.spawn(item_pickup_bundle(kind, at));
    }
    for _ in 0..roll.coins {
        commands.spawn(coin_bundle(at));
    }
}
