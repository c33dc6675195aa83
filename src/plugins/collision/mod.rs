//! Collision and damage resolution.
//!
//! Every frame all collidable bodies are tested pairwise (circle overlap, strict `<`) and
//! each overlapping pair is classified by the roles its two entities play:
//!
//! 1. projectile vs enemy, when the projectile has no live owner or a player owner
//! 2. projectile vs player, when the projectile's owner is a live enemy
//! 3. enemy vs player (contact damage)
//!
//! The first rule that matches wins. Structural changes are queued through `Commands`, so
//! the pass keeps its own ledger of what it already removed or shielded; later pairs in
//! the same pass see those results.

use avian2d::prelude::LayerMask;
use bevy::ecs::system::SystemParam;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::geometry::{circles_overlap, planar};
use crate::common::layers::{plays, role_mask, CombatRole};
use crate::common::rng::CombatRng;
use crate::common::tunables::CombatTunables;
use crate::plugins::combat::{CircleCollider, Dead, Enemy, Health, Invincible, Player, Projectile};
use crate::plugins::effects::{Effect, EffectRegistry};
use crate::plugins::{CombatFrame, CombatStage};

pub mod blast;
pub mod loot;

pub use blast::{apply_blast, bomb_blast_damage, BlastTarget};
pub use loot::{roll_loot, spawn_loot, Coin, ItemPickup, LootRoll};

pub fn plugin(app: &mut App) {
    app.add_systems(CombatFrame, resolve_collisions.in_set(CombatStage::Collision));
}

/// Snapshot of one collidable entity, taken at the start of a pass.
#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub entity: Entity,
    pub center: Vec2,
    pub radius: f32,
    pub roles: LayerMask,
    /// Projectile owner, if this body is an owned projectile.
    pub owner: Option<Entity>,
}

/// What a projectile's owner currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OwnerKind {
    /// No owner recorded, or the owner no longer exists.
    Absent,
    Player,
    Enemy,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    ProjectileHitsEnemy { projectile: Entity, enemy: Entity, impact: Vec2 },
    ProjectileHitsPlayer { projectile: Entity, player: Entity },
    EnemyTouchesPlayer { enemy: Entity, player: Entity },
}

/// Classify an overlapping pair. Argument order does not matter.
pub fn classify(a: &Body, b: &Body, owner_kind: impl Fn(Option<Entity>) -> OwnerKind) -> Option<Interaction> {
    for (x, y) in [(a, b), (b, a)] {
        if plays(x.roles, CombatRole::Projectile)
            && plays(y.roles, CombatRole::Enemy)
            && matches!(owner_kind(x.owner), OwnerKind::Absent | OwnerKind::Player)
        {
            return Some(Interaction::ProjectileHitsEnemy {
                projectile: x.entity,
                enemy: y.entity,
                impact: x.center,
            });
        }
    }
    for (x, y) in [(a, b), (b, a)] {
        if plays(x.roles, CombatRole::Projectile)
            && plays(y.roles, CombatRole::Player)
            && owner_kind(x.owner) == OwnerKind::Enemy
        {
            return Some(Interaction::ProjectileHitsPlayer { projectile: x.entity, player: y.entity });
        }
    }
    for (x, y) in [(a, b), (b, a)] {
        if plays(x.roles, CombatRole::Enemy) && plays(y.roles, CombatRole::Player) {
            return Some(Interaction::EnemyTouchesPlayer { enemy: x.entity, player: y.entity });
        }
    }
    None
}

/// Entities removed or shielded earlier in the current pass.
#[derive(Default, Debug)]
pub struct PassLedger {
    removed: HashSet<Entity>,
    shielded: HashSet<Entity>,
}

/// Everything a hit needs to apply its consequences.
#[derive(SystemParam)]
pub struct DamageContext<'w, 's> {
    commands: Commands<'w, 's>,
    tunables: Res<'w, CombatTunables>,
    rng: ResMut<'w, CombatRng>,
    effects: EffectRegistry<'w, 's>,
    q_projectiles: Query<'w, 's, &'static Projectile>,
    q_actors: Query<'w, 's, (Has<Player>, Has<Enemy>)>,
    q_invincible: Query<'w, 's, (), With<Invincible>>,
    q_vitals: Query<'w, 's, (Entity, &'static Transform, &'static mut Health, Has<Player>, Has<Enemy>)>,
    ledger: Local<'s, PassLedger>,
}

pub fn resolve_collisions(
    q_bodies: Query<(
        Entity,
        &Transform,
        &CircleCollider,
        Option<&Projectile>,
        Has<Enemy>,
        Has<Player>,
    )>,
    mut ctx: DamageContext,
) {
    ctx.begin_pass();

    let bodies: Vec<Body> = q_bodies
        .iter()
        .map(|(entity, tf, collider, projectile, is_enemy, is_player)| Body {
            entity,
            center: planar(tf),
            radius: collider.radius,
            roles: role_mask(projectile.is_some(), is_enemy, is_player),
            owner: projectile.and_then(|p| p.owner),
        })
        .collect();

    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if ctx.is_removed(a.entity) || ctx.is_removed(b.entity) {
                continue;
            }
            if !circles_overlap(a.center, a.radius, b.center, b.radius) {
                continue;
            }
            let Some(interaction) = classify(a, b, |owner| ctx.owner_kind(owner)) else {
                continue;
            };
            ctx.apply(interaction);
        }
    }
}

impl DamageContext<'_, '_> {
    fn begin_pass(&mut self) {
        self.ledger.removed.clear();
        self.ledger.shielded.clear();
    }

    fn is_removed(&self, entity: Entity) -> bool {
        self.ledger.removed.contains(&entity)
    }

    fn is_shielded(&self, entity: Entity) -> bool {
        self.q_invincible.contains(entity) || self.ledger.shielded.contains(&entity)
    }

    fn owner_kind(&self, owner: Option<Entity>) -> OwnerKind {
        let Some(owner) = owner else { return OwnerKind::Absent };
        if self.is_removed(owner) {
            return OwnerKind::Absent;
        }
        match self.q_actors.get(owner) {
            Err(_) => OwnerKind::Absent,
            Ok((true, _)) => OwnerKind::Player,
            Ok((false, true)) => OwnerKind::Enemy,
            Ok((false, false)) => OwnerKind::Other,
        }
    }

    fn despawn(&mut self, entity: Entity) {
        if self.ledger.removed.insert(entity) {
            self.commands.entity(entity).despawn();
        }
    }

    fn apply(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::ProjectileHitsEnemy { projectile, enemy, impact } => {
                self.projectile_hits_enemy(projectile, enemy, impact)
            }
            Interaction::ProjectileHitsPlayer { projectile, player } => {
                self.projectile_hits_player(projectile, player)
            }
            Interaction::EnemyTouchesPlayer { enemy, player } => self.enemy_touches_player(enemy, player),
        }
    }

    fn projectile_hits_enemy(&mut self, projectile: Entity, enemy: Entity, impact: Vec2) {
        let Ok(&Projectile { damage, owner }) = self.q_projectiles.get(projectile) else {
            return;
        };
        if !self.q_vitals.contains(enemy) {
            return;
        }

        // Effects come from a player owner only; an ownerless shot is plain.
        let shooter = owner.filter(|_| self.owner_kind(owner) == OwnerKind::Player);
        let explosive = shooter.is_some_and(|p| self.effects.has(p, Effect::Explosive));
        let piercing = shooter.is_some_and(|p| self.effects.has(p, Effect::Piercing));

        // A shielded enemy ignores the direct hit; piercing and explosive still apply.
        if !self.is_shielded(enemy) {
            if let Ok((_, _, mut health, _, _)) = self.q_vitals.get_mut(enemy) {
                health.take(damage);
            }
        }

        if explosive {
            self.despawn(projectile);
            let amount = self.tunables.explosive_blast_damage();
            let radius = self.tunables.bomb_blast_radius;
            self.detonate(impact, radius, amount);
        } else if !piercing {
            self.despawn(projectile);
        }

        self.settle_enemy(enemy);
    }

    fn projectile_hits_player(&mut self, projectile: Entity, player: Entity) {
        let Ok(&Projectile { damage, .. }) = self.q_projectiles.get(projectile) else {
            return;
        };
        if !self.q_vitals.contains(player) {
            return;
        }
        if !self.is_shielded(player) {
            self.hurt_player(player, damage);
        }
        self.despawn(projectile);
    }

    fn enemy_touches_player(&mut self, enemy: Entity, player: Entity) {
        if !self.q_vitals.contains(player) || self.is_shielded(player) {
            return;
        }
        trace!(?enemy, ?player, "contact damage");
        let amount = self.tunables.contact_damage;
        self.hurt_player(player, amount);
    }

    fn hurt_player(&mut self, player: Entity, amount: f32) {
        let depleted = {
            let Ok((_, _, mut health, _, _)) = self.q_vitals.get_mut(player) else {
                return;
            };
            health.take(amount);
            health.is_depleted()
        };
        self.commands
            .entity(player)
            .insert(Invincible::granted(self.tunables.invincibility_secs));
        self.ledger.shielded.insert(player);
        if depleted {
            self.mark_dead(player);
        }
    }

    fn mark_dead(&mut self, player: Entity) {
        info!(?player, "player died");
        self.commands.entity(player).insert(Dead);
    }

    /// Damage everything in reach and run death handling for whatever it killed.
    fn detonate(&mut self, center: Vec2, radius: f32, amount: f32) {
        let casualties = {
            let removed = &self.ledger.removed;
            let shielded = &self.ledger.shielded;
            let q_invincible = &self.q_invincible;
            apply_blast(
                center,
                radius,
                amount,
                self.q_vitals
                    .iter_mut()
                    .filter(|(entity, ..)| !removed.contains(entity))
                    .map(|(entity, tf, health, is_player, _)| BlastTarget {
                        entity,
                        position: planar(tf),
                        health: health.into_inner(),
                        immune: is_player && (q_invincible.contains(entity) || shielded.contains(&entity)),
                    }),
            )
        };
        debug!(?center, radius, amount, casualties = casualties.len(), "explosion");

        for entity in casualties {
            let Ok((_, _, _, is_player, is_enemy)) = self.q_vitals.get(entity) else {
                continue;
            };
            if is_player {
                self.mark_dead(entity);
            } else if is_enemy {
                self.settle_enemy(entity);
            }
        }
    }

    /// Loot and despawn a depleted enemy. Runs at most once per enemy.
    fn settle_enemy(&mut self, enemy: Entity) {
        if self.is_removed(enemy) {
            return;
        }
        let at = {
            let Ok((_, tf, health, _, _)) = self.q_vitals.get(enemy) else {
                return;
            };
            if !health.is_depleted() {
                return;
            }
            planar(tf)
        };

        let roll = roll_loot(&mut self.rng.0, &self.tunables);
        spawn_loot(&mut self.commands, &mut self.rng.0, roll, at);
        debug!(?enemy, item = roll.item, coins = roll.coins, "enemy killed");
        self.despawn(enemy);
    }
}
