//! Top-level game state. The combat frame only runs from `FixedUpdate` while `InGame`.

use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    InGame,
    /// Menus, room transitions: combat is frozen, `resolve_frame` still works.
    Paused,
}
