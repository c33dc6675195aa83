use bevy::prelude::*;

use crate::plugins::patterns::PatternKind;

use super::profiles::BossKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BossPhase {
    #[default]
    One,
    Two,
}

impl BossPhase {
    pub fn number(self) -> u8 {
        match self {
            BossPhase::One => 1,
            BossPhase::Two => 2,
        }
    }
}

/// Boss identity and phase state.
///
/// `phase` only ever moves from `One` to `Two`; `has_transitioned` guards the one-shot switch.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Boss {
    pub kind: BossKind,
    pub phase: BossPhase,
    pub has_transitioned: bool,
    /// Health ratio at or below which phase 2 starts.
    pub phase2_threshold: f32,
}

impl Boss {
    pub const DEFAULT_PHASE2_THRESHOLD: f32 = 0.5;

    pub fn new(kind: BossKind) -> Self {
        Self {
            kind,
            phase: BossPhase::One,
            has_transitioned: false,
            phase2_threshold: Self::DEFAULT_PHASE2_THRESHOLD,
        }
    }
}

/// Per-boss attack and teleport timers. Created and removed together with `Boss`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BossAi {
    pub pattern: PatternKind,
    pub pattern_timer: f32,
    pub pattern_cooldown: f32,
    pub teleport_timer: f32,
    pub teleport_cooldown: f32,
}
