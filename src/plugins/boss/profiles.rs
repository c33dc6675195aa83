//! Static boss table: one profile per boss kind, resolved at spawn time.

use std::str::FromStr;

use crate::common::error::CombatError;
use crate::plugins::patterns::PatternKind;

use super::components::BossPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossKind {
    /// "boss_a"
    Orbiter,
    /// "boss_b"
    Crossfire,
    /// "boss_c"
    SpiralKing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossProfile {
    pub id: &'static str,
    pub title: &'static str,
    pub symbol: char,
    pub max_health: f32,
    pub pattern_cooldown: f32,
    pub phase1_patterns: &'static [PatternKind],
    pub phase2_patterns: &'static [PatternKind],
    pub phase1_teleport_cooldown: f32,
    pub phase2_teleport_cooldown: f32,
}

impl BossProfile {
    pub fn patterns(&self, phase: BossPhase) -> &'static [PatternKind] {
        match phase {
            BossPhase::One => self.phase1_patterns,
            BossPhase::Two => self.phase2_patterns,
        }
    }

    pub fn teleport_cooldown(&self, phase: BossPhase) -> f32 {
        match phase {
            BossPhase::One => self.phase1_teleport_cooldown,
            BossPhase::Two => self.phase2_teleport_cooldown,
        }
    }
}

const ORBITER: BossProfile = BossProfile {
    id: "boss_a",
    title: "The Orbiter",
    symbol: '◉',
    max_health: 50.0,
    pattern_cooldown: 3.0,
    phase1_patterns: &[PatternKind::Spiral, PatternKind::Wave],
    phase2_patterns: &[PatternKind::DoubleSpiral, PatternKind::FastWave],
    phase1_teleport_cooldown: 7.0,
    phase2_teleport_cooldown: 4.0,
};

const CROSSFIRE: BossProfile = BossProfile {
    id: "boss_b",
    title: "The Crossfire",
    symbol: '✦',
    max_health: 75.0,
    pattern_cooldown: 3.0,
    phase1_patterns: &[PatternKind::Wave, PatternKind::Pulse],
    phase2_patterns: &[PatternKind::FastWave, PatternKind::BurstPulse],
    phase1_teleport_cooldown: 6.0,
    phase2_teleport_cooldown: 3.0,
};

const SPIRAL_KING: BossProfile = BossProfile {
    id: "boss_c",
    title: "The Spiral King",
    symbol: '◈',
    max_health: 100.0,
    pattern_cooldown: 3.0,
    phase1_patterns: &[PatternKind::Pulse, PatternKind::Spiral],
    phase2_patterns: &[PatternKind::BurstPulse, PatternKind::DoubleSpiral],
    phase1_teleport_cooldown: 6.0,
    phase2_teleport_cooldown: 3.0,
};

impl BossKind {
    pub const ALL: [BossKind; 3] = [BossKind::Orbiter, BossKind::Crossfire, BossKind::SpiralKing];

    pub fn profile(self) -> &'static BossProfile {
        match self {
            BossKind::Orbiter => &ORBITER,
            BossKind::Crossfire => &CROSSFIRE,
            BossKind::SpiralKing => &SPIRAL_KING,
        }
    }

    /// The generator bound to `(self, phase, pattern)`, if any.
    ///
    /// Only patterns listed for the boss's current phase are bound.
    pub fn bound_pattern(self, phase: BossPhase, pattern: PatternKind) -> Option<PatternKind> {
        self.profile().patterns(phase).contains(&pattern).then_some(pattern)
    }
}

impl FromStr for BossKind {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BossKind::ALL
            .into_iter()
            .find(|k| k.profile().id == s)
            .ok_or_else(|| CombatError::UnknownName { kind: "boss", name: s.to_owned() })
    }
}
