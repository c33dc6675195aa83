//! Boss bullet patterns.
//!
//! Pure functions: an origin and a few parameters in, a list of shot vectors out. No world
//! access, so they are trivially testable and safe to call from anywhere.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::common::error::CombatError;
use crate::common::geometry::direction_deg;

/// One outgoing projectile: where it starts and how fast it moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotVector {
    pub origin: Vec2,
    pub velocity: Vec2,
}

impl ShotVector {
    #[inline]
    fn at_angle(origin: Vec2, angle_deg: f32, speed: f32) -> Self {
        Self { origin, velocity: direction_deg(angle_deg) * speed }
    }
}

/// `count` shots evenly spaced around a full circle, offset by `rotation_deg`.
pub fn spiral(origin: Vec2, rotation_deg: f32, count: u32, speed: f32) -> Vec<ShotVector> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    (0..count)
        .map(|i| ShotVector::at_angle(origin, (i as f32 * step + rotation_deg) % 360.0, speed))
        .collect()
}

/// `count` shots spread across `arc_width_deg`, centred on `sweep_deg`.
///
/// A single shot goes straight along the sweep's left edge, matching a zero-width step.
pub fn wave(origin: Vec2, sweep_deg: f32, count: u32, arc_width_deg: f32, speed: f32) -> Vec<ShotVector> {
    let start = sweep_deg - arc_width_deg / 2.0;
    let step = if count > 1 { arc_width_deg / (count - 1) as f32 } else { 0.0 };
    (0..count)
        .map(|i| ShotVector::at_angle(origin, start + i as f32 * step, speed))
        .collect()
}

/// A complete ring: a spiral with no rotation.
pub fn pulse(origin: Vec2, count: u32, speed: f32) -> Vec<ShotVector> {
    spiral(origin, 0.0, count, speed)
}

/// Shape and parameters of a pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatternShape {
    Spiral { rotation_deg: f32, count: u32, speed: f32 },
    Wave { sweep_deg: f32, count: u32, arc_width_deg: f32, speed: f32 },
    Pulse { count: u32, speed: f32 },
}

impl PatternShape {
    pub fn generate(self, origin: Vec2) -> Vec<ShotVector> {
        match self {
            PatternShape::Spiral { rotation_deg, count, speed } => spiral(origin, rotation_deg, count, speed),
            PatternShape::Wave { sweep_deg, count, arc_width_deg, speed } => {
                wave(origin, sweep_deg, count, arc_width_deg, speed)
            }
            PatternShape::Pulse { count, speed } => pulse(origin, count, speed),
        }
    }
}

/// Named patterns. The last three are the phase-2 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Spiral,
    Wave,
    Pulse,
    DoubleSpiral,
    FastWave,
    BurstPulse,
}

impl PatternKind {
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Spiral,
        PatternKind::Wave,
        PatternKind::Pulse,
        PatternKind::DoubleSpiral,
        PatternKind::FastWave,
        PatternKind::BurstPulse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Spiral => "spiral",
            PatternKind::Wave => "wave",
            PatternKind::Pulse => "pulse",
            PatternKind::DoubleSpiral => "double_spiral",
            PatternKind::FastWave => "fast_wave",
            PatternKind::BurstPulse => "burst_pulse",
        }
    }

    pub fn shape(self) -> PatternShape {
        match self {
            PatternKind::Spiral => PatternShape::Spiral { rotation_deg: 0.0, count: 8, speed: 4.0 },
            PatternKind::Wave => PatternShape::Wave { sweep_deg: 0.0, count: 5, arc_width_deg: 60.0, speed: 5.0 },
            PatternKind::Pulse => PatternShape::Pulse { count: 12, speed: 3.5 },
            PatternKind::DoubleSpiral => PatternShape::Spiral { rotation_deg: 0.0, count: 16, speed: 4.0 },
            PatternKind::FastWave => PatternShape::Wave { sweep_deg: 0.0, count: 7, arc_width_deg: 90.0, speed: 6.0 },
            PatternKind::BurstPulse => PatternShape::Pulse { count: 16, speed: 4.0 },
        }
    }

    #[inline]
    pub fn generate(self, origin: Vec2) -> Vec<ShotVector> {
        self.shape().generate(origin)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CombatError::UnknownName { kind: "pattern", name: s.to_owned() })
    }
}
