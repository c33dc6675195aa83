//! Validation errors.
//!
//! Everything that can be rejected is rejected when a component or resource is built.
//! Once a value is inside the world the frame systems treat it as valid and never fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombatError {
    #[error("health must satisfy 0 <= current <= max (got current={current}, max={max})")]
    InvalidHealth { current: f32, max: f32 },

    #[error("collider radius must be a finite value >= 0 (got {0})")]
    NegativeRadius(f32),

    #[error("projectile damage must be a finite value >= 0 (got {0})")]
    NegativeDamage(f32),

    #[error("invincibility duration must be a finite value >= 0 (got {0})")]
    InvalidDuration(f32),

    #[error("stat `{name}` must be a finite value >= 0 (got {value})")]
    NegativeStat { name: &'static str, value: f32 },

    #[error("frame delta must be a finite value >= 0 (got {0})")]
    InvalidDelta(f32),

    #[error("tunable `{name}` is out of range (got {value})")]
    TunableOutOfRange { name: &'static str, value: f32 },

    #[error("unknown {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },

    #[error("resource `{0}` is missing from the world")]
    MissingResource(&'static str),

    #[error("combat frame schedule is not registered in this world")]
    ScheduleMissing,
}

pub type CombatResult<T> = Result<T, CombatError>;

/// Reject NaN/inf and negatives in one place.
#[inline]
pub(crate) fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
