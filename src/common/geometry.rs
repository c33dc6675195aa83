//! 2D helpers shared by the collision, homing and boss systems.
//!
//! Positions live in `Transform::translation`; these helpers only ever look at x/y.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

/// Planar position of a transform.
#[inline]
pub fn planar(tf: &Transform) -> Vec2 {
    tf.translation.truncate()
}

/// Move a transform in the plane, keeping its draw depth.
#[inline]
pub fn set_planar(tf: &mut Transform, p: Vec2) {
    tf.translation.x = p.x;
    tf.translation.y = p.y;
}

/// Circle overlap. Strict: circles that only touch do not collide.
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Blast reach. Inclusive: a target exactly on the rim is hit.
#[inline]
pub fn within_radius(center: Vec2, radius: f32, p: Vec2) -> bool {
    center.distance(p) <= radius
}

/// Heading of a vector in radians, `atan2(y, x)`.
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Wrap an angle difference into `[-PI, PI]`.
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let wrapped = (a + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps +PI to -PI; keep the sign the caller asked for.
    if wrapped == -PI && a > 0.0 { PI } else { wrapped }
}

/// Unit vector for an angle given in degrees.
#[inline]
pub fn direction_deg(deg: f32) -> Vec2 {
    Vec2::from_angle(deg.to_radians())
}
