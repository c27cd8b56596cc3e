//! 2D vector helpers and angle conversions for the horizontal (X, Z) plane.
//!
//! The engine treats all geometry as living on the ground plane of a 3D
//! game world, where height (Y) has already been discarded by the caller.
//! [`glam::Vec2`] is used directly as the plane vector type; this module
//! only adds the handful of operations `glam` doesn't already provide,
//! plus the engine's clockwise-from-`+Z` angle convention.

use glam::Vec2;

/// Extension operations on [`Vec2`] specific to this engine's plane
/// convention. `glam::Vec2` already provides `dot`, `length`,
/// `length_squared`, `normalize_or_zero`, `perp_dot` (signed 2D cross
/// product), and `rotate` (rotate by a unit (cos, sin) pair).
pub trait Vec2Ext {
    /// Returns the vector rotated 90 degrees to the left (counter-clockwise).
    fn left(self) -> Vec2;
    /// Returns the vector rotated 90 degrees to the right (clockwise).
    fn right(self) -> Vec2;
    /// Returns the bearing of this vector using the engine's convention:
    /// `atan2(x, z)`, where 0 radians points along `+Z` and the angle
    /// increases clockwise when viewed from above (+Y looking down).
    fn angle_to(self) -> f32;
}

impl Vec2Ext for Vec2 {
    fn left(self) -> Vec2 {
        self.perp()
    }

    fn right(self) -> Vec2 {
        -self.perp()
    }

    fn angle_to(self) -> f32 {
        self.x.atan2(self.y)
    }
}

/// Builds a unit direction vector from the engine's bearing convention:
/// the inverse of [`Vec2Ext::angle_to`].
pub fn direction_from_angle(radians: f32) -> Vec2 {
    Vec2::new(radians.sin(), radians.cos())
}

/// Normalizes an angle in radians into `(-PI, PI]`.
pub fn normalize_angle(radians: f32) -> f32 {
    let tau = std::f32::consts::TAU;
    let mut a = (radians + std::f32::consts::PI) % tau;
    if a <= 0.0 {
        a += tau;
    }
    a - std::f32::consts::PI
}

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Returns the unsigned angular difference between two bearings, normalized
/// into `[0, PI]`.
pub fn angle_difference(a: f32, b: f32) -> f32 {
    normalize_angle(a - b).abs()
}

/// Half of `PI`.
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
/// Full turn in radians.
pub const TAU: f32 = std::f32::consts::TAU;

/// Wraps the angular delta from `from` to `to` so it has the same sign as
/// `sweep`, for walking an arc in a consistent rotational direction.
/// Shared by the arc-capsule region predicate and its SDF counterpart so
/// both agree on where the sweep starts and ends.
pub(crate) fn wrapped_sweep_delta(from: f32, to: f32, sweep: f32) -> f32 {
    let mut d = (to - from) % TAU;
    if sweep >= 0.0 {
        if d < 0.0 {
            d += TAU;
        }
    } else if d > 0.0 {
        d -= TAU;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::delta::assert_in_delta;
    use glam::vec2;

    #[test]
    fn test_left_right() {
        let v = Vec2::X;
        assert_eq!(v.left(), Vec2::Y);
        assert_eq!(v.right(), Vec2::NEG_Y);
    }

    #[test]
    fn test_angle_to() {
        // 0 = +Z
        assert_in_delta(0.0, Vec2Ext::angle_to(Vec2::Y), 1e-6, "forward is zero".into());
        // clockwise towards +X is positive
        assert_in_delta(
            HALF_PI,
            Vec2Ext::angle_to(Vec2::X),
            1e-6,
            "rightward is +HalfPi".into(),
        );
        assert_in_delta(
            -HALF_PI,
            Vec2Ext::angle_to(Vec2::NEG_X),
            1e-6,
            "leftward is -HalfPi".into(),
        );
    }

    #[test]
    fn test_direction_from_angle_roundtrip() {
        for deg in [0.0, 30.0, 90.0, 145.0, -60.0, 179.0] {
            let rad = deg_to_rad(deg);
            let dir = direction_from_angle(rad);
            let back = Vec2Ext::angle_to(dir);
            assert_in_delta(rad, back, 1e-4, format!("roundtrip at {deg} degrees"));
        }
    }

    #[test]
    fn test_normalize_angle() {
        assert_in_delta(0.0, normalize_angle(0.0), 1e-6, "zero".into());
        assert_in_delta(
            0.0,
            normalize_angle(TAU),
            1e-5,
            "full turn wraps to zero".into(),
        );
        assert_in_delta(
            std::f32::consts::PI,
            normalize_angle(std::f32::consts::PI),
            1e-6,
            "pi stays pi".into(),
        );
        assert_in_delta(
            -std::f32::consts::PI + 0.1,
            normalize_angle(std::f32::consts::PI + 0.1),
            1e-5,
            "wraps past pi to negative side".into(),
        );
    }

    #[test]
    fn test_angle_difference() {
        assert_in_delta(
            0.0,
            angle_difference(0.0, TAU),
            1e-5,
            "coincident bearings".into(),
        );
        assert_in_delta(
            std::f32::consts::PI,
            angle_difference(0.0, std::f32::consts::PI),
            1e-5,
            "opposite bearings".into(),
        );
        assert_in_delta(
            HALF_PI,
            angle_difference(0.0, -HALF_PI),
            1e-5,
            "quarter turn, either direction".into(),
        );
    }

    #[test]
    fn test_deg_rad_roundtrip() {
        for v in [0.0, 45.0, 90.0, 180.0, -270.0] {
            assert_in_delta(v, rad_to_deg(deg_to_rad(v)), 1e-3, "deg->rad->deg".into());
        }
        let _ = vec2(0.0, 0.0);
    }
}
