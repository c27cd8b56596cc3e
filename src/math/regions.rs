//! Low-level boolean region predicates shared by the AOE shape layer and,
//! where convenient, by the analytic SDF implementations in [`crate::sdf`].
//!
//! These are intentionally cheap, branchy tests — they answer "is this
//! point inside?" without computing a magnitude. [`crate::sdf`] answers the
//! harder "how far inside/outside?" question with true signed distances;
//! the two are cross-checked against each other in `aoe::shape`'s tests.

use crate::math::vector::{Vec2Ext, wrapped_sweep_delta};
use glam::Vec2;

/// Squared-distance circle membership test.
pub fn in_circle(p: Vec2, origin: Vec2, radius: f32) -> bool {
    (p - origin).length_squared() <= radius * radius
}

/// Annulus membership test.
pub fn in_donut(p: Vec2, origin: Vec2, radius_inner: f32, radius_outer: f32) -> bool {
    let d2 = (p - origin).length_squared();
    d2 >= radius_inner * radius_inner && d2 <= radius_outer * radius_outer
}

/// Infinite angular-sector membership test: true if `p` lies within
/// `half_angle` of `center_dir` as seen from `origin`, regardless of
/// distance. `center_dir` must be normalized. The origin itself is always
/// considered inside (a zero-length offset has no defined bearing).
pub fn in_cone(p: Vec2, origin: Vec2, center_dir: Vec2, half_angle: f32) -> bool {
    let offset = p - origin;
    let dir = offset.normalize_or_zero();
    if dir == Vec2::ZERO {
        return true;
    }
    dir.dot(center_dir) >= half_angle.cos()
}

/// Circular sector: a bounded [`in_circle`] intersected with [`in_cone`].
pub fn in_circle_cone(
    p: Vec2,
    origin: Vec2,
    radius: f32,
    center_dir: Vec2,
    half_angle: f32,
) -> bool {
    in_circle(p, origin, radius) && in_cone(p, origin, center_dir, half_angle)
}

/// Annular sector: [`in_donut`] intersected with [`in_cone`].
pub fn in_donut_cone(
    p: Vec2,
    origin: Vec2,
    radius_inner: f32,
    radius_outer: f32,
    center_dir: Vec2,
    half_angle: f32,
) -> bool {
    in_donut(p, origin, radius_inner, radius_outer) && in_cone(p, origin, center_dir, half_angle)
}

/// Alias of [`in_donut_cone`], named for parity with the `DonutSector` shape.
pub fn in_donut_sector(
    p: Vec2,
    origin: Vec2,
    radius_inner: f32,
    radius_outer: f32,
    center_dir: Vec2,
    half_angle: f32,
) -> bool {
    in_donut_cone(p, origin, radius_inner, radius_outer, center_dir, half_angle)
}

/// Oriented rectangle membership test, anchored at `origin` with the box
/// extending `front` along `forward_dir` and `back` behind it, `half_width`
/// to either side. `forward_dir` must be normalized.
pub fn in_rect(
    p: Vec2,
    origin: Vec2,
    forward_dir: Vec2,
    front: f32,
    back: f32,
    half_width: f32,
) -> bool {
    let offset = p - origin;
    let along = offset.dot(forward_dir);
    let across = offset.dot(forward_dir.left());
    along >= -back && along <= front && across.abs() <= half_width
}

/// Oriented rectangle spanning the segment `start..end`, `half_width` to
/// either side. Returns `false` for a zero-length segment — there is no
/// well-defined forward direction to build a rectangle from.
pub fn in_rect_segment(p: Vec2, start: Vec2, end: Vec2, half_width: f32) -> bool {
    let span = end - start;
    let len = span.length();
    if len <= f32::EPSILON {
        return false;
    }
    let forward = span / len;
    let offset = p - start;
    let along = offset.dot(forward);
    let across = offset.dot(forward.left());
    (0.0..=len).contains(&along) && across.abs() <= half_width
}

/// Union of two perpendicular [`in_rect`] arms of equal half-width, each
/// extending `arm_length` both forward and backward from `origin`.
pub fn in_cross(p: Vec2, origin: Vec2, forward_dir: Vec2, arm_length: f32, half_width: f32) -> bool {
    in_rect(p, origin, forward_dir, arm_length, arm_length, half_width)
        || in_rect(
            p,
            origin,
            forward_dir.left(),
            arm_length,
            arm_length,
            half_width,
        )
}

/// Triangle membership test via barycentric sign consistency, for a
/// triangle with absolute vertices `a`, `b`, `c`.
pub fn in_tri(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    fn sign(p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
        (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
    }

    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

/// Capsule membership test: distance from `p` to the segment
/// `origin..origin + forward_dir * length` is at most `radius`.
/// `forward_dir` must be normalized.
pub fn in_capsule(p: Vec2, origin: Vec2, forward_dir: Vec2, length: f32, radius: f32) -> bool {
    let offset = p - origin;
    let t = offset.dot(forward_dir).clamp(0.0, length);
    let closest = origin + forward_dir * t;
    (p - closest).length_squared() <= radius * radius
}

/// Membership test for a tube swept along a circular arc: true if `p` lies
/// within `tube_radius` of the arc starting at `start`, orbiting
/// `orbit_center`, sweeping `angular_length` radians (sign gives sweep
/// direction; the engine's bearing convention is clockwise-positive). Ends
/// of the arc are rounded (hemispherical caps), matching a capsule bent
/// around a circle.
pub fn in_arc_capsule(
    p: Vec2,
    start: Vec2,
    orbit_center: Vec2,
    angular_length: f32,
    tube_radius: f32,
) -> bool {
    let radial = start - orbit_center;
    let arc_radius = radial.length();

    if angular_length.abs() <= f32::EPSILON || arc_radius <= f32::EPSILON {
        return (p - start).length_squared() <= tube_radius * tube_radius;
    }

    let start_angle = Vec2Ext::angle_to(radial);
    let point_offset = p - orbit_center;
    let point_angle = Vec2Ext::angle_to(point_offset);
    let point_radius = point_offset.length();

    let delta = wrapped_sweep_delta(start_angle, point_angle, angular_length);
    let t = delta / angular_length;

    if (0.0..=1.0).contains(&t) {
        (point_radius - arc_radius).abs() <= tube_radius
    } else {
        let end = orbit_center + crate::math::vector::direction_from_angle(start_angle + angular_length) * arc_radius;
        let cap = if t < 0.0 { start } else { end };
        (p - cap).length_squared() <= tube_radius * tube_radius
    }
}
