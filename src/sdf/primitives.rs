//! Closed-form signed distance formulas for each primitive shape.
//!
//! Every function returns a true analytical SDF: negative inside the
//! shape, zero on the boundary, positive outside, continuous everywhere.
//! Formulas follow Inigo Quilez's 2D distance function derivations
//! (<https://iquilezles.org/articles/distfunctions2d/>), adapted to this
//! engine's (X, Z) plane and clockwise bearing convention. These are free
//! functions operating on already-localized coordinates, dispatched from
//! [`crate::sdf::ShapeDistance::distance`] — mirroring the free-function +
//! enum-dispatch split used for 3D primitives elsewhere in this codebase's
//! lineage.

use crate::math::vector::{Vec2Ext, wrapped_sweep_delta};
use glam::{Vec2, vec2};

/// Distance function for a circle.
pub fn sample_circle(p: Vec2, origin: Vec2, radius: f32) -> f32 {
    (p - origin).length() - radius
}

/// Distance function for an oriented rectangle anchored at `origin`,
/// extending `front` along `forward` and `back` behind it, `half_width` to
/// either side. `forward` must be normalized.
pub fn sample_rect(p: Vec2, origin: Vec2, forward: Vec2, front: f32, back: f32, half_width: f32) -> f32 {
    let offset = p - origin;
    let along = offset.dot(forward);
    let across = offset.dot(forward.left());

    let center_along = (front - back) * 0.5;
    let half_length = (front + back) * 0.5;

    let q = vec2((along - center_along).abs() - half_length, across.abs() - half_width);
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0)
}

/// Distance function for a circular sector ("pie slice") of radius
/// `radius`, centered on `center_dir`, spanning `half_angle` to either
/// side. `center_dir` must be normalized. `half_angle >= PI` collapses to
/// a plain circle, since the sector then covers the full turn.
pub fn sample_cone(p: Vec2, origin: Vec2, radius: f32, center_dir: Vec2, half_angle: f32) -> f32 {
    if half_angle >= std::f32::consts::PI {
        return sample_circle(p, origin, radius);
    }

    let offset = p - origin;
    let right = center_dir.right();
    // Local frame: y-axis aligned with center_dir, mirrored across it.
    let local = vec2(offset.dot(right).abs(), offset.dot(center_dir));

    let l = local.length() - radius;

    let c = vec2(half_angle.sin(), half_angle.cos());
    let dot_pc = local.dot(c).clamp(0.0, radius);
    let m = (local - c * dot_pc).length();
    let side = (c.y * local.x - c.x * local.y).signum();

    l.max(m * side)
}

/// Distance function for an annulus (ring) between `radius_inner` and
/// `radius_outer`.
pub fn sample_donut(p: Vec2, origin: Vec2, radius_inner: f32, radius_outer: f32) -> f32 {
    let d = (p - origin).length();
    (radius_inner - d).max(d - radius_outer)
}

/// Distance function for an annular sector: the intersection of
/// [`sample_donut`] and [`sample_cone`].
pub fn sample_donut_sector(
    p: Vec2,
    origin: Vec2,
    radius_inner: f32,
    radius_outer: f32,
    center_dir: Vec2,
    half_angle: f32,
) -> f32 {
    sample_donut(p, origin, radius_inner, radius_outer)
        .max(sample_cone(p, origin, radius_outer, center_dir, half_angle))
}

/// Distance function for a "plus sign" of two perpendicular rectangular
/// arms, each `arm_length` long in both directions and `half_width` wide.
pub fn sample_cross(p: Vec2, origin: Vec2, forward: Vec2, arm_length: f32, half_width: f32) -> f32 {
    let arm_a = sample_rect(p, origin, forward, arm_length, arm_length, half_width);
    let arm_b = sample_rect(p, origin, forward.left(), arm_length, arm_length, half_width);
    arm_a.min(arm_b)
}

/// Distance function for a triangle with absolute vertices `a`, `b`, `c`.
pub fn sample_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> f32 {
    let e0 = b - a;
    let e1 = c - b;
    let e2 = a - c;
    let v0 = p - a;
    let v1 = p - b;
    let v2 = p - c;

    let pq0 = v0 - e0 * (v0.dot(e0) / e0.dot(e0)).clamp(0.0, 1.0);
    let pq1 = v1 - e1 * (v1.dot(e1) / e1.dot(e1)).clamp(0.0, 1.0);
    let pq2 = v2 - e2 * (v2.dot(e2) / e2.dot(e2)).clamp(0.0, 1.0);

    let s = (e0.x * e2.y - e0.y * e2.x).signum();

    let d0 = vec2(pq0.dot(pq0), s * (v0.x * e0.y - v0.y * e0.x));
    let d1 = vec2(pq1.dot(pq1), s * (v1.x * e1.y - v1.y * e1.x));
    let d2 = vec2(pq2.dot(pq2), s * (v2.x * e2.y - v2.y * e2.x));

    let d = d0.min(d1).min(d2);
    -d.x.sqrt() * d.y.signum()
}

/// Distance function for a capsule: the segment
/// `origin..origin + forward * length`, thickened by `radius`. `forward`
/// must be normalized.
pub fn sample_capsule(p: Vec2, origin: Vec2, forward: Vec2, length: f32, radius: f32) -> f32 {
    let offset = p - origin;
    let t = offset.dot(forward).clamp(0.0, length);
    let closest = origin + forward * t;
    (p - closest).length() - radius
}

/// Distance function for a tube swept along a circular arc, from `start`
/// around `orbit_center` for `angular_length` radians (sign gives sweep
/// direction), thickened by `tube_radius`. Ends are rounded hemispherical
/// caps.
pub fn sample_arc_capsule(
    p: Vec2,
    start: Vec2,
    orbit_center: Vec2,
    angular_length: f32,
    tube_radius: f32,
) -> f32 {
    let radial = start - orbit_center;
    let arc_radius = radial.length();

    if angular_length.abs() <= f32::EPSILON || arc_radius <= f32::EPSILON {
        return (p - start).length() - tube_radius;
    }

    let start_angle = Vec2Ext::angle_to(radial);
    let point_offset = p - orbit_center;
    let point_angle = Vec2Ext::angle_to(point_offset);
    let point_radius = point_offset.length();

    let delta = wrapped_sweep_delta(start_angle, point_angle, angular_length);
    let t = delta / angular_length;

    if (0.0..=1.0).contains(&t) {
        (point_radius - arc_radius).abs() - tube_radius
    } else {
        let end_angle = start_angle + angular_length;
        let end = orbit_center + crate::math::vector::direction_from_angle(end_angle) * arc_radius;
        let cap = if t < 0.0 { start } else { end };
        (p - cap).length() - tube_radius
    }
}
