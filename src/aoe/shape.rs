//! High-level, UI-facing AOE shapes: the vocabulary a caller actually
//! builds zones out of, bundling orientation and a forbidden/safe-zone
//! polarity flag around the raw [`ShapeDistance`] primitives.

use crate::math::regions;
use crate::sdf::ShapeDistance;
use glam::Vec2;

/// A named primitive shape, positioned relative to an eventual `origin`.
/// Values carry no absolute position of their own — `check`/`distance`
/// take the origin at call time, so the same shape can be reused against
/// many cast points (a boss repeatedly casting the same cone, say).
#[derive(Clone, Debug, PartialEq)]
pub enum AOEPrimitive {
    Circle { radius: f32 },
    Rect { forward: Vec2, front: f32, back: f32, half_width: f32 },
    Cone { radius: f32, center_dir: Vec2, half_angle: f32 },
    Donut { radius_inner: f32, radius_outer: f32 },
    DonutSector {
        radius_inner: f32,
        radius_outer: f32,
        center_dir: Vec2,
        half_angle: f32,
    },
    Cross { forward: Vec2, arm_length: f32, half_width: f32 },
    Triangle { v0: Vec2, v1: Vec2, v2: Vec2 },
    Capsule { forward: Vec2, length: f32, radius: f32 },
    ArcCapsule {
        start_offset: Vec2,
        orbit_offset: Vec2,
        angular_length: f32,
        tube_radius: f32,
    },
}

/// A value wrapper over an [`AOEPrimitive`] plus a polarity flag.
/// `invert_forbidden == true` flips the shape's danger/safe sense: the
/// region the primitive describes becomes safe, and everywhere else
/// becomes dangerous (useful for "stand inside the circle" mechanics).
#[derive(Clone, Debug, PartialEq)]
pub struct AOEShape {
    pub primitive: AOEPrimitive,
    pub invert_forbidden: bool,
}

impl AOEShape {
    pub fn new(primitive: AOEPrimitive) -> Self {
        Self {
            primitive,
            invert_forbidden: false,
        }
    }

    /// Returns the same shape with `invert_forbidden` set.
    pub fn inverted(mut self) -> Self {
        self.invert_forbidden = true;
        self
    }

    /// Returns `true` iff `p` lies within the danger region this shape
    /// describes when cast from `origin`, after applying polarity.
    pub fn check(&self, p: Vec2, origin: Vec2) -> bool {
        let raw = match &self.primitive {
            AOEPrimitive::Circle { radius } => regions::in_circle(p, origin, *radius),
            AOEPrimitive::Rect {
                forward,
                front,
                back,
                half_width,
            } => regions::in_rect(p, origin, *forward, *front, *back, *half_width),
            AOEPrimitive::Cone {
                radius,
                center_dir,
                half_angle,
            } => regions::in_circle_cone(p, origin, *radius, *center_dir, *half_angle),
            AOEPrimitive::Donut {
                radius_inner,
                radius_outer,
            } => regions::in_donut(p, origin, *radius_inner, *radius_outer),
            AOEPrimitive::DonutSector {
                radius_inner,
                radius_outer,
                center_dir,
                half_angle,
            } => regions::in_donut_sector(p, origin, *radius_inner, *radius_outer, *center_dir, *half_angle),
            AOEPrimitive::Cross {
                forward,
                arm_length,
                half_width,
            } => regions::in_cross(p, origin, *forward, *arm_length, *half_width),
            AOEPrimitive::Triangle { v0, v1, v2 } => {
                regions::in_tri(p, origin + *v0, origin + *v1, origin + *v2)
            }
            AOEPrimitive::Capsule {
                forward,
                length,
                radius,
            } => regions::in_capsule(p, origin, *forward, *length, *radius),
            AOEPrimitive::ArcCapsule {
                start_offset,
                orbit_offset,
                angular_length,
                tube_radius,
            } => regions::in_arc_capsule(
                p,
                origin + *start_offset,
                origin + *orbit_offset,
                *angular_length,
                *tube_radius,
            ),
        };
        raw ^ self.invert_forbidden
    }

    /// Builds the [`ShapeDistance`] this shape represents, anchored at
    /// `origin`, with polarity already folded in via [`ShapeDistance::inverted`].
    pub fn distance(&self, origin: Vec2) -> ShapeDistance {
        let base = match &self.primitive {
            AOEPrimitive::Circle { radius } => ShapeDistance::Circle {
                origin,
                radius: *radius,
            },
            AOEPrimitive::Rect {
                forward,
                front,
                back,
                half_width,
            } => ShapeDistance::Rect {
                origin,
                forward: *forward,
                front: *front,
                back: *back,
                half_width: *half_width,
            },
            AOEPrimitive::Cone {
                radius,
                center_dir,
                half_angle,
            } => ShapeDistance::Cone {
                origin,
                radius: *radius,
                center_dir: *center_dir,
                half_angle: *half_angle,
            },
            AOEPrimitive::Donut {
                radius_inner,
                radius_outer,
            } => ShapeDistance::Donut {
                origin,
                radius_inner: *radius_inner,
                radius_outer: *radius_outer,
            },
            AOEPrimitive::DonutSector {
                radius_inner,
                radius_outer,
                center_dir,
                half_angle,
            } => ShapeDistance::DonutSector {
                origin,
                radius_inner: *radius_inner,
                radius_outer: *radius_outer,
                center_dir: *center_dir,
                half_angle: *half_angle,
            },
            AOEPrimitive::Cross {
                forward,
                arm_length,
                half_width,
            } => ShapeDistance::Cross {
                origin,
                forward: *forward,
                arm_length: *arm_length,
                half_width: *half_width,
            },
            AOEPrimitive::Triangle { v0, v1, v2 } => ShapeDistance::Triangle {
                origin,
                v0: *v0,
                v1: *v1,
                v2: *v2,
            },
            AOEPrimitive::Capsule {
                forward,
                length,
                radius,
            } => ShapeDistance::Capsule {
                origin,
                forward: *forward,
                length: *length,
                radius: *radius,
            },
            AOEPrimitive::ArcCapsule {
                start_offset,
                orbit_offset,
                angular_length,
                tube_radius,
            } => ShapeDistance::ArcCapsule {
                start: origin + *start_offset,
                orbit_center: origin + *orbit_offset,
                angular_length: *angular_length,
                tube_radius: *tube_radius,
            },
        };
        if self.invert_forbidden { base.inverted() } else { base }
    }
}

/// Convenience constructor for a cone facing `towards`, normalizing the
/// direction and falling back to the engine's default forward (+Z) if it
/// is degenerate.
pub fn facing_or_default(towards: Vec2) -> Vec2 {
    let dir = towards.normalize_or_zero();
    if dir == Vec2::ZERO { Vec2::Y } else { dir }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::delta::assert_in_delta_vector;
    use crate::sdf::EPSILON;
    use glam::vec2;

    #[test]
    fn test_check_matches_distance_sign_circle() {
        let shape = AOEShape::new(AOEPrimitive::Circle { radius: 5.0 });
        let origin = vec2(10.0, 10.0);
        for p in [vec2(10.0, 10.0), vec2(13.0, 10.0), vec2(20.0, 20.0)] {
            assert_eq!(shape.check(p, origin), shape.distance(origin).distance(p) <= EPSILON);
        }
    }

    #[test]
    fn test_inverted_flips_check() {
        let shape = AOEShape::new(AOEPrimitive::Circle { radius: 5.0 });
        let inverted = shape.clone().inverted();
        let p = vec2(1.0, 0.0);
        assert_ne!(shape.check(p, Vec2::ZERO), inverted.check(p, Vec2::ZERO));
    }

    #[test]
    fn test_inverted_distance_is_negated() {
        let shape = AOEShape::new(AOEPrimitive::Circle { radius: 5.0 });
        let inverted = shape.clone().inverted();
        let p = vec2(3.0, 0.0);
        let origin = Vec2::ZERO;
        assert_eq!(
            inverted.distance(origin).distance(p),
            -shape.distance(origin).distance(p)
        );
    }

    #[test]
    fn test_cone_check_matches_region_via_facing() {
        let dir = facing_or_default(Vec2::ZERO);
        assert_eq!(dir, Vec2::Y);
        let shape = AOEShape::new(AOEPrimitive::Cone {
            radius: 10.0,
            center_dir: dir,
            half_angle: 0.3,
        });
        assert!(shape.check(vec2(0.0, 5.0), Vec2::ZERO));
        assert!(!shape.check(vec2(5.0, 0.0), Vec2::ZERO));
    }

    #[test]
    fn test_rect_rotated_full_turn_matches_unrotated() {
        let origin = Vec2::ZERO;
        let front = 4.0;
        let back = 1.0;
        let half_width = 2.0;
        let sample_points = [
            vec2(0.0, 3.0),
            vec2(1.5, -0.5),
            vec2(0.0, 5.0),
            vec2(2.5, 1.0),
            vec2(-1.0, 2.0),
        ];

        let unrotated = AOEShape::new(AOEPrimitive::Rect {
            forward: Vec2::Y,
            front,
            back,
            half_width,
        });

        // Sweeping a full 2*PI turn should land back on the original
        // forward direction, and every sampled point's `check` result
        // should match the unrotated shape's at each step along the way.
        let steps = 12;
        for i in 0..=steps {
            let angle = (i as f32 / steps as f32) * std::f32::consts::TAU;
            let forward = Vec2::from_angle(angle).rotate(Vec2::Y);
            if i == steps {
                assert_in_delta_vector(Vec2::Y, forward, 1e-4, "full turn returns to the starting forward");
            }
            let rotated = AOEShape::new(AOEPrimitive::Rect {
                forward,
                front,
                back,
                half_width,
            });
            for &p in &sample_points {
                let rotated_p = Vec2::from_angle(angle).rotate(p);
                assert_eq!(
                    rotated.check(rotated_p, origin),
                    unrotated.check(p, origin),
                    "angle {angle}, point {p}"
                );
            }
        }
    }

    #[test]
    fn test_rect_shape_check_matches_region() {
        let shape = AOEShape::new(AOEPrimitive::Rect {
            forward: Vec2::Y,
            front: 4.0,
            back: 1.0,
            half_width: 2.0,
        });
        let origin = Vec2::ZERO;
        assert!(shape.check(vec2(0.0, 3.0), origin));
        assert!(!shape.check(vec2(0.0, 5.0), origin));
    }
}
