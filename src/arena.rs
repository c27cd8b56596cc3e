//! Playfield bounds: the circle or rectangle a safe position must stay
//! inside of, independent of any forbidden-zone danger.

use crate::math::vector::Vec2Ext;
use glam::Vec2;

/// An abstract arena boundary. `distance_to_border` is positive inside,
/// negative outside, mirroring [`crate::sdf::ShapeDistance::distance`]'s
/// sign convention but inverted (this is a "how safe from the edge" value,
/// not a containment SDF).
#[derive(Clone, Debug, PartialEq)]
pub enum ArenaBounds {
    Circle { center: Vec2, radius: f32 },
    /// `direction` must be normalized; [`ArenaBounds::rect`] normalizes it
    /// and falls back to +X when it is degenerate.
    Rect {
        center: Vec2,
        direction: Vec2,
        half_width: f32,
        half_length: f32,
    },
}

impl ArenaBounds {
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    /// Builds a rect arena. A zero-length `direction` falls back to +X,
    /// since a rectangle needs a defined forward axis.
    pub fn rect(center: Vec2, direction: Vec2, half_width: f32, half_length: f32) -> Self {
        let direction = {
            let d = direction.normalize_or_zero();
            if d == Vec2::ZERO { Vec2::X } else { d }
        };
        Self::Rect {
            center,
            direction,
            half_width,
            half_length,
        }
    }

    pub fn center(&self) -> Vec2 {
        match self {
            Self::Circle { center, .. } => *center,
            Self::Rect { center, .. } => *center,
        }
    }

    /// An approximate enclosing radius, used by callers (Poisson-disk
    /// candidate generation) that need a scalar extent rather than exact
    /// containment.
    pub fn approximate_radius(&self) -> f32 {
        match self {
            Self::Circle { radius, .. } => *radius,
            Self::Rect {
                half_width,
                half_length,
                ..
            } => (half_width * half_width + half_length * half_length).sqrt(),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Self::Circle { center, radius } => (p - *center).length_squared() <= radius * radius,
            Self::Rect {
                center,
                direction,
                half_width,
                half_length,
            } => {
                let offset = p - *center;
                let along = offset.dot(*direction);
                let across = offset.dot(direction.left());
                along.abs() <= *half_length && across.abs() <= *half_width
            }
        }
    }

    /// Signed distance to the border: positive inside, negative outside.
    pub fn distance_to_border(&self, p: Vec2) -> f32 {
        match self {
            Self::Circle { center, radius } => radius - (p - *center).length(),
            Self::Rect {
                center,
                direction,
                half_width,
                half_length,
            } => {
                let offset = p - *center;
                let along = offset.dot(*direction);
                let across = offset.dot(direction.left());
                let dx = along.abs() - half_length;
                let dz = across.abs() - half_width;

                if dx <= 0.0 && dz <= 0.0 {
                    // Inside: the closer of the two borders wins.
                    (-dx).min(-dz)
                } else if dx > 0.0 && dz > 0.0 {
                    // Outside both slabs: diagonal distance to the corner.
                    -(dx * dx + dz * dz).sqrt()
                } else {
                    // Outside exactly one slab: that slab's overshoot.
                    -dx.max(dz)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::delta::assert_in_delta;
    use glam::vec2;

    #[test]
    fn test_circle_contains_and_border() {
        let arena = ArenaBounds::circle(Vec2::ZERO, 10.0);
        assert!(arena.contains(vec2(5.0, 5.0)));
        assert!(!arena.contains(vec2(10.0, 1.0)));
        assert_in_delta(5.0, arena.distance_to_border(vec2(5.0, 0.0)), 1e-5, "inside".into());
        assert_in_delta(-5.0, arena.distance_to_border(vec2(15.0, 0.0)), 1e-5, "outside".into());
    }

    #[test]
    fn test_rect_degenerate_direction_falls_back_to_x() {
        let arena = ArenaBounds::rect(Vec2::ZERO, Vec2::ZERO, 5.0, 10.0);
        match arena {
            ArenaBounds::Rect { direction, .. } => assert_eq!(direction, Vec2::X),
            _ => panic!("expected rect"),
        }
    }

    #[test]
    fn test_rect_contains() {
        let arena = ArenaBounds::rect(Vec2::ZERO, Vec2::Y, 5.0, 10.0);
        assert!(arena.contains(vec2(3.0, 8.0)));
        assert!(!arena.contains(vec2(6.0, 0.0)));
        assert!(!arena.contains(vec2(0.0, 11.0)));
    }

    #[test]
    fn test_rect_distance_to_border_corner_is_negative_diagonal() {
        let arena = ArenaBounds::rect(Vec2::ZERO, Vec2::Y, 5.0, 10.0);
        let d = arena.distance_to_border(vec2(8.0, 13.0));
        assert!(d < 0.0);
        assert_in_delta(-5.0_f32.hypot(3.0), d, 1e-4, "diagonal corner distance".into());
    }

    #[test]
    fn test_rect_distance_to_border_single_slab() {
        let arena = ArenaBounds::rect(Vec2::ZERO, Vec2::Y, 5.0, 10.0);
        let d = arena.distance_to_border(vec2(6.0, 0.0));
        assert_in_delta(-1.0, d, 1e-5, "outside only the width slab".into());
    }
}
