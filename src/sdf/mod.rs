//! Signed Distance Field math and shape sampling.
//!
//! [`ShapeDistance`] is a tagged variant (sum type) dispatched through an
//! inline `match` in [`ShapeDistance::distance`], rather than a polymorphic
//! shape hierarchy — this keeps the innermost loop of every query
//! (safety checks, scoring, contour marching) free of virtual dispatch.

pub mod combinators;
pub mod primitives;

use glam::Vec2;

/// Tolerance used when comparing a distance against zero to decide
/// boundary membership. `distance(p) <= 0` is the formal `contains`
/// predicate; this constant is only used by callers that need an
/// inclusive "on the boundary" band (tests, brute-force cross-checks).
pub const EPSILON: f32 = 1e-5;

/// A signed distance field: negative inside, zero on the boundary,
/// positive outside. Combinators recurse into boxed children so the enum
/// stays a fixed, `Copy`-unfriendly-but-bounded size regardless of nesting
/// depth.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDistance {
    /// A disc of `radius` centered on `origin`.
    Circle { origin: Vec2, radius: f32 },
    /// An oriented rectangle anchored at `origin`, extending `front` along
    /// `forward` and `back` behind it, `half_width` to either side.
    Rect {
        origin: Vec2,
        forward: Vec2,
        front: f32,
        back: f32,
        half_width: f32,
    },
    /// A circular sector of `radius`, centered on `center_dir`, spanning
    /// `half_angle` to either side.
    Cone {
        origin: Vec2,
        radius: f32,
        center_dir: Vec2,
        half_angle: f32,
    },
    /// A ring between `radius_inner` and `radius_outer`.
    Donut {
        origin: Vec2,
        radius_inner: f32,
        radius_outer: f32,
    },
    /// An annular sector: a [`ShapeDistance::Donut`] intersected with a
    /// [`ShapeDistance::Cone`].
    DonutSector {
        origin: Vec2,
        radius_inner: f32,
        radius_outer: f32,
        center_dir: Vec2,
        half_angle: f32,
    },
    /// A "plus sign" of two perpendicular rectangular arms.
    Cross {
        origin: Vec2,
        forward: Vec2,
        arm_length: f32,
        half_width: f32,
    },
    /// A triangle with vertices given relative to `origin`.
    Triangle { origin: Vec2, v0: Vec2, v1: Vec2, v2: Vec2 },
    /// A capsule from `origin` along `forward` for `length`, thickened by
    /// `radius`.
    Capsule {
        origin: Vec2,
        forward: Vec2,
        length: f32,
        radius: f32,
    },
    /// A tube swept along a circular arc starting at `start`, orbiting
    /// `orbit_center`, for `angular_length` radians.
    ArcCapsule {
        start: Vec2,
        orbit_center: Vec2,
        angular_length: f32,
        tube_radius: f32,
    },
    /// The negation of a child field: inside and outside are swapped.
    Inverted(Box<ShapeDistance>),
    /// The union (`min`) of a set of fields.
    Union(Vec<ShapeDistance>),
    /// The intersection (`max`) of a set of fields.
    Intersection(Vec<ShapeDistance>),
}

impl ShapeDistance {
    /// Evaluates the signed distance from `p` to this field's boundary.
    /// Negative inside, zero on the boundary, positive outside. Total:
    /// never panics, never returns NaN for finite, well-formed inputs.
    pub fn distance(&self, p: Vec2) -> f32 {
        use primitives::*;
        match self {
            Self::Circle { origin, radius } => sample_circle(p, *origin, *radius),
            Self::Rect {
                origin,
                forward,
                front,
                back,
                half_width,
            } => sample_rect(p, *origin, *forward, *front, *back, *half_width),
            Self::Cone {
                origin,
                radius,
                center_dir,
                half_angle,
            } => sample_cone(p, *origin, *radius, *center_dir, *half_angle),
            Self::Donut {
                origin,
                radius_inner,
                radius_outer,
            } => sample_donut(p, *origin, *radius_inner, *radius_outer),
            Self::DonutSector {
                origin,
                radius_inner,
                radius_outer,
                center_dir,
                half_angle,
            } => sample_donut_sector(p, *origin, *radius_inner, *radius_outer, *center_dir, *half_angle),
            Self::Cross {
                origin,
                forward,
                arm_length,
                half_width,
            } => sample_cross(p, *origin, *forward, *arm_length, *half_width),
            Self::Triangle { origin, v0, v1, v2 } => {
                sample_triangle(p, *origin + *v0, *origin + *v1, *origin + *v2)
            }
            Self::Capsule {
                origin,
                forward,
                length,
                radius,
            } => sample_capsule(p, *origin, *forward, *length, *radius),
            Self::ArcCapsule {
                start,
                orbit_center,
                angular_length,
                tube_radius,
            } => sample_arc_capsule(p, *start, *orbit_center, *angular_length, *tube_radius),
            Self::Inverted(child) => combinators::invert(child.distance(p)),
            Self::Union(children) => {
                combinators::union_many(&children.iter().map(|c| c.distance(p)).collect::<Vec<_>>())
            }
            Self::Intersection(children) => {
                combinators::intersection_many(&children.iter().map(|c| c.distance(p)).collect::<Vec<_>>())
            }
        }
    }

    /// Returns `true` iff `p` lies inside or on the boundary of this field.
    /// Equivalent to `self.distance(p) <= 0.0`.
    pub fn contains(&self, p: Vec2) -> bool {
        self.distance(p) <= 0.0
    }

    /// Wraps this field in a negation: inside and outside swap.
    pub fn inverted(self) -> Self {
        Self::Inverted(Box::new(self))
    }

    /// An approximate bounding circle `(center, radius)` for this field,
    /// used only by [`Self::row_intersects`] for cheap rejection — it is
    /// not guaranteed tight, only conservative (never smaller than the
    /// true shape).
    fn bounding_circle(&self) -> Option<(Vec2, f32)> {
        match self {
            Self::Circle { origin, radius } => Some((*origin, *radius)),
            Self::Donut { origin, radius_outer, .. } => Some((*origin, *radius_outer)),
            Self::DonutSector { origin, radius_outer, .. } => Some((*origin, *radius_outer)),
            Self::Cone { origin, radius, .. } => Some((*origin, *radius)),
            Self::Rect {
                origin,
                forward,
                front,
                back,
                half_width,
            } => {
                let center_along = (front - back) * 0.5;
                let half_length = (front + back) * 0.5;
                let center = *origin + *forward * center_along;
                let radius = (half_length * half_length + half_width * half_width).sqrt();
                Some((center, radius))
            }
            Self::Cross {
                origin,
                arm_length,
                half_width,
                ..
            } => Some((*origin, (arm_length * arm_length + half_width * half_width).sqrt())),
            Self::Triangle { origin, v0, v1, v2 } => {
                let center = (*v0 + *v1 + *v2) / 3.0 + *origin;
                let radius = [*v0, *v1, *v2]
                    .iter()
                    .map(|v| (*origin + *v - center).length())
                    .fold(0.0_f32, f32::max);
                Some((center, radius))
            }
            Self::Capsule {
                origin,
                forward,
                length,
                radius,
            } => Some((*origin + *forward * (length * 0.5), length * 0.5 + radius)),
            Self::ArcCapsule {
                start,
                orbit_center,
                tube_radius,
                ..
            } => {
                let arc_radius = (*start - *orbit_center).length();
                Some((*orbit_center, arc_radius + tube_radius))
            }
            // An inverted field's "inside" is everything but a bounded
            // region, so there is no conservative finite bound to reject with.
            Self::Inverted(_) => None,
            Self::Union(children) => {
                let mut acc: Option<(Vec2, f32)> = None;
                for child in children {
                    let Some((c, r)) = child.bounding_circle() else {
                        return None;
                    };
                    acc = Some(match acc {
                        None => (c, r),
                        Some((ac, ar)) => {
                            // Conservative enclosing circle: not tight, but
                            // never smaller than the true union footprint.
                            let d = (c - ac).length();
                            (ac, ar.max(d + r))
                        }
                    });
                }
                acc
            }
            Self::Intersection(children) => {
                // An intersection is at least as small as its tightest
                // child; any child without a finite bound can be ignored.
                children
                    .iter()
                    .filter_map(|c| c.bounding_circle())
                    .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            }
        }
    }

    /// Cheap fast-reject for a row query: does the segment
    /// `start..start + direction * length` come within `cushion` of this
    /// field's bounding region? Returns `true` when unsure — this only
    /// ever says "no" when it can prove there is no intersection, never
    /// the reverse, so it is safe for callers to skip full evaluation on
    /// `false` but must still evaluate `distance` on `true`.
    pub fn row_intersects(&self, start: Vec2, direction: Vec2, length: f32, cushion: f32) -> bool {
        match self {
            Self::Inverted(_) => true,
            Self::Union(children) => children
                .iter()
                .any(|c| c.row_intersects(start, direction, length, cushion)),
            Self::Intersection(children) => children
                .iter()
                .all(|c| c.row_intersects(start, direction, length, cushion)),
            _ => {
                let Some((center, radius)) = self.bounding_circle() else {
                    return true;
                };
                let offset = center - start;
                let t = offset.dot(direction).clamp(0.0, length);
                let closest = start + direction * t;
                (center - closest).length() <= radius + cushion
            }
        }
    }
}
