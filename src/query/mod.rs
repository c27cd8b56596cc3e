//! The safe-position query engine: a chainable builder that runs
//! candidate generation, safety filtering, scoring, angular-constrained
//! selection, and final ordering against one [`crate::zone::SafeZoneCalculator`].

pub mod poisson;
pub mod rng;

use crate::math::vector::{Vec2Ext, angle_difference};
use crate::zone::{SafeZoneCalculator, Timestamp};
use glam::Vec2;

/// Named tunable constants for the query engine, grouped the way the rest
/// of the crate groups magic numbers pulled out of call sites.
pub struct QueryDefaults;

impl QueryDefaults {
    /// `min_distance_between` never drops below this, even if a caller
    /// asks for less.
    pub const MIN_SEPARATION_FLOOR: f32 = 0.1;
    /// Poisson-disk candidate generation gives up on an active-list entry
    /// after this many consecutive rejections.
    pub const POISSON_MAX_ATTEMPTS: u32 = 30;
    /// Default sample count for `find_safest_direction`.
    pub const DEFAULT_SAFEST_DIRECTION_SAMPLES: usize = 8;
    /// Default grid resolution for `find_safest_position`.
    pub const DEFAULT_SAFEST_POSITION_RESOLUTION: usize = 8;
}

struct AngularConstraint {
    center: Vec2,
    min_angle: f32,
}

enum OrderingReference {
    Explicit(Vec2),
    Target,
    None,
}

/// A chainable builder bound to one calculator, capturing every
/// constraint a safe-position query can carry. One builder maps to one
/// [`Self::execute`] call; it is not meant to be reused.
pub struct SafePositionQuery<'a> {
    calculator: &'a SafeZoneCalculator,
    count: usize,
    search_center: Vec2,
    search_radius: f32,
    time: Timestamp,
    target: Option<Vec2>,
    target_max_distance: Option<f32>,
    min_distance: f32,
    angular: Option<AngularConstraint>,
    ordering: OrderingReference,
}

impl<'a> SafePositionQuery<'a> {
    pub(crate) fn new(
        calculator: &'a SafeZoneCalculator,
        count: usize,
        center: Option<Vec2>,
        radius: Option<f32>,
        time: Timestamp,
    ) -> Self {
        let (derived_center, derived_radius) = match calculator.arena() {
            Some(arena) => (arena.center(), arena.approximate_radius()),
            None => (Vec2::ZERO, 50.0),
        };
        Self {
            calculator,
            count,
            search_center: center.unwrap_or(derived_center),
            search_radius: radius.unwrap_or(derived_radius),
            time,
            target: None,
            target_max_distance: None,
            min_distance: QueryDefaults::MIN_SEPARATION_FLOOR,
            angular: None,
            ordering: OrderingReference::None,
        }
    }

    /// Sets a target point results are scored toward and, by default,
    /// sorted by distance to (unless [`Self::order_by_distance_to`]
    /// overrides it). `max_distance` further filters out any candidate
    /// farther than it from `target`.
    pub fn near_target(mut self, target: Vec2, max_distance: Option<f32>) -> Self {
        self.target = Some(target);
        self.target_max_distance = max_distance;
        if matches!(self.ordering, OrderingReference::None) {
            self.ordering = OrderingReference::Target;
        }
        self
    }

    /// Sets the minimum distance between any two returned points, clamped
    /// to [`QueryDefaults::MIN_SEPARATION_FLOOR`].
    pub fn min_distance_between(mut self, d: f32) -> Self {
        self.min_distance = d.max(QueryDefaults::MIN_SEPARATION_FLOOR);
        self
    }

    /// Requires any two selected points, as seen from `center`, to differ
    /// in bearing by at least `min_angle` radians.
    pub fn with_min_angle(mut self, center: Vec2, min_angle: f32) -> Self {
        self.angular = Some(AngularConstraint { center, min_angle });
        self
    }

    /// Overrides the final-ordering reference point, regardless of
    /// whether [`Self::near_target`] was called.
    pub fn order_by_distance_to(mut self, reference: Vec2) -> Self {
        self.ordering = OrderingReference::Explicit(reference);
        self
    }

    /// Runs the fixed pipeline: candidate generation, safety filter,
    /// scoring, angular-constrained selection, final ordering. Always
    /// total; an underfilled result (fewer than `count` points) is not an
    /// error.
    pub fn execute(self) -> Vec<Vec2> {
        let mut rng = rand::rng();
        let candidates = poisson::generate(
            self.search_center,
            self.search_radius,
            self.min_distance,
            self.calculator.arena(),
            &mut rng,
        );

        let mut scored: Vec<(Vec2, f32)> = candidates
            .into_iter()
            .filter(|&c| self.calculator.is_safe(c, self.time))
            .filter(|&c| match (self.target, self.target_max_distance) {
                (Some(target), Some(max_dist)) => (c - target).length() <= max_dist,
                _ => true,
            })
            .map(|c| {
                let danger_term = 10.0 * self.calculator.distance_to_nearest_danger(c, self.time);
                let target_term = self.target.map_or(0.0, |t| 5.0 * (c - t).length());
                (c, danger_term - target_term)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<Vec2> = Vec::new();
        for (candidate, _) in scored {
            if selected.len() >= self.count {
                break;
            }
            if let Some(constraint) = &self.angular {
                let bearing = Vec2Ext::angle_to(candidate - constraint.center);
                let accepted = selected.iter().all(|&other| {
                    let other_bearing = Vec2Ext::angle_to(other - constraint.center);
                    angle_difference(bearing, other_bearing) >= constraint.min_angle
                });
                if !accepted {
                    continue;
                }
            }
            selected.push(candidate);
        }

        match self.ordering {
            OrderingReference::Explicit(reference) => {
                selected.sort_by(|a, b| {
                    (*a - reference)
                        .length_squared()
                        .partial_cmp(&(*b - reference).length_squared())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            OrderingReference::Target => {
                if let Some(target) = self.target {
                    selected.sort_by(|a, b| {
                        (*a - target)
                            .length_squared()
                            .partial_cmp(&(*b - target).length_squared())
                            .unwrap_or(std::cmp::Ordering::Equal)
                    });
                }
            }
            OrderingReference::None => {}
        }

        selected
    }
}
