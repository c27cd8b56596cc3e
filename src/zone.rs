//! The forbidden-zone registry: a time-gated collection of danger SDFs
//! plus the point queries (`is_safe`, `distance_to_nearest_danger`,
//! `find_safest_*`) built on top of it.

use crate::arena::ArenaBounds;
use crate::math::vector::direction_from_angle;
use crate::sdf::ShapeDistance;
use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// A monotonic point in time, comparable to a [`ForbiddenZone::activation`].
/// Seconds, caller-defined epoch — the engine never reads a clock itself.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);
}

/// A dangerous region, gated by an activation time.
#[derive(Clone, Debug, PartialEq)]
pub struct ForbiddenZone {
    pub shape: ShapeDistance,
    pub activation: Timestamp,
}

impl ForbiddenZone {
    pub fn new(shape: ShapeDistance, activation: Timestamp) -> Self {
        Self { shape, activation }
    }

    /// A zone is active at query time `t` iff its activation has passed.
    pub fn is_active(&self, t: Timestamp) -> bool {
        self.activation <= t
    }
}

/// Owns an ordered, append-only list of forbidden zones, an optional
/// arena boundary, and a generation counter bumped on every mutation.
/// Exclusively owned by one caller — see [`CalculatorRegistry`] for the
/// optional shared-observer case.
pub struct SafeZoneCalculator {
    zones: Vec<ForbiddenZone>,
    arena: Option<ArenaBounds>,
    generation: u64,
}

impl Default for SafeZoneCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeZoneCalculator {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            arena: None,
            generation: 0,
        }
    }

    /// The current generation counter, incremented on every mutating call.
    /// Exposed so a [`CalculatorRegistry`] observer can cheaply tell
    /// whether its cached view is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_arena(&mut self, bounds: Option<ArenaBounds>) {
        self.arena = bounds;
        self.generation += 1;
    }

    pub fn arena(&self) -> Option<&ArenaBounds> {
        self.arena.as_ref()
    }

    pub fn add_zone(&mut self, zone: ForbiddenZone) {
        self.zones.push(zone);
        self.generation += 1;
    }

    pub fn add_zones(&mut self, zones: impl IntoIterator<Item = ForbiddenZone>) {
        self.zones.extend(zones);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.zones.clear();
        self.generation += 1;
    }

    pub fn active_zone_count(&self, t: Timestamp) -> usize {
        self.zones.iter().filter(|z| z.is_active(t)).count()
    }

    pub fn active_zones(&self, t: Timestamp) -> impl Iterator<Item = &ForbiddenZone> {
        self.zones.iter().filter(move |z| z.is_active(t))
    }

    /// True iff `p` is within the arena (when set) and outside every
    /// active zone. Being outside the arena is always unsafe.
    pub fn is_safe(&self, p: Vec2, t: Timestamp) -> bool {
        if let Some(arena) = &self.arena {
            if !arena.contains(p) {
                return false;
            }
        }
        self.active_zones(t).all(|z| z.shape.distance(p) > 0.0)
    }

    /// Distance to the nearest active danger. `+infinity` if there are no
    /// active zones. Being outside the arena yields a negative value equal
    /// to the (negated) distance back to the border.
    pub fn distance_to_nearest_danger(&self, p: Vec2, t: Timestamp) -> f32 {
        if let Some(arena) = &self.arena {
            if !arena.contains(p) {
                return -arena.distance_to_border(p).abs();
            }
        }
        self.active_zones(t)
            .map(|z| z.shape.distance(p))
            .fold(f32::INFINITY, f32::min)
    }

    /// Samples `sample_count` unit vectors evenly around `p` (defaulting to
    /// [`crate::query::QueryDefaults::DEFAULT_SAFEST_DIRECTION_SAMPLES`]
    /// when omitted) and returns the direction whose nearest-danger
    /// distance at `p + eps * d` is greatest. Ties favor the lowest sample
    /// index.
    pub fn find_safest_direction(&self, p: Vec2, t: Timestamp, sample_count: Option<usize>) -> Vec2 {
        const EPS: f32 = 0.5;
        let count = sample_count
            .unwrap_or(crate::query::QueryDefaults::DEFAULT_SAFEST_DIRECTION_SAMPLES)
            .max(1);
        let mut best_dir = Vec2::Y;
        let mut best_score = f32::NEG_INFINITY;
        for i in 0..count {
            let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
            let dir = direction_from_angle(angle);
            let score = self.distance_to_nearest_danger(p + dir * EPS, t);
            if score > best_score {
                best_score = score;
                best_dir = dir;
            }
        }
        best_dir
    }

    /// Scans a uniform `resolution x resolution` grid within `center +-
    /// r`, intersected with the arena if set, and returns the cell center
    /// maximizing nearest-danger distance. Ties favor the first cell
    /// encountered scanning -X then -Z. `resolution` defaults to
    /// [`crate::query::QueryDefaults::DEFAULT_SAFEST_POSITION_RESOLUTION`]
    /// when omitted.
    pub fn find_safest_position(&self, center: Vec2, r: f32, t: Timestamp, resolution: Option<usize>) -> Option<Vec2> {
        let resolution = resolution.unwrap_or(crate::query::QueryDefaults::DEFAULT_SAFEST_POSITION_RESOLUTION);
        if r <= 0.0 || resolution == 0 {
            return None;
        }
        let step = (2.0 * r) / resolution as f32;
        let mut best: Option<(Vec2, f32)> = None;
        for iz in 0..resolution {
            for ix in 0..resolution {
                let cell = Vec2::new(
                    center.x - r + step * (ix as f32 + 0.5),
                    center.y - r + step * (iz as f32 + 0.5),
                );
                if let Some(arena) = &self.arena {
                    if !arena.contains(cell) {
                        continue;
                    }
                }
                let score = self.distance_to_nearest_danger(cell, t);
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((cell, score));
                }
            }
        }
        best.map(|(p, _)| p)
    }

    /// Starts a chainable [`crate::query::SafePositionQuery`] builder bound
    /// to this calculator.
    pub fn find_safe_positions(
        &self,
        count: usize,
        center: Option<Vec2>,
        radius: Option<f32>,
        t: Timestamp,
    ) -> crate::query::SafePositionQuery<'_> {
        crate::query::SafePositionQuery::new(self, count, center, radius, t)
    }
}

/// An `Arc`-wrapped handle other observers (renderers, debug overlays) can
/// hold a [`Weak`] reference to, to check whether the calculator behind it
/// is still on the generation they last observed.
pub struct CalculatorHandle {
    id: u64,
    calculator: Mutex<SafeZoneCalculator>,
}

impl CalculatorHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the calculator's current generation, or `0` if the lock is
    /// poisoned (a prior holder panicked mid-mutation).
    pub fn generation(&self) -> u64 {
        match self.calculator.lock() {
            Ok(calc) => calc.generation(),
            Err(_) => {
                println!("CalculatorHandle: lock poisoned, reporting generation 0.");
                0
            }
        }
    }

    /// Runs `f` against the inner calculator, or returns `None` if the
    /// lock is poisoned.
    pub fn with_calculator<R>(&self, f: impl FnOnce(&mut SafeZoneCalculator) -> R) -> Option<R> {
        match self.calculator.lock() {
            Ok(mut calc) => Some(f(&mut calc)),
            Err(_) => {
                println!("CalculatorHandle: lock poisoned, skipping mutation.");
                None
            }
        }
    }
}

/// Optional shared registry of weak handles to live calculators, for
/// observers (renderer back-ends) that need to notice a calculator has
/// mutated without holding exclusive access to it themselves. Strictly
/// optional: nothing in [`SafeZoneCalculator`] or
/// [`crate::query::SafePositionQuery`] depends on this existing.
#[derive(Default)]
pub struct CalculatorRegistry {
    allocations: AtomicU64,
    handles: Mutex<Vec<Weak<CalculatorHandle>>>,
}

impl CalculatorRegistry {
    pub fn new() -> Self {
        Self {
            allocations: AtomicU64::new(0),
            handles: Mutex::new(Vec::new()),
        }
    }

    /// Wraps `calculator` in a new handle, registers a weak reference to
    /// it, and returns the owning `Arc`.
    pub fn register(&self, calculator: SafeZoneCalculator) -> Arc<CalculatorHandle> {
        let id = self.allocations.fetch_add(1, Ordering::SeqCst) + 1;
        let handle = Arc::new(CalculatorHandle {
            id,
            calculator: Mutex::new(calculator),
        });
        match self.handles.lock() {
            Ok(mut handles) => handles.push(Arc::downgrade(&handle)),
            Err(_) => println!("CalculatorRegistry: lock poisoned, handle not tracked."),
        }
        handle
    }

    /// Drops any weak references whose calculator has since been dropped,
    /// returning the number of live handles remaining.
    pub fn prune(&self) -> usize {
        match self.handles.lock() {
            Ok(mut handles) => {
                handles.retain(|w| w.strong_count() > 0);
                handles.len()
            }
            Err(_) => {
                println!("CalculatorRegistry: lock poisoned, reporting 0 live handles.");
                0
            }
        }
    }

    /// Returns the live handles still referenced elsewhere.
    pub fn live_handles(&self) -> Vec<Arc<CalculatorHandle>> {
        match self.handles.lock() {
            Ok(handles) => handles.iter().filter_map(Weak::upgrade).collect(),
            Err(_) => {
                println!("CalculatorRegistry: lock poisoned, reporting no live handles.");
                Vec::new()
            }
        }
    }
}
