//! Marching-squares iso-contour extraction from an arbitrary SDF, for
//! overlay rendering. Pure function of the field and the sampling
//! parameters — no back-pointer to a renderer, just a list of segments.

use crate::sdf::ShapeDistance;
use glam::Vec2;

/// RGBA color, since the crate has no rendering dependency to borrow a
/// color type from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

/// A single line segment of an extracted contour, in input-space
/// coordinates with the caller-supplied height reattached for 3D overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub height: f32,
    pub b: Vec2,
    pub color: Color,
    pub thickness: f32,
}

/// Bundles the parameter group `build()` otherwise takes positionally,
/// matching the crate's preference for settings structs over long
/// parameter lists.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContourSettings {
    pub step: f32,
    pub height: f32,
    pub color: Color,
    pub thickness: f32,
}

/// Samples `d` on a square lattice covering `[center - r, center + r]^2`
/// with spacing `settings.step` and emits line segments approximating the
/// zero iso-contour via marching squares. Non-positive `r` or `step`
/// returns an empty list.
pub fn build(d: &ShapeDistance, center: Vec2, r: f32, settings: ContourSettings) -> Vec<Segment> {
    if r <= 0.0 || settings.step <= 0.0 {
        return Vec::new();
    }

    let step = settings.step;
    let min = center - Vec2::splat(r);
    let cols = ((2.0 * r) / step).ceil() as i32;
    let rows = cols;

    let mut segments = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let a = min + Vec2::new(col as f32 * step, row as f32 * step);
            let b = a + Vec2::new(step, 0.0);
            let c = a + Vec2::new(step, step);
            let e = a + Vec2::new(0.0, step);

            let da = d.distance(a);
            let db = d.distance(b);
            let dc = d.distance(c);
            let de = d.distance(e);

            let mask = (inside(da) as u8) | ((inside(db) as u8) << 1) | ((inside(dc) as u8) << 2) | ((inside(de) as u8) << 3);

            if mask == 0 || mask == 15 {
                continue;
            }

            let ab = lerp_crossing(a, b, da, db);
            let bc = lerp_crossing(b, c, db, dc);
            let cd = lerp_crossing(c, e, dc, de);
            let da_edge = lerp_crossing(e, a, de, da);

            for (p0, p1) in edges_for_mask(mask, ab, bc, cd, da_edge) {
                segments.push(Segment {
                    a: p0,
                    b: p1,
                    height: settings.height,
                    color: settings.color,
                    thickness: settings.thickness,
                });
            }
        }
    }

    segments
}

fn inside(d: f32) -> bool {
    d <= 0.0
}

/// Linearly interpolates the zero crossing along an edge; falls back to
/// the midpoint on NaN or infinite inputs.
fn lerp_crossing(p: Vec2, q: Vec2, dp: f32, dq: f32) -> Vec2 {
    let denom = dp - dq;
    let t = if denom.is_finite() && denom != 0.0 {
        (dp / denom).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let t = if t.is_finite() { t } else { 0.5 };
    p + (q - p) * t
}

/// Returns the segment(s) for a marching-squares case. Corners are
/// ordered A (x,z), B (x+s,z), C (x+s,z+s), D (x,z+s); edges are
/// AB, BC, CD, DA in that order. Cases 5 and 10 are the ambiguous
/// saddles, emitted as two independent segments without disambiguation.
fn edges_for_mask(mask: u8, ab: Vec2, bc: Vec2, cd: Vec2, da: Vec2) -> Vec<(Vec2, Vec2)> {
    match mask {
        1 => vec![(da, ab)],
        2 => vec![(ab, bc)],
        3 => vec![(da, bc)],
        4 => vec![(bc, cd)],
        5 => vec![(da, ab), (bc, cd)],
        6 => vec![(ab, cd)],
        7 => vec![(da, cd)],
        8 => vec![(cd, da)],
        9 => vec![(ab, cd)],
        10 => vec![(ab, bc), (cd, da)],
        11 => vec![(bc, cd)],
        12 => vec![(bc, da)],
        13 => vec![(ab, bc)],
        14 => vec![(ab, da)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn circle() -> ShapeDistance {
        ShapeDistance::Circle {
            origin: Vec2::ZERO,
            radius: 5.0,
        }
    }

    fn settings() -> ContourSettings {
        ContourSettings {
            step: 1.0,
            height: 2.0,
            color: Color([1.0, 0.0, 0.0, 1.0]),
            thickness: 0.1,
        }
    }

    #[test]
    fn test_circle_produces_segments_near_radius() {
        let segs = build(&circle(), Vec2::ZERO, 8.0, settings());
        assert!(!segs.is_empty());
        for seg in &segs {
            let da = (seg.a).length();
            let db = (seg.b).length();
            assert!((da - 5.0).abs() < 1.5);
            assert!((db - 5.0).abs() < 1.5);
        }
    }

    #[test]
    fn test_degenerate_radius_returns_empty() {
        assert!(build(&circle(), Vec2::ZERO, 0.0, settings()).is_empty());
        assert!(build(&circle(), Vec2::ZERO, -5.0, settings()).is_empty());
    }

    #[test]
    fn test_degenerate_step_returns_empty() {
        let mut bad = settings();
        bad.step = 0.0;
        assert!(build(&circle(), Vec2::ZERO, 8.0, bad).is_empty());
    }

    #[test]
    fn test_segments_carry_height_and_style() {
        let segs = build(&circle(), Vec2::ZERO, 8.0, settings());
        for seg in &segs {
            assert_eq!(seg.height, 2.0);
            assert_eq!(seg.thickness, 0.1);
            assert_eq!(seg.color, Color([1.0, 0.0, 0.0, 1.0]));
        }
    }

    #[test]
    fn test_fully_inside_region_emits_nothing() {
        let tiny_disk = ShapeDistance::Circle {
            origin: Vec2::ZERO,
            radius: 1000.0,
        };
        let segs = build(&tiny_disk, Vec2::ZERO, 5.0, settings());
        assert!(segs.is_empty());
    }

    #[test]
    fn test_scenario_marching_squares_on_circle() {
        let field = ShapeDistance::Circle {
            origin: Vec2::ZERO,
            radius: 10.0,
        };
        let settings = ContourSettings {
            step: 1.0,
            height: 0.0,
            color: Color([1.0, 1.0, 1.0, 1.0]),
            thickness: 0.05,
        };
        let segs = build(&field, Vec2::ZERO, 20.0, settings);
        assert!(segs.len() >= 60, "expected at least 60 segments, got {}", segs.len());
        for seg in &segs {
            assert!((seg.a.length() - 10.0).abs() <= 1.0);
            assert!((seg.b.length() - 10.0).abs() <= 1.0);
        }
    }

    #[test]
    fn test_lerp_crossing_handles_nan() {
        let p = vec2(0.0, 0.0);
        let q = vec2(1.0, 0.0);
        let mid = lerp_crossing(p, q, f32::NAN, 1.0);
        assert_eq!(mid, vec2(0.5, 0.0));
    }
}
