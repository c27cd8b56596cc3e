//! Boolean combination of signed distance fields.
//!
//! Distances combine the same way regardless of how many primitives are
//! merged or what the shapes underneath are — so these are pairwise-to-N
//! free functions, not a per-shape method, and [`crate::sdf::ShapeDistance`]
//! folds over them.

/// Returns the union of two distance fields: the point is inside if it is
/// inside either field. `min` because a negative (inside) distance from
/// either child should win.
pub fn union(a: f32, b: f32) -> f32 {
    a.min(b)
}

/// Returns the intersection of two distance fields: the point is inside
/// only if it is inside both fields. `max` because the least-negative (or
/// most-positive) child distance determines whether the point is still
/// inside every field.
pub fn intersection(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// Folds [`union`] over a slice of distances. An empty slice is nowhere
/// (the union of nothing contains no points), so it returns `+infinity`.
pub fn union_many(distances: &[f32]) -> f32 {
    distances.iter().copied().fold(f32::INFINITY, union)
}

/// Folds [`intersection`] over a slice of distances. An empty slice is
/// everywhere (the intersection of nothing excludes no points), so it
/// returns `-infinity`.
pub fn intersection_many(distances: &[f32]) -> f32 {
    distances.iter().copied().fold(f32::NEG_INFINITY, intersection)
}

/// Returns the negation of a distance field: inside becomes outside and
/// vice versa.
pub fn invert(a: f32) -> f32 {
    -a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        assert_eq!(union(1.0, -1.0), -1.0);
        assert_eq!(union(2.0, 3.0), 2.0);
    }

    #[test]
    fn test_intersection() {
        assert_eq!(intersection(1.0, -1.0), 1.0);
        assert_eq!(intersection(-2.0, -3.0), -2.0);
    }

    #[test]
    fn test_union_many_empty() {
        assert_eq!(union_many(&[]), f32::INFINITY);
    }

    #[test]
    fn test_intersection_many_empty() {
        assert_eq!(intersection_many(&[]), f32::NEG_INFINITY);
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(3.0), -3.0);
        assert_eq!(invert(-3.0), 3.0);
    }

    /// De Morgan's law for min/max: `-(min(a,b)) == max(-a,-b)` for all
    /// real a, b. This is what makes `InvertedUnion({A,B})` and
    /// `Intersection({Inverted(A), Inverted(B)})` equivalent.
    #[test]
    fn test_inverted_union_equals_intersection_of_inverted() {
        let cases = [(1.0, 2.0), (-1.0, -2.0), (0.0, 5.0), (-3.0, 3.0)];
        for (a, b) in cases {
            let inverted_union = invert(union(a, b));
            let intersection_of_inverted = intersection(invert(a), invert(b));
            assert_eq!(inverted_union, intersection_of_inverted);
        }
    }
}
