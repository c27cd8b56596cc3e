//! Methods for asserting values are within a given delta, for unit tests.

use glam::Vec2;

/// Asserts that two numbers are within the given delta of each other.
pub fn assert_in_delta(expected: f32, actual: f32, delta: f32, descriptor: String) {
    assert!(
        (expected - actual).abs() < delta,
        "expected {expected} but got {actual} (delta {delta})\t{descriptor}"
    );
}

/// Asserts that two points on the plane are within the given delta of each other.
pub fn assert_in_delta_vector(expected: Vec2, actual: Vec2, delta: f32, descriptor: &str) {
    assert!(
        (expected - actual).length() < delta,
        "{expected} != {actual}\t{descriptor}"
    );
}
