use aoe_safety_toolkit::contour::{self, Color, ContourSettings};
use aoe_safety_toolkit::sdf::ShapeDistance;
use criterion::{Criterion, criterion_group, criterion_main};
use glam::Vec2;
use std::time::Duration;

fn sample_field() -> ShapeDistance {
    ShapeDistance::Union(vec![
        ShapeDistance::Circle {
            origin: Vec2::ZERO,
            radius: 10.0,
        },
        ShapeDistance::DonutSector {
            origin: Vec2::new(15.0, 0.0),
            radius_inner: 4.0,
            radius_outer: 12.0,
            center_dir: Vec2::Y,
            half_angle: 0.6,
        },
    ])
}

fn marching_squares(c: &mut Criterion) {
    let field = sample_field();
    let settings = ContourSettings {
        step: 0.5,
        height: 1.0,
        color: Color([1.0, 0.0, 0.0, 1.0]),
        thickness: 0.05,
    };

    c.bench_function("contour/build_fine", |b| {
        b.iter(|| contour::build(&field, Vec2::ZERO, 30.0, settings));
    });

    let coarse = ContourSettings { step: 2.0, ..settings };
    c.bench_function("contour/build_coarse", |b| {
        b.iter(|| contour::build(&field, Vec2::ZERO, 30.0, coarse));
    });
}

criterion_group!(
    name = contour_bench;
    config = Criterion::default()
        .significance_level(0.03)
        .noise_threshold(0.008)
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(20));
    targets = marching_squares
);
criterion_main!(contour_bench);
