use approx::assert_relative_eq;
use circumfit::prelude::*;
use quickcheck_macros::quickcheck;
use rstest::rstest;

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// A few noisy samples around a circle of radius ~2 centered near the origin.
fn noisy_samples() -> Vec<Point> {
    points(&[(0.0, 2.1), (1.9, 0.4), (0.1, -2.0), (-2.05, 0.0), (1.4, 1.5)])
}

/// Samples `count` points spread evenly on the circle starting at `phase`.
fn sample_circle(center: Point, radius: f64, phase: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|m| phase + m as f64 * std::f64::consts::TAU / count as f64)
        .map(|angle| {
            Point::new(
                center.x() + radius * angle.cos(),
                center.y() + radius * angle.sin(),
            )
        })
        .collect()
}

fn describe(circle: &Circle) -> String {
    format!(
        "center=({:.9}, {:.9}) radius={:.9}",
        circle.center().x(),
        circle.center().y(),
        circle.radius()
    )
}

#[quickcheck]
fn recovers_exact_circle(cx_seed: i8, cy_seed: i8, radius_seed: u8, phase_seed: u8) -> bool {
    // Centers on [-64, 63.5] and radii on [1, 64.75].
    let center = Point::new(cx_seed as f64 * 0.5, cy_seed as f64 * 0.5);
    let radius = 1.0 + radius_seed as f64 * 0.25;
    let phase = phase_seed as f64 * std::f64::consts::TAU / u8::MAX as f64;

    let fitted = match fit_circle(&sample_circle(center, radius, phase, 5), DEFAULT_EPSILON) {
        Ok(circle) => circle,
        Err(_) => return false,
    };

    (fitted.center().x() - center.x()).abs() < 1e-6
        && (fitted.center().y() - center.y()).abs() < 1e-6
        && (fitted.radius() - radius).abs() < 1e-6
}

#[rstest]
#[case(Point::new(0.0, 0.0), 1.0, 3)]
#[case(Point::new(12.5, -4.0), 3.0, 4)]
#[case(Point::new(-100.0, 250.0), 40.0, 7)]
#[case(Point::new(0.25, 0.75), 0.5, 12)]
fn fits_sampled_circle(#[case] center: Point, #[case] radius: f64, #[case] count: usize) {
    let circle = CircleFitter::default()
        .fit(&sample_circle(center, radius, 0.3, count))
        .expect("points are not aligned");

    assert_relative_eq!(circle.center().x(), center.x(), epsilon = 1e-6);
    assert_relative_eq!(circle.center().y(), center.y(), epsilon = 1e-6);
    assert_relative_eq!(circle.radius(), radius, epsilon = 1e-6);
    assert_relative_eq!(circle.curvature(), radius.recip(), epsilon = 1e-6);
}

#[test]
fn fits_unit_diamond() {
    let circle = fit_circle(
        &points(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]),
        0.1,
    )
    .unwrap();

    assert_relative_eq!(circle.center().x(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(circle.center().y(), 0.0, epsilon = 1e-9);
    assert_relative_eq!(circle.radius(), 1.0, epsilon = 1e-9);
}

#[test]
fn straight_path_is_aligned() {
    let path = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]);

    assert_eq!(
        fit_circle(&path, DEFAULT_EPSILON),
        Err(FitError::AllPointsAligned)
    );
    assert_eq!(
        FitError::AllPointsAligned.to_string(),
        "all points are aligned"
    );
}

#[test]
fn noisy_samples_in_order() {
    let circle = fit_circle(&noisy_samples(), DEFAULT_EPSILON).unwrap();
    insta::assert_snapshot!(
        describe(&circle),
        @"center=(-0.065222837, 0.073468411) radius=2.026177187"
    );
}

#[test]
fn noisy_samples_reversed() {
    let mut samples = noisy_samples();
    samples.reverse();

    // Reordering the same points changes which triples the passes reach.
    let circle = fit_circle(&samples, DEFAULT_EPSILON).unwrap();
    insta::assert_snapshot!(
        describe(&circle),
        @"center=(-0.068352502, 0.070168019) radius=2.027235356"
    );
}
