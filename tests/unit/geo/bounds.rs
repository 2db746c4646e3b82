use super::*;

fn track(points: &[(f64, f64)]) -> Track {
    Track::from_degrees(points.iter().copied()).unwrap()
}

#[test]
fn empty_track_set_has_no_bounds() {
    assert_eq!(Bounds::recompute(&[]), None);
    assert_eq!(Bounds::recompute(&[Track::default(), Track::default()]), None);
}

#[test]
fn spans_every_point_of_every_track() {
    let tracks = [
        track(&[(10.0, 20.0), (11.0, 21.5)]),
        Track::default(),
        track(&[(9.5, 20.5), (10.5, 22.0)]),
    ];
    let b = Bounds::recompute(&tracks).unwrap();
    assert!((b.lat.min - 99.5).abs() < 1e-9);
    assert!((b.lat.max - 101.0).abs() < 1e-9);
    assert!((b.lat.range - 1.5).abs() < 1e-9);
    assert!((b.lon.min - 200.0).abs() < 1e-9);
    assert!((b.lon.max - 202.0).abs() < 1e-9);
    assert_eq!(b.dominant, Axis::Lon);
    assert_eq!(b.minor, Axis::Lat);
}

#[test]
fn min_and_max_update_independently() {
    // A point that raises max and a later one that lowers min must both be seen.
    let b = Bounds::recompute(&[track(&[(0.0, 0.0), (5.0, 0.0), (-5.0, 0.0)])]).unwrap();
    assert!((b.lat.range - 10.0).abs() < 1e-9);
}

#[test]
fn dominant_axis_prefers_strictly_larger_range() {
    assert_eq!(dominant_axis(2.0, 1.0), Axis::Lat);
    assert_eq!(dominant_axis(1.0, 2.0), Axis::Lon);
    assert_eq!(dominant_axis(1.0, 1.0), Axis::Lon);

    let b = Bounds::new(AxisBounds::new(0.0, 2.0), AxisBounds::new(0.0, 1.0));
    assert_eq!(b.dominant, Axis::Lat);
    assert_eq!(b.dominant_bounds().range, 2.0);
    assert_eq!(b.minor_bounds().range, 1.0);
}

#[test]
fn single_point_bounds_are_degenerate() {
    let b = Bounds::recompute(&[track(&[(1.0, 2.0)])]).unwrap();
    assert_eq!(b.lat.range, 0.0);
    assert_eq!(b.lon.range, 0.0);
    assert_eq!(b.dominant, Axis::Lon);
}
