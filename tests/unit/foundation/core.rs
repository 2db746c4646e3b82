use super::*;

#[test]
fn shift_and_unshift_are_inverse() {
    let p = GeoPoint::shifted(38.5, -120.2).unwrap();
    assert!((p.lat - 128.5).abs() < 1e-12);
    assert!((p.lon - 59.8).abs() < 1e-12);

    let (lat, lon) = p.unshifted();
    assert!((lat - 38.5).abs() < 1e-12);
    assert!((lon + 120.2).abs() < 1e-12);
}

#[test]
fn shift_rejects_out_of_range_and_non_finite() {
    assert!(GeoPoint::shifted(90.0, 180.0).is_ok());
    assert!(GeoPoint::shifted(-90.0, -180.0).is_ok());
    assert!(GeoPoint::shifted(90.5, 0.0).is_err());
    assert!(GeoPoint::shifted(0.0, -180.5).is_err());
    assert!(GeoPoint::shifted(f64::NAN, 0.0).is_err());
}

#[test]
fn already_shifted_points_are_range_checked() {
    let p = GeoPoint::from_shifted(180.0, 0.0).unwrap();
    assert_eq!((p.lat, p.lon), (180.0, 0.0));
    assert!(GeoPoint::from_shifted(-50.0, 10.0).is_err());
    assert!(GeoPoint::from_shifted(10.0, 500.0).is_err());
    assert!(GeoPoint::from_shifted(f64::NAN, 10.0).is_err());
    assert!(GeoPoint::from_shifted(10.0, f64::INFINITY).is_err());
}

#[test]
fn canvas_sides_follow_orientation() {
    let landscape = CanvasDims::new(300, 200, 1.0).unwrap();
    assert_eq!(landscape.largest_side(), Side::Width);
    assert_eq!(landscape.smallest_side(), Side::Height);

    let portrait = CanvasDims::new(200, 300, 1.0).unwrap();
    assert_eq!(portrait.largest_side(), Side::Height);
    assert_eq!(portrait.side_len(Side::Width), 200.0);

    let square = CanvasDims::new(100, 100, 1.0).unwrap();
    assert_eq!(square.largest_side(), Side::Width);
}

#[test]
fn canvas_validation() {
    assert!(CanvasDims::new(0, 10, 1.0).is_err());
    assert!(CanvasDims::new(70_000, 10, 1.0).is_err());
    assert!(CanvasDims::new(10, 10, 0.0).is_err());
}

#[test]
fn canvas_from_css_applies_pixel_ratio() {
    let c = CanvasDims::from_css(100.4, 50.0, 3.0).unwrap();
    assert_eq!((c.width, c.height), (301, 150));
    assert_eq!(c.center(), Point::new(150.5, 75.0));
    assert!(CanvasDims::from_css(-1.0, 50.0, 1.0).is_err());
}
