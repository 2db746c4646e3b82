use super::*;
use crate::foundation::color::Rgba8;
use crate::session::host::FixedHost;

const CANONICAL: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

fn store(w: f64, h: f64) -> TrackStore {
    TrackStore::new(&FixedHost::new(w, h, 1.0), Style::default()).unwrap()
}

#[test]
fn new_store_is_background_only() {
    let s = store(10.0, 10.0);
    assert!(s.tracks().is_empty());
    assert!(s.bounds().is_none());
    assert_eq!(s.surface().pixel(5, 5), Some([0, 0, 0, 255]));
}

#[test]
fn add_decodes_and_recomputes_bounds() {
    let mut s = store(200.0, 100.0);
    s.add(CANONICAL).unwrap();
    assert_eq!(s.tracks().len(), 1);
    let b = *s.bounds().unwrap();
    assert!((b.lat.min - (38.5 + 90.0)).abs() < 1e-9);
    assert!((b.lon.min - (-126.453 + 180.0)).abs() < 1e-9);

    s.add(vec![(50.0, -100.0)]).unwrap();
    assert_eq!(s.tracks().len(), 2);
    assert!((s.bounds().unwrap().lat.max - 140.0).abs() < 1e-9);
}

#[test]
fn failed_add_leaves_state_untouched() {
    let mut s = store(50.0, 50.0);
    s.add(CANONICAL).unwrap();
    let before = *s.bounds().unwrap();

    let err = s.add(&CANONICAL[..CANONICAL.len() - 1]).unwrap_err();
    assert!(matches!(err, TracemapError::Format { .. }));
    assert!(s.add(vec![(95.0, 0.0)]).is_err());

    assert_eq!(s.tracks().len(), 1);
    assert_eq!(*s.bounds().unwrap(), before);
}

#[test]
fn shifted_tracks_outside_the_frame_never_reach_the_store() {
    let mut s = store(50.0, 50.0);
    assert!(Track::from_shifted([(-50.0, 500.0), (f64::NAN, 10.0)]).is_err());

    s.add_track(Track::from_shifted([(128.5, 59.8), (130.0, 60.0)]).unwrap())
        .unwrap();
    let b = *s.bounds().unwrap();
    assert!((b.lat.min - 128.5).abs() < 1e-12);
    assert!((b.lon.max - 60.0).abs() < 1e-12);
}

#[test]
fn add_all_keeps_good_sources() {
    let mut s = store(50.0, 50.0);
    let rejected = s
        .add_all([
            TrackSource::EncodedPath(CANONICAL.to_owned()),
            TrackSource::EncodedPath("_p~iF".to_owned()),
            TrackSource::Points(vec![(1.0, 2.0), (1.5, 2.5)]),
        ])
        .unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].0, 1);
    assert_eq!(s.tracks().len(), 2);
    assert!(s.bounds().is_some());
}

#[test]
fn refresh_changes_canvas_but_not_bounds() {
    let mut s = store(200.0, 100.0);
    s.add(CANONICAL).unwrap();
    let bounds = *s.bounds().unwrap();

    s.refresh(&FixedHost::new(80.0, 120.0, 2.0)).unwrap();
    assert_eq!((s.canvas().width, s.canvas().height), (160, 240));
    assert_eq!(s.surface().width(), 160);
    assert_eq!(*s.bounds().unwrap(), bounds);
}

#[test]
fn set_style_redraws_without_touching_bounds() {
    let mut s = store(20.0, 20.0);
    s.add(vec![(0.0, 0.0), (0.0, 0.001)]).unwrap();
    let bounds = *s.bounds().unwrap();

    s.set_style(StyleUpdate {
        background_color: Some(Rgba8::rgb(0, 0, 255)),
        ..StyleUpdate::default()
    })
    .unwrap();
    assert_eq!(s.style().background_color, Rgba8::rgb(0, 0, 255));
    assert_eq!(s.surface().pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(*s.bounds().unwrap(), bounds);

    assert!(
        s.set_style(StyleUpdate {
            line_width: Some(-1.0),
            ..StyleUpdate::default()
        })
        .is_err()
    );
    assert_eq!(s.style().line_width, 1.0);
}

#[test]
fn invalid_host_is_rejected() {
    assert!(TrackStore::new(&FixedHost::new(0.0, 10.0, 1.0), Style::default()).is_err());
}
