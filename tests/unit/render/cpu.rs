use super::*;
use crate::foundation::core::CanvasDims;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

fn surface(w: u32, h: u32, ratio: f64) -> Surface {
    Surface::new(CanvasDims::new(w, h, ratio).unwrap()).unwrap()
}

#[test]
fn flipped_helpers_mirror_rows() {
    let mut path = BezPath::new();
    move_to_flipped(&mut path, Point::new(1.0, 2.0), 10.0);
    line_to_flipped(&mut path, Point::new(3.0, 10.0), 10.0);
    assert_eq!(
        path.elements(),
        &[
            kurbo::PathEl::MoveTo(Point::new(1.0, 8.0)),
            kurbo::PathEl::LineTo(Point::new(3.0, 0.0)),
        ]
    );
}

#[test]
fn no_bounds_draws_background_only() {
    let mut s = surface(8, 8, 1.0);
    let style = Style {
        background_color: Rgba8::rgb(12, 34, 56),
        ..Style::default()
    };
    render(&[], None, &mut s, &style).unwrap();
    assert!(
        s.data_premul()
            .chunks_exact(4)
            .all(|px| px == [12, 34, 56, 255])
    );
}

#[test]
fn strokes_track_across_padded_canvas() {
    let track = Track::from_degrees([(0.0, 0.0), (0.0, 1.0)]).unwrap();
    let tracks = vec![track];
    let bounds = Bounds::recompute(&tracks).unwrap();
    let mut s = surface(100, 50, 2.0);

    render(&tracks, Some(&bounds), &mut s, &Style::default()).unwrap();

    // Horizontal line at row 25 from x = 5 to x = 95, two device pixels thick.
    assert_eq!(s.pixel(50, 24), Some(WHITE));
    assert_eq!(s.pixel(50, 25), Some(WHITE));
    assert_eq!(s.pixel(0, 0), Some(BLACK));
    assert_eq!(s.pixel(50, 10), Some(BLACK));
    assert_eq!(s.pixel(1, 25), Some(BLACK));
}

#[test]
fn single_point_track_is_drawn_as_dot_at_center() {
    let tracks = vec![Track::from_degrees([(51.5, -0.12)]).unwrap()];
    let bounds = Bounds::recompute(&tracks).unwrap();
    let mut s = surface(100, 50, 1.0);
    let style = Style {
        line_width: 4.0,
        ..Style::default()
    };

    render(&tracks, Some(&bounds), &mut s, &style).unwrap();

    assert_eq!(s.pixel(49, 24), Some(WHITE));
    assert_eq!(s.pixel(10, 10), Some(BLACK));
}

#[test]
fn redraw_replaces_previous_frame() {
    let tracks = vec![Track::from_degrees([(0.0, 0.0), (0.0, 1.0)]).unwrap()];
    let bounds = Bounds::recompute(&tracks).unwrap();
    let mut s = surface(100, 50, 2.0);
    render(&tracks, Some(&bounds), &mut s, &Style::default()).unwrap();

    render(&[], None, &mut s, &Style::default()).unwrap();
    assert_eq!(s.pixel(50, 24), Some(BLACK));
}

#[test]
fn background_fill_covers_stale_pixels() {
    let mut s = surface(6, 4, 1.0);
    s.clear(Rgba8::WHITE);
    let style = Style {
        background_color: Rgba8::rgb(200, 10, 90),
        ..Style::default()
    };
    render(&[], None, &mut s, &style).unwrap();
    assert!(
        s.data_premul()
            .chunks_exact(4)
            .all(|px| px == [200, 10, 90, 255])
    );
}
