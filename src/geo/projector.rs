//! Geographic to canvas projection.
//!
//! The dominant axis of the bounds is stretched over `1 - padding` of the canvas's longest
//! side; the minor axis uses the same scale and is centered on the shortest side, so the
//! aspect ratio of the tracks is preserved.
//!
//! Output is y-up: row `0` is the bottom edge. [`crate::line_to_flipped`] converts to canvas
//! rows when drawing.

use crate::foundation::core::{Axis, CanvasDims, GeoPoint, PixelPoint, Point, Side};
use crate::geo::bounds::Bounds;

/// Dominant ranges at or below this (in degrees) are treated as a single location.
pub const DEGENERATE_RANGE: f64 = 1e-9;

/// Project `point` into canvas space.
///
/// Pure: equal inputs always give equal outputs.
pub fn project(point: GeoPoint, bounds: &Bounds, canvas: &CanvasDims, padding: f64) -> PixelPoint {
    Projector::new(bounds, canvas, padding).project(point)
}

/// Projection parameters derived once per redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    dominant: Axis,
    minor: Axis,
    dominant_max: f64,
    minor_max: f64,
    largest: Side,
    canvas_height: f64,
    scale: f64,
    lead_offset: f64,
    center_offset: f64,
    flip: bool,
    center: Option<PixelPoint>,
}

impl Projector {
    /// Derive scale and offsets for `bounds` drawn on `canvas`.
    pub fn new(bounds: &Bounds, canvas: &CanvasDims, padding: f64) -> Self {
        let largest = canvas.largest_side();
        let smallest = largest.other();
        let long_len = canvas.side_len(largest);
        let short_len = canvas.side_len(smallest);
        let dominant = bounds.dominant_bounds();
        let minor = bounds.minor_bounds();

        let degenerate = dominant.range <= DEGENERATE_RANGE;
        let scale = long_len * (1.0 - padding) / dominant.range.max(DEGENERATE_RANGE);

        // Rows grow downward while latitude grows upward, so the padding lead is subtracted
        // when the dominant axis runs vertically.
        let lead_sign = match largest {
            Side::Height => -1.0,
            Side::Width => 1.0,
        };

        Self {
            dominant: bounds.dominant,
            minor: bounds.minor,
            dominant_max: dominant.max,
            minor_max: minor.max,
            largest,
            canvas_height: f64::from(canvas.height),
            scale,
            lead_offset: long_len * (padding / 2.0) * lead_sign,
            center_offset: (short_len - minor.range * scale) / 2.0,
            flip: smallest == Side::Width && bounds.dominant == Axis::Lon,
            center: degenerate.then(|| canvas.center()),
        }
    }

    /// Pixels per degree along both axes.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Project one point.
    pub fn project(&self, point: GeoPoint) -> PixelPoint {
        if let Some(center) = self.center {
            return center;
        }

        let along_dominant = (self.dominant_max - point.get(self.dominant)) * self.scale;
        let along_minor = (self.minor_max - point.get(self.minor)) * self.scale;
        let (mut x, mut y) = match self.largest {
            Side::Height => (along_minor, along_dominant),
            Side::Width => (along_dominant, along_minor),
        };

        // Portrait canvas with a longitude-dominant extent.
        if self.flip {
            y = self.canvas_height - y;
        }

        match self.largest {
            Side::Height => {
                y += self.lead_offset;
                x += self.center_offset;
            }
            Side::Width => {
                x += self.lead_offset;
                y += self.center_offset;
            }
        }

        Point::new(x, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/projector.rs"]
mod tests;
