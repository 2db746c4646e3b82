use crate::foundation::core::{Axis, GeoPoint};
use crate::track::model::Track;

/// Extent of all points along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    /// Smallest coordinate seen.
    pub min: f64,
    /// Largest coordinate seen.
    pub max: f64,
    /// `max - min`.
    pub range: f64,
}

impl AxisBounds {
    /// Bounds spanning `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            range: max - min,
        }
    }

    fn include(&mut self, v: f64) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
        self.range = self.max - self.min;
    }
}

/// Aggregate bounding box over every loaded track, in shifted coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Latitude extent.
    pub lat: AxisBounds,
    /// Longitude extent.
    pub lon: AxisBounds,
    /// Axis with the strictly larger range; longitude on ties.
    pub dominant: Axis,
    /// The other axis.
    pub minor: Axis,
}

impl Bounds {
    /// Combine per-axis extents and pick the dominant axis.
    pub fn new(lat: AxisBounds, lon: AxisBounds) -> Self {
        let dominant = dominant_axis(lat.range, lon.range);
        Self {
            lat,
            lon,
            dominant,
            minor: dominant.other(),
        }
    }

    /// Recompute from scratch in a single pass.
    ///
    /// Returns `None` when there is nothing to draw (no tracks, or only empty ones).
    pub fn recompute(tracks: &[Track]) -> Option<Self> {
        let mut points = tracks.iter().flat_map(|t| t.iter());
        let GeoPoint { lat, lon } = points.next()?;
        let mut lat_b = AxisBounds::new(lat, lat);
        let mut lon_b = AxisBounds::new(lon, lon);
        for p in points {
            lat_b.include(p.lat);
            lon_b.include(p.lon);
        }
        Some(Self::new(lat_b, lon_b))
    }

    /// Extent along `axis`.
    pub fn axis(&self, axis: Axis) -> AxisBounds {
        match axis {
            Axis::Lat => self.lat,
            Axis::Lon => self.lon,
        }
    }

    /// Extent along the dominant axis.
    pub fn dominant_bounds(&self) -> AxisBounds {
        self.axis(self.dominant)
    }

    /// Extent along the minor axis.
    pub fn minor_bounds(&self) -> AxisBounds {
        self.axis(self.minor)
    }
}

/// Latitude only when its range is strictly larger.
pub fn dominant_axis(lat_range: f64, lon_range: f64) -> Axis {
    if lat_range > lon_range {
        Axis::Lat
    } else {
        Axis::Lon
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geo/bounds.rs"]
mod tests;
