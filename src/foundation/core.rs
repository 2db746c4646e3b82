use crate::foundation::error::{TracemapError, TracemapResult};

pub use kurbo::{BezPath, Point};

/// Offset added to latitudes on ingestion so they land in `[0, 180]`.
pub const LAT_SHIFT: f64 = 90.0;
/// Offset added to longitudes on ingestion so they land in `[0, 360]`.
pub const LON_SHIFT: f64 = 180.0;

/// Canvas-space coordinate produced by projection.
pub type PixelPoint = Point;

/// Geographic axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Latitude (north/south).
    Lat,
    /// Longitude (east/west).
    Lon,
}

impl Axis {
    /// The complementary axis.
    pub fn other(self) -> Self {
        match self {
            Self::Lat => Self::Lon,
            Self::Lon => Self::Lat,
        }
    }
}

/// A track point in shifted coordinates (`lat + 90`, `lon + 180`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    /// Shifted latitude in `[0, 180]`.
    pub lat: f64,
    /// Shifted longitude in `[0, 360]`.
    pub lon: f64,
}

impl GeoPoint {
    /// Shift absolute degrees into the non-negative frame used by bounds and projection.
    pub fn shifted(lat: f64, lon: f64) -> TracemapResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(TracemapError::validation(format!(
                "point ({lat}, {lon}) is not finite"
            )));
        }
        Self::from_shifted(lat + LAT_SHIFT, lon + LON_SHIFT).map_err(|_| {
            TracemapError::validation(format!(
                "point ({lat}, {lon}) is outside [-90, 90] x [-180, 180]"
            ))
        })
    }

    /// Accept coordinates that are already shifted, checking they lie in
    /// `[0, 180] x [0, 360]`.
    pub fn from_shifted(lat: f64, lon: f64) -> TracemapResult<Self> {
        if !(0.0..=2.0 * LAT_SHIFT).contains(&lat) || !(0.0..=2.0 * LON_SHIFT).contains(&lon) {
            return Err(TracemapError::validation(format!(
                "shifted point ({lat}, {lon}) is outside [0, 180] x [0, 360]"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Absolute `(lat, lon)` in degrees.
    pub fn unshifted(self) -> (f64, f64) {
        (self.lat - LAT_SHIFT, self.lon - LON_SHIFT)
    }

    /// Coordinate along `axis`.
    pub fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::Lat => self.lat,
            Axis::Lon => self.lon,
        }
    }
}

/// One side of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Side {
    /// The complementary side.
    pub fn other(self) -> Self {
        match self {
            Self::Width => Self::Height,
            Self::Height => Self::Width,
        }
    }
}

/// Canvas size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasDims {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// Device pixels per CSS pixel. Line widths are scaled by this.
    pub pixel_ratio: f64,
}

impl CanvasDims {
    /// Create validated dimensions. Both sides must fit the raster surface (`1..=65535`).
    pub fn new(width: u32, height: u32, pixel_ratio: f64) -> TracemapResult<Self> {
        if width == 0 || height == 0 {
            return Err(TracemapError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(TracemapError::validation(format!(
                "canvas {width}x{height} exceeds {max}x{max}",
                max = u16::MAX
            )));
        }
        if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
            return Err(TracemapError::validation(format!(
                "pixel ratio must be > 0, got {pixel_ratio}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Derive device-pixel dimensions from a CSS layout size.
    pub fn from_css(css_width: f64, css_height: f64, pixel_ratio: f64) -> TracemapResult<Self> {
        if !css_width.is_finite() || !css_height.is_finite() || css_width < 0.0 || css_height < 0.0
        {
            return Err(TracemapError::validation(format!(
                "invalid layout size {css_width}x{css_height}"
            )));
        }
        let w = (css_width * pixel_ratio).round();
        let h = (css_height * pixel_ratio).round();
        if !(0.0..=f64::from(u32::MAX)).contains(&w) || !(0.0..=f64::from(u32::MAX)).contains(&h) {
            return Err(TracemapError::validation(format!(
                "layout size {css_width}x{css_height} at ratio {pixel_ratio} is out of range"
            )));
        }
        Self::new(w as u32, h as u32, pixel_ratio)
    }

    /// The longer side. A square canvas reports [`Side::Width`].
    pub fn largest_side(&self) -> Side {
        if self.height > self.width {
            Side::Height
        } else {
            Side::Width
        }
    }

    /// The shorter side.
    pub fn smallest_side(&self) -> Side {
        self.largest_side().other()
    }

    /// Length of `side` in device pixels.
    pub fn side_len(&self, side: Side) -> f64 {
        match side {
            Side::Width => f64::from(self.width),
            Side::Height => f64::from(self.height),
        }
    }

    /// Canvas midpoint.
    pub fn center(&self) -> PixelPoint {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
