use std::sync::Arc;

use crate::foundation::core::GeoPoint;
use crate::foundation::error::TracemapResult;
use crate::track::polyline;

/// An ordered, immutable sequence of shifted points.
///
/// Cloning is cheap; the points are shared.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Track {
    points: Arc<[GeoPoint]>,
}

impl Track {
    /// Build a track from absolute `(lat, lon)` degrees, shifting each point.
    ///
    /// Fails without producing a partial track if any point is out of range.
    pub fn from_degrees(points: impl IntoIterator<Item = (f64, f64)>) -> TracemapResult<Self> {
        let points = points
            .into_iter()
            .map(|(lat, lon)| GeoPoint::shifted(lat, lon))
            .collect::<TracemapResult<Vec<_>>>()?;
        Ok(Self {
            points: points.into(),
        })
    }

    /// Build a track from `(lat, lon)` pairs that are already shifted.
    ///
    /// Every pair is range-checked the same way [`Track::from_degrees`] checks its input.
    pub fn from_shifted(points: impl IntoIterator<Item = (f64, f64)>) -> TracemapResult<Self> {
        let points = points
            .into_iter()
            .map(|(lat, lon)| GeoPoint::from_shifted(lat, lon))
            .collect::<TracemapResult<Vec<_>>>()?;
        Ok(Self {
            points: points.into(),
        })
    }

    /// Points in path order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the track has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in path order. Each call starts from the beginning.
    pub fn iter(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.points.iter().copied()
    }
}

/// Where a track comes from.
///
/// In JSON this is `{"polyline": "..."}` or `{"points": [[lat, lon], ...]}` with absolute
/// degrees.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TrackSource {
    /// Google polyline-encoded path.
    #[serde(rename = "polyline")]
    EncodedPath(String),
    /// Pre-decoded `(lat, lon)` pairs in absolute degrees.
    #[serde(rename = "points")]
    Points(Vec<(f64, f64)>),
}

impl TrackSource {
    /// Decode or shift into a [`Track`].
    pub fn into_track(self) -> TracemapResult<Track> {
        match self {
            Self::EncodedPath(encoded) => polyline::decode(&encoded),
            Self::Points(points) => Track::from_degrees(points),
        }
    }
}

impl From<&str> for TrackSource {
    fn from(encoded: &str) -> Self {
        Self::EncodedPath(encoded.to_owned())
    }
}

impl From<Vec<(f64, f64)>> for TrackSource {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::Points(points)
    }
}
