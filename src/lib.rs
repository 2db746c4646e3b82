//! tracemap overlays GPS activity tracks on a flat canvas and exports the result as a PNG.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `TrackSource -> Track` (Google polyline or raw points, shifted so
//!    latitude lies in `[0, 180]` and longitude in `[0, 360]`)
//! 2. **Bound**: `&[Track] -> Option<Bounds>` (aggregate box plus dominant axis)
//! 3. **Project**: `GeoPoint -> PixelPoint` (dominant axis fills the padded longest side,
//!    minor axis centered, aspect ratio preserved)
//! 4. **Render**: strokes every track onto a CPU [`Surface`] via `vello_cpu`
//! 5. **Export**: `Surface -> PNG` bytes or `download.png`
//!
//! [`TrackStore`] ties these together: every `add`, `refresh` or `set_style` recomputes what
//! it invalidates and redraws the whole surface synchronously.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No globals**: all state lives in a [`TrackStore`] owned by the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod export;
mod foundation;
mod geo;
mod render;
mod session;
mod track;

pub use crate::export::png::{DOWNLOAD_FILENAME, download, export_png};
pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{
    Axis, BezPath, CanvasDims, GeoPoint, LAT_SHIFT, LON_SHIFT, PixelPoint, Point, Side,
};
pub use crate::foundation::error::{TracemapError, TracemapResult};
pub use crate::geo::bounds::{AxisBounds, Bounds, dominant_axis};
pub use crate::geo::projector::{DEGENERATE_RANGE, Projector, project};
pub use crate::render::cpu::{line_to_flipped, move_to_flipped, render};
pub use crate::render::style::{Style, StyleUpdate};
pub use crate::render::surface::Surface;
pub use crate::session::host::{DEFAULT_PIXEL_RATIO, FixedHost, HostSurface};
pub use crate::session::scene::Scene;
pub use crate::session::store::TrackStore;
pub use crate::track::model::{Track, TrackSource};
pub use crate::track::polyline::{PRECISION, decode, decode_points, encode};
