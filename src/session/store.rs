use std::path::{Path, PathBuf};

use crate::export::png;
use crate::foundation::core::CanvasDims;
use crate::foundation::error::{TracemapError, TracemapResult};
use crate::geo::bounds::Bounds;
use crate::render::cpu::render;
use crate::render::style::{Style, StyleUpdate};
use crate::render::surface::Surface;
use crate::session::host::HostSurface;
use crate::track::model::{Track, TrackSource};

/// The render state for one session: loaded tracks, their bounds, the canvas and the style.
///
/// Every mutation recomputes what it invalidates from scratch and redraws the whole surface
/// before returning.
#[derive(Debug)]
pub struct TrackStore {
    tracks: Vec<Track>,
    bounds: Option<Bounds>,
    style: Style,
    surface: Surface,
}

impl TrackStore {
    /// Size the canvas from `host` and draw the (empty) background.
    pub fn new(host: &dyn HostSurface, style: Style) -> TracemapResult<Self> {
        style.validate()?;
        let dims = host.canvas_dims()?;
        let mut store = Self {
            tracks: Vec::new(),
            bounds: None,
            style,
            surface: Surface::new(dims)?,
        };
        store.redraw()?;
        Ok(store)
    }

    /// Decode `source`, append it, recompute bounds and redraw.
    ///
    /// A source that fails to decode is rejected and leaves the store untouched.
    #[tracing::instrument(level = "debug", skip_all, fields(loaded = self.tracks.len()))]
    pub fn add(&mut self, source: impl Into<TrackSource>) -> TracemapResult<()> {
        let track = source.into().into_track()?;
        self.add_track(track)
    }

    /// Append an already-built track, recompute bounds and redraw.
    pub fn add_track(&mut self, track: Track) -> TracemapResult<()> {
        tracing::debug!(points = track.len(), "adding track");
        self.tracks.push(track);
        self.recompute_bounds();
        self.redraw()
    }

    /// Add every source, redrawing once at the end.
    ///
    /// Sources that fail are skipped; their index and error are returned. Successful sources
    /// are kept regardless of failures elsewhere.
    pub fn add_all(
        &mut self,
        sources: impl IntoIterator<Item = TrackSource>,
    ) -> TracemapResult<Vec<(usize, TracemapError)>> {
        let mut rejected = Vec::new();
        for (i, source) in sources.into_iter().enumerate() {
            match source.into_track() {
                Ok(track) => self.tracks.push(track),
                Err(e) => {
                    tracing::warn!(index = i, error = %e, "rejected track");
                    rejected.push((i, e));
                }
            }
        }
        self.recompute_bounds();
        self.redraw()?;
        Ok(rejected)
    }

    /// Re-read the canvas size from `host`, recompute bounds and redraw.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn refresh(&mut self, host: &dyn HostSurface) -> TracemapResult<()> {
        let dims = host.canvas_dims()?;
        self.surface.resize(dims)?;
        self.recompute_bounds();
        self.redraw()
    }

    /// Apply a partial style change and redraw. Bounds are left as they are.
    pub fn set_style(&mut self, update: StyleUpdate) -> TracemapResult<()> {
        let style = self.style.merged(&update);
        style.validate()?;
        self.style = style;
        self.redraw()
    }

    /// PNG bytes of the current surface.
    pub fn export_png(&self) -> TracemapResult<Vec<u8>> {
        png::export_png(&self.surface)
    }

    /// Write the current surface to `dir/download.png` and return the path.
    pub fn download(&self, dir: &Path) -> TracemapResult<PathBuf> {
        png::download(&self.surface, dir)
    }

    /// Loaded tracks in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Current bounds; `None` while there is nothing to draw.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Current canvas dimensions.
    pub fn canvas(&self) -> &CanvasDims {
        self.surface.dims()
    }

    /// Current style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The raster surface as last drawn.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    fn recompute_bounds(&mut self) {
        self.bounds = Bounds::recompute(&self.tracks);
    }

    fn redraw(&mut self) -> TracemapResult<()> {
        render(
            &self.tracks,
            self.bounds.as_ref(),
            &mut self.surface,
            &self.style,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/store.rs"]
mod tests;
