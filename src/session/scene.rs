use std::io::Read;
use std::path::Path;

use crate::foundation::error::{TracemapError, TracemapResult};
use crate::render::style::Style;
use crate::session::host::FixedHost;
use crate::session::store::TrackStore;
use crate::track::model::TrackSource;

/// A headless render job: canvas, style and the tracks to draw.
///
/// ```json
/// {
///   "canvas": { "width": 400, "height": 300, "pixel_ratio": 2 },
///   "style": { "background_color": "#101010", "line_color": "#fc4c02" },
///   "tracks": [
///     { "polyline": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
///     { "points": [[38.5, -120.2], [40.7, -120.95]] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Layout size of the canvas.
    pub canvas: FixedHost,
    /// Drawing style; omitted fields use [`Style::default`].
    #[serde(default)]
    pub style: Style,
    /// Track sources in draw order.
    #[serde(default)]
    pub tracks: Vec<TrackSource>,
}

impl Scene {
    /// Parse a scene from JSON.
    pub fn from_reader(reader: impl Read) -> TracemapResult<Self> {
        serde_json::from_reader(reader).map_err(|e| TracemapError::serde(e.to_string()))
    }

    /// Read and parse a scene file.
    pub fn from_path(path: &Path) -> TracemapResult<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            TracemapError::Other(anyhow::Error::new(e).context(format!(
                "open scene '{}'",
                path.display()
            )))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Build a store and add every track. Rejected tracks are returned, not fatal.
    pub fn build(self) -> TracemapResult<(TrackStore, Vec<(usize, TracemapError)>)> {
        let mut store = TrackStore::new(&self.canvas, self.style)?;
        let rejected = store.add_all(self.tracks)?;
        Ok((store, rejected))
    }
}
