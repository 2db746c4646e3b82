use crate::foundation::core::CanvasDims;
use crate::foundation::error::TracemapResult;

/// Device pixels per CSS pixel used when the host does not say otherwise.
pub const DEFAULT_PIXEL_RATIO: f64 = 3.0;

/// Layout information supplied by whatever hosts the canvas.
///
/// The engine reads this on construction and on every refresh; it never owns the host.
pub trait HostSurface {
    /// Layout size in CSS pixels as `(width, height)`.
    fn css_size(&self) -> (f64, f64);

    /// Device pixels per CSS pixel.
    fn device_pixel_ratio(&self) -> f64 {
        DEFAULT_PIXEL_RATIO
    }

    /// Canvas dimensions in device pixels.
    fn canvas_dims(&self) -> TracemapResult<CanvasDims> {
        let (w, h) = self.css_size();
        CanvasDims::from_css(w, h, self.device_pixel_ratio())
    }
}

/// A host with a fixed layout size, for headless rendering.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedHost {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
    /// Device pixels per CSS pixel.
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
}

fn default_pixel_ratio() -> f64 {
    DEFAULT_PIXEL_RATIO
}

impl FixedHost {
    /// Host of `width` x `height` CSS pixels at `pixel_ratio`.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }
}

impl HostSurface for FixedHost {
    fn css_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }
}
