use crate::foundation::color::Rgba8;
use crate::foundation::error::{TracemapError, TracemapResult};

/// How tracks are drawn.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// Flat fill behind every track.
    pub background_color: Rgba8,
    /// Stroke color shared by all tracks.
    pub line_color: Rgba8,
    /// Stroke width in CSS pixels, scaled by the canvas pixel ratio.
    pub line_width: f64,
    /// Fraction of the longest canvas side kept as margin.
    pub padding_fraction: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background_color: Rgba8::BLACK,
            line_color: Rgba8::WHITE,
            line_width: 1.0,
            padding_fraction: 0.1,
        }
    }
}

impl Style {
    /// Reject widths and paddings that cannot be drawn.
    pub fn validate(&self) -> TracemapResult<()> {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(TracemapError::validation(format!(
                "line_width must be > 0, got {}",
                self.line_width
            )));
        }
        if !(0.0..1.0).contains(&self.padding_fraction) {
            return Err(TracemapError::validation(format!(
                "padding_fraction must be in [0, 1), got {}",
                self.padding_fraction
            )));
        }
        Ok(())
    }

    /// Copy of `self` with the fields set in `update` replaced.
    pub fn merged(&self, update: &StyleUpdate) -> Self {
        Self {
            background_color: update.background_color.unwrap_or(self.background_color),
            line_color: update.line_color.unwrap_or(self.line_color),
            line_width: update.line_width.unwrap_or(self.line_width),
            padding_fraction: update.padding_fraction.unwrap_or(self.padding_fraction),
        }
    }
}

/// Partial style change; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleUpdate {
    /// New background color.
    pub background_color: Option<Rgba8>,
    /// New stroke color.
    pub line_color: Option<Rgba8>,
    /// New stroke width.
    pub line_width: Option<f64>,
    /// New padding fraction.
    pub padding_fraction: Option<f64>,
}
