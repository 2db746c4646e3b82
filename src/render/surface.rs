use crate::foundation::color::Rgba8;
use crate::foundation::core::CanvasDims;
use crate::foundation::error::{TracemapError, TracemapResult};

/// CPU raster target holding premultiplied RGBA8 pixels.
pub struct Surface {
    dims: CanvasDims,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface").field("dims", &self.dims).finish()
    }
}

impl Surface {
    /// Allocate a transparent surface of `dims`.
    pub fn new(dims: CanvasDims) -> TracemapResult<Self> {
        let width: u16 = dims
            .width
            .try_into()
            .map_err(|_| TracemapError::render("surface width exceeds u16"))?;
        let height: u16 = dims
            .height
            .try_into()
            .map_err(|_| TracemapError::render("surface height exceeds u16"))?;
        Ok(Self {
            dims,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Reallocate when the pixel size changed; otherwise just adopt the new pixel ratio.
    pub fn resize(&mut self, dims: CanvasDims) -> TracemapResult<()> {
        if dims.width == self.dims.width && dims.height == self.dims.height {
            self.dims = dims;
            return Ok(());
        }
        *self = Self::new(dims)?;
        Ok(())
    }

    /// Canvas dimensions this surface was allocated for.
    pub fn dims(&self) -> &CanvasDims {
        &self.dims
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgba8) {
        let premul = color.to_premul();
        for px in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn data_premul(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Row-major straight-alpha RGBA8 bytes, as image encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut data = self.data_premul().to_vec();
        unpremultiply_in_place(&mut data);
        data
    }

    /// Straight-alpha pixel at `(x, y)`, `None` when out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let i = (y as usize * self.width() as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data_premul()[i..i + 4]);
        unpremultiply_in_place(&mut px);
        Some(px)
    }

    pub(crate) fn size_u16(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((u16::from(px[0]) * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((u16::from(px[1]) * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((u16::from(px[2]) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
