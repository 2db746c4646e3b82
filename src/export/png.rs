use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::foundation::error::{TracemapError, TracemapResult};
use crate::render::surface::Surface;

/// File name used by [`download`].
pub const DOWNLOAD_FILENAME: &str = "download.png";

/// Encode the surface as PNG bytes (straight alpha).
#[tracing::instrument(level = "debug", skip_all, fields(width = surface.width(), height = surface.height()))]
pub fn export_png(surface: &Surface) -> TracemapResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(
        surface.width(),
        surface.height(),
        surface.to_straight_rgba(),
    )
    .ok_or_else(|| TracemapError::export("surface buffer does not match its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| TracemapError::export(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Write the surface to `dir/download.png`, creating `dir` if needed.
pub fn download(surface: &Surface, dir: &Path) -> TracemapResult<PathBuf> {
    let bytes = export_png(surface)?;
    std::fs::create_dir_all(dir).map_err(|e| {
        TracemapError::export(format!("create output dir '{}': {e}", dir.display()))
    })?;
    let path = dir.join(DOWNLOAD_FILENAME);
    std::fs::write(&path, bytes)
        .map_err(|e| TracemapError::export(format!("write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "wrote image");
    Ok(path)
}
