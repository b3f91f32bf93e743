//! Offscreen rendering of a document into a flat RGB image.

use super::types::RasterError;
use crate::draw::{FontDescriptor, Shape, WHITE, render_background, render_shapes};
use image::RgbImage;

/// Renders `shapes` onto a white canvas of the given size.
///
/// Uses the same renderer as on-screen painting, so the saved image matches
/// what the user sees (minus any in-progress preview).
pub fn flatten(
    shapes: &[Shape],
    width: u32,
    height: u32,
    font: &FontDescriptor,
) -> Result<RgbImage, RasterError> {
    let invalid = || RasterError::InvalidCanvas { width, height };
    let surface_width = i32::try_from(width).map_err(|_| invalid())?;
    let surface_height = i32::try_from(height).map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }

    let mut surface =
        cairo::ImageSurface::create(cairo::Format::Rgb24, surface_width, surface_height)?;

    {
        let ctx = cairo::Context::new(&surface)?;
        render_background(&ctx, WHITE);
        render_shapes(&ctx, shapes, font);
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let data = surface
        .data()
        .map_err(|_| RasterError::Surface(cairo::Error::SurfaceFinished))?;

    // RGB24 keeps each pixel in a native-endian u32 as 0x00RRGGBB
    let image = RgbImage::from_fn(width, height, |x, y| {
        let offset = y as usize * stride + x as usize * 4;
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        image::Rgb([(word >> 16) as u8, (word >> 8) as u8, word as u8])
    });

    Ok(image)
}
